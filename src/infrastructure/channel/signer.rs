use crate::domain::errors::{ChannelError, ChannelResult};
use crate::infrastructure::channel::descriptor::{HashAlgo, SigningSpec};
use md5::Md5;
use sha2::{Digest, Sha256};

/// 签名载荷，保持插入顺序的参数名值对，同时用作出站表单
#[derive(Debug, Clone, Default)]
pub struct SignaturePayload {
    pairs: Vec<(String, String)>,
}

impl SignaturePayload {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// 设置参数，同名参数被替换而非重复追加
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(n, _)| n == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// 按参数名升序返回名值对
    fn sorted_pairs(&self) -> Vec<(&str, &str)> {
        let mut sorted: Vec<(&str, &str)> = self
            .pairs
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        sorted
    }
}

/// 对签名源串做摘要并转小写十六进制
pub(crate) fn digest_hex(algo: HashAlgo, source: &str) -> String {
    match algo {
        HashAlgo::Md5 => {
            let mut hasher = Md5::new();
            hasher.update(source.as_bytes());
            hex::encode(hasher.finalize())
        }
        HashAlgo::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(source.as_bytes());
            hex::encode(hasher.finalize())
        }
    }
}

/// 按渠道签名方案生成签名，纯函数，不做任何 I/O。
/// 载荷此时不应包含签名参数本身。
pub fn sign(
    payload: &SignaturePayload,
    secret_key: &str,
    scheme: &SigningSpec,
) -> ChannelResult<String> {
    if secret_key.is_empty() {
        return Err(ChannelError::InvalidParameter(
            "signing key must not be empty".to_string(),
        ));
    }

    let (source, algo) = match scheme {
        SigningSpec::Concat { order, algo } => {
            let mut source = String::new();
            for name in order.iter().copied() {
                let value = payload.get(name).ok_or_else(|| {
                    ChannelError::InvalidParameter(format!(
                        "signing field {name} is missing from payload"
                    ))
                })?;
                source.push_str(value);
            }
            source.push_str(secret_key);
            (source, *algo)
        }
        SigningSpec::SortedQuery {
            algo,
            include_empty,
        } => {
            let mut parts: Vec<String> = Vec::new();
            for (name, value) in payload.sorted_pairs() {
                if value.is_empty() && !*include_empty {
                    continue;
                }
                parts.push(format!("{name}={value}"));
            }
            let mut source = parts.join("&");
            source.push_str("&key=");
            source.push_str(secret_key);
            (source, *algo)
        }
    };

    Ok(digest_hex(algo, &source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_md5_known_answer() {
        assert_eq!(
            digest_hex(HashAlgo::Md5, "abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn test_digest_sha256_known_answer() {
        assert_eq!(
            digest_hex(HashAlgo::Sha256, "abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_payload_set_replaces_same_name() {
        let mut payload = SignaturePayload::new();
        payload.set("merNo", "M1");
        payload.set("merNo", "M2");

        assert_eq!(payload.get("merNo"), Some("M2"));
        assert_eq!(payload.pairs().len(), 1);
    }

    #[test]
    fn test_concat_sign_follows_documented_order() {
        let mut payload = SignaturePayload::new();
        payload.set("tradeNo", "ORDER1");
        payload.set("merNo", "M1001");

        let scheme = SigningSpec::Concat {
            order: &["merNo", "tradeNo"],
            algo: HashAlgo::Md5,
        };
        let signature = sign(&payload, "key123", &scheme).unwrap();

        assert_eq!(signature, digest_hex(HashAlgo::Md5, "M1001ORDER1key123"));
    }

    #[test]
    fn test_sign_is_deterministic() {
        let mut payload = SignaturePayload::new();
        payload.set("merNo", "M1001");
        payload.set("tradeNo", "ORDER1");

        let scheme = SigningSpec::Concat {
            order: &["merNo", "tradeNo"],
            algo: HashAlgo::Md5,
        };

        let first = sign(&payload, "key123", &scheme).unwrap();
        let second = sign(&payload, "key123", &scheme).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_query_sign_sorts_and_skips_empty() {
        let mut payload = SignaturePayload::new();
        payload.set("b", "2");
        payload.set("a", "1");
        payload.set("c", "");

        let scheme = SigningSpec::SortedQuery {
            algo: HashAlgo::Md5,
            include_empty: false,
        };
        let signature = sign(&payload, "k", &scheme).unwrap();

        assert_eq!(signature, digest_hex(HashAlgo::Md5, "a=1&b=2&key=k"));
    }

    #[test]
    fn test_sorted_query_sign_can_keep_empty() {
        let mut payload = SignaturePayload::new();
        payload.set("b", "2");
        payload.set("a", "1");
        payload.set("c", "");

        let scheme = SigningSpec::SortedQuery {
            algo: HashAlgo::Md5,
            include_empty: true,
        };
        let signature = sign(&payload, "k", &scheme).unwrap();

        assert_eq!(signature, digest_hex(HashAlgo::Md5, "a=1&b=2&c=&key=k"));
    }

    #[test]
    fn test_sign_rejects_empty_key() {
        let mut payload = SignaturePayload::new();
        payload.set("merNo", "M1001");

        let scheme = SigningSpec::SortedQuery {
            algo: HashAlgo::Md5,
            include_empty: false,
        };
        let err = sign(&payload, "", &scheme).unwrap_err();

        assert!(matches!(err, ChannelError::InvalidParameter(_)));
    }

    #[test]
    fn test_sign_rejects_missing_concat_field() {
        let mut payload = SignaturePayload::new();
        payload.set("merNo", "M1001");

        let scheme = SigningSpec::Concat {
            order: &["merNo", "tradeNo"],
            algo: HashAlgo::Md5,
        };
        let err = sign(&payload, "key123", &scheme).unwrap_err();

        assert!(matches!(err, ChannelError::InvalidParameter(_)));
        assert!(err.to_string().contains("tradeNo"));
    }
}
