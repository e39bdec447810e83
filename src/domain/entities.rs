use crate::domain::errors::{ChannelError, ChannelResult};
use std::fmt;

/// 渠道配置（由渠道目录按项目名解析，适配器只读）
#[derive(Clone)]
pub struct ChannelConfig {
    /// 项目名（渠道目录的主键）
    pub project_name: String,

    /// 商户号
    pub merchant_id: String,

    /// 商户密钥（敏感信息，日志中不得完整输出）
    pub merchant_key: String,

    /// 渠道查单地址
    pub query_url: String,
}

impl ChannelConfig {
    pub fn new(
        project_name: String,
        merchant_id: String,
        merchant_key: String,
        query_url: String,
    ) -> Self {
        Self {
            project_name,
            merchant_id,
            merchant_key,
            query_url,
        }
    }

    /// 校验配置可用性，缺字段视为配置错误
    pub fn validate(&self) -> ChannelResult<()> {
        if self.merchant_id.is_empty() {
            return Err(ChannelError::InvalidParameter(format!(
                "channel config for {} has empty merchant id",
                self.project_name
            )));
        }
        if self.merchant_key.is_empty() {
            return Err(ChannelError::InvalidParameter(format!(
                "channel config for {} has empty merchant key",
                self.project_name
            )));
        }
        if self.query_url.is_empty() {
            return Err(ChannelError::InvalidParameter(format!(
                "channel config for {} has empty query url",
                self.project_name
            )));
        }
        Ok(())
    }

    fn masked_key(&self) -> String {
        let count = self.merchant_key.chars().count();
        if count <= 8 {
            return "***".to_string();
        }
        let head: String = self.merchant_key.chars().take(4).collect();
        let tail: String = self.merchant_key.chars().skip(count - 4).collect();
        format!("{head}***{tail}")
    }
}

impl fmt::Debug for ChannelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelConfig")
            .field("project_name", &self.project_name)
            .field("merchant_id", &self.merchant_id)
            .field("merchant_key", &self.masked_key())
            .field("query_url", &self.query_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChannelConfig {
        ChannelConfig::new(
            "huanyupay".to_string(),
            "M1001".to_string(),
            "0123456789abcdef".to_string(),
            "https://channel.example.com/query".to_string(),
        )
    }

    #[test]
    fn test_validate_ok() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_key() {
        let mut cfg = config();
        cfg.merchant_key = String::new();
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ChannelError::InvalidParameter(_)));
    }

    #[test]
    fn test_debug_masks_merchant_key() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("0123456789abcdef"));
        assert!(rendered.contains("0123***cdef"));
    }

    #[test]
    fn test_debug_masks_short_key() {
        let mut cfg = config();
        cfg.merchant_key = "secret".to_string();
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("secret"));
    }
}
