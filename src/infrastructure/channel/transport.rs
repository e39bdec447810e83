use crate::domain::errors::{ChannelError, ChannelResult};
use crate::infrastructure::channel::signer::SignaturePayload;
use crate::ports::channel_query_port::QueryContext;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// 渠道原始应答，状态码判定交给上层
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

/// 渠道 HTTP 传输层，一次调用一个 form POST，不做重试
#[derive(Clone)]
pub struct ChannelTransport {
    client: Client,
}

impl ChannelTransport {
    /// 创建带超时上限的传输层，底层连接池可在多渠道间共享
    pub fn new(timeout: Duration) -> ChannelResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChannelError::General(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }

    /// 发送 form 编码的 POST 并返回原始应答
    pub async fn post_form(
        &self,
        url: &str,
        payload: &SignaturePayload,
        ctx: &QueryContext,
    ) -> ChannelResult<RawReply> {
        debug!(trace_id = %ctx.trace_id, url = %url, "sending channel query");

        let response = self
            .client
            .post(url)
            .header("X-Trace-Id", ctx.trace_id.to_string())
            .form(payload.pairs())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        info!(
            trace_id = %ctx.trace_id,
            status = status,
            body_len = body.len(),
            "received channel reply"
        );

        Ok(RawReply { status, body })
    }
}
