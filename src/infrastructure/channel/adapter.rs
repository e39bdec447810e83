use crate::domain::entities::ChannelConfig;
use crate::domain::errors::{ChannelError, ChannelResult};
use crate::infrastructure::channel::channels;
use crate::infrastructure::channel::descriptor::ChannelDescriptor;
use crate::infrastructure::channel::transport::ChannelTransport;
use crate::infrastructure::channel::{normalizer, request};
use crate::ports::channel_query_port::{
    ChannelQueryPort, OrderQueryRequest, OrderQueryResponse, QueryContext,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::info;

/// 单渠道适配器，组合请求构建、传输与应答规范化
pub struct ChannelAdapter {
    descriptor: &'static ChannelDescriptor,
    transport: ChannelTransport,
}

impl ChannelAdapter {
    pub fn new(descriptor: &'static ChannelDescriptor, transport: ChannelTransport) -> Self {
        Self {
            descriptor,
            transport,
        }
    }

    /// 向渠道发起一次查单调用
    pub async fn query_order(
        &self,
        query: &OrderQueryRequest,
        config: &ChannelConfig,
        ctx: &QueryContext,
    ) -> ChannelResult<OrderQueryResponse> {
        config.validate()?;

        // 1. 构建并签名渠道请求
        let signed = request::build(query, config, self.descriptor)?;

        // 2. 单次 HTTP 调用，无重试
        let reply = self
            .transport
            .post_form(&signed.url, &signed.form, ctx)
            .await?;

        // 3. 规范化渠道应答
        normalizer::normalize(&reply, self.descriptor, ctx)
    }
}

/// 渠道适配器注册表，按项目名路由到内置渠道
pub struct ChannelAdapterRegistry {
    adapters: HashMap<&'static str, ChannelAdapter>,
}

impl ChannelAdapterRegistry {
    /// 注册全部内置渠道，共享同一个传输层连接池
    pub fn with_builtin_channels(transport: ChannelTransport) -> Self {
        let mut adapters = HashMap::new();
        for descriptor in channels::all() {
            adapters.insert(
                descriptor.name,
                ChannelAdapter::new(descriptor, transport.clone()),
            );
        }
        Self { adapters }
    }

    pub fn supported_channels(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.adapters.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[async_trait]
impl ChannelQueryPort for ChannelAdapterRegistry {
    async fn query_order(
        &self,
        project_name: &str,
        request: &OrderQueryRequest,
        config: &ChannelConfig,
        ctx: &QueryContext,
    ) -> ChannelResult<OrderQueryResponse> {
        let adapter = self.adapters.get(project_name).ok_or_else(|| {
            ChannelError::InvalidParameter(format!("unsupported channel: {project_name}"))
        })?;

        info!(
            trace_id = %ctx.trace_id,
            channel = project_name,
            order_no = %request.order_no,
            "dispatching order query"
        );
        adapter.query_order(request, config, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn registry() -> ChannelAdapterRegistry {
        let transport = ChannelTransport::new(Duration::from_secs(1)).unwrap();
        ChannelAdapterRegistry::with_builtin_channels(transport)
    }

    #[test]
    fn test_registry_holds_builtin_channels() {
        assert_eq!(
            registry().supported_channels(),
            vec!["huanyupay", "zhiyuanpay"]
        );
    }

    #[tokio::test]
    async fn test_unknown_channel_is_invalid_parameter() {
        let request = OrderQueryRequest::new("ORDER1").unwrap();
        let config = ChannelConfig::new(
            "ghost".to_string(),
            "M1".to_string(),
            "k".to_string(),
            "https://channel.example.com/query".to_string(),
        );

        let err = registry()
            .query_order("ghost", &request, &config, &QueryContext::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ChannelError::InvalidParameter(_)));
    }
}
