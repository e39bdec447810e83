use crate::application::dto::{OrderQueryApiRequest, OrderQueryReply};
use crate::domain::errors::{ChannelError, ChannelResult};
use crate::ports::channel_query_port::{OrderQueryRequest, QueryContext};
use crate::ports::{ChannelDirectoryPort, ChannelQueryPort};
use std::sync::Arc;
use tracing::{debug, info};

/// 查单服务
pub struct OrderQueryService<D: ChannelDirectoryPort, Q: ChannelQueryPort> {
    directory: Arc<D>,
    channels: Arc<Q>,
}

impl<D: ChannelDirectoryPort, Q: ChannelQueryPort> OrderQueryService<D, Q> {
    pub fn new(directory: Arc<D>, channels: Arc<Q>) -> Self {
        Self {
            directory,
            channels,
        }
    }

    /// 查询订单在渠道侧的当前状态
    pub async fn query_order(
        &self,
        request: OrderQueryApiRequest,
        ctx: QueryContext,
    ) -> ChannelResult<OrderQueryReply> {
        info!(
            trace_id = %ctx.trace_id,
            project = %request.project_name,
            order_no = %request.order_no,
            "querying order status"
        );

        // 1. 校验请求参数
        let query = OrderQueryRequest::new(&request.order_no)?;
        let project_name = request.project_name.trim();
        if project_name.is_empty() {
            return Err(ChannelError::InvalidParameter(
                "project name must not be empty".to_string(),
            ));
        }

        // 2. 解析渠道配置，每次查询解析一次，不缓存
        let config = self
            .directory
            .get_channel_config(project_name)
            .await?
            .ok_or_else(|| {
                ChannelError::InvalidParameter(format!(
                    "no channel configured for project: {project_name}"
                ))
            })?;
        debug!(trace_id = %ctx.trace_id, project = %project_name, "channel config resolved");

        // 3. 调用渠道适配器
        let response = self
            .channels
            .query_order(project_name, &query, &config, &ctx)
            .await?;

        info!(
            trace_id = %ctx.trace_id,
            project = %project_name,
            order_status = %response.order_status,
            terminal = response.order_status.is_terminal(),
            "order query finished"
        );

        Ok(OrderQueryReply::from(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ChannelConfig;
    use crate::domain::value_objects::{Money, OrderStatus, QueryOutcome};
    use crate::ports::channel_query_port::OrderQueryResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubDirectory {
        config: Option<ChannelConfig>,
    }

    #[async_trait]
    impl ChannelDirectoryPort for StubDirectory {
        async fn get_channel_config(
            &self,
            _project_name: &str,
        ) -> ChannelResult<Option<ChannelConfig>> {
            Ok(self.config.clone())
        }
    }

    struct StubChannel {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChannelQueryPort for StubChannel {
        async fn query_order(
            &self,
            _project_name: &str,
            _request: &OrderQueryRequest,
            _config: &ChannelConfig,
            _ctx: &QueryContext,
        ) -> ChannelResult<OrderQueryResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(OrderQueryResponse {
                status: QueryOutcome::Success,
                channel_order_no: "CH-1".to_string(),
                order_status: OrderStatus::Success,
                channel_reply_date: String::new(),
                channel_fee: Money::zero(),
                order_amount: Money::from_minor_units(10050),
            })
        }
    }

    fn request(project: &str) -> OrderQueryApiRequest {
        OrderQueryApiRequest {
            project_name: project.to_string(),
            order_no: "ORDER1".to_string(),
        }
    }

    fn service_with(
        config: Option<ChannelConfig>,
    ) -> (
        OrderQueryService<StubDirectory, StubChannel>,
        Arc<StubChannel>,
    ) {
        let channels = Arc::new(StubChannel {
            calls: AtomicUsize::new(0),
        });
        let service = OrderQueryService::new(Arc::new(StubDirectory { config }), channels.clone());
        (service, channels)
    }

    fn config() -> ChannelConfig {
        ChannelConfig::new(
            "huanyupay".to_string(),
            "M1001".to_string(),
            "key123".to_string(),
            "https://channel.example.com/query".to_string(),
        )
    }

    #[tokio::test]
    async fn test_unknown_project_fails_without_channel_call() {
        let (service, channels) = service_with(None);

        let err = service
            .query_order(request("ghost"), QueryContext::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ChannelError::InvalidParameter(_)));
        assert_eq!(channels.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_order_no_fails_without_channel_call() {
        let (service, channels) = service_with(Some(config()));
        let mut invalid = request("huanyupay");
        invalid.order_no = "   ".to_string();

        let err = service
            .query_order(invalid, QueryContext::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ChannelError::InvalidParameter(_)));
        assert_eq!(channels.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repeated_query_returns_same_status() {
        let (service, channels) = service_with(Some(config()));

        let first = service
            .query_order(request("huanyupay"), QueryContext::new())
            .await
            .unwrap();
        let second = service
            .query_order(request("huanyupay"), QueryContext::new())
            .await
            .unwrap();

        assert_eq!(first.order_status, second.order_status);
        assert_eq!(first.order_amount, 100.50);
        assert_eq!(channels.calls.load(Ordering::SeqCst), 2);
    }
}
