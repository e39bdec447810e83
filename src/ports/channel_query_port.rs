use crate::domain::entities::ChannelConfig;
use crate::domain::errors::{ChannelError, ChannelResult};
use crate::domain::value_objects::{Money, OrderStatus, QueryOutcome};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 查单请求（渠道无关的入参）
#[derive(Debug, Clone)]
pub struct OrderQueryRequest {
    /// 平台订单号
    pub order_no: String,
}

impl OrderQueryRequest {
    /// 构造并校验请求，订单号去除首尾空白后不得为空
    pub fn new(order_no: &str) -> ChannelResult<Self> {
        let order_no = order_no.trim();
        if order_no.is_empty() {
            return Err(ChannelError::InvalidParameter(
                "order number must not be empty".to_string(),
            ));
        }
        Ok(Self {
            order_no: order_no.to_string(),
        })
    }
}

/// 规范化查单应答（所有渠道统一的出参）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderQueryResponse {
    /// 本次查询是否拿到了有效应答
    pub status: QueryOutcome,

    /// 渠道侧订单号，渠道未返回时为空串
    pub channel_order_no: String,

    /// 规范化后的订单状态
    pub order_status: OrderStatus,

    /// 渠道应答时间，渠道未返回时为空串
    pub channel_reply_date: String,

    /// 渠道手续费（最小货币单位）
    pub channel_fee: Money,

    /// 订单金额（最小货币单位）
    pub order_amount: Money,
}

/// 查询上下文，贯穿一次查单的全链路
#[derive(Debug, Clone)]
pub struct QueryContext {
    /// 链路追踪标识，随请求透传到渠道
    pub trace_id: Uuid,
}

impl QueryContext {
    pub fn new() -> Self {
        Self {
            trace_id: Uuid::new_v4(),
        }
    }

    pub fn with_trace_id(trace_id: Uuid) -> Self {
        Self { trace_id }
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 渠道查单端口，按项目名路由到对应渠道实现
#[async_trait]
pub trait ChannelQueryPort: Send + Sync {
    /// 向渠道发起订单查询并返回规范化应答
    async fn query_order(
        &self,
        project_name: &str,
        request: &OrderQueryRequest,
        config: &ChannelConfig,
        ctx: &QueryContext,
    ) -> ChannelResult<OrderQueryResponse>;
}
