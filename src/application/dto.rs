use crate::domain::value_objects::{OrderStatus, QueryOutcome};
use crate::ports::channel_query_port::OrderQueryResponse;
use serde::{Deserialize, Serialize};

/// 查单请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQueryApiRequest {
    /// 项目名（渠道路由键）
    pub project_name: String,

    /// 平台订单号
    pub order_no: String,
}

/// 查单应答
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQueryReply {
    /// 查询结果
    pub status: QueryOutcome,

    /// 渠道侧订单号
    pub channel_order_no: String,

    /// 规范化订单状态
    pub order_status: OrderStatus,

    /// 渠道应答时间
    pub channel_reply_date: String,

    /// 渠道手续费（元）
    pub channel_fee: f64,

    /// 订单金额（元）
    pub order_amount: f64,
}

impl From<OrderQueryResponse> for OrderQueryReply {
    fn from(response: OrderQueryResponse) -> Self {
        Self {
            status: response.status,
            channel_order_no: response.channel_order_no,
            order_status: response.order_status,
            channel_reply_date: response.channel_reply_date,
            channel_fee: response.channel_fee.to_major(),
            order_amount: response.order_amount.to_major(),
        }
    }
}

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: String, message: String) -> Self {
        Self { error, message }
    }
}
