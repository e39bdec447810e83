use crate::application::{ErrorResponse, OrderQueryApiRequest, OrderQueryService};
use crate::domain::errors::ChannelError;
use crate::ports::channel_query_port::QueryContext;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use tracing::{debug, error, info};
use uuid::Uuid;

/// 应用状态
pub struct AppState<D: crate::ports::ChannelDirectoryPort, Q: crate::ports::ChannelQueryPort> {
    pub query_service: std::sync::Arc<OrderQueryService<D, Q>>,
}

impl<D: crate::ports::ChannelDirectoryPort, Q: crate::ports::ChannelQueryPort> Clone
    for AppState<D, Q>
{
    fn clone(&self) -> Self {
        Self {
            query_service: self.query_service.clone(),
        }
    }
}

/// 查询订单
pub async fn query_order<
    D: crate::ports::ChannelDirectoryPort + 'static,
    Q: crate::ports::ChannelQueryPort + 'static,
>(
    State(state): State<AppState<D, Q>>,
    headers: HeaderMap,
    Json(request): Json<OrderQueryApiRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    info!("Received order query request: {}", request.order_no);

    let ctx = trace_context_from_headers(&headers);

    state
        .query_service
        .query_order(request, ctx)
        .await
        .map(|reply| (StatusCode::OK, Json(reply)).into_response())
        .map_err(|e| {
            error!("Order query error: {}", e);
            let status = match e {
                ChannelError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
                ChannelError::Transport(_)
                | ChannelError::InvalidStatusCode(_)
                | ChannelError::ChannelReply(_) => StatusCode::BAD_GATEWAY,
                ChannelError::General(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse::new(e.code().to_string(), e.to_string())),
            )
        })
}

/// 健康检查
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// 调用方传入的请求标识优先作为追踪ID，解析失败时记日志并另发新的
fn trace_context_from_headers(headers: &HeaderMap) -> QueryContext {
    let header = match headers.get("X-Request-Id") {
        Some(header) => header,
        None => return QueryContext::new(),
    };
    match header.to_str().ok().and_then(|raw| Uuid::parse_str(raw).ok()) {
        Some(id) => QueryContext::with_trace_id(id),
        None => {
            debug!("Malformed X-Request-Id header {:?}, issuing a new trace id", header);
            QueryContext::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_valid_request_id_header_becomes_trace_id() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Request-Id",
            HeaderValue::from_str(&id.to_string()).unwrap(),
        );

        let ctx = trace_context_from_headers(&headers);

        assert_eq!(ctx.trace_id, id);
    }

    #[test]
    fn test_malformed_request_id_header_gets_fresh_trace_id() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Request-Id", HeaderValue::from_static("not-a-uuid"));

        let ctx = trace_context_from_headers(&headers);

        assert!(!ctx.trace_id.is_nil());
        assert_ne!(ctx.trace_id.to_string(), "not-a-uuid");
    }

    #[test]
    fn test_missing_request_id_header_gets_fresh_trace_id() {
        let ctx = trace_context_from_headers(&HeaderMap::new());

        assert!(!ctx.trace_id.is_nil());
    }
}
