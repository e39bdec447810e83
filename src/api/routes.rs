use super::handlers::*;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn create_router<
    D: crate::ports::ChannelDirectoryPort + 'static,
    Q: crate::ports::ChannelQueryPort + 'static,
>(
    state: AppState<D, Q>,
) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/orders/query", post(query_order::<D, Q>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
