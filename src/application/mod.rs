pub mod dto;
pub mod query_service;

pub use dto::{ErrorResponse, OrderQueryApiRequest, OrderQueryReply};
pub use query_service::OrderQueryService;
