pub mod channel_directory_port;
pub mod channel_query_port;

pub use channel_directory_port::ChannelDirectoryPort;
pub use channel_query_port::{
    ChannelQueryPort, OrderQueryRequest, OrderQueryResponse, QueryContext,
};
