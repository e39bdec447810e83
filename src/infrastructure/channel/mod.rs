pub mod adapter;
pub mod channels;
pub mod descriptor;
pub mod normalizer;
pub mod request;
pub mod signer;
pub mod transport;

pub use adapter::{ChannelAdapter, ChannelAdapterRegistry};
pub use transport::ChannelTransport;
