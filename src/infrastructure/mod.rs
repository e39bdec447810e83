pub mod adapters;
pub mod channel;
pub mod config;

pub use adapters::MySqlChannelDirectory;
pub use channel::{ChannelAdapterRegistry, ChannelTransport};
pub use config::AppConfig;
