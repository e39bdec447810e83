pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::ChannelConfig;
pub use errors::{ChannelError, ChannelResult};
pub use value_objects::{Money, OrderStatus, QueryOutcome};
