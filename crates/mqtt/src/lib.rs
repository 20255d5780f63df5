pub mod config;
pub mod error;
pub mod message;

pub use config::DiscoveryConfig;
pub use error::DiscoveryError;
pub use message::{messages_for, DiscoveryMessage};
