//! Home Assistant MQTT discovery configuration for pool controller entities.
//!
//! An [`Entity`] is built once from the attributes of a discovered endpoint
//! and the [`Device`] it belongs to. Its [`EntityKind`] decides which topics
//! are derived from `state_topic` and which keys must be present.
//! [`Entity::build_config`] turns it into a [`ConfigObject`] ready to be
//! serialized onto the discovery topic.

pub mod attributes;
pub mod climate;
pub mod commands;
pub mod config;
pub mod derive;
pub mod device;
pub mod entity;
pub mod error;
pub mod kind;
pub mod topics;

pub use attributes::AttributeSet;
pub use climate::Climate;
pub use commands::ClimateCommand;
pub use config::ConfigObject;
pub use derive::{apply_rules, DerivationRule, CLIMATE_RULES};
pub use device::Device;
pub use entity::Entity;
pub use error::{EntityError, Result};
pub use kind::{EntityKind, SEED_KEY};
pub use topics::DEFAULT_DISCOVERY_PREFIX;
