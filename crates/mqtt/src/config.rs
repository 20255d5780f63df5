use std::env;
use std::sync::Arc;

use poolaccess_core::{AttributeSet, Climate, Device, Entity, EntityKind, DEFAULT_DISCOVERY_PREFIX};
use rumqttc::QoS;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub prefix: String,
    pub retain: bool,
    pub qos: QoS,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_DISCOVERY_PREFIX.to_string(),
            retain: true,
            qos: QoS::AtLeastOnce,
        }
    }
}

impl DiscoveryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Split out so the parsing can be exercised without touching process env
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = DiscoveryConfig::default();

        if let Some(v) = lookup("DISCOVERY_PREFIX") {
            let v = v.trim().trim_end_matches('/');
            if !v.is_empty() {
                cfg.prefix = v.to_string();
            }
        }
        if let Some(v) = lookup("DISCOVERY_RETAIN") {
            match parse_bool(&v) {
                Some(b) => cfg.retain = b,
                None => warn!(value = %v, "Ignoring invalid DISCOVERY_RETAIN"),
            }
        }
        if let Some(v) = lookup("DISCOVERY_QOS") {
            match v.trim().parse::<u8>().ok().and_then(qos_from_level) {
                Some(q) => cfg.qos = q,
                None => warn!(value = %v, "Ignoring invalid DISCOVERY_QOS"),
            }
        }

        cfg
    }

    /// Builds an entity under this configuration's discovery prefix.
    pub fn entity(&self, kind: EntityKind, attributes: AttributeSet, device: Arc<Device>) -> poolaccess_core::Result<Entity> {
        Entity::new(kind, attributes, device, self.prefix.as_str())
    }

    pub fn climate(&self, attributes: AttributeSet, device: Arc<Device>) -> poolaccess_core::Result<Climate> {
        Climate::new(attributes, device, self.prefix.as_str())
    }
}

fn qos_from_level(level: u8) -> Option<QoS> {
    match level {
        0 => Some(QoS::AtMostOnce),
        1 => Some(QoS::AtLeastOnce),
        2 => Some(QoS::ExactlyOnce),
        _ => None,
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
