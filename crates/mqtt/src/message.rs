use poolaccess_core::{ConfigObject, Entity};
use rumqttc::QoS;
use tracing::{debug, info};

use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;

/// A discovery publish, ready to hand to `AsyncClient::publish`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryMessage {
    pub topic: String,
    pub payload: Vec<u8>,
    pub qos: QoS,
    pub retain: bool,
}

impl DiscoveryMessage {
    pub fn config(config: &ConfigObject, settings: &DiscoveryConfig) -> Result<Self, DiscoveryError> {
        let payload = config.to_json().map_err(|source| DiscoveryError::Serialize {
            topic: config.topic.clone(),
            source,
        })?;
        debug!(topic = %config.topic, bytes = payload.len(), "Discovery config message");
        Ok(Self {
            topic: config.topic.clone(),
            payload,
            qos: settings.qos,
            retain: settings.retain,
        })
    }

    // An empty retained payload on the config topic removes the entity
    pub fn removal(config: &ConfigObject, settings: &DiscoveryConfig) -> Self {
        debug!(topic = %config.topic, "Discovery removal message");
        Self {
            topic: config.topic.clone(),
            payload: Vec::new(),
            qos: settings.qos,
            retain: settings.retain,
        }
    }

    pub fn is_removal(&self) -> bool {
        self.payload.is_empty()
    }
}

/// One config message per entity; stops at the first entity that fails.
pub fn messages_for<'a, I>(entities: I, settings: &DiscoveryConfig) -> Result<Vec<DiscoveryMessage>, DiscoveryError>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let messages = entities
        .into_iter()
        .map(|entity| -> Result<DiscoveryMessage, DiscoveryError> {
            let config = entity.build_config()?;
            DiscoveryMessage::config(&config, settings)
        })
        .collect::<Result<Vec<_>, _>>()?;
    info!(count = messages.len(), prefix = %settings.prefix, "Prepared discovery messages");
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolaccess_core::{AttributeSet, Device, EntityKind};
    use std::sync::Arc;

    fn device() -> Arc<Device> {
        Arc::new(Device::new("pm5-1", "Pool").with_model("PM5"))
    }

    fn climate(settings: &DiscoveryConfig) -> Entity {
        let attrs = AttributeSet::new()
            .with("name", "Water")
            .with("state_topic", "pool/climate/1")
            .with("uid_mode", "m1")
            .with("uid_temp", "t1");
        settings.entity(EntityKind::Climate, attrs, device()).unwrap()
    }

    #[test]
    fn config_message_carries_json_payload() {
        let settings = DiscoveryConfig::default();
        let config = climate(&settings).build_config().unwrap();
        let message = DiscoveryMessage::config(&config, &settings).unwrap();

        assert_eq!(message.topic, "homeassistant/climate/pm5-1/pool_climate_1/config");
        assert_eq!(message.qos, QoS::AtLeastOnce);
        assert!(message.retain);
        assert!(!message.is_removal());

        let json: serde_json::Value = serde_json::from_slice(&message.payload).unwrap();
        assert_eq!(json["mode_command_topic"], "pool/climate/1/set_mode");
        assert_eq!(json["device"]["name"], "Pool");
    }

    #[test]
    fn removal_message_is_empty_on_same_topic() {
        let settings = DiscoveryConfig {
            retain: false,
            qos: QoS::AtMostOnce,
            ..DiscoveryConfig::default()
        };
        let config = climate(&settings).build_config().unwrap();
        let removal = DiscoveryMessage::removal(&config, &settings);
        assert_eq!(removal.topic, config.topic);
        assert!(removal.is_removal());
        assert!(!removal.retain);
        assert_eq!(removal.qos, QoS::AtMostOnce);
    }

    #[test]
    fn messages_for_builds_one_per_entity() {
        let settings = DiscoveryConfig {
            prefix: "hass".to_string(),
            ..DiscoveryConfig::default()
        };
        let ph = settings
            .entity(
                EntityKind::Sensor,
                AttributeSet::new().with("state_topic", "pool/ph"),
                device(),
            )
            .unwrap();
        let entities = vec![climate(&settings), ph];

        let messages = messages_for(&entities, &settings).unwrap();
        let topics: Vec<_> = messages.iter().map(|m| m.topic.as_str()).collect();
        assert_eq!(
            topics,
            [
                "hass/climate/pm5-1/pool_climate_1/config",
                "hass/sensor/pm5-1/pool_ph/config"
            ]
        );
    }
}
