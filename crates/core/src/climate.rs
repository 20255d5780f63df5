//! Climate entities: a thermostat-like endpoint with separate temperature and
//! mode channels, all four topics hanging off one `state_topic`.

use std::sync::Arc;

use crate::attributes::AttributeSet;
use crate::commands::ClimateCommand;
use crate::config::ConfigObject;
use crate::device::Device;
use crate::entity::Entity;
use crate::error::{EntityError, Result};
use crate::kind::EntityKind;

/// Typed view over an [`Entity`] of kind [`EntityKind::Climate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Climate {
    entity: Entity,
}

impl Climate {
    /// Derives any of the four topics the caller left out.
    ///
    /// Fails with `MissingAttribute` when a topic must be derived but
    /// `state_topic` is absent, or when `uid_mode`/`uid_temp` is absent.
    pub fn new(attributes: AttributeSet, device: Arc<Device>, discovery_prefix: impl Into<String>) -> Result<Self> {
        let entity = Entity::new(EntityKind::Climate, attributes, device, discovery_prefix)?;
        Ok(Self { entity })
    }

    pub fn with_default_prefix(attributes: AttributeSet, device: Arc<Device>) -> Result<Self> {
        let entity = Entity::with_default_prefix(EntityKind::Climate, attributes, device)?;
        Ok(Self { entity })
    }

    pub fn entity_type(&self) -> &'static str {
        EntityKind::Climate.as_str()
    }

    pub fn uid_mode(&self) -> Result<&str> {
        self.entity.attribute_str("uid_mode")
    }

    pub fn uid_temp(&self) -> Result<&str> {
        self.entity.attribute_str("uid_temp")
    }

    pub fn temperature_command_topic(&self) -> Result<&str> {
        self.entity.attribute_str("temperature_command_topic")
    }

    pub fn mode_command_topic(&self) -> Result<&str> {
        self.entity.attribute_str("mode_command_topic")
    }

    pub fn temperature_state_topic(&self) -> Result<&str> {
        self.entity.attribute_str("temperature_state_topic")
    }

    pub fn mode_state_topic(&self) -> Result<&str> {
        self.entity.attribute_str("mode_state_topic")
    }

    pub fn build_config(&self) -> Result<ConfigObject> {
        self.entity.build_config()
    }

    /// Decodes a message addressed to one of this entity's command topics.
    /// Returns `None` for any other topic.
    pub fn parse_command(&self, topic: &str, payload: &[u8]) -> Option<Result<ClimateCommand>> {
        if self.temperature_command_topic().ok() == Some(topic) {
            Some(ClimateCommand::temperature(topic, payload))
        } else if self.mode_command_topic().ok() == Some(topic) {
            Some(ClimateCommand::mode(topic, payload))
        } else {
            None
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn into_entity(self) -> Entity {
        self.entity
    }
}

impl TryFrom<Entity> for Climate {
    type Error = EntityError;

    fn try_from(entity: Entity) -> Result<Self> {
        match entity.kind() {
            EntityKind::Climate => Ok(Self { entity }),
            other => Err(EntityError::ContractViolation {
                tag: other.as_str().to_string(),
            }),
        }
    }
}

impl AsRef<Entity> for Climate {
    fn as_ref(&self) -> &Entity {
        &self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device() -> Arc<Device> {
        Arc::new(Device::new("pm5", "Pool"))
    }

    fn attrs() -> AttributeSet {
        AttributeSet::new()
            .with("state_topic", "pool/climate/1")
            .with("uid_mode", "m1")
            .with("uid_temp", "t1")
    }

    #[test]
    fn type_is_climate() {
        let climate = Climate::with_default_prefix(attrs(), device()).unwrap();
        assert_eq!(climate.entity_type(), "climate");
        assert_eq!(climate.entity().entity_type(), "climate");
    }

    #[test]
    fn uids_are_required_at_construction() {
        let without_mode = AttributeSet::new()
            .with("state_topic", "pool/climate/1")
            .with("uid_temp", "t1");
        let err = Climate::with_default_prefix(without_mode, device()).unwrap_err();
        assert_eq!(
            err,
            EntityError::MissingAttribute {
                kind: "climate",
                key: "uid_mode".to_string()
            }
        );
    }

    #[test]
    fn state_topic_is_required_even_when_all_topics_are_given() {
        let attrs = AttributeSet::new()
            .with("uid_mode", "m1")
            .with("uid_temp", "t1")
            .with("temperature_command_topic", "pool/t/set")
            .with("mode_command_topic", "pool/m/set")
            .with("temperature_state_topic", "pool/t")
            .with("mode_state_topic", "pool/m");
        let err = Climate::with_default_prefix(attrs, device()).unwrap_err();
        assert_eq!(
            err,
            EntityError::MissingAttribute {
                kind: "climate",
                key: "state_topic".to_string()
            }
        );
    }

    #[test]
    fn accessors_reject_non_string_values() {
        let climate = Climate::with_default_prefix(attrs().with("mode_state_topic", 5), device()).unwrap();
        assert!(matches!(
            climate.mode_state_topic(),
            Err(EntityError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn numeric_seed_is_rendered_into_topics() {
        let numeric = AttributeSet::new()
            .with("state_topic", 42)
            .with("uid_mode", "m1")
            .with("uid_temp", "t1");
        let climate = Climate::with_default_prefix(numeric, device()).unwrap();
        assert_eq!(climate.mode_state_topic().unwrap(), "42/mode");
    }

    #[test]
    fn parses_commands_on_derived_topics() {
        let climate = Climate::with_default_prefix(attrs(), device()).unwrap();
        assert_eq!(
            climate.parse_command("pool/climate/1/set_temp", b"28").unwrap().unwrap(),
            ClimateCommand::SetTemperature(28.0)
        );
        assert_eq!(
            climate.parse_command("pool/climate/1/set_mode", b"auto").unwrap().unwrap(),
            ClimateCommand::SetMode("auto".to_string())
        );
        assert!(climate.parse_command("pool/climate/1/temp", b"28").is_none());
    }

    #[test]
    fn try_from_checks_the_kind() {
        let sensor = Entity::with_default_prefix(
            EntityKind::Sensor,
            AttributeSet::new().with("state_topic", "pool/ph"),
            device(),
        )
        .unwrap();
        assert!(Climate::try_from(sensor).is_err());

        let entity = Climate::with_default_prefix(attrs(), device()).unwrap().into_entity();
        assert!(Climate::try_from(entity).is_ok());
    }
}
