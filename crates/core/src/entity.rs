use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::attributes::AttributeSet;
use crate::config::ConfigObject;
use crate::derive::apply_rules;
use crate::device::Device;
use crate::error::{EntityError, Result};
use crate::kind::{EntityKind, SEED_KEY};
use crate::topics::{self, DEFAULT_DISCOVERY_PREFIX};

// Filled from the entity's Device by build_config
const DEVICE_KEY: &str = "device";

/// One discovered endpoint of a device.
///
/// Construction takes the caller's attributes by value, fills in whatever
/// the kind derives, and checks the keys the kind requires. After that the
/// entity is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    kind: EntityKind,
    attributes: AttributeSet,
    device: Arc<Device>,
    discovery_prefix: String,
}

impl Entity {
    pub fn new(
        kind: EntityKind,
        mut attributes: AttributeSet,
        device: Arc<Device>,
        discovery_prefix: impl Into<String>,
    ) -> Result<Self> {
        let tag = kind.as_str();
        if attributes.contains(DEVICE_KEY) {
            return Err(EntityError::invalid(tag, DEVICE_KEY, "reserved for the device block"));
        }
        apply_rules(tag, &mut attributes, kind.derivation_rules(), SEED_KEY)?;
        if let Some(key) = kind.required_keys().iter().find(|key| !attributes.contains(key)) {
            return Err(EntityError::missing(tag, *key));
        }

        Ok(Self {
            kind,
            attributes,
            device,
            discovery_prefix: discovery_prefix.into(),
        })
    }

    pub fn with_default_prefix(kind: EntityKind, attributes: AttributeSet, device: Arc<Device>) -> Result<Self> {
        Self::new(kind, attributes, device, DEFAULT_DISCOVERY_PREFIX)
    }

    /// Looks up the kind by its type tag first; unknown tags are rejected.
    pub fn from_tag(
        tag: &str,
        attributes: AttributeSet,
        device: Arc<Device>,
        discovery_prefix: impl Into<String>,
    ) -> Result<Self> {
        Self::new(tag.parse()?, attributes, device, discovery_prefix)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Discovery component, e.g. `"climate"`.
    pub fn entity_type(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Result<&Value> {
        self.attributes
            .get(key)
            .ok_or_else(|| EntityError::missing(self.entity_type(), key))
    }

    pub(crate) fn attribute_str(&self, key: &str) -> Result<&str> {
        self.attributes.get_str(self.entity_type(), key)
    }

    pub fn device(&self) -> &Arc<Device> {
        &self.device
    }

    pub fn discovery_prefix(&self) -> &str {
        &self.discovery_prefix
    }

    /// Identifier of this entity within its device.
    pub fn object_id(&self) -> Result<String> {
        let tag = self.entity_type();
        for key in ["object_id", "uid"] {
            if self.attributes.contains(key) {
                return Ok(topics::object_id_from(&self.attributes.get_scalar(tag, key)?));
            }
        }
        let state_topic = self.attributes.get_scalar(tag, SEED_KEY)?;
        Ok(topics::object_id_from(&state_topic))
    }

    /// Device id in the form used for topics and generated ids.
    pub fn node_id(&self) -> String {
        topics::object_id_from(&self.device.id)
    }

    /// Globally unique id; the caller's `unique_id` wins when supplied.
    pub fn unique_id(&self) -> Result<String> {
        if self.attributes.contains("unique_id") {
            return self.attributes.get_scalar(self.entity_type(), "unique_id");
        }
        Ok(topics::unique_id(&self.node_id(), &self.object_id()?))
    }

    pub fn config_topic(&self) -> Result<String> {
        Ok(topics::config_topic(
            &self.discovery_prefix,
            self.entity_type(),
            &self.node_id(),
            &self.object_id()?,
        ))
    }

    /// Attributes plus device identity, addressed to the discovery topic.
    pub fn build_config(&self) -> Result<ConfigObject> {
        let tag = self.entity_type();
        if !self.attributes.contains(SEED_KEY) {
            return Err(EntityError::missing(tag, SEED_KEY));
        }

        let object_id = self.object_id()?;
        let topic = self.config_topic()?;

        // Caller-supplied identity is passed through as given
        let mut payload = self.attributes.as_map().clone();
        if !payload.contains_key("unique_id") {
            payload.insert("unique_id".to_string(), Value::String(self.unique_id()?));
        }
        payload
            .entry("object_id")
            .or_insert_with(|| Value::String(object_id));
        payload.insert(DEVICE_KEY.to_string(), self.device.discovery_info());

        debug!(kind = tag, topic = %topic, fields = payload.len(), "Built discovery config");
        Ok(ConfigObject { topic, payload })
    }
}
