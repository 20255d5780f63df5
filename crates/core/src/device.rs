use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Physical device that exposes one or more entities.
///
/// Entities hold it as `Arc<Device>`; the device outlives them and is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sw_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hw_version: Option<String>,
}

impl Device {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            manufacturer: None,
            model: None,
            sw_version: None,
            hw_version: None,
        }
    }

    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_sw_version(mut self, sw_version: impl Into<String>) -> Self {
        self.sw_version = Some(sw_version.into());
        self
    }

    #[must_use]
    pub fn with_hw_version(mut self, hw_version: impl Into<String>) -> Self {
        self.hw_version = Some(hw_version.into());
        self
    }

    /// The `device` block of a discovery payload.
    pub fn discovery_info(&self) -> Value {
        let mut info = json!({
            "identifiers": [self.id],
            "name": self.name,
        });
        let optional = [
            ("manufacturer", &self.manufacturer),
            ("model", &self.model),
            ("sw_version", &self.sw_version),
            ("hw_version", &self.hw_version),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                info[key] = json!(v);
            }
        }
        info
    }
}
