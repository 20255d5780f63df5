use serde::Serialize;
use serde_json::{Map, Value};

/// Discovery configuration for one entity: where it goes and what it says.
///
/// Recomputed by every `build_config` call; entities never retain it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigObject {
    pub topic: String,
    pub payload: Map<String, Value>,
}

impl ConfigObject {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.payload)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.payload)
    }
}
