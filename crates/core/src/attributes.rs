use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{EntityError, Result};

/// Insertion-ordered attributes of a single discovered endpoint.
///
/// Mutation is only possible inside this crate, while an entity is being
/// constructed. Once an [`Entity`](crate::Entity) owns the set, callers only
/// ever see `&AttributeSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet(Map<String, Value>);

impl AttributeSet {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert used by callers assembling input attributes.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// String value of `key`, failing if it is absent or not a string.
    pub fn get_str(&self, kind: &'static str, key: &str) -> Result<&str> {
        match self.0.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(EntityError::invalid(
                kind,
                key,
                format!("expected a string, found {}", value_type(other)),
            )),
            None => Err(EntityError::missing(kind, key)),
        }
    }

    /// Value of `key` rendered as text for use in a topic template.
    pub fn get_scalar(&self, kind: &'static str, key: &str) -> Result<String> {
        match self.0.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
            Some(other) => Err(EntityError::invalid(
                kind,
                key,
                format!("expected a scalar, found {}", value_type(other)),
            )),
            None => Err(EntityError::missing(kind, key)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Inserts `value` under `key` unless the key already exists.
    /// Returns whether the insert happened.
    pub(crate) fn insert_if_absent(&mut self, key: &str, value: impl Into<Value>) -> bool {
        if self.0.contains_key(key) {
            return false;
        }
        self.0.insert(key.to_string(), value.into());
        true
    }
}

impl From<Map<String, Value>> for AttributeSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for AttributeSet {
    type Error = EntityError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(EntityError::invalid(
                "entity",
                "<root>",
                format!("expected an object, found {}", value_type(&other)),
            )),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
