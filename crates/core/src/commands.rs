use serde::{Deserialize, Serialize};

use crate::error::{EntityError, Result};

// Commands a climate entity accepts on its command topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ClimateCommand {
    SetTemperature(f64),
    SetMode(String),
}

impl ClimateCommand {
    pub fn temperature(topic: &str, payload: &[u8]) -> Result<Self> {
        let text = payload_text(topic, payload)?;
        let value: f64 = text.parse().map_err(|_| EntityError::InvalidCommand {
            topic: topic.to_string(),
            reason: format!("`{}` is not a number", text),
        })?;
        if !value.is_finite() {
            return Err(EntityError::InvalidCommand {
                topic: topic.to_string(),
                reason: format!("`{}` is not a finite temperature", text),
            });
        }
        Ok(ClimateCommand::SetTemperature(value))
    }

    pub fn mode(topic: &str, payload: &[u8]) -> Result<Self> {
        let text = payload_text(topic, payload)?;
        if text.is_empty() {
            return Err(EntityError::InvalidCommand {
                topic: topic.to_string(),
                reason: "empty mode".to_string(),
            });
        }
        Ok(ClimateCommand::SetMode(text.to_string()))
    }
}

fn payload_text<'a>(topic: &str, payload: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(payload)
        .map(str::trim)
        .map_err(|_| EntityError::InvalidCommand {
            topic: topic.to_string(),
            reason: "payload is not UTF-8".to_string(),
        })
}
