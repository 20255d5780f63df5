use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::derive::{DerivationRule, CLIMATE_RULES};
use crate::error::EntityError;

/// Closed set of entity kinds. Each kind fixes its discovery type tag, the
/// topics it derives from `state_topic`, and the keys it cannot do without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Climate,
    Sensor,
}

pub const SEED_KEY: &str = "state_topic";

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Climate, EntityKind::Sensor];

    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Climate => "climate",
            EntityKind::Sensor => "sensor",
        }
    }

    pub const fn derivation_rules(&self) -> &'static [DerivationRule] {
        match self {
            EntityKind::Climate => CLIMATE_RULES,
            EntityKind::Sensor => &[],
        }
    }

    pub const fn required_keys(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Climate => &[SEED_KEY, "uid_mode", "uid_temp"],
            EntityKind::Sensor => &[SEED_KEY],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EntityError::ContractViolation { tag: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_tag_is_a_contract_violation() {
        let err = "".parse::<EntityKind>().unwrap_err();
        assert_eq!(err, EntityError::ContractViolation { tag: String::new() });
        assert!("thermostat".parse::<EntityKind>().is_err());
    }

    #[test]
    fn climate_requires_uids() {
        assert!(EntityKind::Climate.required_keys().contains(&"uid_mode"));
        assert!(EntityKind::Climate.required_keys().contains(&"uid_temp"));
        assert_eq!(EntityKind::Sensor.required_keys(), [SEED_KEY]);
    }

    #[test]
    fn only_climate_derives_topics() {
        assert_eq!(EntityKind::Climate.derivation_rules().len(), 4);
        assert!(EntityKind::Sensor.derivation_rules().is_empty());
    }
}
