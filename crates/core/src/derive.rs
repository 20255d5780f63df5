use tracing::debug;

use crate::attributes::AttributeSet;
use crate::error::Result;
use crate::topics::{derived_topic, SUFFIX_MODE, SUFFIX_SET_MODE, SUFFIX_SET_TEMP, SUFFIX_TEMP};

/// Synthesize `key` as `<seed><suffix>` when the caller did not supply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationRule {
    pub key: &'static str,
    pub suffix: &'static str,
}

impl DerivationRule {
    pub const fn new(key: &'static str, suffix: &'static str) -> Self {
        Self { key, suffix }
    }
}

pub const CLIMATE_RULES: &[DerivationRule] = &[
    DerivationRule::new("temperature_command_topic", SUFFIX_SET_TEMP),
    DerivationRule::new("mode_command_topic", SUFFIX_SET_MODE),
    DerivationRule::new("temperature_state_topic", SUFFIX_TEMP),
    DerivationRule::new("mode_state_topic", SUFFIX_MODE),
];

/// Applies every rule to `attrs` and returns the keys that were synthesized.
///
/// Keys already present are never touched. The seed is only read when at
/// least one rule has something to synthesize, so a fully specified set
/// does not need `seed_key` at all.
pub fn apply_rules(
    kind: &'static str,
    attrs: &mut AttributeSet,
    rules: &[DerivationRule],
    seed_key: &str,
) -> Result<Vec<&'static str>> {
    let mut synthesized = Vec::new();
    for rule in rules {
        if attrs.contains(rule.key) {
            continue;
        }
        let seed = attrs.get_scalar(kind, seed_key)?;
        let topic = derived_topic(&seed, rule.suffix);
        debug!(kind, key = rule.key, topic = %topic, "Synthesized attribute");
        attrs.insert_if_absent(rule.key, topic);
        synthesized.push(rule.key);
    }
    Ok(synthesized)
}
