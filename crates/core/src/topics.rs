// Discovery topic layout and the topic suffixes derived from a state topic

use sha2::{Digest, Sha256};

pub const DEFAULT_DISCOVERY_PREFIX: &str = "homeassistant";

// Hex characters of the digest kept in lossy object ids
const DIGEST_LEN: usize = 8;

// Climate suffixes, appended to the entity's state_topic
pub const SUFFIX_SET_TEMP: &str = "/set_temp";
pub const SUFFIX_SET_MODE: &str = "/set_mode";
pub const SUFFIX_TEMP: &str = "/temp";
pub const SUFFIX_MODE: &str = "/mode";

// <prefix>/<component>/<node_id>/<object_id>/config
pub fn config_topic(prefix: &str, component: &str, node_id: &str, object_id: &str) -> String {
    format!("{}/{}/{}/{}/config", prefix, component, node_id, object_id)
}

pub fn unique_id(device_id: &str, object_id: &str) -> String {
    format!("{}_{}", device_id, object_id)
}

pub fn derived_topic(seed: &str, suffix: &str) -> String {
    format!("{}{}", seed, suffix)
}

// Discovery topic segments only allow [a-zA-Z0-9_-]. Topic-shaped ids made of
// those characters and '/' map one-to-one onto '_'-joined slugs; anything else
// loses information in the slug, so a short digest of the raw id is appended.
pub fn object_id_from(raw: &str) -> String {
    let slug: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let lossless = !raw.is_empty()
        && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '/');
    if lossless {
        return slug;
    }

    let mut hasher = Sha256::default();
    hasher.update(raw.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    let base = slug.trim_matches('_');
    let base = if base.is_empty() { "entity" } else { base };
    format!("{}_{}", base, &digest[..DIGEST_LEN])
}
