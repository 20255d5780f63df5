use poolaccess_core::EntityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error(transparent)]
    Entity(#[from] EntityError),
    #[error("failed to serialize discovery payload for {topic}")]
    Serialize {
        topic: String,
        #[source]
        source: serde_json::Error,
    },
}
