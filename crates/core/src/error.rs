use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// A key required at this point was never supplied and could not be derived.
    #[error("{kind} entity is missing required attribute `{key}`")]
    MissingAttribute { kind: &'static str, key: String },

    /// A key is present but its value cannot be used where it is needed.
    #[error("{kind} entity attribute `{key}` is invalid: {reason}")]
    InvalidAttribute {
        kind: &'static str,
        key: String,
        reason: String,
    },

    /// No entity kind carries this type tag.
    #[error("no entity kind is registered for type tag `{tag}`")]
    ContractViolation { tag: String },

    #[error("invalid command payload on `{topic}`: {reason}")]
    InvalidCommand { topic: String, reason: String },
}

impl EntityError {
    pub(crate) fn missing(kind: &'static str, key: impl Into<String>) -> Self {
        EntityError::MissingAttribute { kind, key: key.into() }
    }

    pub(crate) fn invalid(kind: &'static str, key: impl Into<String>, reason: impl Into<String>) -> Self {
        EntityError::InvalidAttribute {
            kind,
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// True for failures caused by an absent key.
    pub fn is_missing_attribute(&self) -> bool {
        matches!(self, EntityError::MissingAttribute { .. })
    }
}

pub type Result<T, E = EntityError> = std::result::Result<T, E>;
