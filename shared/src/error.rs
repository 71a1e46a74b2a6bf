//! Error types

use crate::model::RecordId;

/// A form field failed one of its validation rules
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Seed configuration could not be used
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid seed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate {kind} id {id} in seed configuration")]
    DuplicateId { kind: &'static str, id: RecordId },
}
