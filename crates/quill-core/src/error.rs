//! Error types for the questionnaire engine library.
//!
//! Malformed template *content* (unparsable option encodings, dangling
//! section targets, answers for deleted questions) is absorbed inside the
//! engine with a safe default and never surfaces here. [`EngineError`]
//! covers the boundaries instead: whole-document serialization and
//! collaborator failures.

use thiserror::Error;

/// Comprehensive error type for engine boundary operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Serialization/deserialization errors for whole documents
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Failures reported by an external persistence or lookup collaborator
    #[error("Collaborator error: {message}")]
    Collaborator { message: String },
}

impl EngineError {
    /// Creates a collaborator error with a message.
    pub fn collaborator(message: impl Into<String>) -> Self {
        EngineError::Collaborator {
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
