//! Error types for pay-core

use thiserror::Error;

/// Result type alias for pay-core operations
pub type Result<T> = std::result::Result<T, PayError>;

/// Errors at the tool dispatch boundary.
///
/// The tool operations themselves report every business failure (bad
/// amount, unknown card, unsupported merchant) as plain text in their
/// return value. `PayError` only covers malformed invocations that never
/// reach an operation.
#[derive(Error, Debug)]
pub enum PayError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PayError {
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
