use thiserror::Error;

use crate::json_type::JsonType;

// Error message prefix
const MSG_FAILED_TO_PREFIX: &str = "Failed to";

/// Result type for the `wirefield` library
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Errors raised by the record codec
///
/// Type mismatches inside a document are not errors: they are reported to the
/// codec's `ParseExceptionHandler` and the field keeps its default.
#[derive(Debug, Error)]
pub enum Error {
    /// Two fields of one record resolve to the same wire name
    #[error("Record `{type_name}` maps more than one field to the wire name `{wire_name}`")]
    DuplicateWireName {
        /// Record whose fields collide
        type_name: &'static str,
        /// The colliding key
        wire_name: String,
    },

    /// Catch-all for failures outside the document itself
    #[error("{0}")]
    General(String),

    /// The input text is not valid JSON
    #[error("Invalid JSON: {0}")]
    JsonParse(String),

    /// `serde_json` could not print the encoded value
    #[error("JSON serialization failed: {0}")]
    Serialization(String),

    /// The top-level value handed to the decoder is not an object
    #[error("Expected a JSON object for `{type_name}`, found {found}")]
    UnexpectedRoot {
        /// Record that was requested
        type_name: &'static str,
        /// What the document held instead
        found:     JsonType,
    },
}

impl Error {
    /// Create a "Failed to X" error
    #[must_use]
    pub fn failed_to(action: &str, details: impl std::fmt::Display) -> Self {
        Self::General(format!("{MSG_FAILED_TO_PREFIX} {action}: {details}"))
    }

    /// Create an "Invalid JSON" error for the record being decoded
    #[must_use]
    pub fn invalid_json(type_name: &str, details: impl std::fmt::Display) -> Self {
        Self::JsonParse(format!("cannot decode `{type_name}`: {details}"))
    }

    /// Create a serialization error for the record being encoded
    #[must_use]
    pub fn serialization_failed(type_name: &str, details: impl std::fmt::Display) -> Self {
        Self::Serialization(format!(
            "{MSG_FAILED_TO_PREFIX} serialize `{type_name}`: {details}"
        ))
    }
}
