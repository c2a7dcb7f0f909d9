use thiserror::Error;

use crate::validate::Violations;

/// Error type for the model layer.
///
/// Building a shape never fails except when a keyed collection would
/// silently overwrite an entry. Everything else here comes from the
/// wire boundary (encoding/decoding) or from an explicit validation call.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A key was inserted into a keyed collection that already holds it.
    #[error("Duplicated key ({key}) provided; the existing entry was kept")]
    DuplicateKey { key: String },

    /// A shape could not be serialized.
    #[error("Encoding error: {0}")]
    Encoding(#[source] serde_json::Error),

    /// A payload could not be decoded, with the raw body for debugging.
    #[error("Decoding error: {message}")]
    Decoding { message: String, body: String },

    /// No operation with this name exists in the registry.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Documented constraints were violated.
    #[error("Validation failed: {0}")]
    Validation(Violations),
}

impl ModelError {
    /// Returns `true` if the failure happened while reading a payload.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding { .. })
    }
}
