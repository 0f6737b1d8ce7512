//! Storage collaborator error model.

use thiserror::Error;

/// Storage operation error.
///
/// Infrastructure failures only; domain validation never happens in this
/// layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A document could not be serialized or deserialized.
    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend rejected or could not complete an operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
