//! Export collaborator error model.

use thiserror::Error;

/// Export operation error.
///
/// Collaborator failures are surfaced to the caller with context; nothing in
/// this layer retries.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The PDF backend failed to produce an artifact.
    #[error("pdf generation failed: {0}")]
    Pdf(String),

    /// The mail transport failed to dispatch the message.
    #[error("email delivery failed: {0}")]
    Delivery(String),
}
