//! Application-level error model.

use billfold_export::ExportError;
use billfold_store::StoreError;
use thiserror::Error;

/// Failure of an application workflow.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested invoice does not exist.
    #[error("invoice not found: {0}")]
    NotFound(String),

    /// The storage collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The PDF or email collaborator failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
