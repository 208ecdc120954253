//! Typed error enum for the service layer.

use relief_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, pool, malformed batch).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A blocking storage task panicked or was cancelled.
    #[error("blocking task: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl ServiceError {
    /// Whether this error was caused by an unparseable upload.
    pub const fn is_ingest(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_ingest())
    }
}
