//! Typed error enum for the storage layer.

use std::path::PathBuf;

use relief_core::IngestError;
use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No connection could be checked out of the pool.
    #[error("connection pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQL or `SQLite` engine failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A batch of CSV rows could not be parsed; the batch was rolled back.
    #[error("ingest: {0}")]
    Ingest(#[from] IngestError),

    /// The seed file could not be opened.
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Whether this error came from malformed input rather than the database.
    pub const fn is_ingest(&self) -> bool {
        matches!(self, Self::Ingest(_))
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
