//! Storage error types.

/// Errors produced by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but is not valid JSON.
    #[error("storage snapshot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
