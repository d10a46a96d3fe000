use thiserror::Error;

/// Errors from object storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Building the presigning configuration failed.
    #[error("Presigning failed: {0}")]
    Presign(String),

    /// A request to the storage backend failed.
    #[error("Storage request failed: {0}")]
    Request(String),
}
