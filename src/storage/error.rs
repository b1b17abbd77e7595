use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Table not found: {0}")]
    TableNotFound(String),
    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
