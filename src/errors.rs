use thiserror::Error;

/// Error type that captures storage and configuration failures.
#[derive(Debug, Error)]
pub enum UpkeepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, UpkeepError>;
