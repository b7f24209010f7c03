use core_types::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read history file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse history file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("History failed validation: {0}")]
    Validation(#[from] ValidationError),
}
