use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Empty candidate pool: {0}")]
    EmptyPool(String),

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
