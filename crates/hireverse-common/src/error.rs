use thiserror::Error;

#[derive(Debug, Error)]
pub enum HireverseError {
    #[error("Invalid prep level: {0}")]
    InvalidPrepLevel(String),

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HireverseError>;
