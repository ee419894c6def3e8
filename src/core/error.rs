use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Inconsistent reference data: {0}")]
    ReferenceData(String),

    #[error("Value range exhausted: {0}")]
    RangeExhausted(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Crate-wide Result alias
pub type AppResult<T> = Result<T, AppError>;
