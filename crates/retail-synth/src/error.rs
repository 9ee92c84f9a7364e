use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty distribution: no item with positive weight")]
    EmptyDistribution,
    #[error("empty catalog: {0}")]
    EmptyCatalog(String),
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type SynthResult<T> = Result<T, SynthError>;
