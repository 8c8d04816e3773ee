use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyspaceError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Combination space of {0} candidates exceeds the cap of {1}")]
    SpaceExceeded(u128, usize),

    #[error("State Lock Error: {0}")]
    Lock(String),
}

pub type KsResult<T> = Result<T, KeyspaceError>;
