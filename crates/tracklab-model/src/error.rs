use thiserror::Error;

#[derive(Debug, Error)]
pub enum TracklabError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, TracklabError>;
