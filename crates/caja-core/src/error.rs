use std::io;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Entry not found: {0}")]
    NotFound(Uuid),
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<io::Error> for CoreError {
    fn from(err: io::Error) -> Self {
        CoreError::Persistence(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
