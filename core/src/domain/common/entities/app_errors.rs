use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Could not extract readable text from the image")]
    TextExtractionFailed,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error")]
    InternalServerError,
}
