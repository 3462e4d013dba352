//! Error types for the translate lambdas

use thiserror::Error;

/// Result type alias using the core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while handling a request
#[derive(Error, Debug)]
pub enum Error {
    /// Request body is not valid JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// DynamoDB call failed
    #[error("Database error: {0}")]
    Database(String),

    /// Item could not be converted to or from DynamoDB attributes
    #[error("DynamoDB serialization error: {0}")]
    DynamoSerialization(String),

    /// SQS call failed
    #[error("Queue error: {0}")]
    Queue(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response could not be built
    #[error("Response error: {0}")]
    Http(#[from] lambda_http::http::Error),

    /// Invocation deadline passed before the external calls finished
    #[error("Invocation deadline exceeded")]
    Timeout,
}

impl Error {
    /// Returns the error code used in logs
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidBody(_) => "invalid_body",
            Error::Database(_) => "database_error",
            Error::DynamoSerialization(_) => "serialization_error",
            Error::Queue(_) => "queue_error",
            Error::Serialization(_) => "serialization_error",
            Error::Http(_) => "response_error",
            Error::Timeout => "timeout",
        }
    }

    /// Whether the caller is at fault. Only these become explicit 400 responses;
    /// everything else fails the invocation.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidBody(_))
    }
}
