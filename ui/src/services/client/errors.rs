use thiserror::Error;

use super::types::ExecutionFailure;

/// Errors raised before an execution request reaches the network
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The page base URL could not be determined or parsed
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The endpoint path did not resolve against the base URL
    #[error("Failed to resolve endpoint '{path}': {reason}")]
    EndpointResolution { path: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("HTTP client setup failed: {message}")]
    ClientSetup { message: String },

    /// Request payload serialization failed
    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::SerializationError {
            message: err.to_string(),
        }
    }
}

impl From<ClientError> for ExecutionFailure {
    fn from(err: ClientError) -> Self {
        ExecutionFailure::network(err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
