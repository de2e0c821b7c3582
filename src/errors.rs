use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
