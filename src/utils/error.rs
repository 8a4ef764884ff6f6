use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Assertion failed in step '{step}': {message}")]
    AssertionError { step: String, message: String },

    #[error("Missing flow state: {field}")]
    MissingStateError { field: String },
}

pub type Result<T> = std::result::Result<T, CheckError>;
