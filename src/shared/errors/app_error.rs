use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl AppError {
    /// The bare message, without the category prefix used by `Display`
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(m)
            | AppError::Unauthorized(m)
            | AppError::BackendError(m)
            | AppError::NetworkError(m)
            | AppError::RateLimitError(m)
            | AppError::SerializationError(m)
            | AppError::RenderError(m)
            | AppError::ConfigError(m)
            | AppError::IoError(m) => m,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::NetworkError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::NetworkError("Failed to connect to the onion backend".to_string())
        } else if let Some(status) = err.status() {
            AppError::NetworkError(format!("HTTP {}", status))
        } else if err.is_decode() {
            AppError::SerializationError(format!("Malformed backend response: {}", err))
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::RenderError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
