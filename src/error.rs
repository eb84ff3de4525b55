//! Error handling for the application

use crate::config::ConfigError;
use crate::pricing::ValidationError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(e) => {
                tracing::warn!(error_type = e.error_type(), "Quote rejected: {}", e);
                2
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {}", e);
                1
            }
            AppError::Json(e) => {
                tracing::error!("Request decoding error: {}", e);
                1
            }
            AppError::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                1
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::from(ValidationError::EmptyItems).exit_code(), 2);

        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(AppError::from(err).exit_code(), 1);
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = AppError::from(ValidationError::MissingItemName(4));
        assert_eq!(err.to_string(), "Validation error: items[4].name is required");
    }
}
