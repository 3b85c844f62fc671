//! Error types and handling for the `Angkor Guide` application

use thiserror::Error;

/// Main error type for the `Angkor Guide` application
#[derive(Error, Debug)]
pub enum GuideError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl GuideError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GuideError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            GuideError::Api { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            GuideError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            GuideError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            GuideError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = GuideError::config("missing config file");
        assert!(matches!(config_err, GuideError::Config { .. }));

        let api_err = GuideError::api("connection failed");
        assert!(matches!(api_err, GuideError::Api { .. }));

        let validation_err = GuideError::validation("invalid coordinates");
        assert!(matches!(validation_err, GuideError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = GuideError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = GuideError::api("test");
        assert!(api_err.user_message().contains("Unable to reach"));

        let validation_err = GuideError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let guide_err: GuideError = io_err.into();
        assert!(matches!(guide_err, GuideError::Io { .. }));
    }
}
