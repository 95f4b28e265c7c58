//! Error types and handling for the travel month service

use thiserror::Error;

/// Main error type for the travel month service
#[derive(Error, Debug)]
pub enum TravelError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Knowledge API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Malformed upstream payloads
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Transport-level HTTP failures
    #[error("HTTP error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// Failures raised inside the outbound middleware stack
    #[error("HTTP middleware error: {source}")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelError {
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

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// True when the failure originated at the knowledge API or on the way to it
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::Parse { .. } | Self::Http { .. } | Self::Middleware { .. }
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            TravelError::Api { .. } | TravelError::Http { .. } | TravelError::Middleware { .. } => {
                "Unable to reach the attraction service. Please try again later.".to_string()
            }
            TravelError::Parse { .. } => {
                "The attraction service returned data we could not read.".to_string()
            }
            TravelError::Validation { message } => format!("Invalid input: {message}"),
            TravelError::Io { .. } => "File operation failed. Please check file permissions.".to_string(),
        }
    }
}
