//! Error types for Story Spark.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Primary error type for all generation operations.
#[derive(Error, Debug)]
pub enum SparkError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Incomplete response: {0}")]
    Incomplete(String),
}

/// Broad error classes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    Network,
    Timeout,
    Api,
    Validation,
    Unknown,
}

impl ErrorKind {
    /// Fixed message shown to end users for this class of error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network => {
                "Network error. Please check your internet connection and try again."
            }
            Self::Timeout => "The operation timed out. Please try again later.",
            Self::Api => "The AI service is currently unavailable. Please try again later.",
            Self::Validation => "Invalid input. Please check your input and try again.",
            Self::Unknown => "An unexpected error occurred. Please try again later.",
        }
    }
}

impl SparkError {
    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error.
    ///
    /// Rules apply in order: timeout signals win over transport errors,
    /// transport errors win over status-code ranges.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Network(e) if e.is_timeout() => ErrorKind::Timeout,
            Self::Network(_) => ErrorKind::Network,
            Self::InvalidInput(_) => ErrorKind::Validation,
            Self::Api { status, .. } => match status {
                400..=499 => ErrorKind::Validation,
                500.. => ErrorKind::Api,
                _ => ErrorKind::Unknown,
            },
            Self::Configuration(_) | Self::Serialization(_) | Self::Incomplete(_) => {
                ErrorKind::Unknown
            }
        }
    }

    /// Whether this error is worth retrying.
    ///
    /// Validation failures are terminal on first occurrence; every other
    /// class is transient up to the attempt limit.
    pub fn is_retryable(&self) -> bool {
        self.kind() != ErrorKind::Validation
    }

    /// User-facing message for this error's class.
    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SparkError>;
