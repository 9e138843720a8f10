//! Error types for logger setup

use thiserror::Error;

/// Errors raised while building or installing a logger
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The level/filter directive could not be parsed
    #[error("Invalid filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// A global subscriber is already installed for this process
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),

    /// Configuration is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LogError {
    /// Create a filter parsing error
    pub fn filter(filter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the caller supplied something invalid
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Filter { .. } | Self::Config(_))
    }
}

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;
