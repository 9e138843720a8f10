//! Value error types

use thiserror::Error;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Errors raised by the wrapper types
///
/// Absence (`first` on an empty array, `get` on a missing key) is never an
/// error; only operations that have no sensible fallback return this type.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Hash key not found by `fetch`
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// Size limit exceeded
    #[error("{limit} exceeded: {actual} > {max}")]
    LimitExceeded {
        limit: String,
        max: usize,
        actual: usize,
    },

    /// Numeric overflow
    #[error("Numeric overflow in {operation}: value {value}")]
    Overflow { operation: String, value: String },

    /// Text could not be parsed into a numeric type
    #[error("Invalid {format_type} format: {input:?}")]
    ParseError { format_type: String, input: String },

    /// Context information (nested error with additional info)
    #[error("{message}: {source}")]
    WithContext {
        message: String,
        #[source]
        source: Box<ValueError>,
    },
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValueError {
    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded(limit: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::LimitExceeded {
            limit: limit.into(),
            max,
            actual,
        }
    }

    /// Create a numeric overflow error
    pub fn overflow(operation: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
            value: value.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(format_type: impl Into<String>, input: impl Into<String>) -> Self {
        Self::ParseError {
            format_type: format_type.into(),
            input: input.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, message: impl Into<String>) -> Self {
        Self::WithContext {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Add key context
    pub fn at_key(self, key: impl Into<String>) -> Self {
        self.with_context(format!("at key: '{}'", key.into()))
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl ValueError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::KeyNotFound { .. } => "VALUE_KEY_NOT_FOUND",
            Self::LimitExceeded { .. } => "VALUE_LIMIT_EXCEEDED",
            Self::Overflow { .. } => "VALUE_OVERFLOW",
            Self::ParseError { .. } => "VALUE_PARSE_ERROR",
            Self::WithContext { source, .. } => source.code(),
        }
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::WithContext { source, .. } => source.is_client_error(),
            Self::KeyNotFound { .. }
            | Self::LimitExceeded { .. }
            | Self::Overflow { .. }
            | Self::ParseError { .. } => true,
        }
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for value operations
pub type ValueResult<T> = Result<T, ValueError>;

/// Extension trait for attaching context to value results
pub trait ValueResultExt<T> {
    /// Wrap the error with a lazily built message
    fn with_value_context<S, F>(self, f: F) -> ValueResult<T>
    where
        S: Into<String>,
        F: FnOnce() -> S;
}

impl<T> ValueResultExt<T> for ValueResult<T> {
    fn with_value_context<S, F>(self, f: F) -> ValueResult<T>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found() {
        let err = ValueError::key_not_found("\"missing\"");
        assert_eq!(err.code(), "VALUE_KEY_NOT_FOUND");
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Key not found: \"missing\"");
    }

    #[test]
    fn test_limit_exceeded() {
        let err = ValueError::limit_exceeded("max_array_length", 1000, 1500);
        assert!(err.to_string().contains("1000"));
        assert!(err.to_string().contains("1500"));
        assert_eq!(err.code(), "VALUE_LIMIT_EXCEEDED");
    }

    #[test]
    fn test_with_context_keeps_code() {
        let err = ValueError::overflow("factorial", "21").at_key("n");

        assert_eq!(err.code(), "VALUE_OVERFLOW");
        let msg = err.to_string();
        assert!(msg.contains("at key: 'n'"));
        assert!(msg.contains("factorial"));
    }

    #[test]
    fn test_result_ext() {
        let result: ValueResult<i64> = Err(ValueError::parse_error("integer", "abc"));
        let err = result.with_value_context(|| "reading port").unwrap_err();
        assert!(err.to_string().starts_with("reading port: Invalid integer format"));
        assert_eq!(err.code(), "VALUE_PARSE_ERROR");
    }
}
