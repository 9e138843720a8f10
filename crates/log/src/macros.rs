//! Convenience macros for structured logging

/// Log an error at `error` level and hand it back
///
/// ```
/// let err = rubyx_log::log_error!(std::io::Error::other("boom"), "while reading");
/// assert_eq!(err.to_string(), "boom");
/// ```
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let e = $err;
        $crate::error!(error = %e);
        e
    }};
    ($err:expr, $($arg:tt)*) => {{
        let e = $err;
        $crate::error!(error = %e, $($arg)*);
        e
    }};
}

/// Log an error at `debug` level and hand it back
#[macro_export]
macro_rules! log_debug_error {
    ($err:expr) => {{
        let e = $err;
        $crate::debug!(error = %e);
        e
    }};
}
