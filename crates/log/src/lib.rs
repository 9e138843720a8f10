//! # rubyx-log
//!
//! Logging setup shared by the rubyx crates: one call installs a
//! `tracing-subscriber` stack configured from code, presets or the
//! environment.
//!
//! ```no_run
//! use rubyx_log::prelude::*;
//!
//! fn main() -> LogResult<()> {
//!     let _guard = rubyx_log::auto_init()?;
//!
//!     info!(items = 3, "tour starting");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment
//!
//! | variable | effect |
//! |----------|--------|
//! | `RUBYX_LOG`, then `RUST_LOG` | filter directive |
//! | `RUBYX_LOG_FORMAT` | `pretty`, `compact` or `json` |
//! | `RUBYX_LOG_TIME`, `RUBYX_LOG_SOURCE`, `RUBYX_LOG_COLORS` | display toggles |
//! | `RUBYX_SERVICE`, `RUBYX_ENV`, `RUBYX_VERSION` | root span fields |

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;
mod macros;
mod writer;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Fields, Format, Level, WriterConfig};
pub use error::{LogError, LogResult};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Level, LogResult, auto_init, debug, error, info, init, init_with, instrument, span,
        trace, warn,
    };

    pub use tracing::{Span, field};
}

pub use tracing::{debug, error, info, instrument, span, trace, warn};

/// Pick a configuration from the environment and build type, then install it
///
/// `RUBYX_LOG`/`RUST_LOG` select [`Config::from_env`]; otherwise debug builds
/// get [`Config::development`] and release builds [`Config::production`].
/// When a global subscriber is already present a no-op guard is returned.
pub fn auto_init() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }

    if std::env::var("RUBYX_LOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Install the test configuration once; later calls get a no-op guard
pub fn init_test() -> LoggerGuard {
    if tracing::dispatcher::has_been_set() {
        return LoggerGuard::noop();
    }
    init_with(Config::test()).unwrap_or_else(|_| LoggerGuard::noop())
}
