//! Logger builder implementation

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};
use crate::writer;

/// Subscriber stack the format layer sits on
type Filtered = Layered<EnvFilter, Registry>;

/// Boxed format layer, erased across the three output formats
type FmtLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;

/// Shared toggles for every `fmt` layer variant, then boxed.
macro_rules! finish_fmt_layer {
    ($layer:expr, $display:expr, $writer:expr) => {{
        let layer = $layer
            .with_writer($writer)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
            .with_thread_names($display.thread_names);

        if $display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        }
    }};
}

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the root span entered
///
/// Dropping the guard exits the root span; the global subscriber itself stays
/// installed for the rest of the process.
#[must_use = "dropping the guard exits the root span"]
pub struct LoggerGuard {
    root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerGuard {
    /// Guard that holds nothing, returned when a subscriber was already present
    pub fn noop() -> Self {
        Self { root_span: None }
    }

    /// Whether this guard keeps a root span entered
    pub fn has_root_span(&self) -> bool {
        self.root_span.is_some()
    }
}

impl std::fmt::Debug for LoggerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerGuard")
            .field("root_span", &self.has_root_span())
            .finish()
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Borrow the configuration this builder will install
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the filter directive without installing anything
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::filter(&self.config.level, e.to_string()))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the filter string cannot be parsed
    /// - a global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let writer = writer::make_writer(self.config.writer);
        let display = &self.config.display;

        let fmt_layer: FmtLayer = match self.config.format {
            Format::Pretty => {
                finish_fmt_layer!(tracing_subscriber::fmt::layer().pretty(), display, writer)
            }
            Format::Compact => {
                finish_fmt_layer!(tracing_subscriber::fmt::layer().compact(), display, writer)
            }
            Format::Json => finish_fmt_layer!(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .flatten_event(display.flatten),
                display,
                writer
            ),
        };

        Registry::default()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        let fields = &self.config.fields;
        let root_span = if fields.is_empty() {
            None
        } else {
            let root = tracing::info_span!(
                "app",
                service = fields.service.as_deref().unwrap_or(""),
                env = fields.env.as_deref().unwrap_or(""),
                version = fields.version.as_deref().unwrap_or("")
            );
            Some(root.entered())
        };

        Ok(LoggerGuard { root_span })
    }
}
