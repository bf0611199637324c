//! CLI logging initialization
//!
//! Built on `tracing-subscriber`. Logs always go to stderr: stdout carries
//! the concatenated data.

use crate::config::{LogConfig, DEFAULT_FILTER};
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// One line per event, no timestamps
    Compact,
    /// JSON lines for tool integration
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<LogFormat> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(log_config: &LogConfig) {
    let filter =
        EnvFilter::try_new(&log_config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = create_format_layer(log_config.format, io::stderr).with_filter(filter);

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}
