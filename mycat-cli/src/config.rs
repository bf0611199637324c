//! CLI configuration
//!
//! Logging settings, read from the environment once at startup. The
//! behaviour of the concatenation itself comes only from flags.

use crate::logging::LogFormat;

/// Variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "MYCAT_LOG";
/// Variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "MYCAT_LOG_FORMAT";
/// Filter used when `MYCAT_LOG` is unset or empty.
pub const DEFAULT_FILTER: &str = "warn";

/// CLI logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Read from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary variable lookup. Unknown formats fall
    /// back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV).and_then(|s| LogFormat::parse(&s)) {
            config.format = format;
        }

        config
    }
}
