//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the allocator and
//! its binary.

use crate::types::config::CliArgs;
use std::io;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Error returned when the global subscriber cannot be installed
pub type LoggingError = Box<dyn std::error::Error + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting on the console
    pub json_format: bool,
    /// Log file directory; file logging is enabled when set
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_directory: None,
            log_file_prefix: "multilevel-parking".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable daily rolling file logging in `directory`
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Set log file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Whether log lines are also written to a file
    pub fn logs_to_file(&self) -> bool {
        self.log_directory.is_some()
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Some(filter) = &self.env_filter {
            return Ok(EnvFilter::try_new(filter)?);
        }

        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level))
        }))
    }

    /// Initialize the global tracing subscriber
    ///
    /// When file logging is enabled the returned guard must be kept alive for
    /// the lifetime of the program; dropping it flushes and stops the writer.
    pub fn init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = self.build_env_filter()?;
        let registry = Registry::default().with(env_filter);

        let console_json = self.json_format.then(|| {
            fmt::layer().json().with_writer(io::stderr).with_span_events(self.span_events())
        });
        let console_pretty = (!self.json_format).then(|| {
            fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events())
        });

        let guard = match &self.log_directory {
            Some(log_dir) => {
                // Files always get JSON so they can be parsed later
                let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
                let (file_writer, guard) = non_blocking(file_appender);
                let file_layer =
                    fmt::layer().json().with_writer(file_writer).with_span_events(self.span_events());

                registry.with(console_json).with(console_pretty).with(file_layer).try_init()?;
                Some(guard)
            }
            None => {
                registry.with(console_json).with(console_pretty).try_init()?;
                None
            }
        };

        info!(config = ?self, "Logging initialized successfully");
        Ok(guard)
    }

    /// Build the binary's logging configuration from its command line flags
    ///
    /// `--debug` wins over `--verbose`; without either only warnings are shown.
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = if args.debug {
            Self::new().with_level(Level::DEBUG).with_span_events()
        } else if args.verbose {
            Self::new().with_level(Level::INFO).with_span_events()
        } else {
            Self::new().with_level(Level::WARN)
        };

        if args.log_json {
            config = config.with_json_format();
        }
        if let Some(dir) = &args.log_dir {
            config = config.with_file_logging(dir.clone());
        }
        config
    }
}

/// Macro for creating performance measurement spans
#[macro_export]
macro_rules! perf_span {
    ($name:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::info_span!(
            $name,
            component = "performance",
            $($key = $value,)*
        )
    };
    ($name:expr) => {
        tracing::info_span!(
            $name,
            component = "performance",
        )
    };
}
