use std::path::PathBuf;

use serde::Deserialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const DEFAULT_LOG_DIR: &str = "./logs";
const DEFAULT_FILE_PREFIX: &str = "verba.log";

/// Logging setup.
///
/// Deserializable from the `logger` section of the service settings, or built
/// with the chained setters. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Rolling files are named `<file_prefix>.<date>`
    file_prefix: String,
    log_dir: PathBuf,
    /// chrono strftime
    time_format: String,
    /// `INFO`, `debug`, or any `EnvFilter` directive such as `verba_axum=debug`
    level: String,
    console: bool,
    file: bool,
    /// Number of rolled files kept on disk
    max_files: Option<usize>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            level: "INFO".to_string(),
            console: true,
            file: true,
            max_files: None,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn enable_console(mut self, enable: bool) -> Self {
        self.console = enable;
        self
    }

    pub fn enable_file(mut self, enable: bool) -> Self {
        self.file = enable;
        self
    }

    pub fn max_files(mut self, count: usize) -> Self {
        self.max_files = Some(count);
        self
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned guard alive until shutdown, dropping it flushes the
    /// file writer. Fails if a global subscriber is already installed.
    pub fn init(self) -> Result<Option<WorkerGuard>, TryInitError> {
        let console_layer = self.console.then(|| {
            fmt::layer()
                .with_timer(ChronoLocal::new(self.time_format.clone()))
                .with_writer(std::io::stdout)
                .with_filter(self.env_filter())
        });

        let (file_layer, guard) = match self.file_appender() {
            Some(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_timer(ChronoLocal::new(self.time_format.clone()))
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_filter(self.env_filter());
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.level.to_lowercase()))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn file_appender(&self) -> Option<RollingFileAppender> {
        if !self.file {
            return None;
        }

        let mut builder = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(&self.file_prefix);
        if let Some(max) = self.max_files {
            builder = builder.max_log_files(max.max(1));
        }

        builder
            .build(&self.log_dir)
            .inspect_err(|e| eprintln!("Failed to open log directory {}: {e}", self.log_dir.display()))
            .ok()
    }
}
