//! Tracing subscriber initialisation for the server binary.

use std::path::PathBuf;
use std::str::FromStr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::error::{Result, SeedError};

/// Output format for logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonCompact,
}

impl FromStr for OutputFormat {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-compact" => Ok(Self::JsonCompact),
            other => Err(SeedError::ConfigurationError(format!(
                "unknown log format '{other}' (expected text, json or json-compact)"
            ))),
        }
    }
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Write logs to this file instead of stdout.
    pub log_file: Option<PathBuf>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
            log_file: None,
        }
    }
}

impl SubscriberConfig {
    /// Verbose text output, handy while developing.
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Default::default()
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let log_level = tracing::Level::from_str(&settings.log_level).map_err(|_| {
            SeedError::ConfigurationError(format!("unknown log level '{}'", settings.log_level))
        })?;
        Ok(Self {
            log_level,
            output_format: settings.log_format.parse()?,
            log_file: settings.log_file.clone(),
        })
    }

    fn filter(&self) -> EnvFilter {
        let level = self.log_level.as_str().to_ascii_lowercase();
        EnvFilter::new(format!("worldseed={level},worldseed_server={level}"))
    }
}

/// Install the global subscriber.
///
/// Returns the appender guard when logging to a file; keep it alive for the
/// lifetime of the process. Calling this twice is not an error.
pub fn init_subscriber(config: SubscriberConfig) -> Result<Option<WorkerGuard>> {
    let (writer, guard) = match &config.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path.file_name().ok_or_else(|| {
                SeedError::ConfigurationError(format!(
                    "log file '{}' has no file name",
                    path.display()
                ))
            })?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, Some(guard))
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
            (writer, Some(guard))
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(writer)
        .with_target(true);

    let init_result = match config.output_format {
        OutputFormat::Json => builder.json().try_init(),
        OutputFormat::JsonCompact => builder.json().flatten_event(true).try_init(),
        OutputFormat::Text => builder.with_ansi(config.log_file.is_none()).try_init(),
    };

    match init_result {
        Ok(()) => Ok(guard),
        Err(e) => {
            let error_msg = e.to_string();
            if error_msg.contains("global default trace dispatcher has already been set") {
                Ok(None)
            } else {
                Err(SeedError::ConfigurationError(format!(
                    "Failed to initialize tracing: {e}"
                )))
            }
        }
    }
}
