//! Structured tracing setup.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use toolset_config::{LogConfig, LogLevel};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the configured level.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log file could not be opened for appending.
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        /// Requested path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Neither the override nor the configured level formed a valid filter.
    #[error("invalid log filter: {source}")]
    Filter {
        /// Parser failure.
        #[from]
        source: ParseError,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialised: {source}")]
    Init {
        /// Registry failure.
        #[from]
        source: TryInitError,
    },
}

/// Builds the filter for `level`, letting `RUST_LOG` take precedence.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when no valid filter can be formed.
pub fn build_filter(level: LogLevel) -> Result<EnvFilter, TelemetryError> {
    let from_env = std::env::var(FILTER_ENV).ok();
    filter_from(from_env.as_deref(), level)
}

fn filter_from(directives: Option<&str>, level: LogLevel) -> Result<EnvFilter, TelemetryError> {
    let overridden = directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok());
    match overridden {
        Some(filter) => Ok(filter),
        None => Ok(EnvFilter::try_new(level.as_str())?),
    }
}

fn open_append(path: &Path) -> Result<File, TelemetryError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TelemetryError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Installs the global subscriber described by `config`.
///
/// Output goes to the configured file when present and to stderr otherwise;
/// stdout is never written.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the log file cannot be opened, the filter
/// is invalid, or a subscriber was already installed.
pub fn init(config: &LogConfig) -> Result<(), TelemetryError> {
    let (writer, ansi) = match &config.file {
        Some(path) => (BoxMakeWriter::new(Mutex::new(open_append(path)?)), false),
        None => (BoxMakeWriter::new(io::stderr), true),
    };
    let filter = build_filter(config.level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true),
        )
        .try_init()?;

    tracing::debug!(level = %config.level, file = ?config.file, "tracing initialised");
    Ok(())
}
