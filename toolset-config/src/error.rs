use thiserror::Error;

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while resolving startup configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The log level was not one of trace, debug, info, warn, error.
    #[error("invalid log level `{value}`")]
    InvalidLogLevel {
        /// Raw value.
        value: String,
    },
}
