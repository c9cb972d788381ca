//! Command-line and environment loading.
//!
//! Every setting is a long flag backed by a `GITLAB_*` variable. An explicit
//! flag wins over the variable, and the variable wins over the default.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args};
use tracing::debug;

use crate::schema::{LogConfig, LogLevel, StartupConfig, ToolsetSelection};

/// Prefix shared by every environment variable the loader reads.
pub const ENV_PREFIX: &str = "GITLAB_";

/// Toolset list, `all` or comma-joined names.
pub const TOOLSETS: &str = "GITLAB_TOOLSETS";
/// Global read-only flag.
pub const READ_ONLY: &str = "GITLAB_READ_ONLY";
/// On-demand toolset publication.
pub const DYNAMIC_TOOLSETS: &str = "GITLAB_DYNAMIC_TOOLSETS";
/// Log verbosity.
pub const LOG_LEVEL: &str = "GITLAB_LOG_LEVEL";
/// Log file path.
pub const LOG_FILE: &str = "GITLAB_LOG_FILE";

/// Startup settings as parsed from flags and the environment.
///
/// Flatten this into a binary's parser and call [`StartupArgs::into_config`].
/// Boolean switches accept `--read-only` alone or an explicit value such as
/// `--read-only false`, using the spellings of [`BoolishValueParser`].
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct StartupArgs {
    /// Comma-separated toolsets to enable, or `all`
    #[arg(long, env = TOOLSETS, default_value_t)]
    pub toolsets: ToolsetSelection,

    /// Withhold every write tool
    #[arg(
        long,
        env = READ_ONLY,
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        default_value = "false"
    )]
    pub read_only: bool,

    /// Expose only the discovery tools and enable toolsets on demand
    #[arg(
        long,
        env = DYNAMIC_TOOLSETS,
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        default_value = "false"
    )]
    pub dynamic_toolsets: bool,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(long, env = LOG_LEVEL, default_value_t)]
    pub log_level: LogLevel,

    /// Append logs to this file instead of stderr
    #[arg(long, env = LOG_FILE)]
    pub log_file: Option<PathBuf>,
}

impl StartupArgs {
    /// Converts the parsed arguments into the startup configuration.
    #[must_use]
    pub fn into_config(self) -> StartupConfig {
        let config = StartupConfig {
            toolsets: self.toolsets,
            read_only: self.read_only,
            dynamic_toolsets: self.dynamic_toolsets,
            log: LogConfig {
                level: self.log_level,
                file: self.log_file,
            },
        };
        debug!(
            toolsets = %config.toolsets,
            read_only = config.read_only,
            dynamic_toolsets = config.dynamic_toolsets,
            "loaded startup configuration"
        );
        config
    }
}
