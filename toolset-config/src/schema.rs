//! Strongly typed configuration schemas.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use toolset_registry::{ALL_TOOLSETS, EnableRequest};

use crate::error::{ConfigError, ConfigResult};

/// Toolsets requested at startup, as written by the operator.
///
/// Parsed from a comma-joined list. Segments are trimmed and empty segments
/// dropped; an entirely blank string selects every toolset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ToolsetSelection(Vec<String>);

impl ToolsetSelection {
    /// Selects every toolset.
    #[must_use]
    pub fn all() -> Self {
        Self(vec![ALL_TOOLSETS.to_owned()])
    }

    /// Selects the listed toolsets.
    #[must_use]
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Parses a comma-joined list.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::all();
        }
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Returns the raw names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Converts the selection into a registry enable request.
    #[must_use]
    pub fn to_request(&self) -> EnableRequest {
        EnableRequest::from_names(self.0.iter().cloned())
    }
}

impl Default for ToolsetSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for ToolsetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl From<String> for ToolsetSelection {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ToolsetSelection> for String {
    fn from(value: ToolsetSelection) -> Self {
        value.to_string()
    }
}

/// Verbosity threshold for log output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything.
    Trace,
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Recoverable problems.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Returns the directive understood by `tracing` filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidLogLevel {
                value: s.to_owned(),
            }),
        }
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Verbosity threshold.
    #[serde(default)]
    pub level: LogLevel,
    /// Append logs to this file instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Settings consumed once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StartupConfig {
    /// Toolsets to enable.
    #[serde(default)]
    pub toolsets: ToolsetSelection,
    /// Strip write tools from every toolset.
    #[serde(default)]
    pub read_only: bool,
    /// Publish toolsets on demand through discovery tools.
    #[serde(default)]
    pub dynamic_toolsets: bool,
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("all", EnableRequest::All)]
    #[case("", EnableRequest::All)]
    #[case("  ", EnableRequest::All)]
    #[case(" all ", EnableRequest::All)]
    #[case("issues", EnableRequest::Named(vec!["issues".into()]))]
    #[case("projects, issues,,merge_requests ", EnableRequest::Named(vec!["projects".into(), "issues".into(), "merge_requests".into()]))]
    #[case("all,issues", EnableRequest::Named(vec!["all".into(), "issues".into()]))]
    #[case(",", EnableRequest::Named(vec![]))]
    fn selection_parses_into_requests(#[case] raw: &str, #[case] expected: EnableRequest) {
        assert_eq!(ToolsetSelection::parse(raw).to_request(), expected);
    }

    #[test]
    fn log_level_parsing() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(
            "loud".parse::<LogLevel>().unwrap_err(),
            ConfigError::InvalidLogLevel {
                value: "loud".into()
            }
        );
    }

    #[test]
    fn defaults_enable_everything_read_write() {
        let config = StartupConfig::default();
        assert_eq!(config.toolsets.to_request(), EnableRequest::All);
        assert!(!config.read_only);
        assert!(!config.dynamic_toolsets);
        assert_eq!(config.log.level, LogLevel::Info);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn deserializes_kebab_case_document() {
        let config: StartupConfig = serde_json::from_value(serde_json::json!({
            "toolsets": "issues,users",
            "read-only": true,
            "log": { "level": "debug", "file": "/tmp/gitlab-mcp.log" }
        }))
        .unwrap();

        assert_eq!(config.toolsets.names(), ["issues", "users"]);
        assert!(config.read_only);
        assert!(!config.dynamic_toolsets);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/gitlab-mcp.log")));

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["toolsets"], "issues,users");
    }
}
