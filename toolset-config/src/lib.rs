//! Startup configuration for the toolset registry.
//!
//! The owning process resolves configuration once, before the toolset group is
//! built, and hands the result to the catalog and telemetry setup.

#![warn(missing_docs, clippy::pedantic)]

mod error;
pub mod loader;
pub mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::StartupArgs;
pub use schema::{LogConfig, LogLevel, StartupConfig, ToolsetSelection};
