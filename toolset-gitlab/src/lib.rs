//! GitLab toolset catalog.
//!
//! Defines the toolsets a GitLab MCP server exposes and builds a
//! [`ToolsetGroup`] from startup configuration. Every tool forwards to a
//! [`GitLabBackend`], which owns the actual API traffic.

#![warn(missing_docs, clippy::pedantic)]

pub mod backend;
pub mod catalog;
mod error;
mod handler;

use std::sync::Arc;

use toolset_config::StartupConfig;
use toolset_registry::{ALL_TOOLSETS, ToolsetGroup};
use tracing::info;

pub use backend::{BackendError, BackendResult, GitLabBackend, OfflineBackend};
pub use catalog::toolset_names;
pub use error::{CatalogError, CatalogResult};
pub use handler::BackendTool;

/// Toolsets enabled when the operator selects nothing.
pub const DEFAULT_TOOLSETS: &[&str] = &[ALL_TOOLSETS];

/// Builds the GitLab toolset group described by `config`.
///
/// All catalog toolsets are added in a fixed order. In a read-only
/// configuration their write tools are withheld. Unless dynamic toolsets are
/// requested, the configured selection is enabled immediately; in dynamic
/// mode every toolset starts disabled and is enabled on demand.
///
/// # Errors
///
/// Returns [`CatalogError::Enable`] when the configured selection names an
/// unknown toolset or is empty.
pub fn init_toolsets(config: &StartupConfig, backend: Arc<dyn GitLabBackend>) -> CatalogResult<ToolsetGroup> {
    let group = ToolsetGroup::new(config.read_only);
    for spec in catalog::CATALOG {
        group.add_toolset(spec.build(&backend)?);
    }

    if config.dynamic_toolsets {
        info!("dynamic toolset mode enabled, toolsets will be loaded on demand");
    } else {
        group.enable_toolsets(&config.toolsets.to_request())?;
    }

    info!(
        toolsets = group.len(),
        read_only = config.read_only,
        dynamic = config.dynamic_toolsets,
        "initialised GitLab toolsets"
    );
    Ok(group)
}
