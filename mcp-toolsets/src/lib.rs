//! Toolset registry SDK facade for MCP servers.
//!
//! Depend on this crate via `cargo add mcp-toolsets`. The registry core is
//! always present; discovery, configuration, telemetry and the GitLab catalog
//! sit behind feature flags.

#![warn(missing_docs, clippy::pedantic)]

/// Validated names, identifiers and tool descriptors.
pub use toolset_primitives as primitives;

/// Tool handlers, requests and results.
pub use toolset_tools as tools;

/// Toolsets, the toolset group and transport binding.
pub use toolset_registry as registry;

/// On-demand toolset discovery (enabled by `discovery` feature).
#[cfg(feature = "discovery")]
pub use toolset_discovery as discovery;

/// Startup configuration (enabled by `config` feature).
#[cfg(feature = "config")]
pub use toolset_config as config;

/// Tracing setup (enabled by `telemetry` feature).
#[cfg(feature = "telemetry")]
pub use toolset_telemetry as telemetry;

/// GitLab toolset catalog (enabled by `gitlab` feature).
#[cfg(feature = "gitlab")]
pub use toolset_gitlab as gitlab;

/// Types most hosts need to assemble a server.
pub mod prelude {
    pub use toolset_primitives::{ToolDescriptor, ToolKind, ToolName, ToolsetName};
    pub use toolset_registry::{EnableRequest, ToolServer, ToolTransport, Toolset, ToolsetGroup};
    pub use toolset_tools::{CallToolRequest, CallToolResult, ServerTool, ToolContext, ToolHandler};

    #[cfg(feature = "discovery")]
    pub use toolset_discovery::DiscoveryManager;
}
