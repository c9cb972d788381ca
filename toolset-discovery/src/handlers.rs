//! Handlers behind the discovery meta-tools.

use std::fmt::Write as _;
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use toolset_primitives::{ToolDescriptor, ToolParameter};
use toolset_registry::{ToolTransport, ToolsetGroup, ToolsetInfo};
use toolset_tools::{CallToolRequest, CallToolResult, ToolContext, ToolHandler, ToolResult};
use tracing::{info, warn};

/// Name of the meta-tool that lists toolsets.
pub const LIST_AVAILABLE_TOOLSETS: &str = "list_available_toolsets";

/// Name of the meta-tool that enables a toolset.
pub const ENABLE_TOOLSET: &str = "enable_toolset";

const TOOLSET_ARG: &str = "toolset";

/// Renders toolset summaries as the text returned by `list_available_toolsets`.
#[must_use]
pub fn format_toolset_listing(infos: &[ToolsetInfo]) -> String {
    let mut out = format!("Available Toolsets ({}):\n", infos.len());
    for info in infos {
        let status = if info.enabled { "enabled" } else { "disabled" };
        let _ = writeln!(
            out,
            "- {}: {} [{} tools] ({status})",
            info.name, info.description, info.tool_count
        );
    }
    out
}

pub(crate) fn list_descriptor() -> toolset_primitives::Result<ToolDescriptor> {
    Ok(ToolDescriptor::read(
        LIST_AVAILABLE_TOOLSETS,
        "Lists all available GitLab MCP toolsets that can be enabled.",
    )?
    .with_title("List Available Toolsets"))
}

pub(crate) fn enable_descriptor() -> toolset_primitives::Result<ToolDescriptor> {
    Ok(ToolDescriptor::write(
        ENABLE_TOOLSET,
        "Enables a specific GitLab MCP toolset, making its tools available.",
    )?
    .with_title("Enable Toolset")
    .with_parameter(ToolParameter::required_string(
        TOOLSET_ARG,
        "Name of the toolset to enable (e.g., 'projects', 'issues', 'merge_requests')",
    )))
}

pub(crate) struct ListToolsetsHandler {
    pub(crate) group: Arc<ToolsetGroup>,
}

#[async_trait]
impl ToolHandler for ListToolsetsHandler {
    async fn call(&self, _ctx: ToolContext, _request: CallToolRequest) -> ToolResult<CallToolResult> {
        let infos = self.group.list_toolsets();
        Ok(CallToolResult::text(format_toolset_listing(&infos)))
    }
}

/// Enables a toolset and binds its tools.
///
/// Holds the transport weakly: the transport owns this handler, so a strong
/// reference would keep both alive forever.
pub(crate) struct EnableToolsetHandler {
    pub(crate) group: Arc<ToolsetGroup>,
    pub(crate) transport: Weak<dyn ToolTransport>,
}

#[async_trait]
impl ToolHandler for EnableToolsetHandler {
    async fn call(&self, ctx: ToolContext, request: CallToolRequest) -> ToolResult<CallToolResult> {
        let name = match request.required_str(TOOLSET_ARG) {
            Ok(name) => name,
            Err(err) => return Ok(CallToolResult::error(err.to_string())),
        };

        info!(toolset = name, request_id = %ctx.request_id(), "enabling toolset");

        if let Err(err) = self.group.enable_toolset(name) {
            warn!(toolset = name, error = %err, "toolset enable rejected");
            return Ok(CallToolResult::error(format!(
                "Failed to enable toolset '{name}': {err}"
            )));
        }

        let Some(transport) = self.transport.upgrade() else {
            return Ok(CallToolResult::error(format!(
                "Failed to register tools for '{name}': transport is no longer available"
            )));
        };

        match self.group.register_toolset_tools(name, transport.as_ref()) {
            Ok(count) => {
                info!(toolset = name, tools = count, "toolset tools now available");
                Ok(CallToolResult::text(format!(
                    "Successfully enabled toolset '{name}'. Tools are now available."
                )))
            }
            Err(err) => Ok(CallToolResult::error(format!(
                "Failed to register tools for '{name}': {err}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_matches_expected_layout() {
        let infos = vec![
            ToolsetInfo {
                name: "issues".into(),
                description: "Issue tools.".into(),
                enabled: true,
                tool_count: 3,
            },
            ToolsetInfo {
                name: "users".into(),
                description: "User tools.".into(),
                enabled: false,
                tool_count: 0,
            },
        ];

        assert_eq!(
            format_toolset_listing(&infos),
            "Available Toolsets (2):\n\
             - issues: Issue tools. [3 tools] (enabled)\n\
             - users: User tools. [0 tools] (disabled)\n"
        );
    }

    #[test]
    fn empty_listing_has_header_only() {
        assert_eq!(format_toolset_listing(&[]), "Available Toolsets (0):\n");
    }

    #[test]
    fn descriptors_carry_capability_hints() {
        let list = list_descriptor().unwrap();
        assert!(list.is_read_only());

        let enable = enable_descriptor().unwrap();
        assert!(!enable.is_read_only());
        assert_eq!(enable.parameters()[0].name(), "toolset");
        assert!(enable.parameters()[0].is_required());
    }
}
