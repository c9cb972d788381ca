//! Decides between eager and on-demand toolset publication.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use toolset_registry::{ToolTransport, ToolsetGroup};
use toolset_tools::ServerTool;
use tracing::info;

use crate::handlers::{enable_descriptor, list_descriptor, EnableToolsetHandler, ListToolsetsHandler};

/// Publishes toolsets to a transport, either eagerly or through discovery
/// meta-tools.
pub struct DiscoveryManager {
    group: Arc<ToolsetGroup>,
    transport: Arc<dyn ToolTransport>,
    dynamic_mode: AtomicBool,
}

impl fmt::Debug for DiscoveryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryManager")
            .field("group", &self.group)
            .field("transport", &"dyn ToolTransport")
            .field("dynamic_mode", &self.is_dynamic())
            .finish()
    }
}

impl DiscoveryManager {
    /// Creates a manager in eager mode.
    #[must_use]
    pub fn new(group: Arc<ToolsetGroup>, transport: Arc<dyn ToolTransport>) -> Self {
        Self {
            group,
            transport,
            dynamic_mode: AtomicBool::new(false),
        }
    }

    /// Returns the managed group.
    #[must_use]
    pub fn group(&self) -> &Arc<ToolsetGroup> {
        &self.group
    }

    /// Switches between on-demand (`true`) and eager (`false`) publication.
    pub fn set_dynamic_mode(&self, enabled: bool) {
        self.dynamic_mode.store(enabled, Ordering::Release);
        if enabled {
            info!("dynamic toolset discovery enabled, only discovery tools will be available initially");
        }
    }

    /// Returns `true` in on-demand mode.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.dynamic_mode.load(Ordering::Acquire)
    }

    /// Binds `list_available_toolsets` and `enable_toolset` to the transport.
    ///
    /// # Errors
    ///
    /// Returns an error only if a built-in descriptor fails validation.
    pub fn register_discovery_tools(&self) -> toolset_primitives::Result<()> {
        let list = ServerTool::new(
            list_descriptor()?,
            ListToolsetsHandler {
                group: Arc::clone(&self.group),
            },
        );
        let enable = ServerTool::new(
            enable_descriptor()?,
            EnableToolsetHandler {
                group: Arc::clone(&self.group),
                transport: Arc::downgrade(&self.transport),
            },
        );

        self.transport.add_tool(list);
        self.transport.add_tool(enable);
        info!("dynamic toolset discovery tools registered");
        Ok(())
    }

    /// Publishes according to the current mode and returns the number of tools
    /// bound.
    ///
    /// In dynamic mode only the discovery tools are bound. Otherwise every
    /// enabled toolset's active tools are bound.
    ///
    /// # Errors
    ///
    /// Returns an error only if a built-in descriptor fails validation.
    pub fn publish(&self) -> toolset_primitives::Result<usize> {
        if self.is_dynamic() {
            self.register_discovery_tools()?;
            return Ok(2);
        }
        Ok(self.group.register_tools(self.transport.as_ref()))
    }
}
