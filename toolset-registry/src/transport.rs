//! Seam between the registry and the protocol server.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use toolset_primitives::ToolDescriptor;
use toolset_tools::{CallToolRequest, CallToolResult, ServerTool, ToolContext, ToolError, ToolResult};
use tracing::debug;

/// Protocol server that tools are bound to.
///
/// Binding is infallible; a second bind under the same name replaces the first.
pub trait ToolTransport: Send + Sync {
    /// Publishes a tool to clients.
    fn add_tool(&self, tool: ServerTool);
}

/// In-process transport that keeps bound tools and dispatches calls to them.
#[derive(Default)]
pub struct ToolServer {
    inner: RwLock<Bindings>,
}

#[derive(Default)]
struct Bindings {
    tools: HashMap<String, ServerTool>,
    order: Vec<String>,
}

impl fmt::Debug for ToolServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read().expect("tool server poisoned");
        f.debug_struct("ToolServer")
            .field("bound", &inner.order)
            .finish()
    }
}

impl ToolServer {
    /// Creates a server with no tools bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns descriptors of all bound tools in first-bind order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn tools(&self) -> Vec<ToolDescriptor> {
        let inner = self.inner.read().expect("tool server poisoned");
        inner
            .order
            .iter()
            .filter_map(|name| inner.tools.get(name))
            .map(|tool| tool.descriptor().clone())
            .collect()
    }

    /// Returns names of all bound tools in first-bind order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn tool_names(&self) -> Vec<String> {
        self.inner.read().expect("tool server poisoned").order.clone()
    }

    /// Returns the tool bound under `name`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ServerTool> {
        self.inner.read().expect("tool server poisoned").tools.get(name).cloned()
    }

    /// Returns `true` if a tool is bound under `name`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of bound tools.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().expect("tool server poisoned").order.len()
    }

    /// Returns `true` when nothing is bound.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dispatches a call to the bound handler.
    ///
    /// The lock is released before the handler runs, so handlers may bind
    /// further tools.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownTool`] when nothing is bound under the
    /// requested name, or propagates the handler's error.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub async fn call_tool(
        &self,
        ctx: ToolContext,
        request: CallToolRequest,
    ) -> ToolResult<CallToolResult> {
        let tool = self.get(request.name()).ok_or_else(|| ToolError::UnknownTool {
            name: request.name().to_owned(),
        })?;
        debug!(tool = request.name(), request_id = %ctx.request_id(), "dispatching tool call");
        tool.call(ctx, request).await
    }
}

impl ToolTransport for ToolServer {
    fn add_tool(&self, tool: ServerTool) {
        let mut inner = self.inner.write().expect("tool server poisoned");
        let name = tool.name().as_str().to_owned();
        if inner.tools.insert(name.clone(), tool).is_none() {
            inner.order.push(name);
        }
    }
}
