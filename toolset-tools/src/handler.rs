//! Tool handler trait and the descriptor/handler pair bound by transports.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use toolset_primitives::{ToolDescriptor, ToolName};

use crate::{CallToolRequest, CallToolResult, ToolContext, ToolResult};

/// Future alias for handlers written as plain functions.
pub type ToolFuture = BoxFuture<'static, ToolResult<CallToolResult>>;

/// Trait implemented by tool executors.
///
/// Only transports call handlers; the toolset registry merely carries them.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Executes the tool for the supplied request.
    async fn call(&self, ctx: ToolContext, request: CallToolRequest) -> ToolResult<CallToolResult>;
}

#[async_trait]
impl<F, Fut> ToolHandler for F
where
    F: Send + Sync + Fn(ToolContext, CallToolRequest) -> Fut,
    Fut: Future<Output = ToolResult<CallToolResult>> + Send,
{
    async fn call(&self, ctx: ToolContext, request: CallToolRequest) -> ToolResult<CallToolResult> {
        (self)(ctx, request).await
    }
}

/// A tool descriptor paired with its handler.
#[derive(Clone)]
pub struct ServerTool {
    descriptor: ToolDescriptor,
    handler: Arc<dyn ToolHandler>,
}

impl fmt::Debug for ServerTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerTool")
            .field("descriptor", &self.descriptor)
            .field("handler", &"dyn ToolHandler")
            .finish()
    }
}

impl ServerTool {
    /// Pairs a descriptor with a handler implementation.
    #[must_use]
    pub fn new<H>(descriptor: ToolDescriptor, handler: H) -> Self
    where
        H: ToolHandler + 'static,
    {
        Self::from_arc(descriptor, Arc::new(handler))
    }

    /// Pairs a descriptor with an already shared handler.
    #[must_use]
    pub fn from_arc(descriptor: ToolDescriptor, handler: Arc<dyn ToolHandler>) -> Self {
        Self {
            descriptor,
            handler,
        }
    }

    /// Returns the descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    /// Returns the published tool name.
    #[must_use]
    pub fn name(&self) -> &ToolName {
        self.descriptor.name()
    }

    /// Returns a shared handle to the handler.
    #[must_use]
    pub fn handler(&self) -> Arc<dyn ToolHandler> {
        Arc::clone(&self.handler)
    }

    /// Invokes the handler.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the handler.
    pub async fn call(
        &self,
        ctx: ToolContext,
        request: CallToolRequest,
    ) -> ToolResult<CallToolResult> {
        self.handler.call(ctx, request).await
    }
}
