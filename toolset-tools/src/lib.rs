//! Tool handlers and the payloads exchanged with them.
//!
//! A [`ServerTool`] pairs a [`ToolDescriptor`](toolset_primitives::ToolDescriptor)
//! with the [`ToolHandler`] that executes it. Toolsets collect server tools;
//! transports bind them and are the only callers of the handler.

#![warn(missing_docs, clippy::pedantic)]

mod call;
mod error;
mod handler;

pub use call::{CallToolRequest, CallToolResult, Content, ToolContext};
pub use error::{ToolError, ToolResult};
pub use handler::{ServerTool, ToolFuture, ToolHandler};
