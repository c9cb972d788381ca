//! Core shared types for MCP toolsets.
//!
//! Every other crate in the workspace speaks in terms of these types: the
//! validated names that key tools and toolsets, the descriptor a toolset hands
//! to a transport, and the request identifiers attached to tool invocations.

#![warn(missing_docs, clippy::pedantic)]

mod descriptor;
mod error;
mod ids;
mod name;

/// Tool descriptors advertised to protocol clients.
pub use descriptor::{ParameterType, ToolDescriptor, ToolKind, ToolParameter};
/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Identifier attached to each tool invocation.
pub use ids::RequestId;
/// Validated tool and toolset names.
pub use name::{ToolName, ToolsetName};
