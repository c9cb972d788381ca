use thiserror::Error;

/// Result alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors produced while dispatching or executing a tool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    /// Request arguments were missing or had the wrong type.
    #[error("{reason}")]
    InvalidArgument {
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Requested tool is not bound to the transport.
    #[error("tool `{name}` is not registered")]
    UnknownTool {
        /// Name of the missing tool.
        name: String,
    },

    /// Tool execution failed.
    #[error("tool execution failed: {reason}")]
    Execution {
        /// Human-readable error returned by the tool implementation.
        reason: String,
    },

    /// Remote backend rejected or failed the call.
    #[error("backend error: {reason}")]
    Backend {
        /// Context provided by the backend.
        reason: String,
    },
}

impl ToolError {
    /// Creates an invalid-argument error from the supplied reason.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an execution error from the supplied reason.
    #[must_use]
    pub fn execution(reason: impl Into<String>) -> Self {
        Self::Execution {
            reason: reason.into(),
        }
    }

    /// Creates a backend error from the supplied reason.
    #[must_use]
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend {
            reason: reason.into(),
        }
    }
}
