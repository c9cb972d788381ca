//! Shared error definitions for toolset primitives.

use thiserror::Error;

/// Result alias used throughout the toolset primitives.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing toolset primitive types.
#[derive(Debug, Error)]
pub enum Error {
    /// Tool name failed validation.
    #[error("invalid tool name `{name}`: {reason}")]
    InvalidToolName {
        /// The offending name.
        name: String,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Toolset name failed validation.
    #[error("invalid toolset name `{name}`: {reason}")]
    InvalidToolsetName {
        /// The offending name.
        name: String,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Tool descriptor failed validation.
    #[error("invalid tool descriptor `{name}`: {reason}")]
    InvalidDescriptor {
        /// Name of the tool being described.
        name: String,
        /// Human-readable reason for rejection.
        reason: String,
    },
}
