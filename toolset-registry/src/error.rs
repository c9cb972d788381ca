use thiserror::Error;

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors surfaced by [`ToolsetGroup`](crate::ToolsetGroup).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Referenced toolset is not part of the group.
    #[error("toolset '{name}' not found")]
    NotFound {
        /// Requested toolset name.
        name: String,
    },

    /// Toolset exists but is already enabled.
    #[error("toolset '{name}' already enabled")]
    AlreadyEnabled {
        /// Requested toolset name.
        name: String,
    },

    /// A batch enable was given no names.
    #[error("no toolsets specified to enable")]
    EmptyRequest,

    /// A batch enable processed its names without enabling anything.
    #[error("no valid toolsets were enabled")]
    NoToolsetsEnabled,
}

impl RegistryError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}
