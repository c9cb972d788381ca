use thiserror::Error;
use toolset_registry::RegistryError;

/// Result alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building the GitLab toolset group.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A built-in name or descriptor failed validation.
    #[error("invalid catalog entry: {source}")]
    Descriptor {
        /// Validation failure.
        #[from]
        source: toolset_primitives::Error,
    },

    /// The configured enable request could not be applied.
    #[error("failed to enable configured toolsets: {source}")]
    Enable {
        /// Registry failure.
        #[from]
        source: RegistryError,
    },
}
