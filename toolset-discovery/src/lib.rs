//! Runtime toolset discovery.
//!
//! In dynamic mode only two meta-tools are published at startup:
//! `list_available_toolsets` and `enable_toolset`. Clients call the latter to
//! switch a toolset on, which binds that toolset's active tools to the
//! transport on the spot. Outside dynamic mode the manager simply publishes
//! every enabled toolset eagerly.

#![warn(missing_docs, clippy::pedantic)]

mod handlers;
mod manager;

pub use handlers::{ENABLE_TOOLSET, LIST_AVAILABLE_TOOLSETS, format_toolset_listing};
pub use manager::DiscoveryManager;
