//! Toolset registry and capability gating.
//!
//! A [`Toolset`] bundles read and write tools behind an enabled flag and a
//! one-way read-only latch. A [`ToolsetGroup`] owns every toolset, applies the
//! process-wide read-only policy on insertion, and publishes the active tools of
//! enabled toolsets to a [`ToolTransport`].
//!
//! The group takes toolsets by value, so all mutation after insertion goes
//! through the group's lock.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod group;
mod toolset;
mod transport;

pub use error::{RegistryError, RegistryResult};
pub use group::{EnableRequest, ToolsetGroup, ToolsetInfo, ALL_TOOLSETS};
pub use toolset::{Access, Activation, Toolset, ToolsetState};
pub use transport::{ToolServer, ToolTransport};
