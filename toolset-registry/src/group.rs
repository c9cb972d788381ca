//! Concurrency-safe collection of toolsets.

use std::collections::HashMap;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use toolset_primitives::ToolsetName;
use toolset_tools::ServerTool;
use tracing::{debug, info};

use crate::error::{RegistryError, RegistryResult};
use crate::toolset::Toolset;
use crate::transport::ToolTransport;

/// Keyword that configuration sources use to request every toolset.
pub const ALL_TOOLSETS: &str = "all";

/// Which toolsets a batch enable should switch on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnableRequest {
    /// Every toolset registered at the time of the call.
    All,
    /// The listed toolsets, in order.
    Named(Vec<String>),
}

impl EnableRequest {
    /// Builds a request from configuration strings.
    ///
    /// A single element equal to [`ALL_TOOLSETS`] becomes [`EnableRequest::All`];
    /// anything else is taken literally.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if let [only] = names.as_slice() {
            if only == ALL_TOOLSETS {
                return Self::All;
            }
        }
        Self::Named(names)
    }

    /// Returns `true` for [`EnableRequest::All`].
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for EnableRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_TOOLSETS),
            Self::Named(names) => f.write_str(&names.join(",")),
        }
    }
}

/// Summary of a toolset as reported by [`ToolsetGroup::list_toolsets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsetInfo {
    /// Toolset name.
    pub name: String,
    /// Toolset description.
    pub description: String,
    /// Whether the toolset is enabled.
    pub enabled: bool,
    /// Number of registered tools, read and write, regardless of flags.
    pub tool_count: usize,
}

#[derive(Default)]
struct GroupState {
    toolsets: HashMap<ToolsetName, Toolset>,
    order: Vec<ToolsetName>,
    everything_on: bool,
}

impl GroupState {
    fn ordered(&self) -> impl Iterator<Item = &Toolset> {
        self.order.iter().filter_map(|name| self.toolsets.get(name))
    }

    fn enable(&mut self, name: &str) -> RegistryResult<()> {
        let toolset = self
            .toolsets
            .get_mut(name)
            .ok_or_else(|| RegistryError::not_found(name))?;

        if toolset.is_enabled() {
            return Err(RegistryError::AlreadyEnabled {
                name: name.to_owned(),
            });
        }

        toolset.enable();
        debug!(toolset = name, "toolset enabled");
        Ok(())
    }
}

/// Owns a set of uniquely named toolsets and decides which tools get published.
///
/// One readers-writer lock guards the toolsets and the enable-all flag.
/// Mutations take it exclusively; publishing and listing share it. The group
/// is meant to be built once at startup and handed out as
/// `Arc<ToolsetGroup>`.
pub struct ToolsetGroup {
    inner: RwLock<GroupState>,
    read_only: bool,
}

impl fmt::Debug for ToolsetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        f.debug_struct("ToolsetGroup")
            .field("toolsets", &inner.order)
            .field("everything_on", &inner.everything_on)
            .field("read_only", &self.read_only)
            .finish()
    }
}

impl ToolsetGroup {
    /// Creates an empty group. `read_only` is fixed for the group's lifetime.
    #[must_use]
    pub fn new(read_only: bool) -> Self {
        Self {
            inner: RwLock::new(GroupState::default()),
            read_only,
        }
    }

    /// Returns `true` when every inserted toolset is forced read-only.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns `true` when the last batch enable used [`EnableRequest::All`].
    #[must_use]
    pub fn everything_on(&self) -> bool {
        self.read().everything_on
    }

    /// Returns the number of toolsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().toolsets.len()
    }

    /// Returns `true` when no toolsets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a toolset is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.read().toolsets.contains_key(name)
    }

    /// Inserts a toolset, replacing any toolset already stored under its name.
    ///
    /// Replacement is wholesale: the previous toolset's enabled flag and tools
    /// are discarded. In a read-only group the toolset is latched read-only
    /// first. A replaced name keeps its original listing position.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn add_toolset(&self, mut toolset: Toolset) {
        if self.read_only {
            toolset.set_read_only();
        }

        let name = toolset.name().clone();
        let mut inner = self.write();
        if inner.toolsets.insert(name.clone(), toolset).is_some() {
            debug!(toolset = %name, "replaced existing toolset");
        } else {
            debug!(toolset = %name, read_only = self.read_only, "added toolset");
            inner.order.push(name);
        }
    }

    /// Enables a single toolset.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no toolset has that name and
    /// [`RegistryError::AlreadyEnabled`] if it is already enabled; in both cases
    /// nothing changes.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn enable_toolset(&self, name: &str) -> RegistryResult<()> {
        self.write().enable(name)
    }

    /// Enables a batch of toolsets.
    ///
    /// [`EnableRequest::All`] switches on every toolset present now; toolsets
    /// added later stay disabled. [`EnableRequest::Named`] enables each name in
    /// order and stops at the first failure, leaving earlier names enabled.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyRequest`] for an empty name list, the first
    /// error from [`ToolsetGroup::enable_toolset`] otherwise, or
    /// [`RegistryError::NoToolsetsEnabled`] if nothing was enabled.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn enable_toolsets(&self, request: &EnableRequest) -> RegistryResult<()> {
        let names = match request {
            EnableRequest::All => {
                let mut inner = self.write();
                inner.everything_on = true;
                for toolset in inner.toolsets.values_mut() {
                    toolset.enable();
                }
                info!(toolsets = inner.toolsets.len(), "enabled all toolsets");
                return Ok(());
            }
            EnableRequest::Named(names) if names.is_empty() => {
                return Err(RegistryError::EmptyRequest);
            }
            EnableRequest::Named(names) => names,
        };

        let mut inner = self.write();
        inner.everything_on = false;
        let mut enabled = 0_usize;
        for name in names {
            inner.enable(name)?;
            enabled += 1;
        }

        if enabled == 0 {
            return Err(RegistryError::NoToolsetsEnabled);
        }

        info!(toolsets = %request, "enabled requested toolsets");
        Ok(())
    }

    /// Disables a toolset. Disabling an already disabled toolset is a no-op.
    ///
    /// Tools already bound to a transport stay bound.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no toolset has that name.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn disable_toolset(&self, name: &str) -> RegistryResult<()> {
        let mut inner = self.write();
        let toolset = inner
            .toolsets
            .get_mut(name)
            .ok_or_else(|| RegistryError::not_found(name))?;
        toolset.disable();
        debug!(toolset = name, "toolset disabled");
        Ok(())
    }

    /// Runs `update` against a stored toolset while holding the exclusive lock.
    ///
    /// This is the only way to mutate a toolset after insertion, for example to
    /// append tools. Write tools appended to a read-only toolset are still
    /// withheld from publishing.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no toolset has that name.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn update_toolset<F, R>(&self, name: &str, update: F) -> RegistryResult<R>
    where
        F: FnOnce(&mut Toolset) -> R,
    {
        let mut inner = self.write();
        let toolset = inner
            .toolsets
            .get_mut(name)
            .ok_or_else(|| RegistryError::not_found(name))?;
        Ok(update(toolset))
    }

    /// Returns a snapshot of a toolset's currently active tools.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no toolset has that name.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn active_tools(&self, name: &str) -> RegistryResult<Vec<ServerTool>> {
        self.read()
            .toolsets
            .get(name)
            .map(Toolset::active_tools)
            .ok_or_else(|| RegistryError::not_found(name))
    }

    /// Binds the active tools of every enabled toolset to `transport`.
    ///
    /// Tools of one toolset are bound reads first, each list in insertion
    /// order. The tool list is snapshotted under the shared lock and bound after
    /// it is released. Returns the number of tools bound.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn register_tools<T>(&self, transport: &T) -> usize
    where
        T: ToolTransport + ?Sized,
    {
        let tools: Vec<ServerTool> = {
            let inner = self.read();
            inner
                .ordered()
                .filter(|toolset| toolset.is_enabled())
                .flat_map(Toolset::active_tools)
                .collect()
        };

        let count = tools.len();
        for tool in tools {
            transport.add_tool(tool);
        }
        info!(tools = count, "registered toolset tools with transport");
        count
    }

    /// Binds the active tools of a single toolset to `transport`.
    ///
    /// A disabled toolset binds nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no toolset has that name.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn register_toolset_tools<T>(&self, name: &str, transport: &T) -> RegistryResult<usize>
    where
        T: ToolTransport + ?Sized,
    {
        let tools = self.active_tools(name)?;
        let count = tools.len();
        for tool in tools {
            transport.add_tool(tool);
        }
        info!(toolset = name, tools = count, "registered toolset tools with transport");
        Ok(count)
    }

    /// Describes every toolset in first-insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn list_toolsets(&self) -> Vec<ToolsetInfo> {
        self.read()
            .ordered()
            .map(|toolset| ToolsetInfo {
                name: toolset.name().to_string(),
                description: toolset.description().to_owned(),
                enabled: toolset.is_enabled(),
                tool_count: toolset.tool_count(),
            })
            .collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, GroupState> {
        self.inner.read().expect("toolset group poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, GroupState> {
        self.inner.write().expect("toolset group poisoned")
    }
}
