//! Named bundle of read and write tools.

use toolset_primitives::ToolsetName;
use toolset_tools::ServerTool;

/// Whether a toolset publishes anything at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    /// Nothing is published.
    Disabled,
    /// Active tools are published.
    Enabled,
}

/// Whether write tools are eligible for publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Read and write tools are eligible.
    ReadWrite,
    /// Only read tools are eligible. Never reverts to [`Access::ReadWrite`].
    ReadOnly,
}

/// Observable state of a toolset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolsetState {
    /// Enabled axis.
    pub activation: Activation,
    /// Read-only axis.
    pub access: Access,
}

/// A named group of tools that is enabled and restricted as a unit.
///
/// New toolsets start disabled, read-write, and empty. Tool lists only grow,
/// keep insertion order, and are not deduplicated.
#[derive(Debug, Clone)]
pub struct Toolset {
    name: ToolsetName,
    description: String,
    enabled: bool,
    read_only: bool,
    read_tools: Vec<ServerTool>,
    write_tools: Vec<ServerTool>,
}

impl Toolset {
    /// Creates a disabled, read-write toolset with no tools.
    #[must_use]
    pub fn new(name: ToolsetName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            enabled: false,
            read_only: false,
            read_tools: Vec::new(),
            write_tools: Vec::new(),
        }
    }

    /// Appends tools that only read state.
    pub fn add_read_tools<I>(&mut self, tools: I) -> &mut Self
    where
        I: IntoIterator<Item = ServerTool>,
    {
        self.read_tools.extend(tools);
        self
    }

    /// Appends tools that mutate state. They are withheld while the toolset is
    /// read-only.
    pub fn add_write_tools<I>(&mut self, tools: I) -> &mut Self
    where
        I: IntoIterator<Item = ServerTool>,
    {
        self.write_tools.extend(tools);
        self
    }

    /// By-value variant of [`Toolset::add_read_tools`].
    #[must_use]
    pub fn with_read_tools<I>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = ServerTool>,
    {
        self.add_read_tools(tools);
        self
    }

    /// By-value variant of [`Toolset::add_write_tools`].
    #[must_use]
    pub fn with_write_tools<I>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = ServerTool>,
    {
        self.add_write_tools(tools);
        self
    }

    /// Enables the toolset.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disables the toolset.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Restricts the toolset to read tools. There is no inverse.
    pub fn set_read_only(&mut self) {
        self.read_only = true;
    }

    /// Returns the tools eligible for publishing.
    ///
    /// Empty while disabled. Otherwise read tools come first, followed by write
    /// tools unless the toolset is read-only; each list keeps insertion order.
    #[must_use]
    pub fn active_tools(&self) -> Vec<ServerTool> {
        if !self.enabled {
            return Vec::new();
        }
        if self.read_only {
            return self.read_tools.clone();
        }
        self.tools()
    }

    /// Returns every tool, read then write, ignoring the enabled and read-only
    /// flags.
    #[must_use]
    pub fn tools(&self) -> Vec<ServerTool> {
        let mut all = Vec::with_capacity(self.tool_count());
        all.extend(self.read_tools.iter().cloned());
        all.extend(self.write_tools.iter().cloned());
        all
    }

    /// Returns the total number of tools, read and write.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.read_tools.len() + self.write_tools.len()
    }

    /// Returns the toolset name.
    #[must_use]
    pub fn name(&self) -> &ToolsetName {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` when enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` once the read-only latch is set.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns the current position in the enabled/read-only state space.
    #[must_use]
    pub const fn state(&self) -> ToolsetState {
        ToolsetState {
            activation: if self.enabled {
                Activation::Enabled
            } else {
                Activation::Disabled
            },
            access: if self.read_only {
                Access::ReadOnly
            } else {
                Access::ReadWrite
            },
        }
    }
}
