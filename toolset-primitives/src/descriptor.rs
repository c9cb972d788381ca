//! Tool descriptors advertised to protocol clients.

use serde::{Deserialize, Serialize};

use crate::ToolName;
use crate::error::{Error, Result};

/// Capability hint telling clients whether a tool mutates remote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Tool only reads state.
    Read,
    /// Tool creates, updates, or deletes state.
    Write,
}

impl ToolKind {
    /// Returns `true` for [`ToolKind::Read`].
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::Read)
    }
}

/// JSON type accepted by a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    /// UTF-8 string.
    String,
    /// JSON number.
    Number,
    /// JSON boolean.
    Boolean,
}

/// Single named input accepted by a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameter {
    name: String,
    #[serde(rename = "type")]
    kind: ParameterType,
    description: String,
    #[serde(default)]
    required: bool,
}

impl ToolParameter {
    /// Creates an optional parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ParameterType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required: false,
        }
    }

    /// Creates a required string parameter.
    #[must_use]
    pub fn required_string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ParameterType::String, description).required()
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accepted JSON type.
    #[must_use]
    pub const fn kind(&self) -> ParameterType {
        self.kind
    }

    /// Returns the parameter description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` when callers must supply the parameter.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }
}

/// Everything a transport needs to advertise a tool, minus its handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    name: ToolName,
    description: String,
    kind: ToolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<ToolParameter>,
}

impl ToolDescriptor {
    /// Creates a descriptor for the supplied tool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDescriptor`] if the description is empty.
    pub fn new(name: ToolName, kind: ToolKind, description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(Error::InvalidDescriptor {
                name: name.into(),
                reason: "description cannot be empty".into(),
            });
        }

        Ok(Self {
            name,
            description,
            kind,
            title: None,
            parameters: Vec::new(),
        })
    }

    /// Shorthand for a [`ToolKind::Read`] descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or description fails validation.
    pub fn read(name: &str, description: impl Into<String>) -> Result<Self> {
        Self::new(ToolName::new(name)?, ToolKind::Read, description)
    }

    /// Shorthand for a [`ToolKind::Write`] descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or description fails validation.
    pub fn write(name: &str, description: impl Into<String>) -> Result<Self> {
        Self::new(ToolName::new(name)?, ToolKind::Write, description)
    }

    /// Sets a human-facing title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends an input parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ToolParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &ToolName {
        &self.name
    }

    /// Returns the tool description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the capability hint.
    #[must_use]
    pub const fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Returns `true` when the tool advertises itself as read-only.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.kind.is_read_only()
    }

    /// Returns the optional title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the declared input parameters.
    #[must_use]
    pub fn parameters(&self) -> &[ToolParameter] {
        &self.parameters
    }
}
