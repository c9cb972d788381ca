//! Validated names for tools and toolsets.

use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MAX_TOOL_NAME_LEN: usize = 64;
const MAX_TOOLSET_NAME_LEN: usize = 48;

/// Identifier under which a tool is published to protocol clients.
///
/// Case is preserved, so `getIssue` and `get_issue` are distinct tools.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolName(String);

impl ToolName {
    /// Creates a new tool name after validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidToolName`] if the supplied name is empty, too
    /// long, or contains unsupported characters.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name, MAX_TOOL_NAME_LEN, &TOOL_NAME_RULE).map_err(|reason| {
            Error::InvalidToolName {
                name: name.clone(),
                reason,
            }
        })?;
        Ok(Self(name))
    }

    /// Returns the tool name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Key under which a toolset is stored in its group.
///
/// Lowercase only, since operators type these into configuration.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolsetName(String);

impl ToolsetName {
    /// Creates a new toolset name after validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidToolsetName`] if the supplied name is empty, too
    /// long, or contains unsupported characters.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name, MAX_TOOLSET_NAME_LEN, &TOOLSET_NAME_RULE).map_err(|reason| {
            Error::InvalidToolsetName {
                name: name.clone(),
                reason,
            }
        })?;
        Ok(Self(name))
    }

    /// Returns the toolset name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! name_conversions {
    ($ty:ident) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = Error;

            fn try_from(value: &str) -> Result<Self> {
                Self::new(value)
            }
        }
    };
}

name_conversions!(ToolName);
name_conversions!(ToolsetName);

/// Characters allowed in a name, with the message used when one is not.
struct CharRule {
    allows: fn(char) -> bool,
    description: &'static str,
}

const TOOL_NAME_RULE: CharRule = CharRule {
    allows: |c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'),
    description: "name must contain alphanumeric, dash, underscore, or dot",
};

const TOOLSET_NAME_RULE: CharRule = CharRule {
    allows: |c| matches!(c, 'a'..='z' | '0'..='9' | '-' | '_' | '.'),
    description: "name must contain lowercase alphanumeric, dash, underscore, or dot",
};

fn validate_identifier(id: &str, max_len: usize, rule: &CharRule) -> std::result::Result<(), String> {
    if id.is_empty() {
        return Err("name cannot be empty".into());
    }

    if id.len() > max_len {
        return Err(format!("name length must be <= {max_len}"));
    }

    if !id.chars().all(rule.allows) {
        return Err(rule.description.into());
    }

    Ok(())
}
