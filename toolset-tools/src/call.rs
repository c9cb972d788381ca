//! Request, context, and result payloads for tool invocations.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use toolset_primitives::RequestId;

use crate::{ToolError, ToolResult};

/// Per-invocation context supplied by the transport.
#[derive(Debug, Clone)]
pub struct ToolContext {
    request_id: RequestId,
    received_at: Instant,
}

impl ToolContext {
    /// Creates a context with a fresh request identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            request_id: RequestId::random(),
            received_at: Instant::now(),
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Returns the time the request was received.
    #[must_use]
    pub fn received_at(&self) -> Instant {
        self.received_at
    }
}

impl Default for ToolContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Tool invocation as delivered by the protocol client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallToolRequest {
    name: String,
    #[serde(default)]
    arguments: Map<String, Value>,
}

impl CallToolRequest {
    /// Creates a request without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Map::new(),
        }
    }

    /// Creates a request from a JSON value; non-object values yield no arguments.
    #[must_use]
    pub fn with_arguments(name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Adds or replaces a single argument.
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Returns the requested tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw arguments.
    #[must_use]
    pub fn arguments(&self) -> &Map<String, Value> {
        &self.arguments
    }

    /// Returns a required string argument.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidArgument`] if the key is missing or not a
    /// string.
    pub fn required_str(&self, key: &str) -> ToolResult<&str> {
        match self.arguments.get(key) {
            None => Err(ToolError::invalid_argument(format!(
                "Missing required parameter: {key}"
            ))),
            Some(value) => value.as_str().ok_or_else(|| {
                ToolError::invalid_argument(format!("Parameter '{key}' must be a string"))
            }),
        }
    }

    /// Returns an optional string argument.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidArgument`] if the key is present but not a
    /// string.
    pub fn optional_str(&self, key: &str) -> ToolResult<Option<&str>> {
        match self.arguments.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_str().map(Some).ok_or_else(|| {
                ToolError::invalid_argument(format!("Parameter '{key}' must be a string"))
            }),
        }
    }
}

/// Single content block of a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// Plain text.
    Text {
        /// Text body.
        text: String,
    },
}

/// Outcome of a tool invocation as reported back to the client.
///
/// Operation-level failures are carried with `is_error` set rather than as a
/// transport error, so the client sees the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    content: Vec<Content>,
    #[serde(default)]
    is_error: bool,
}

impl CallToolResult {
    /// Successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Failed text result.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// Successful result carrying pretty-printed JSON.
    #[must_use]
    pub fn json(value: &Value) -> Self {
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        Self::text(text)
    }

    /// Returns the content blocks.
    #[must_use]
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// Returns `true` when the result reports a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.is_error
    }

    /// Concatenates all text blocks.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .map(|Content::Text { text }| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_str_reports_missing_and_mistyped() {
        let request = CallToolRequest::new("enable_toolset");
        let err = request.required_str("toolset").expect_err("missing");
        assert_eq!(err.to_string(), "Missing required parameter: toolset");

        let request = request.arg("toolset", 7);
        let err = request.required_str("toolset").expect_err("mistyped");
        assert_eq!(err.to_string(), "Parameter 'toolset' must be a string");

        let request = request.arg("toolset", "issues");
        assert_eq!(request.required_str("toolset").unwrap(), "issues");
    }

    #[test]
    fn optional_str_treats_null_as_absent() {
        let request =
            CallToolRequest::with_arguments("listIssues", json!({ "state": null, "labels": 3 }));
        assert_eq!(request.optional_str("state").unwrap(), None);
        assert_eq!(request.optional_str("missing").unwrap(), None);
        assert!(request.optional_str("labels").is_err());
    }

    #[test]
    fn non_object_arguments_are_dropped() {
        let request = CallToolRequest::with_arguments("getIssue", json!([1, 2]));
        assert!(request.arguments().is_empty());
    }

    #[test]
    fn result_serializes_with_camel_case_flag() {
        let result = CallToolResult::error("boom");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(result.text_content(), "boom");
    }
}
