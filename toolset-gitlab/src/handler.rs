//! Tool handler that validates arguments and forwards to the backend.

use std::sync::Arc;

use async_trait::async_trait;
use toolset_primitives::{ParameterType, ToolDescriptor, ToolParameter};
use toolset_tools::{CallToolRequest, CallToolResult, ToolContext, ToolError, ToolHandler, ToolResult};
use tracing::{debug, warn};

use crate::backend::GitLabBackend;

/// Forwards one catalog tool to a [`GitLabBackend`].
///
/// Argument problems come back as error results so the caller can correct
/// the request. Backend failures surface as [`ToolError::Backend`].
pub struct BackendTool {
    operation: String,
    parameters: Vec<ToolParameter>,
    backend: Arc<dyn GitLabBackend>,
}

impl BackendTool {
    /// Creates a handler for `descriptor`.
    #[must_use]
    pub fn new(descriptor: &ToolDescriptor, backend: Arc<dyn GitLabBackend>) -> Self {
        Self {
            operation: descriptor.name().to_string(),
            parameters: descriptor.parameters().to_vec(),
            backend,
        }
    }
}

#[async_trait]
impl ToolHandler for BackendTool {
    async fn call(&self, ctx: ToolContext, request: CallToolRequest) -> ToolResult<CallToolResult> {
        if let Err(err) = validate(&self.parameters, &request) {
            debug!(tool = %self.operation, %err, "rejected tool arguments");
            return Ok(CallToolResult::error(format!("Validation Error: {err}")));
        }

        match self.backend.execute(&self.operation, request.arguments()).await {
            Ok(value) => Ok(CallToolResult::json(&value)),
            Err(err) => {
                warn!(
                    tool = %self.operation,
                    request_id = %ctx.request_id(),
                    %err,
                    "GitLab backend call failed"
                );
                Err(ToolError::backend(err.to_string()))
            }
        }
    }
}

/// Checks presence of required parameters and the JSON type of supplied ones.
fn validate(parameters: &[ToolParameter], request: &CallToolRequest) -> ToolResult<()> {
    for parameter in parameters {
        let name = parameter.name();
        match parameter.kind() {
            ParameterType::String => {
                if parameter.is_required() {
                    request.required_str(name)?;
                } else {
                    request.optional_str(name)?;
                }
            }
            ParameterType::Number => check_typed(parameter, request, "number", serde_json::Value::is_number)?,
            ParameterType::Boolean => {
                check_typed(parameter, request, "boolean", serde_json::Value::is_boolean)?;
            }
        }
    }
    Ok(())
}

fn check_typed(
    parameter: &ToolParameter,
    request: &CallToolRequest,
    type_name: &str,
    matches: fn(&serde_json::Value) -> bool,
) -> ToolResult<()> {
    let name = parameter.name();
    match request.arguments().get(name) {
        None | Some(serde_json::Value::Null) if parameter.is_required() => Err(ToolError::invalid_argument(
            format!("Missing required parameter: {name}"),
        )),
        None | Some(serde_json::Value::Null) => Ok(()),
        Some(value) if matches(value) => Ok(()),
        Some(_) => Err(ToolError::invalid_argument(format!(
            "Parameter '{name}' must be a {type_name}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, BackendResult};
    use serde_json::{Map, Value, json};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<(String, Map<String, Value>)>>,
        fail_with: Option<BackendError>,
    }

    #[async_trait]
    impl GitLabBackend for Recording {
        async fn execute(&self, operation: &str, arguments: &Map<String, Value>) -> BackendResult<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((operation.to_owned(), arguments.clone()));
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(json!({ "iid": 7 })),
            }
        }
    }

    fn descriptor() -> ToolDescriptor {
        ToolDescriptor::read("getIssue", "Retrieves details for a specific GitLab issue.")
            .unwrap()
            .with_parameter(ToolParameter::required_string("projectId", "Project ID or path"))
            .with_parameter(ToolParameter::new("issueIid", ParameterType::Number, "Issue IID").required())
            .with_parameter(ToolParameter::new("withNotes", ParameterType::Boolean, "Include notes"))
    }

    #[tokio::test]
    async fn forwards_valid_calls() {
        let backend = Arc::new(Recording::default());
        let tool = BackendTool::new(&descriptor(), backend.clone());

        let request = CallToolRequest::new("getIssue")
            .arg("projectId", "group/app")
            .arg("issueIid", 7);
        let result = tool.call(ToolContext::new(), request).await.unwrap();

        assert!(!result.is_error());
        assert!(result.text_content().contains("\"iid\": 7"));
        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "getIssue");
        assert_eq!(calls[0].1["projectId"], "group/app");
    }

    #[tokio::test]
    async fn argument_problems_become_error_results() {
        let backend = Arc::new(Recording::default());
        let tool = BackendTool::new(&descriptor(), backend.clone());

        let missing = tool
            .call(ToolContext::new(), CallToolRequest::new("getIssue").arg("issueIid", 1))
            .await
            .unwrap();
        assert!(missing.is_error());
        assert_eq!(missing.text_content(), "Validation Error: Missing required parameter: projectId");

        let mistyped = tool
            .call(
                ToolContext::new(),
                CallToolRequest::new("getIssue")
                    .arg("projectId", "group/app")
                    .arg("issueIid", "seven"),
            )
            .await
            .unwrap();
        assert_eq!(mistyped.text_content(), "Validation Error: Parameter 'issueIid' must be a number");

        let bad_flag = tool
            .call(
                ToolContext::new(),
                CallToolRequest::new("getIssue")
                    .arg("projectId", "group/app")
                    .arg("issueIid", 1)
                    .arg("withNotes", "yes"),
            )
            .await
            .unwrap();
        assert_eq!(bad_flag.text_content(), "Validation Error: Parameter 'withNotes' must be a boolean");

        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn backend_failures_propagate() {
        let backend = Arc::new(Recording {
            fail_with: Some(BackendError::Api {
                status: 404,
                message: "404 Not found".into(),
            }),
            ..Recording::default()
        });
        let tool = BackendTool::new(&descriptor(), backend);

        let err = tool
            .call(
                ToolContext::new(),
                CallToolRequest::new("getIssue")
                    .arg("projectId", "group/app")
                    .arg("issueIid", 3),
            )
            .await
            .unwrap_err();

        assert_eq!(err, ToolError::backend("GitLab API returned 404: 404 Not found"));
    }
}
