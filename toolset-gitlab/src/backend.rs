//! Remote API collaborator that GitLab tools forward to.

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Result alias used by backends.
pub type BackendResult<T> = Result<T, BackendError>;

/// Failures reported by a [`GitLabBackend`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// No client credentials or host are available.
    #[error("GitLab client not configured: {reason}")]
    Configuration {
        /// Additional context for the failure.
        reason: String,
    },

    /// The API answered with a non-success status.
    #[error("GitLab API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the response body.
        message: String,
    },
}

/// Executes GitLab operations on behalf of catalog tools.
///
/// `operation` is the tool name and `arguments` the validated request
/// arguments. Implementations own authentication, project resolution and
/// response shaping.
#[async_trait]
pub trait GitLabBackend: Send + Sync {
    /// Performs `operation` and returns its JSON payload.
    async fn execute(&self, operation: &str, arguments: &Map<String, Value>) -> BackendResult<Value>;
}

/// Backend that never contacts GitLab and echoes each call back.
///
/// Useful for inspecting the catalog without credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

#[async_trait]
impl GitLabBackend for OfflineBackend {
    async fn execute(&self, operation: &str, arguments: &Map<String, Value>) -> BackendResult<Value> {
        Ok(json!({
            "operation": operation,
            "arguments": arguments,
            "dryRun": true,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_backend_echoes_call() {
        let mut arguments = Map::new();
        arguments.insert("projectId".into(), json!("group/app"));

        let value = OfflineBackend.execute("getProject", &arguments).await.unwrap();

        assert_eq!(value["operation"], "getProject");
        assert_eq!(value["arguments"]["projectId"], "group/app");
        assert_eq!(value["dryRun"], true);
    }

    #[test]
    fn error_messages_carry_context() {
        let err = BackendError::Api {
            status: 404,
            message: "404 Project Not Found".into(),
        };
        assert_eq!(err.to_string(), "GitLab API returned 404: 404 Project Not Found");
        assert_eq!(
            BackendError::Configuration {
                reason: "missing token".into()
            }
            .to_string(),
            "GitLab client not configured: missing token"
        );
    }
}
