use std::sync::Arc;

use serde_json::json;
use toolset_discovery::{DiscoveryManager, ENABLE_TOOLSET, LIST_AVAILABLE_TOOLSETS};
use toolset_primitives::{ToolDescriptor, ToolsetName};
use toolset_registry::{ToolServer, ToolTransport, Toolset, ToolsetGroup};
use toolset_tools::{CallToolRequest, CallToolResult, ServerTool, ToolContext};

fn tool(descriptor: ToolDescriptor) -> ServerTool {
    let name = descriptor.name().to_string();
    ServerTool::new(descriptor, move |_ctx: ToolContext, _req: CallToolRequest| {
        let name = name.clone();
        async move { Ok(CallToolResult::text(format!("{name} ok"))) }
    })
}

fn issues() -> Toolset {
    Toolset::new(
        ToolsetName::new("issues").unwrap(),
        "Tools for CRUD operations on GitLab issues, comments, labels.",
    )
    .with_read_tools([tool(ToolDescriptor::read("getIssue", "Get an issue").unwrap())])
    .with_write_tools([tool(
        ToolDescriptor::write("createIssue", "Create an issue").unwrap(),
    )])
}

fn users() -> Toolset {
    Toolset::new(
        ToolsetName::new("users").unwrap(),
        "Tools for looking up GitLab user information.",
    )
}

fn dynamic_setup(read_only: bool) -> (Arc<ToolsetGroup>, Arc<ToolServer>, DiscoveryManager) {
    let group = Arc::new(ToolsetGroup::new(read_only));
    group.add_toolset(issues());
    group.add_toolset(users());

    let server = Arc::new(ToolServer::new());
    let transport: Arc<dyn ToolTransport> = server.clone();
    let manager = DiscoveryManager::new(Arc::clone(&group), transport);
    manager.set_dynamic_mode(true);
    manager.publish().expect("publish");
    (group, server, manager)
}

async fn call(server: &ToolServer, request: CallToolRequest) -> CallToolResult {
    server
        .call_tool(ToolContext::new(), request)
        .await
        .expect("tool call")
}

#[tokio::test]
async fn list_reports_every_toolset() {
    let (_group, server, _manager) = dynamic_setup(false);

    let result = call(&server, CallToolRequest::new(LIST_AVAILABLE_TOOLSETS)).await;
    assert!(!result.is_error());
    assert_eq!(
        result.text_content(),
        "Available Toolsets (2):\n\
         - issues: Tools for CRUD operations on GitLab issues, comments, labels. [2 tools] (disabled)\n\
         - users: Tools for looking up GitLab user information. [0 tools] (disabled)\n"
    );
}

#[tokio::test]
async fn enable_binds_toolset_tools_on_demand() {
    let (group, server, _manager) = dynamic_setup(false);
    assert_eq!(server.tool_names(), [LIST_AVAILABLE_TOOLSETS, ENABLE_TOOLSET]);

    let result = call(
        &server,
        CallToolRequest::new(ENABLE_TOOLSET).arg("toolset", "issues"),
    )
    .await;
    assert!(!result.is_error(), "{}", result.text_content());
    assert_eq!(
        result.text_content(),
        "Successfully enabled toolset 'issues'. Tools are now available."
    );

    assert_eq!(
        server.tool_names(),
        [LIST_AVAILABLE_TOOLSETS, ENABLE_TOOLSET, "getIssue", "createIssue"]
    );
    assert!(group.list_toolsets()[0].enabled);

    let result = call(&server, CallToolRequest::new("createIssue")).await;
    assert_eq!(result.text_content(), "createIssue ok");
}

#[tokio::test]
async fn enabling_twice_is_reported_to_the_client() {
    let (_group, server, _manager) = dynamic_setup(false);
    let request = CallToolRequest::with_arguments(ENABLE_TOOLSET, json!({ "toolset": "issues" }));

    call(&server, request.clone()).await;
    let result = call(&server, request).await;

    assert!(result.is_error());
    assert_eq!(
        result.text_content(),
        "Failed to enable toolset 'issues': toolset 'issues' already enabled"
    );
}

#[tokio::test]
async fn enable_rejects_unknown_and_malformed_requests() {
    let (group, server, _manager) = dynamic_setup(false);

    let result = call(
        &server,
        CallToolRequest::new(ENABLE_TOOLSET).arg("toolset", "wiki"),
    )
    .await;
    assert!(result.is_error());
    assert_eq!(
        result.text_content(),
        "Failed to enable toolset 'wiki': toolset 'wiki' not found"
    );

    let result = call(&server, CallToolRequest::new(ENABLE_TOOLSET)).await;
    assert!(result.is_error());
    assert_eq!(result.text_content(), "Missing required parameter: toolset");

    let result = call(&server, CallToolRequest::new(ENABLE_TOOLSET).arg("toolset", true)).await;
    assert_eq!(result.text_content(), "Parameter 'toolset' must be a string");

    assert!(group.list_toolsets().iter().all(|info| !info.enabled));
    assert_eq!(server.len(), 2);
}

#[tokio::test]
async fn read_only_group_exposes_only_reads_after_enable() {
    let (_group, server, _manager) = dynamic_setup(true);

    call(
        &server,
        CallToolRequest::new(ENABLE_TOOLSET).arg("toolset", "issues"),
    )
    .await;

    assert!(server.contains("getIssue"));
    assert!(!server.contains("createIssue"));
}

#[tokio::test]
async fn enable_after_transport_dropped_reports_failure() {
    let group = Arc::new(ToolsetGroup::new(false));
    group.add_toolset(issues());

    let server = Arc::new(ToolServer::new());
    let manager = DiscoveryManager::new(Arc::clone(&group), server.clone());
    manager.register_discovery_tools().unwrap();

    let enable = server.get(ENABLE_TOOLSET).expect("bound");
    drop(manager);
    drop(server);

    let result = enable
        .call(
            ToolContext::new(),
            CallToolRequest::new(ENABLE_TOOLSET).arg("toolset", "issues"),
        )
        .await
        .unwrap();
    assert!(result.is_error());
    assert!(result.text_content().contains("transport is no longer available"));
}
