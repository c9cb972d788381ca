//! Builds the GitLab toolset catalog the way a server would at startup and
//! prints the tools it ends up exposing.
//!
//! Configuration comes from `GITLAB_*` environment variables; command-line
//! flags override them. Logs go to stderr or the configured log file, so
//! stdout carries only the JSON output.
//!
//! ```bash
//! gitlab-toolsets --toolsets issues,merge_requests --read-only
//! gitlab-toolsets --dynamic-toolsets --call enable_toolset --args '{"toolset":"projects"}'
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use toolset_config::StartupArgs;
use toolset_discovery::{DiscoveryManager, format_toolset_listing};
use toolset_gitlab::{GitLabBackend, OfflineBackend, init_toolsets};
use toolset_registry::{ToolServer, ToolTransport};
use toolset_tools::{CallToolRequest, ToolContext};
use tracing::info;

/// Inspect the GitLab MCP toolset catalog
#[derive(Parser, Debug)]
#[command(name = "gitlab-toolsets")]
#[command(version)]
struct Args {
    #[command(flatten)]
    startup: StartupArgs,

    /// Print the toolset listing before the tool descriptors
    #[arg(long)]
    list: bool,

    /// Invoke this tool after publishing
    #[arg(long)]
    call: Option<String>,

    /// JSON object passed as the tool's arguments
    #[arg(long, default_value = "{}", requires = "call")]
    args: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.startup.into_config();
    toolset_telemetry::init(&config.log)?;

    info!(
        toolsets = %config.toolsets,
        read_only = config.read_only,
        dynamic = config.dynamic_toolsets,
        "starting GitLab toolset catalog"
    );

    let backend: Arc<dyn GitLabBackend> = Arc::new(OfflineBackend);
    let group = Arc::new(init_toolsets(&config, backend)?);
    let server = Arc::new(ToolServer::new());
    let transport: Arc<dyn ToolTransport> = server.clone();

    let manager = DiscoveryManager::new(Arc::clone(&group), transport);
    manager.set_dynamic_mode(config.dynamic_toolsets);
    let bound = manager.publish()?;
    info!(bound, "tools published");

    if args.list {
        print!("{}", format_toolset_listing(&group.list_toolsets()));
    }

    if let Some(name) = &args.call {
        let arguments = serde_json::from_str(&args.args).context("--args must be a JSON object")?;
        let request = CallToolRequest::with_arguments(name.clone(), arguments);
        let result = server.call_tool(ToolContext::new(), request).await?;
        info!(tool = %name, is_error = result.is_error(), "tool call finished");
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    println!("{}", serde_json::to_string_pretty(&server.tools())?);
    Ok(())
}
