//! Static platform link MCP tool
//!
//! Resolves a link category to its URL without touching the network.

use futures::future::BoxFuture;
use serde_json::{json, Map, Value};

use super::{ContentBlock, ToolDefinition, ToolResult};
use crate::client::PlatformClient;
use crate::links::LinkType;
use crate::mcp::params::{self, ParamKind, ParamSpec};

pub fn definitions() -> Vec<ToolDefinition> {
    vec![links_definition()]
}

fn links_definition() -> ToolDefinition {
    ToolDefinition {
        name: "links",
        description: "Get a link to a platform page (dashboard, billing, support, ...). \
                      The project-management link contains a {projectId} placeholder to \
                      fill in with a concrete project ID.",
        params: vec![ParamSpec::optional(
            "type",
            "The link category",
            ParamKind::Enum(&LinkType::ALL),
            json!("website"),
        )],
        handler: links,
    }
}

fn links<'a>(
    _client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        // The enum check already constrained the value to a known category.
        let link = LinkType::parse(params::str_arg(args, "type")).unwrap_or(LinkType::Website);
        Ok(vec![
            ContentBlock::text(format!("Platform link ({}):", link.name())),
            ContentBlock::json(&json!({ "type": link.name(), "url": link.url() })),
        ])
    })
}
