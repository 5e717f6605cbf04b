//! Project MCP tools

use futures::future::BoxFuture;
use serde_json::{json, Map, Value};

use super::{ContentBlock, ToolDefinition, ToolResult};
use crate::client::PlatformClient;
use crate::mcp::params::{self, ParamKind, ParamSpec};

pub fn definitions() -> Vec<ToolDefinition> {
    vec![list_projects_definition(), get_project_definition()]
}

fn list_projects_definition() -> ToolDefinition {
    ToolDefinition {
        name: "list-projects",
        description: "List projects with pagination",
        params: vec![
            ParamSpec::optional("page", "Page number", ParamKind::Integer, json!(1)),
            ParamSpec::optional("limit", "Results per page", ParamKind::Integer, json!(20)),
        ],
        handler: list_projects,
    }
}

fn list_projects<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let projects = client
            .list_projects(params::int_arg(args, "page"), params::int_arg(args, "limit"))
            .await?;
        Ok(vec![
            ContentBlock::text("Projects:"),
            ContentBlock::json(&projects),
        ])
    })
}

fn get_project_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get-project",
        description: "Get a project by ID",
        params: vec![ParamSpec::required(
            "projectId",
            "The project ID",
            ParamKind::String,
        )],
        handler: get_project,
    }
}

fn get_project<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let project_id = params::str_arg(args, "projectId");
        let project = client.get_project(project_id).await?;
        Ok(vec![
            ContentBlock::text(format!("Project {project_id}:")),
            ContentBlock::json(&project),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_projects_pagination_defaults() {
        let definition = list_projects_definition();
        let normalized = params::normalize(&definition.params, &json!({})).unwrap();
        assert_eq!(normalized["page"], json!(1));
        assert_eq!(normalized["limit"], json!(20));
    }
}
