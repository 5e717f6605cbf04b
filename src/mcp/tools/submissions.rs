//! Form submission MCP tools

use futures::future::BoxFuture;
use serde_json::{json, Map, Value};

use super::{ContentBlock, ToolDefinition, ToolResult};
use crate::client::PlatformClient;
use crate::mcp::params::{self, ParamKind, ParamSpec};

pub fn definitions() -> Vec<ToolDefinition> {
    vec![list_submissions_definition(), get_submission_definition()]
}

fn list_submissions_definition() -> ToolDefinition {
    ToolDefinition {
        name: "list-submissions",
        description: "List form submissions for a project, optionally filtered by widget",
        params: vec![
            ParamSpec::required("projectId", "The project ID", ParamKind::String),
            ParamSpec::optional("page", "Page number", ParamKind::Integer, json!(1)),
            ParamSpec::optional("limit", "Results per page", ParamKind::Integer, json!(20)),
            ParamSpec::optional(
                "widgetId",
                "Filter by originating widget ID",
                ParamKind::String,
                json!(""),
            ),
        ],
        handler: list_submissions,
    }
}

fn list_submissions<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let project_id = params::str_arg(args, "projectId");
        let submissions = client
            .list_submissions(
                project_id,
                params::int_arg(args, "page"),
                params::int_arg(args, "limit"),
                params::str_arg(args, "widgetId"),
            )
            .await?;
        Ok(vec![
            ContentBlock::text(format!("Submissions for project {project_id}:")),
            ContentBlock::json(&submissions),
        ])
    })
}

fn get_submission_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get-submission",
        description: "Get a single form submission",
        params: vec![
            ParamSpec::required("projectId", "The project ID", ParamKind::String),
            ParamSpec::required("submissionId", "The submission ID", ParamKind::String),
        ],
        handler: get_submission,
    }
}

fn get_submission<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let project_id = params::str_arg(args, "projectId");
        let submission_id = params::str_arg(args, "submissionId");
        let submission = client.get_submission(project_id, submission_id).await?;
        Ok(vec![
            ContentBlock::text(format!("Submission {submission_id}:")),
            ContentBlock::json(&submission),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_filter_defaults_to_empty() {
        let definition = list_submissions_definition();
        let normalized =
            params::normalize(&definition.params, &json!({"projectId": "p1"})).unwrap();
        assert_eq!(normalized["widgetId"], json!(""));
        assert_eq!(normalized["page"], json!(1));
        assert_eq!(normalized["limit"], json!(20));
    }
}
