//! CRM contact MCP tools
//!
//! Read-only: contacts are listed and fetched per project, never written.

use futures::future::BoxFuture;
use serde_json::{json, Map, Value};

use super::{ContentBlock, ToolDefinition, ToolResult};
use crate::client::PlatformClient;
use crate::mcp::params::{self, ParamKind, ParamSpec};

pub fn definitions() -> Vec<ToolDefinition> {
    vec![list_contacts_definition(), get_contact_definition()]
}

fn list_contacts_definition() -> ToolDefinition {
    ToolDefinition {
        name: "list-contacts",
        description: "List CRM contacts for a project with pagination",
        params: vec![
            ParamSpec::required("projectId", "The project ID", ParamKind::String),
            ParamSpec::optional("page", "Page number", ParamKind::Integer, json!(1)),
            ParamSpec::optional("limit", "Results per page", ParamKind::Integer, json!(20)),
        ],
        handler: list_contacts,
    }
}

fn list_contacts<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let project_id = params::str_arg(args, "projectId");
        let contacts = client
            .list_contacts(
                project_id,
                params::int_arg(args, "page"),
                params::int_arg(args, "limit"),
            )
            .await?;
        Ok(vec![
            ContentBlock::text(format!("Contacts for project {project_id}:")),
            ContentBlock::json(&contacts),
        ])
    })
}

fn get_contact_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get-contact",
        description: "Get a single CRM contact",
        params: vec![
            ParamSpec::required("projectId", "The project ID", ParamKind::String),
            ParamSpec::required("contactId", "The contact ID", ParamKind::String),
        ],
        handler: get_contact,
    }
}

fn get_contact<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let project_id = params::str_arg(args, "projectId");
        let contact_id = params::str_arg(args, "contactId");
        let contact = client.get_contact(project_id, contact_id).await?;
        Ok(vec![
            ContentBlock::text(format!("Contact {contact_id}:")),
            ContentBlock::json(&contact),
        ])
    })
}
