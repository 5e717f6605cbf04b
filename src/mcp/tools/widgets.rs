//! Widget MCP tools
//!
//! Fetching, listing, creating and updating widgets, plus widget type and
//! embed helpers. The update tool merges the caller's partial document into
//! the current one under the protected-field policy before pushing it back;
//! merged data is not validated against the widget's full type schema, which
//! is deliberately left to the platform.

use futures::future::BoxFuture;
use serde_json::{json, Map, Value};

use super::{ContentBlock, ToolDefinition, ToolResult};
use crate::client::PlatformClient;
use crate::error::ToolError;
use crate::mcp::params::{self, ParamKind, ParamSpec};
use crate::merge::{merge_widget_data, PROTECTED_FIELDS};

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        get_widget_definition(),
        get_widget_schema_definition(),
        update_widget_definition(),
        get_widget_editor_url_definition(),
        get_widget_embed_code_definition(),
        list_widgets_definition(),
        create_widget_definition(),
        get_widget_types_definition(),
    ]
}

fn pagination_params() -> [ParamSpec; 2] {
    [
        ParamSpec::optional("page", "Page number", ParamKind::Integer, json!(1)),
        ParamSpec::optional("limit", "Results per page", ParamKind::Integer, json!(20)),
    ]
}

fn get_widget_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get-widget",
        description: "Get widget data by ID",
        params: vec![ParamSpec::required(
            "widgetId",
            "The widget ID",
            ParamKind::String,
        )],
        handler: get_widget,
    }
}

fn get_widget<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let widget_id = params::str_arg(args, "widgetId");
        let widget = client.get_widget(widget_id).await?;

        let widget_type = widget
            .get("type")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        let data = widget.get("data").cloned().unwrap_or(Value::Null);

        Ok(vec![
            ContentBlock::text(format!("Widget type: {widget_type}\nWidget data:")),
            ContentBlock::json(&data),
        ])
    })
}

fn get_widget_schema_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get-widget-schema",
        description: "Get the widget schema by type before updating widget data",
        params: vec![ParamSpec::required(
            "widgetType",
            "The widget type",
            ParamKind::String,
        )],
        handler: get_widget_schema,
    }
}

fn get_widget_schema<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let widget_type = params::str_arg(args, "widgetType");
        let schema = client.get_widget_schema(widget_type).await?;
        Ok(vec![
            ContentBlock::text(format!("Schema for widget type {widget_type}:")),
            ContentBlock::json(&schema),
        ])
    })
}

fn update_widget_definition() -> ToolDefinition {
    ToolDefinition {
        name: "update-widget",
        description: "Merge current widget data with new partial widget data and save it",
        params: vec![
            ParamSpec::required("widgetId", "The widget ID", ParamKind::String),
            ParamSpec::required(
                "currentWidgetData",
                "The widget's current data document",
                ParamKind::Object,
            ),
            ParamSpec::required(
                "nextWidgetData",
                "Partial data document to merge in",
                ParamKind::Object,
            ),
        ],
        handler: update_widget,
    }
}

fn update_widget<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let widget_id = params::str_arg(args, "widgetId");
        let current = params::obj_arg(args, "currentWidgetData");
        let next = params::obj_arg(args, "nextWidgetData");

        if current.as_object().map_or(true, |m| m.is_empty()) {
            return Err(ToolError::Logic(
                "current widget data is required to merge against".to_string(),
            ));
        }

        let merged = merge_widget_data(current, next, &PROTECTED_FIELDS);
        client.update_widget(widget_id, &merged).await?;

        Ok(vec![
            ContentBlock::text("Widget updated successfully"),
            ContentBlock::json(&merged),
        ])
    })
}

fn get_widget_editor_url_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get-widget-editor-url",
        description: "Get the URL of the widget editor for a widget",
        params: vec![ParamSpec::required(
            "widgetId",
            "The widget ID",
            ParamKind::String,
        )],
        handler: get_widget_editor_url,
    }
}

fn get_widget_editor_url<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let widget_id = params::str_arg(args, "widgetId");
        let editor = client.get_widget_editor_url(widget_id).await?;
        Ok(vec![
            ContentBlock::text("Widget editor URL:"),
            ContentBlock::json(&editor),
        ])
    })
}

fn get_widget_embed_code_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get-widget-embed-code",
        description: "Get the embed code snippet for a widget",
        params: vec![ParamSpec::required(
            "widgetId",
            "The widget ID",
            ParamKind::String,
        )],
        handler: get_widget_embed_code,
    }
}

fn get_widget_embed_code<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let widget_id = params::str_arg(args, "widgetId");
        let embed = client.get_widget_embed_code(widget_id).await?;
        Ok(vec![
            ContentBlock::text("Widget embed code:"),
            ContentBlock::json(&embed),
        ])
    })
}

fn list_widgets_definition() -> ToolDefinition {
    let mut params: Vec<ParamSpec> = pagination_params().into();
    params.extend([
        ParamSpec::optional(
            "projectId",
            "Filter by owning project ID",
            ParamKind::String,
            json!(""),
        ),
        ParamSpec::optional(
            "search",
            "Search widgets by name",
            ParamKind::String,
            json!(""),
        ),
        ParamSpec::optional(
            "type",
            "Filter by widget type",
            ParamKind::String,
            json!(""),
        ),
    ]);
    ToolDefinition {
        name: "list-widgets",
        description: "List widgets with pagination and optional filters",
        params,
        handler: list_widgets,
    }
}

fn list_widgets<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let widgets = client
            .list_widgets(
                params::int_arg(args, "page"),
                params::int_arg(args, "limit"),
                params::str_arg(args, "projectId"),
                params::str_arg(args, "search"),
                params::str_arg(args, "type"),
            )
            .await?;
        Ok(vec![
            ContentBlock::text("Widgets:"),
            ContentBlock::json(&widgets),
        ])
    })
}

fn create_widget_definition() -> ToolDefinition {
    ToolDefinition {
        name: "create-widget",
        description: "Create a new widget (created in draft status)",
        params: vec![
            ParamSpec::required("widgetType", "The widget type", ParamKind::String),
            ParamSpec::required(
                "widgetData",
                "Initial widget data document",
                ParamKind::Object,
            ),
            ParamSpec::optional(
                "name",
                "Display name for the widget",
                ParamKind::String,
                json!("My Widget"),
            ),
            ParamSpec::optional(
                "projectId",
                "Owning project ID",
                ParamKind::String,
                json!(""),
            ),
        ],
        handler: create_widget,
    }
}

fn create_widget<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let created = client
            .create_widget(
                params::str_arg(args, "widgetType"),
                params::obj_arg(args, "widgetData"),
                params::str_arg(args, "name"),
                params::str_arg(args, "projectId"),
            )
            .await?;
        Ok(vec![
            ContentBlock::text("Widget created:"),
            ContentBlock::json(&created),
        ])
    })
}

fn get_widget_types_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get-widget-types",
        description: "List the available widget types",
        params: Vec::new(),
        handler: get_widget_types,
    }
}

fn get_widget_types<'a>(
    client: &'a PlatformClient,
    _args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let types = client.get_widget_types().await?;
        Ok(vec![
            ContentBlock::text("Widget types:"),
            ContentBlock::json(&types),
        ])
    })
}
