//! Widget analytics MCP tool
//!
//! Analytics are queried at widget level only, over a time range with a
//! breakdown granularity and an optional event-name filter.

use futures::future::BoxFuture;
use serde_json::{json, Map, Value};

use super::{ContentBlock, ToolDefinition, ToolResult};
use crate::client::PlatformClient;
use crate::mcp::params::{self, ParamKind, ParamSpec};

/// Supported breakdown granularities.
pub const BREAKDOWNS: [&str; 3] = ["day", "week", "month"];

pub fn definitions() -> Vec<ToolDefinition> {
    vec![get_widget_analytics_definition()]
}

fn get_widget_analytics_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get-widget-analytics",
        description: "Get aggregated usage analytics for a widget",
        params: vec![
            ParamSpec::required("widgetId", "The widget ID", ParamKind::String),
            ParamSpec::optional(
                "from",
                "Start of the time range (ISO date)",
                ParamKind::String,
                json!(""),
            ),
            ParamSpec::optional(
                "to",
                "End of the time range (ISO date)",
                ParamKind::String,
                json!(""),
            ),
            ParamSpec::optional(
                "breakdown",
                "Aggregation granularity",
                ParamKind::Enum(&BREAKDOWNS),
                json!("day"),
            ),
            ParamSpec::optional(
                "events",
                "Restrict to these event names",
                ParamKind::StringArray,
                json!([]),
            ),
        ],
        handler: get_widget_analytics,
    }
}

fn get_widget_analytics<'a>(
    client: &'a PlatformClient,
    args: &'a Map<String, Value>,
) -> BoxFuture<'a, ToolResult> {
    Box::pin(async move {
        let widget_id = params::str_arg(args, "widgetId");
        let analytics = client
            .get_widget_analytics(
                widget_id,
                params::str_arg(args, "from"),
                params::str_arg(args, "to"),
                params::str_arg(args, "breakdown"),
                &params::str_array_arg(args, "events"),
            )
            .await?;
        Ok(vec![
            ContentBlock::text(format!("Analytics for widget {widget_id}:")),
            ContentBlock::json(&analytics),
        ])
    })
}
