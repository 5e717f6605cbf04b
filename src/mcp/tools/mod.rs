//! MCP tool registry and dispatch
//!
//! Each tool module contributes `ToolDefinition`s carrying a name, a
//! description, a parameter table and an async handler. The registry is
//! built once at startup and read-only afterwards. Dispatch looks the tool
//! up, normalizes the raw arguments against its parameter table and only
//! then runs the handler, so unknown names and invalid arguments never
//! reach the network.

pub mod analytics;
pub mod contacts;
pub mod links;
pub mod projects;
pub mod submissions;
pub mod widgets;

use std::collections::HashMap;

use futures::future::BoxFuture;
use serde::Serialize;
use serde_json::{json, Map, Value};

use super::params::{self, ParamSpec};
use crate::client::PlatformClient;
use crate::error::{ConfigError, ToolError};

/// One unit of tool output sent back to the MCP client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }

    /// Pretty-printed JSON payload block.
    pub fn json(value: &Value) -> Self {
        Self::text(serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string()))
    }
}

pub type ToolResult = Result<Vec<ContentBlock>, ToolError>;

/// Async tool handler, invoked with normalized arguments only.
pub type ToolHandler =
    for<'a> fn(&'a PlatformClient, &'a Map<String, Value>) -> BoxFuture<'a, ToolResult>;

/// Tool descriptor: unique name, description, parameter table, handler.
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub params: Vec<ParamSpec>,
    pub handler: ToolHandler,
}

/// Registry of available MCP tools.
pub struct ToolRegistry {
    client: PlatformClient,
    tools: Vec<ToolDefinition>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build the registry with the full tool catalogue.
    pub fn new(client: PlatformClient) -> Result<Self, ConfigError> {
        let mut registry = Self {
            client,
            tools: Vec::new(),
            index: HashMap::new(),
        };
        for definition in widgets::definitions()
            .into_iter()
            .chain(projects::definitions())
            .chain(contacts::definitions())
            .chain(submissions::definitions())
            .chain(analytics::definitions())
            .chain(links::definitions())
        {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Register one tool. Duplicate names are a fatal configuration error.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), ConfigError> {
        if self.index.contains_key(definition.name) {
            return Err(ConfigError::DuplicateTool(definition.name.to_string()));
        }
        self.index.insert(definition.name, self.tools.len());
        self.tools.push(definition);
        Ok(())
    }

    /// List all tools in MCP `tools/list` format.
    pub fn list_tools(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name,
                    "description": tool.description,
                    "inputSchema": params::input_schema(&tool.params),
                })
            })
            .collect()
    }

    /// Dispatch a tool call: look up, validate, run the handler.
    pub async fn call_tool(&self, name: &str, raw_args: &Value) -> ToolResult {
        let definition = self
            .index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        let args = params::normalize(&definition.params, raw_args)?;

        log::debug!("calling tool: {}", name);
        (definition.handler)(&self.client, &args).await
    }
}
