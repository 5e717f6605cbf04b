//! MCP (Model Context Protocol) server layer
//!
//! The registry of tool descriptors, the per-tool parameter schemas and the
//! JSON-RPC stdio transport. Tool semantics live in `tools::*`; everything
//! here is routing and validation.

pub mod params;
pub mod server;
pub mod tools;

pub use server::McpServer;
pub use tools::{ContentBlock, ToolDefinition, ToolRegistry};
