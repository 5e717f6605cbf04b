// Widgetd - MCP gateway for the widget platform API
// Exposes widgets, projects, CRM records and analytics as structured tools.

pub mod client;
pub mod config;
pub mod error;
pub mod links;
pub mod mcp;
pub mod merge;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use client::PlatformClient;
pub use config::Config;
pub use error::{ConfigError, ToolError};
