//! Error taxonomy for the gateway
//!
//! `ConfigError` is fatal and raised before the server accepts any request.
//! `ToolError` covers everything that can go wrong inside one tool
//! invocation; it is caught at the dispatch boundary and converted into an
//! error content block, never propagated as an unhandled fault.

use thiserror::Error;

/// Startup configuration failures. Fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("duplicate tool registration: {0}")]
    DuplicateTool(String),
}

/// Failures of a single tool invocation.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The requested tool name is not registered. No remote call is made.
    #[error("unknown tool: {0}")]
    NotFound(String),

    /// Caller arguments failed schema validation. No remote call is made.
    #[error("invalid argument `{field}`: {message}")]
    Validation { field: String, message: String },

    /// The platform API answered with a non-success status.
    #[error("platform API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The remote call could not complete at all.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A local, operation-specific precondition failed.
    #[error("{0}")]
    Logic(String),
}

impl ToolError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = ToolError::validation("page", "expected a positive integer");
        assert_eq!(
            err.to_string(),
            "invalid argument `page`: expected a positive integer"
        );
    }

    #[test]
    fn test_upstream_message_carries_status_and_body() {
        let err = ToolError::Upstream {
            status: 404,
            body: "{\"message\":\"widget not found\"}".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("widget not found"));
    }
}
