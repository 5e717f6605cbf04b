//! Declarative tool parameter schemas and argument normalization
//!
//! Each tool declares its parameters once as a table of `ParamSpec`s. The
//! same table renders the MCP `inputSchema` for `tools/list` and normalizes
//! raw caller arguments before a handler runs: missing required parameters
//! and type mismatches fail naming the parameter, missing optional
//! parameters take their declared default. Normalization is a pure function
//! of the schema and the raw arguments.

use crate::error::ToolError;
use serde_json::{json, Map, Value};

/// Parameter type accepted by a tool.
#[derive(Debug, Clone)]
pub enum ParamKind {
    /// UTF-8 string
    String,
    /// Positive integer (pagination and the like)
    Integer,
    /// Schema-free JSON object, passed through without shape checks
    Object,
    /// Array of strings
    StringArray,
    /// String restricted to a fixed set of values
    Enum(&'static [&'static str]),
}

/// One named tool parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<Value>,
}

impl ParamSpec {
    pub fn required(name: &'static str, description: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: true,
            default: None,
        }
    }

    pub fn optional(
        name: &'static str,
        description: &'static str,
        kind: ParamKind,
        default: Value,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
            default: Some(default),
        }
    }

    /// Type-check one supplied value against this parameter.
    fn check(&self, value: &Value) -> Result<Value, ToolError> {
        match &self.kind {
            ParamKind::String => value
                .as_str()
                .map(|s| Value::String(s.to_string()))
                .ok_or_else(|| ToolError::validation(self.name, "expected a string")),
            ParamKind::Integer => match value.as_u64() {
                Some(n) if n >= 1 => Ok(json!(n)),
                _ => Err(ToolError::validation(
                    self.name,
                    "expected a positive integer",
                )),
            },
            ParamKind::Object => {
                if value.is_object() {
                    Ok(value.clone())
                } else {
                    Err(ToolError::validation(self.name, "expected an object"))
                }
            }
            ParamKind::StringArray => {
                let items = value
                    .as_array()
                    .ok_or_else(|| ToolError::validation(self.name, "expected an array of strings"))?;
                let mut strings = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(s) => strings.push(Value::String(s.to_string())),
                        None => {
                            return Err(ToolError::validation(
                                self.name,
                                "expected an array of strings",
                            ))
                        }
                    }
                }
                Ok(Value::Array(strings))
            }
            ParamKind::Enum(allowed) => {
                let s = value
                    .as_str()
                    .ok_or_else(|| ToolError::validation(self.name, "expected a string"))?;
                if allowed.contains(&s) {
                    Ok(Value::String(s.to_string()))
                } else {
                    Err(ToolError::validation(
                        self.name,
                        format!("must be one of: {}", allowed.join(", ")),
                    ))
                }
            }
        }
    }
}

/// Normalize raw caller arguments against a parameter table.
pub fn normalize(specs: &[ParamSpec], raw: &Value) -> Result<Map<String, Value>, ToolError> {
    let empty = Map::new();
    let raw = match raw {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => return Err(ToolError::validation("arguments", "expected a JSON object")),
    };

    let mut normalized = Map::new();
    for spec in specs {
        let value = match raw.get(spec.name) {
            Some(value) if !value.is_null() => spec.check(value)?,
            _ if spec.required => {
                return Err(ToolError::validation(spec.name, "missing required parameter"))
            }
            _ => spec.default.clone().unwrap_or(Value::Null),
        };
        normalized.insert(spec.name.to_string(), value);
    }
    Ok(normalized)
}

/// Render the MCP `inputSchema` for a parameter table.
pub fn input_schema(specs: &[ParamSpec]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for spec in specs {
        let mut property = match &spec.kind {
            ParamKind::String => json!({ "type": "string" }),
            ParamKind::Integer => json!({ "type": "integer", "minimum": 1 }),
            ParamKind::Object => json!({ "type": "object", "additionalProperties": true }),
            ParamKind::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
            ParamKind::Enum(allowed) => json!({ "type": "string", "enum": allowed }),
        };
        property["description"] = json!(spec.description);
        if let Some(default) = &spec.default {
            property["default"] = default.clone();
        }
        properties.insert(spec.name.to_string(), property);
        if spec.required {
            required.push(spec.name);
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

// Accessors for normalized argument bags. Normalization has already filled
// every declared parameter, so these take the declared shape for granted.

pub fn str_arg<'a>(args: &'a Map<String, Value>, name: &str) -> &'a str {
    args.get(name).and_then(|v| v.as_str()).unwrap_or("")
}

pub fn int_arg(args: &Map<String, Value>, name: &str) -> u64 {
    args.get(name).and_then(|v| v.as_u64()).unwrap_or(1)
}

pub fn obj_arg<'a>(args: &'a Map<String, Value>, name: &str) -> &'a Value {
    args.get(name).unwrap_or(&Value::Null)
}

pub fn str_array_arg(args: &Map<String, Value>, name: &str) -> Vec<String> {
    args.get(name)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}
