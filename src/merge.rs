//! Partial-update merge for widget configuration documents
//!
//! The update tool receives the widget's current `data` document plus a
//! caller-supplied partial document and must combine them before pushing the
//! result back. Two rules shape the combine:
//!
//! - Protected top-level fields are never taken from the patch, whatever the
//!   caller sent. Protection applies only at the top level of the document.
//! - Arrays are replaced wholesale, never merged element-wise.
//!
//! The function is pure: inputs are untouched and identical inputs always
//! produce the identical output, so concurrent invocations for unrelated
//! widgets need no coordination.

use serde_json::{Map, Value};

/// Top-level keys in a widget's `data` document that callers may never
/// overwrite through the update path.
pub const PROTECTED_FIELDS: [&str; 5] = [
    "integrations",
    "notifications",
    "displayRules",
    "emailSettings",
    "payments",
];

/// Merge a partial `next` document into `current`, skipping `protected`
/// top-level keys of `next` entirely.
///
/// Keys absent from `next` are copied through from `current` unchanged.
/// Nested objects merge recursively (with no protection below the top
/// level); arrays and scalars from `next` override unconditionally.
pub fn merge_widget_data(current: &Value, next: &Value, protected: &[&str]) -> Value {
    let mut merged: Map<String, Value> = current.as_object().cloned().unwrap_or_default();

    let Some(patch) = next.as_object() else {
        return Value::Object(merged);
    };

    for (key, value) in patch {
        if protected.contains(&key.as_str()) {
            continue;
        }

        match value {
            // Arrays replace, never combine with the current elements.
            Value::Array(_) => {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(_) => {
                let combined = match merged.get(key) {
                    Some(base @ Value::Object(_)) => merge_widget_data(base, value, &[]),
                    // Type mismatch against `current`: the patch wins.
                    _ => value.clone(),
                };
                merged.insert(key.clone(), combined);
            }
            // Scalars and null override unconditionally.
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    Value::Object(merged)
}
