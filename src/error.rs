//! Error Taxonomy
//!
//! Recoverable data-shape inconsistencies (missing fields, unparseable
//! numbers) are absorbed where they occur. The only caller-visible error
//! class is structural: the candidate payload itself has the wrong shape,
//! which must stay distinct from an ordinary "no match" result.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// The candidate payload was not a JSON array of records.
    #[error("expected a JSON array of records, got {kind}")]
    NotAnArray { kind: &'static str },
}

/// Human-readable JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
