use serde_json::Value;
use thiserror::Error;

use crate::RangeError;

/// A JSON value that does not fit the selected schema.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JsonSchemaError {
    #[error("JSON null values are not supported")]
    NullNotAllowed,
    #[error("JSON bool values are not supported")]
    BoolNotAllowed,
    #[error("JSON numbers must be integers, found {0}")]
    NumberNotInteger(f64),
    #[error("JSON integer {0} is too large")]
    NumberTooLarge(String),
    #[error("expected a JSON object, found {0}")]
    NotObject(Value),
    #[error(
        "expected a JSON object with a single field named one of int, bytes, string, list or map, found fields: {}",
        field_names(.0)
    )]
    BadObject(Vec<(String, Value)>),
    #[error("expected a JSON object with exactly the fields \"k\" and \"v\", found {0}")]
    BadMapPair(Value),
    #[error("field \"{expected}\" has a value of the wrong type: {found}")]
    TypeMismatch { expected: &'static str, found: Value },
}

fn field_names(fields: &[(String, Value)]) -> String {
    if fields.is_empty() {
        return "none".to_owned();
    }
    fields
        .iter()
        .map(|(name, _)| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure to turn a whole JSON document into metadata.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetadataJsonError {
    #[error("invalid JSON: {0}")]
    Json(String),
    #[error("the JSON metadata top level must be an object mapping labels to values")]
    ToplevelNotMap,
    #[error("the JSON metadata top level keys must be unsigned 64-bit integers, found {0:?}")]
    ToplevelBadKey(String),
    #[error("JSON schema error within the metadata value at label {key}: {error}")]
    Schema { key: u64, error: JsonSchemaError },
    #[error("value out of range within the metadata value at label {key}: {error}")]
    Range { key: u64, error: RangeError },
}
