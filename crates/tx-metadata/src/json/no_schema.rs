//! Schema-free JSON mapping.
//!
//! Value shape is inferred from the JSON: integers become numbers, strings
//! of the form `0x<lowercase hex>` become bytes, other strings become text,
//! arrays become lists and objects become maps. Object keys are
//! re-interpreted the same way (integer, then hex bytes, then text) and map
//! entries are put into canonical key order.

use serde_json::{Map, Value};

use super::error::JsonSchemaError;
use super::number::{json_integer, json_number};
use crate::canonical::sort_canonical;
use crate::parse::{parse_hex_bytes, parse_signed};
use crate::MetadataValue;

pub fn metadata_value_from_json_no_schema(
    value: &Value,
) -> Result<MetadataValue, JsonSchemaError> {
    match value {
        Value::Null => Err(JsonSchemaError::NullNotAllowed),
        Value::Bool(_) => Err(JsonSchemaError::BoolNotAllowed),
        Value::Number(n) => json_integer(n).map(MetadataValue::Number),
        Value::String(s) => Ok(string_value(s)),
        Value::Array(items) => items
            .iter()
            .map(metadata_value_from_json_no_schema)
            .collect::<Result<Vec<_>, _>>()
            .map(MetadataValue::List),
        Value::Object(fields) => {
            let mut pairs = Vec::with_capacity(fields.len());
            for (key, v) in fields {
                pairs.push((key_value(key), metadata_value_from_json_no_schema(v)?));
            }
            Ok(MetadataValue::Map(sort_canonical(pairs)))
        }
    }
}

pub fn metadata_value_to_json_no_schema(value: &MetadataValue) -> Value {
    match value {
        MetadataValue::Number(n) => Value::Number(json_number(*n)),
        MetadataValue::Bytes(b) => Value::String(hex_string(b)),
        MetadataValue::Text(s) => Value::String(s.clone()),
        MetadataValue::List(items) => {
            Value::Array(items.iter().map(metadata_value_to_json_no_schema).collect())
        }
        MetadataValue::Map(pairs) => {
            let mut out = Map::with_capacity(pairs.len());
            for (k, v) in pairs {
                out.insert(key_string(k), metadata_value_to_json_no_schema(v));
            }
            Value::Object(out)
        }
    }
}

fn string_value(s: &str) -> MetadataValue {
    match parse_hex_bytes(s) {
        Ok(bytes) => MetadataValue::Bytes(bytes),
        Err(_) => MetadataValue::Text(s.to_owned()),
    }
}

fn key_value(key: &str) -> MetadataValue {
    if let Ok(n) = parse_signed(key) {
        return MetadataValue::Number(n);
    }
    string_value(key)
}

// Composite keys are rendered as their own JSON text. Two distinct keys can
// collide this way; the later entry then replaces the earlier one.
fn key_string(key: &MetadataValue) -> String {
    match key {
        MetadataValue::Number(n) => n.to_string(),
        MetadataValue::Bytes(b) => hex_string(b),
        MetadataValue::Text(s) => s.clone(),
        MetadataValue::List(_) | MetadataValue::Map(_) => {
            metadata_value_to_json_no_schema(key).to_string()
        }
    }
}

fn hex_string(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
