//! Tagged JSON mapping.
//!
//! Every value is a single-field object naming its variant:
//!
//! ```json
//! {"map": [{"k": {"string": "key"}, "v": {"list": [{"int": 1}, {"bytes": "cafe"}]}}]}
//! ```
//!
//! The mapping is lossless in both directions and keeps list and map
//! entry order exactly.

use serde_json::{Map, Value};

use super::error::JsonSchemaError;
use super::number::{json_integer, json_number};
use crate::MetadataValue;

pub fn metadata_value_from_json_detailed(
    value: &Value,
) -> Result<MetadataValue, JsonSchemaError> {
    let fields = match value {
        Value::Object(fields) => fields,
        other => return Err(JsonSchemaError::NotObject(other.clone())),
    };
    let mut iter = fields.iter();
    let (tag, inner) = match (iter.next(), iter.next()) {
        (Some(field), None) => field,
        _ => return Err(bad_object(fields)),
    };
    match (tag.as_str(), inner) {
        ("int", Value::Number(n)) => json_integer(n).map(MetadataValue::Number),
        ("bytes", Value::String(s)) => hex::decode(s)
            .map(MetadataValue::Bytes)
            .map_err(|_| mismatch("bytes", inner)),
        ("string", Value::String(s)) => Ok(MetadataValue::Text(s.clone())),
        ("list", Value::Array(items)) => items
            .iter()
            .map(metadata_value_from_json_detailed)
            .collect::<Result<Vec<_>, _>>()
            .map(MetadataValue::List),
        ("map", Value::Array(items)) => items
            .iter()
            .map(map_pair_from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(MetadataValue::Map),
        ("int", _) => Err(mismatch("int", inner)),
        ("bytes", _) => Err(mismatch("bytes", inner)),
        ("string", _) => Err(mismatch("string", inner)),
        ("list", _) => Err(mismatch("list", inner)),
        ("map", _) => Err(mismatch("map", inner)),
        _ => Err(bad_object(fields)),
    }
}

fn map_pair_from_json(pair: &Value) -> Result<(MetadataValue, MetadataValue), JsonSchemaError> {
    let fields = match pair {
        Value::Object(fields) if fields.len() == 2 => fields,
        other => return Err(JsonSchemaError::BadMapPair(other.clone())),
    };
    match (fields.get("k"), fields.get("v")) {
        (Some(k), Some(v)) => Ok((
            metadata_value_from_json_detailed(k)?,
            metadata_value_from_json_detailed(v)?,
        )),
        _ => Err(JsonSchemaError::BadMapPair(pair.clone())),
    }
}

pub fn metadata_value_to_json_detailed(value: &MetadataValue) -> Value {
    let (tag, inner) = match value {
        MetadataValue::Number(n) => ("int", Value::Number(json_number(*n))),
        MetadataValue::Bytes(b) => ("bytes", Value::String(hex::encode(b))),
        MetadataValue::Text(s) => ("string", Value::String(s.clone())),
        MetadataValue::List(items) => (
            "list",
            Value::Array(items.iter().map(metadata_value_to_json_detailed).collect()),
        ),
        MetadataValue::Map(pairs) => (
            "map",
            Value::Array(
                pairs
                    .iter()
                    .map(|(k, v)| {
                        let mut pair = Map::with_capacity(2);
                        pair.insert("k".to_owned(), metadata_value_to_json_detailed(k));
                        pair.insert("v".to_owned(), metadata_value_to_json_detailed(v));
                        Value::Object(pair)
                    })
                    .collect(),
            ),
        ),
    };
    let mut out = Map::with_capacity(1);
    out.insert(tag.to_owned(), inner);
    Value::Object(out)
}

fn bad_object(fields: &Map<String, Value>) -> JsonSchemaError {
    JsonSchemaError::BadObject(
        fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    )
}

fn mismatch(expected: &'static str, found: &Value) -> JsonSchemaError {
    JsonSchemaError::TypeMismatch {
        expected,
        found: found.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_every_tag() {
        let value = json!({"map": [
            {"k": {"string": "key"}, "v": {"list": [{"int": -1}, {"bytes": "CAFE"}]}},
            {"k": {"int": 1}, "v": {"map": []}}
        ]});
        assert_eq!(
            metadata_value_from_json_detailed(&value),
            Ok(MetadataValue::Map(vec![
                (
                    MetadataValue::text("key"),
                    MetadataValue::List(vec![
                        MetadataValue::Number(-1),
                        MetadataValue::bytes(vec![0xca, 0xfe])
                    ])
                ),
                (MetadataValue::Number(1), MetadataValue::Map(vec![])),
            ]))
        );
    }

    #[test]
    fn map_order_is_preserved() {
        let value = MetadataValue::Map(vec![
            (MetadataValue::text("z"), 1i64.into()),
            (MetadataValue::Number(1000), 2i64.into()),
            (MetadataValue::Number(0), 3i64.into()),
        ]);
        let json = metadata_value_to_json_detailed(&value);
        assert_eq!(
            json,
            json!({"map": [
                {"k": {"string": "z"}, "v": {"int": 1}},
                {"k": {"int": 1000}, "v": {"int": 2}},
                {"k": {"int": 0}, "v": {"int": 3}}
            ]})
        );
        assert_eq!(metadata_value_from_json_detailed(&json), Ok(value));
    }

    #[test]
    fn non_integer_int() {
        assert_eq!(
            metadata_value_from_json_detailed(&json!({"int": 3.5})),
            Err(JsonSchemaError::NumberNotInteger(3.5))
        );
    }

    #[test]
    fn unknown_field_is_reported() {
        let err = metadata_value_from_json_detailed(&json!({"foo": 1})).unwrap_err();
        assert_eq!(
            err,
            JsonSchemaError::BadObject(vec![("foo".to_owned(), json!(1))])
        );
        let message = err.to_string();
        assert!(message.contains("\"foo\""));
        for name in ["int", "bytes", "string", "list", "map"] {
            assert!(message.contains(name), "{message} should mention {name}");
        }
    }

    #[test]
    fn shape_errors() {
        assert_eq!(
            metadata_value_from_json_detailed(&json!(5)),
            Err(JsonSchemaError::NotObject(json!(5)))
        );
        assert!(matches!(
            metadata_value_from_json_detailed(&json!({})),
            Err(JsonSchemaError::BadObject(fields)) if fields.is_empty()
        ));
        assert!(matches!(
            metadata_value_from_json_detailed(&json!({"int": 1, "string": "a"})),
            Err(JsonSchemaError::BadObject(fields)) if fields.len() == 2
        ));
        assert_eq!(
            metadata_value_from_json_detailed(&json!({"bytes": "xyz"})),
            Err(JsonSchemaError::TypeMismatch {
                expected: "bytes",
                found: json!("xyz")
            })
        );
        assert_eq!(
            metadata_value_from_json_detailed(&json!({"list": {}})),
            Err(JsonSchemaError::TypeMismatch {
                expected: "list",
                found: json!({})
            })
        );
        assert_eq!(
            metadata_value_from_json_detailed(&json!({"map": [{"k": {"int": 1}}]})),
            Err(JsonSchemaError::BadMapPair(json!({"k": {"int": 1}})))
        );
        assert_eq!(
            metadata_value_from_json_detailed(&json!({"map": [
                {"k": {"int": 1}, "x": {"int": 2}}
            ]})),
            Err(JsonSchemaError::BadMapPair(json!({"k": {"int": 1}, "x": {"int": 2}})))
        );
    }
}
