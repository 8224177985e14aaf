use serde_json::json;
use tx_metadata::json::{
    metadata_from_json, metadata_to_json, metadata_value_from_json_detailed,
    metadata_value_to_json_detailed, JsonSchemaError, MetadataJsonError, MetadataJsonSchema,
};
use tx_metadata::MetadataValue;

const DETAILED: MetadataJsonSchema = MetadataJsonSchema::DetailedSchema;

#[test]
fn non_integer_int_carries_value() {
    let err = metadata_value_from_json_detailed(&json!({"int": 3.5})).unwrap_err();
    assert_eq!(err, JsonSchemaError::NumberNotInteger(3.5));
    assert!(err.to_string().contains("3.5"));
}

#[test]
fn huge_exponent_int_is_too_large() {
    let value: serde_json::Value = serde_json::from_str(r#"{"int": 1e9223372036854775807}"#)
        .unwrap_or_else(|e| panic!("bad fixture: {e}"));
    assert!(matches!(
        metadata_value_from_json_detailed(&value),
        Err(JsonSchemaError::NumberTooLarge(_))
    ));
}

#[test]
fn unexpected_field_names_allowed_set() {
    let err = metadata_value_from_json_detailed(&json!({"foo": 1})).unwrap_err();
    assert_eq!(err, JsonSchemaError::BadObject(vec![("foo".into(), json!(1))]));
    assert_eq!(
        err.to_string(),
        "expected a JSON object with a single field named one of int, bytes, string, list or map, found fields: \"foo\""
    );
}

#[test]
fn document_round_trip_is_exact() {
    let doc: serde_json::Value = serde_json::from_str(
        r#"{
            "0": {"map": [
                {"k": {"int": 5}, "v": {"string": "five"}},
                {"k": {"int": 1}, "v": {"list": [{"bytes": "00ff"}, {"int": -18446744073709551615}]}},
                {"k": {"list": []}, "v": {"map": []}}
            ]},
            "42": {"bytes": ""}
        }"#,
    )
    .expect("fixture");
    let md = metadata_from_json(DETAILED, &doc).expect("decode");
    assert_eq!(metadata_to_json(DETAILED, &md), doc);
    assert_eq!(metadata_from_json(DETAILED, &metadata_to_json(DETAILED, &md)), Ok(md));
}

#[test]
fn bytes_are_lowercase_without_prefix() {
    let json = metadata_value_to_json_detailed(&MetadataValue::bytes(vec![0xAB, 0xCD]));
    assert_eq!(json, json!({"bytes": "abcd"}));
    assert_eq!(
        metadata_value_from_json_detailed(&json!({"bytes": "0xabcd"})),
        Err(JsonSchemaError::TypeMismatch {
            expected: "bytes",
            found: json!("0xabcd")
        })
    );
}

#[test]
fn schema_errors_are_tagged_with_label() {
    assert_eq!(
        metadata_from_json(DETAILED, &json!({"9": {"list": [{"int": 1}, {"str": "x"}]}})),
        Err(MetadataJsonError::Schema {
            key: 9,
            error: JsonSchemaError::BadObject(vec![("str".into(), json!("x"))])
        })
    );
    assert_eq!(
        metadata_from_json(DETAILED, &json!({"9": "plain"})),
        Err(MetadataJsonError::Schema {
            key: 9,
            error: JsonSchemaError::NotObject(json!("plain"))
        })
    );
    assert_eq!(
        metadata_from_json(DETAILED, &json!({"9": {"string": 1}})),
        Err(MetadataJsonError::Schema {
            key: 9,
            error: JsonSchemaError::TypeMismatch {
                expected: "string",
                found: json!(1)
            }
        })
    );
}

#[test]
fn no_canonicalisation_is_applied() {
    let value = MetadataValue::Map(vec![
        (MetadataValue::Number(1000), MetadataValue::Number(0)),
        (MetadataValue::Number(1), MetadataValue::Number(0)),
        (MetadataValue::Number(1), MetadataValue::Number(1)),
    ]);
    let back = metadata_value_from_json_detailed(&metadata_value_to_json_detailed(&value));
    assert_eq!(back, Ok(value));
}
