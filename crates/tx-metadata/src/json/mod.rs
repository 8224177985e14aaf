//! JSON projections of metadata.
//!
//! Two schemas are supported: the compact no-schema mapping, which infers
//! value shape from JSON content, and the tagged detailed mapping, which
//! round-trips exactly. Either way
//! the document top level is an object keyed by decimal labels.

mod detailed;
mod error;
mod no_schema;
mod number;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

pub use detailed::{metadata_value_from_json_detailed, metadata_value_to_json_detailed};
pub use error::{JsonSchemaError, MetadataJsonError};
pub use no_schema::{metadata_value_from_json_no_schema, metadata_value_to_json_no_schema};

use crate::parse::parse_label;
use crate::validate::validate_metadata_with;
use crate::{Metadata, MetadataLimits, MetadataValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataJsonSchema {
    NoSchema,
    DetailedSchema,
}

impl MetadataJsonSchema {
    pub fn value_from_json(self, value: &Value) -> Result<MetadataValue, JsonSchemaError> {
        match self {
            MetadataJsonSchema::NoSchema => metadata_value_from_json_no_schema(value),
            MetadataJsonSchema::DetailedSchema => metadata_value_from_json_detailed(value),
        }
    }

    pub fn value_to_json(self, value: &MetadataValue) -> Value {
        match self {
            MetadataJsonSchema::NoSchema => metadata_value_to_json_no_schema(value),
            MetadataJsonSchema::DetailedSchema => metadata_value_to_json_detailed(value),
        }
    }
}

/// Decode a JSON document into metadata and range-check it.
///
/// Returns the first problem found: a bad top level, a schema error under
/// some label, or the first range violation.
pub fn metadata_from_json(
    schema: MetadataJsonSchema,
    value: &Value,
) -> Result<Metadata, MetadataJsonError> {
    metadata_from_json_with(&MetadataLimits::DEFAULT, schema, value)
}

pub fn metadata_from_json_with(
    limits: &MetadataLimits,
    schema: MetadataJsonSchema,
    value: &Value,
) -> Result<Metadata, MetadataJsonError> {
    let _span = tracing::debug_span!("metadata_from_json", ?schema).entered();
    let fields = value.as_object().ok_or(MetadataJsonError::ToplevelNotMap)?;
    let mut entries = BTreeMap::new();
    for (key, v) in fields {
        let label =
            parse_label(key).map_err(|_| MetadataJsonError::ToplevelBadKey(key.clone()))?;
        let decoded = schema
            .value_from_json(v)
            .map_err(|error| MetadataJsonError::Schema { key: label, error })?;
        entries.insert(label, decoded);
    }
    let metadata = Metadata::new(entries);
    if let Err(errors) = validate_metadata_with(limits, &metadata) {
        if let Some((key, error)) = errors.into_iter().next() {
            return Err(MetadataJsonError::Range { key, error });
        }
    }
    tracing::trace!(labels = metadata.len(), "decoded JSON metadata");
    Ok(metadata)
}

/// Parse JSON text, then decode it as in [`metadata_from_json`].
pub fn metadata_from_json_str(
    schema: MetadataJsonSchema,
    text: &str,
) -> Result<Metadata, MetadataJsonError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| MetadataJsonError::Json(e.to_string()))?;
    metadata_from_json(schema, &value)
}

/// Encode metadata as a JSON object with labels in ascending order.
pub fn metadata_to_json(schema: MetadataJsonSchema, metadata: &Metadata) -> Value {
    let mut out = Map::with_capacity(metadata.len());
    for (label, value) in metadata {
        out.insert(label.to_string(), schema.value_to_json(value));
    }
    Value::Object(out)
}
