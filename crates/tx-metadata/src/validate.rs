//! Range validation over every leaf of a metadata set.
//!
//! Validation never stops at the first problem: each out-of-range leaf
//! yields its own entry, tagged with the top-level label it sits under.

use crate::{Metadata, MetadataLimits, MetadataValue, RangeError};

/// Validate against the default limits.
pub fn validate_metadata(metadata: &Metadata) -> Result<(), Vec<(u64, RangeError)>> {
    validate_metadata_with(&MetadataLimits::DEFAULT, metadata)
}

pub fn validate_metadata_with(
    limits: &MetadataLimits,
    metadata: &Metadata,
) -> Result<(), Vec<(u64, RangeError)>> {
    let mut errors = Vec::new();
    for (label, value) in metadata {
        let leaf_errors = validate_value(limits, value);
        if !leaf_errors.is_empty() {
            tracing::trace!(label = *label, count = leaf_errors.len(), "metadata range violations");
        }
        errors.extend(leaf_errors.into_iter().map(|e| (*label, e)));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "metadata failed range validation");
        Err(errors)
    }
}

/// All range violations inside a single value, in depth-first order.
pub fn validate_value(limits: &MetadataLimits, value: &MetadataValue) -> Vec<RangeError> {
    let mut errors = Vec::new();
    collect_range_errors(limits, value, &mut errors);
    errors
}

fn collect_range_errors(limits: &MetadataLimits, value: &MetadataValue, out: &mut Vec<RangeError>) {
    match value {
        MetadataValue::Number(n) => {
            if !(MetadataValue::MIN_NUMBER..=MetadataValue::MAX_NUMBER).contains(n) {
                out.push(RangeError::NumberOutOfRange(*n));
            }
        }
        MetadataValue::Bytes(b) => {
            if b.len() > limits.max_bytes_len {
                out.push(RangeError::BytesTooLong {
                    len: b.len(),
                    max: limits.max_bytes_len,
                });
            }
        }
        MetadataValue::Text(s) => {
            // str::len is the UTF-8 byte length.
            if s.len() > limits.max_text_len {
                out.push(RangeError::TextTooLong {
                    len: s.len(),
                    max: limits.max_text_len,
                });
            }
        }
        MetadataValue::List(items) => {
            for item in items {
                collect_range_errors(limits, item, out);
            }
        }
        MetadataValue::Map(pairs) => {
            for (k, v) in pairs {
                collect_range_errors(limits, k, out);
                collect_range_errors(limits, v, out);
            }
        }
    }
}
