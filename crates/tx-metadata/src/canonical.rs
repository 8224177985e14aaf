//! Canonical ordering of map entries.
//!
//! Keys are compared by their canonical CBOR bytes read as an unsigned
//! big-endian integer: a shorter encoding sorts first, equal lengths
//! compare bytewise.

use std::cmp::Ordering;

use crate::cbor::encode_metadatum;
use crate::MetadataValue;

/// Compare two byte strings as unsigned big-endian integers.
pub fn cmp_big_endian(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    &bytes[skip..]
}

/// Canonical comparison of two metadata values used as map keys.
pub fn canonical_key_cmp(a: &MetadataValue, b: &MetadataValue) -> Ordering {
    cmp_big_endian(&encode_metadatum(a), &encode_metadatum(b))
}

/// Stable sort of map entries into canonical key order.
///
/// Each key is encoded once. Entries whose keys encode identically keep
/// their input order.
pub fn sort_canonical(
    pairs: Vec<(MetadataValue, MetadataValue)>,
) -> Vec<(MetadataValue, MetadataValue)> {
    let mut keyed: Vec<(Vec<u8>, (MetadataValue, MetadataValue))> = pairs
        .into_iter()
        .map(|pair| (encode_metadatum(&pair.0), pair))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| cmp_big_endian(a, b));
    keyed.into_iter().map(|(_, pair)| pair).collect()
}
