//! Bridge between [`MetadataValue`] and the generic CBOR value tree.

use ciborium::value::{Integer, Value as CborValue};

use super::constants::{TAG_NEGATIVE_BIGNUM, TAG_POSITIVE_BIGNUM};
use super::error::DecodeError;
use crate::MetadataValue;

pub fn metadatum_to_cbor(value: &MetadataValue) -> CborValue {
    match value {
        MetadataValue::Map(pairs) => CborValue::Map(
            pairs
                .iter()
                .map(|(k, v)| (metadatum_to_cbor(k), metadatum_to_cbor(v)))
                .collect(),
        ),
        MetadataValue::List(items) => {
            CborValue::Array(items.iter().map(metadatum_to_cbor).collect())
        }
        MetadataValue::Number(n) => integer_to_cbor(*n),
        MetadataValue::Bytes(b) => CborValue::Bytes(b.clone()),
        MetadataValue::Text(s) => CborValue::Text(s.clone()),
    }
}

fn integer_to_cbor(n: i128) -> CborValue {
    if let Ok(i) = Integer::try_from(n) {
        return CborValue::Integer(i);
    }
    let (tag, magnitude) = if n >= 0 {
        (TAG_POSITIVE_BIGNUM, n as u128)
    } else {
        (TAG_NEGATIVE_BIGNUM, (-1 - n) as u128)
    };
    let bytes = magnitude.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    CborValue::Tag(tag, Box::new(CborValue::Bytes(bytes[skip..].to_vec())))
}

pub fn metadatum_from_cbor(value: CborValue) -> Result<MetadataValue, DecodeError> {
    Ok(match value {
        CborValue::Integer(i) => MetadataValue::Number(i128::from(i)),
        CborValue::Bytes(b) => MetadataValue::Bytes(b),
        CborValue::Text(s) => MetadataValue::Text(s),
        CborValue::Array(items) => MetadataValue::List(
            items
                .into_iter()
                .map(metadatum_from_cbor)
                .collect::<Result<_, _>>()?,
        ),
        CborValue::Map(pairs) => {
            let mut out = Vec::with_capacity(pairs.len());
            for (k, v) in pairs {
                out.push((metadatum_from_cbor(k)?, metadatum_from_cbor(v)?));
            }
            MetadataValue::Map(out)
        }
        CborValue::Tag(tag @ (TAG_POSITIVE_BIGNUM | TAG_NEGATIVE_BIGNUM), inner) => {
            MetadataValue::Number(bignum_from_cbor(tag, *inner)?)
        }
        other => {
            return Err(DecodeError::UnexpectedWireValue {
                expected: "metadatum",
                found: wire_kind(&other),
            })
        }
    })
}

fn bignum_from_cbor(tag: u64, inner: CborValue) -> Result<i128, DecodeError> {
    let bytes = match inner {
        CborValue::Bytes(b) => b,
        other => {
            return Err(DecodeError::UnexpectedWireValue {
                expected: "bignum bytes",
                found: wire_kind(&other),
            })
        }
    };
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    let digits = &bytes[skip..];
    if digits.len() > 16 {
        return Err(DecodeError::IntegerTooLarge(digits.len()));
    }
    let mut buf = [0u8; 16];
    buf[16 - digits.len()..].copy_from_slice(digits);
    let magnitude = i128::try_from(u128::from_be_bytes(buf))
        .map_err(|_| DecodeError::IntegerTooLarge(digits.len()))?;
    Ok(if tag == TAG_POSITIVE_BIGNUM {
        magnitude
    } else {
        -1 - magnitude
    })
}

pub(crate) fn wire_kind(value: &CborValue) -> &'static str {
    match value {
        CborValue::Integer(_) => "integer",
        CborValue::Bytes(_) => "bytes",
        CborValue::Float(_) => "float",
        CborValue::Text(_) => "text",
        CborValue::Bool(_) => "bool",
        CborValue::Null => "null",
        CborValue::Tag(_, _) => "tag",
        CborValue::Array(_) => "array",
        CborValue::Map(_) => "map",
        _ => "unknown",
    }
}
