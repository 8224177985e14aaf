use std::collections::BTreeMap;
use std::io::Cursor;

use ciborium::value::Value as CborValue;

use super::convert::{metadatum_from_cbor, wire_kind};
use super::error::DecodeError;
use super::version::ProtocolVersion;
use crate::{Metadata, MetadataValue};

pub fn decode_cbor_value_with_consumed(bytes: &[u8]) -> Result<(CborValue, usize), DecodeError> {
    let mut cursor = Cursor::new(bytes);
    let value = ciborium::de::from_reader::<CborValue, _>(&mut cursor)
        .map_err(|e| DecodeError::Cbor(e.to_string()))?;
    Ok((value, cursor.position() as usize))
}

/// Decode exactly one CBOR item, rejecting trailing bytes.
pub fn decode_cbor_value(bytes: &[u8]) -> Result<CborValue, DecodeError> {
    let (value, consumed) = decode_cbor_value_with_consumed(bytes)?;
    if consumed != bytes.len() {
        return Err(DecodeError::TrailingBytes(bytes.len() - consumed));
    }
    Ok(value)
}

/// Decode a single metadata value from its CBOR bytes.
pub fn decode_metadatum(bytes: &[u8]) -> Result<MetadataValue, DecodeError> {
    metadatum_from_cbor(decode_cbor_value(bytes)?)
}

/// Decode a top-level metadata map.
///
/// Definite and indefinite containers are both accepted. From protocol
/// major version 9 a repeated label is an error; earlier versions keep the
/// last occurrence.
pub fn metadata_from_cbor(bytes: &[u8], version: ProtocolVersion) -> Result<Metadata, DecodeError> {
    let _span = tracing::debug_span!("metadata_from_cbor", %version, len = bytes.len()).entered();
    let pairs = match decode_cbor_value(bytes)? {
        CborValue::Map(pairs) => pairs,
        other => {
            return Err(DecodeError::UnexpectedWireValue {
                expected: "metadata map",
                found: wire_kind(&other),
            })
        }
    };
    let mut entries = BTreeMap::new();
    for (k, v) in pairs {
        let label = match k {
            CborValue::Integer(i) => u64::try_from(i).map_err(|_| {
                DecodeError::UnexpectedWireValue {
                    expected: "unsigned metadata label",
                    found: "negative integer",
                }
            })?,
            other => {
                return Err(DecodeError::UnexpectedWireValue {
                    expected: "unsigned metadata label",
                    found: wire_kind(&other),
                })
            }
        };
        let value = metadatum_from_cbor(v)?;
        if entries.insert(label, value).is_some() {
            if version.rejects_duplicate_keys() {
                return Err(DecodeError::DuplicateKey(label));
            }
            tracing::debug!(label, "duplicate metadata label, keeping the last value");
        }
    }
    tracing::trace!(labels = entries.len(), "decoded metadata");
    Ok(Metadata::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALONZO: ProtocolVersion = ProtocolVersion::new(6, 0);
    const CONWAY: ProtocolVersion = ProtocolVersion::new(9, 0);

    #[test]
    fn decodes_indefinite_containers() {
        // {_ 0: [_ 1, "a"] }
        let bytes = [0xbf, 0x00, 0x9f, 0x01, 0x61, b'a', 0xff, 0xff];
        let md = metadata_from_cbor(&bytes, ALONZO).unwrap();
        assert_eq!(
            md.get(0),
            Some(&MetadataValue::List(vec![1i64.into(), MetadataValue::text("a")]))
        );
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        assert_eq!(
            metadata_from_cbor(&[0xa0, 0x00], ALONZO),
            Err(DecodeError::TrailingBytes(1))
        );
    }

    #[test]
    fn labels_must_be_unsigned() {
        assert!(matches!(
            metadata_from_cbor(&[0xa1, 0x20, 0x00], ALONZO),
            Err(DecodeError::UnexpectedWireValue { found: "negative integer", .. })
        ));
        assert!(matches!(
            metadata_from_cbor(&[0xa1, 0x61, b'a', 0x00], ALONZO),
            Err(DecodeError::UnexpectedWireValue { found: "text", .. })
        ));
        assert!(matches!(
            metadata_from_cbor(&[0x80], ALONZO),
            Err(DecodeError::UnexpectedWireValue { found: "array", .. })
        ));
    }

    #[test]
    fn duplicate_labels_depend_on_protocol_version() {
        // {1: 2, 1: 3}
        let bytes = [0xa2, 0x01, 0x02, 0x01, 0x03];
        let md = metadata_from_cbor(&bytes, ALONZO).unwrap();
        assert_eq!(md.get(1), Some(&MetadataValue::Number(3)));
        assert_eq!(
            metadata_from_cbor(&bytes, CONWAY),
            Err(DecodeError::DuplicateKey(1))
        );
    }

    #[test]
    fn malformed_input_surfaces_reader_error() {
        assert!(matches!(
            metadata_from_cbor(&[0xa1, 0x01], ALONZO),
            Err(DecodeError::Cbor(_))
        ));
        assert!(matches!(metadata_from_cbor(&[], ALONZO), Err(DecodeError::Cbor(_))));
    }
}
