//! `CborEncoder`: canonical CBOR writer.
//!
//! Every header uses the shortest argument form and every container is
//! definite-length, so equal values always produce identical bytes.

use super::constants::*;
use super::version::ProtocolVersion;
use crate::{Metadata, MetadataValue};

#[derive(Debug, Default)]
pub struct CborEncoder {
    buf: Vec<u8>,
}

impl CborEncoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Take the bytes written so far, leaving the encoder empty.
    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }

    pub fn encode_metadatum(&mut self, value: &MetadataValue) -> Vec<u8> {
        self.buf.clear();
        self.write_metadatum(value);
        self.finish()
    }

    pub fn write_metadatum(&mut self, value: &MetadataValue) {
        match value {
            MetadataValue::Map(pairs) => {
                self.write_map_hdr(pairs.len());
                for (k, v) in pairs {
                    self.write_metadatum(k);
                    self.write_metadatum(v);
                }
            }
            MetadataValue::List(items) => {
                self.write_arr_hdr(items.len());
                for item in items {
                    self.write_metadatum(item);
                }
            }
            MetadataValue::Number(n) => self.write_integer(*n),
            MetadataValue::Bytes(b) => self.write_bin(b),
            MetadataValue::Text(s) => self.write_str(s),
        }
    }

    /// Write a header byte for `major` with the shortest argument encoding.
    pub fn write_hdr(&mut self, major: u8, arg: u64) {
        let m = major << 5;
        if arg <= 23 {
            self.buf.push(m | arg as u8);
        } else if arg <= 0xff {
            self.buf.push(m | 24);
            self.buf.push(arg as u8);
        } else if arg <= 0xffff {
            self.buf.push(m | 25);
            self.buf.extend_from_slice(&(arg as u16).to_be_bytes());
        } else if arg <= 0xffff_ffff {
            self.buf.push(m | 26);
            self.buf.extend_from_slice(&(arg as u32).to_be_bytes());
        } else {
            self.buf.push(m | 27);
            self.buf.extend_from_slice(&arg.to_be_bytes());
        }
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        self.write_hdr(MAJOR_UNSIGNED, uint);
    }

    /// Integers beyond the 64-bit argument range become tag 2/3 bignums.
    pub fn write_integer(&mut self, int: i128) {
        if int >= 0 {
            match u64::try_from(int) {
                Ok(u) => self.write_hdr(MAJOR_UNSIGNED, u),
                Err(_) => self.write_bignum(TAG_POSITIVE_BIGNUM, int as u128),
            }
        } else {
            // -1 - int is non-negative and cannot overflow for any i128.
            let uint = (-1 - int) as u128;
            match u64::try_from(uint) {
                Ok(u) => self.write_hdr(MAJOR_NEGATIVE, u),
                Err(_) => self.write_bignum(TAG_NEGATIVE_BIGNUM, uint),
            }
        }
    }

    fn write_bignum(&mut self, tag: u64, magnitude: u128) {
        let bytes = magnitude.to_be_bytes();
        let skip = bytes.iter().take_while(|b| **b == 0).count();
        self.write_tag_hdr(tag);
        self.write_bin(&bytes[skip..]);
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        self.write_hdr(MAJOR_BYTES, buf.len() as u64);
        self.buf.extend_from_slice(buf);
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_hdr(MAJOR_TEXT, s.len() as u64);
        self.buf.extend_from_slice(s.as_bytes());
    }

    pub fn write_arr_hdr(&mut self, length: usize) {
        self.write_hdr(MAJOR_ARRAY, length as u64);
    }

    pub fn write_map_hdr(&mut self, length: usize) {
        self.write_hdr(MAJOR_MAP, length as u64);
    }

    pub fn write_tag_hdr(&mut self, tag: u64) {
        self.write_hdr(MAJOR_TAG, tag);
    }
}

/// Canonical bytes of a single metadata value.
pub fn encode_metadatum(value: &MetadataValue) -> Vec<u8> {
    CborEncoder::new().encode_metadatum(value)
}

/// Canonical bytes of a top-level metadata map.
///
/// Labels are written in ascending order, which for unsigned integers is
/// also ascending canonical byte order. The encoding is currently the same
/// for every protocol version.
pub fn metadata_to_cbor(metadata: &Metadata, version: ProtocolVersion) -> Vec<u8> {
    let _span =
        tracing::debug_span!("metadata_to_cbor", %version, labels = metadata.len()).entered();
    let mut enc = CborEncoder::new();
    enc.write_map_hdr(metadata.len());
    for (label, value) in metadata {
        enc.write_u_integer(*label);
        enc.write_metadatum(value);
    }
    let bytes = enc.finish();
    tracing::trace!(len = bytes.len(), "encoded metadata");
    bytes
}
