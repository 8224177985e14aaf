//! Canonical CBOR wire form for metadata.
//!
//! Encoding is done by [`CborEncoder`]; decoding goes through `ciborium`
//! into its generic value tree and is then bridged to [`crate::MetadataValue`].

mod constants;
mod convert;
mod decoder;
mod encoder;
mod error;
mod version;

pub use convert::{metadatum_from_cbor, metadatum_to_cbor};
pub use decoder::{
    decode_cbor_value, decode_cbor_value_with_consumed, decode_metadatum, metadata_from_cbor,
};
pub use encoder::{encode_metadatum, metadata_to_cbor, CborEncoder};
pub use error::DecodeError;
pub use version::ProtocolVersion;
