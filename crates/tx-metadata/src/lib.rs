//! Transaction metadata for a distributed ledger.
//!
//! Metadata is a map from `u64` labels to [`MetadataValue`] trees of
//! integers, byte strings, text, lists and maps. This crate covers:
//!
//! - range validation of every leaf ([`validate_metadata`]),
//! - chunking of long text and bytes into bounded leaves ([`text_chunks`]),
//! - two JSON projections ([`json`]),
//! - the canonical CBOR wire form ([`cbor`]) and canonical map-key order.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tx_metadata::json::{metadata_from_json, metadata_to_json, MetadataJsonSchema};
//! use tx_metadata::MetadataValue;
//!
//! let md = metadata_from_json(MetadataJsonSchema::NoSchema, &json!({"0": {"1": "hello"}})).unwrap();
//! assert_eq!(
//!     md.get(0),
//!     Some(&MetadataValue::Map(vec![(MetadataValue::Number(1), MetadataValue::text("hello"))]))
//! );
//! assert_eq!(
//!     metadata_to_json(MetadataJsonSchema::NoSchema, &md),
//!     json!({"0": {"1": "hello"}})
//! );
//! ```

mod canonical;
mod chunk;
mod error;
mod limits;
mod metadata;
mod validate;
mod value;

pub mod cbor;
pub mod json;
pub mod parse;

pub use canonical::{canonical_key_cmp, cmp_big_endian, sort_canonical};
pub use chunk::{bytes_chunks, bytes_chunks_with, chunks_by, text_chunks, text_chunks_with};
pub use error::RangeError;
pub use limits::{LimitsError, MetadataLimits};
pub use metadata::Metadata;
pub use validate::{validate_metadata, validate_metadata_with, validate_value};
pub use value::MetadataValue;

