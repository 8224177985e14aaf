use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Message from the underlying CBOR reader, passed through as-is.
    #[error("cbor decode failed: {0}")]
    Cbor(String),
    #[error("{0} trailing bytes after the encoded item")]
    TrailingBytes(usize),
    #[error("expected {expected}, found {found}")]
    UnexpectedWireValue {
        expected: &'static str,
        found: &'static str,
    },
    #[error("duplicate metadata label {0}")]
    DuplicateKey(u64),
    #[error("bignum of {0} bytes does not fit in a metadata integer")]
    IntegerTooLarge(usize),
}

