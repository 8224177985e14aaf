use thiserror::Error;

/// A leaf that is outside the allowed range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("numeric metadata value {0} is outside the range -(2^64-1) .. 2^64-1")]
    NumberOutOfRange(i128),
    #[error("text string metadata value must consist of at most {max} UTF8 bytes, but it consists of {len} bytes")]
    TextTooLong { len: usize, max: usize },
    #[error("byte string metadata value must consist of at most {max} bytes, but it consists of {len} bytes")]
    BytesTooLong { len: usize, max: usize },
}
