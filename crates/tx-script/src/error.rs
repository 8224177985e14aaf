use serde_json::Value;
use thiserror::Error;
use tx_metadata::cbor::DecodeError;

use crate::era::{Era, ScriptLanguage};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScriptError {
    #[error("{language} scripts are not supported in the {era} era")]
    UnsupportedInEra { language: ScriptLanguage, era: Era },
    #[error("script needs {required} but was declared as {declared}")]
    LanguageMismatch {
        declared: ScriptLanguage,
        required: ScriptLanguage,
    },
    #[error("key hash must be 28 bytes, found {0}")]
    BadKeyHashLength(usize),
    #[error("key hash is not valid hex: {0:?}")]
    BadKeyHashHex(String),
    #[error("atLeast requires {required} of {available} scripts")]
    ThresholdTooLarge { required: u64, available: usize },
    #[error("invalid script JSON ({reason}): {found}")]
    BadJson { reason: &'static str, found: Value },
    #[error("expected {expected} in script CBOR")]
    BadWire { expected: &'static str },
    #[error("unknown script language tag {0}")]
    UnknownLanguageTag(u64),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
