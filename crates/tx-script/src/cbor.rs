//! Binary form of scripts.
//!
//! Simple scripts are timelock arrays:
//!
//! | script            | encoding                 |
//! |-------------------|--------------------------|
//! | signature         | `[0, keyhash]`           |
//! | all of            | `[1, [scripts..]]`       |
//! | any of            | `[2, [scripts..]]`       |
//! | `n` of            | `[3, n, [scripts..]]`    |
//! | valid from slot   | `[4, slot]`              |
//! | valid until slot  | `[5, slot]`              |
//!
//! A language-tagged script is `[tag, script]` where tag 0 is a simple
//! script and tags 1 to 3 carry Plutus v1 to v3 bytecode as a byte string.

use ciborium::value::Value as CborValue;
use tx_metadata::cbor::{decode_cbor_value, CborEncoder};

use crate::error::ScriptError;
use crate::script::{PlutusVersion, Script};
use crate::simple::{KeyHash, SimpleScript};

const SIG: u64 = 0;
const ALL_OF: u64 = 1;
const ANY_OF: u64 = 2;
const M_OF: u64 = 3;
const VALID_FROM: u64 = 4;
const VALID_UNTIL: u64 = 5;

const LANG_NATIVE: u64 = 0;
const LANG_PLUTUS_V1: u64 = 1;
const LANG_PLUTUS_V2: u64 = 2;
const LANG_PLUTUS_V3: u64 = 3;

pub fn simple_script_to_cbor(script: &SimpleScript) -> Vec<u8> {
    let mut enc = CborEncoder::new();
    write_simple(&mut enc, script);
    enc.finish()
}

pub fn script_to_cbor(script: &Script) -> Vec<u8> {
    let mut enc = CborEncoder::new();
    enc.write_arr_hdr(2);
    match script {
        Script::Simple(simple) => {
            enc.write_u_integer(LANG_NATIVE);
            write_simple(&mut enc, simple);
        }
        Script::Plutus { version, bytes } => {
            let tag = match version {
                PlutusVersion::V1 => LANG_PLUTUS_V1,
                PlutusVersion::V2 => LANG_PLUTUS_V2,
                PlutusVersion::V3 => LANG_PLUTUS_V3,
            };
            enc.write_u_integer(tag);
            enc.write_bin(bytes);
        }
    }
    enc.finish()
}

fn write_simple(enc: &mut CborEncoder, script: &SimpleScript) {
    match script {
        SimpleScript::RequireSignature(kh) => {
            enc.write_arr_hdr(2);
            enc.write_u_integer(SIG);
            enc.write_bin(kh.as_bytes());
        }
        SimpleScript::RequireAllOf(scripts) => {
            enc.write_arr_hdr(2);
            enc.write_u_integer(ALL_OF);
            write_list(enc, scripts);
        }
        SimpleScript::RequireAnyOf(scripts) => {
            enc.write_arr_hdr(2);
            enc.write_u_integer(ANY_OF);
            write_list(enc, scripts);
        }
        SimpleScript::RequireMOf(required, scripts) => {
            enc.write_arr_hdr(3);
            enc.write_u_integer(M_OF);
            enc.write_u_integer(*required);
            write_list(enc, scripts);
        }
        SimpleScript::RequireTimeAfter(slot) => {
            enc.write_arr_hdr(2);
            enc.write_u_integer(VALID_FROM);
            enc.write_u_integer(*slot);
        }
        SimpleScript::RequireTimeBefore(slot) => {
            enc.write_arr_hdr(2);
            enc.write_u_integer(VALID_UNTIL);
            enc.write_u_integer(*slot);
        }
    }
}

fn write_list(enc: &mut CborEncoder, scripts: &[SimpleScript]) {
    enc.write_arr_hdr(scripts.len());
    for script in scripts {
        write_simple(enc, script);
    }
}

pub fn simple_script_from_cbor(bytes: &[u8]) -> Result<SimpleScript, ScriptError> {
    let script = simple_from_value(decode_cbor_value(bytes)?)?;
    tracing::trace!(len = bytes.len(), "decoded simple script");
    Ok(script)
}

pub fn script_from_cbor(bytes: &[u8]) -> Result<Script, ScriptError> {
    let mut items = array(decode_cbor_value(bytes)?, "language-tagged script")?;
    if items.len() != 2 {
        return Err(ScriptError::BadWire {
            expected: "two-element language-tagged script",
        });
    }
    let body = items.pop().ok_or(ScriptError::BadWire {
        expected: "script body",
    })?;
    let tag = uint(&items[0])?;
    let version = match tag {
        LANG_NATIVE => return Ok(Script::Simple(simple_from_value(body)?)),
        LANG_PLUTUS_V1 => PlutusVersion::V1,
        LANG_PLUTUS_V2 => PlutusVersion::V2,
        LANG_PLUTUS_V3 => PlutusVersion::V3,
        other => return Err(ScriptError::UnknownLanguageTag(other)),
    };
    match body {
        CborValue::Bytes(bytes) => Ok(Script::Plutus { version, bytes }),
        _ => Err(ScriptError::BadWire {
            expected: "Plutus script bytes",
        }),
    }
}

fn simple_from_value(value: CborValue) -> Result<SimpleScript, ScriptError> {
    let items = array(value, "timelock array")?;
    let mut fields = items.into_iter();
    let mut next = || {
        fields.next().ok_or(ScriptError::BadWire {
            expected: "timelock field",
        })
    };
    let script = match uint(&next()?)? {
        SIG => match next()? {
            CborValue::Bytes(b) => SimpleScript::RequireSignature(KeyHash::from_slice(&b)?),
            _ => return Err(ScriptError::BadWire { expected: "key hash bytes" }),
        },
        ALL_OF => SimpleScript::RequireAllOf(simple_list(next()?)?),
        ANY_OF => SimpleScript::RequireAnyOf(simple_list(next()?)?),
        M_OF => {
            let required = uint(&next()?)?;
            SimpleScript::RequireMOf(required, simple_list(next()?)?)
        }
        VALID_FROM => SimpleScript::RequireTimeAfter(uint(&next()?)?),
        VALID_UNTIL => SimpleScript::RequireTimeBefore(uint(&next()?)?),
        _ => {
            return Err(ScriptError::BadWire {
                expected: "timelock constructor",
            })
        }
    };
    if next().is_ok() {
        return Err(ScriptError::BadWire {
            expected: "end of timelock array",
        });
    }
    Ok(script)
}

fn simple_list(value: CborValue) -> Result<Vec<SimpleScript>, ScriptError> {
    array(value, "timelock list")?
        .into_iter()
        .map(simple_from_value)
        .collect()
}

fn array(value: CborValue, expected: &'static str) -> Result<Vec<CborValue>, ScriptError> {
    match value {
        CborValue::Array(items) => Ok(items),
        _ => Err(ScriptError::BadWire { expected }),
    }
}

fn uint(value: &CborValue) -> Result<u64, ScriptError> {
    match value {
        CborValue::Integer(i) => u64::try_from(*i).map_err(|_| ScriptError::BadWire {
            expected: "unsigned integer",
        }),
        _ => Err(ScriptError::BadWire {
            expected: "unsigned integer",
        }),
    }
}
