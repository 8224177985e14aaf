//! Native multi-signature scripts.

use std::fmt;

use crate::era::ScriptLanguage;
use crate::error::ScriptError;

pub type Slot = u64;

const KEY_HASH_LEN: usize = 28;

/// Blake2b-224 hash of a payment or stake verification key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyHash([u8; KEY_HASH_LEN]);

impl KeyHash {
    pub const LEN: usize = KEY_HASH_LEN;

    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ScriptError> {
        let array: [u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| ScriptError::BadKeyHashLength(bytes.len()))?;
        Ok(Self(array))
    }

    pub fn from_hex(text: &str) -> Result<Self, ScriptError> {
        let bytes = hex::decode(text).map_err(|_| ScriptError::BadKeyHashHex(text.to_owned()))?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for KeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimpleScript {
    RequireSignature(KeyHash),
    RequireAllOf(Vec<SimpleScript>),
    RequireAnyOf(Vec<SimpleScript>),
    RequireMOf(u64, Vec<SimpleScript>),
    /// Valid only before the given slot.
    RequireTimeBefore(Slot),
    /// Valid only from the given slot onwards.
    RequireTimeAfter(Slot),
}

impl SimpleScript {
    /// The oldest simple-script language able to express this script.
    pub fn min_language(&self) -> ScriptLanguage {
        if self.has_time_lock() {
            ScriptLanguage::SimpleV2
        } else {
            ScriptLanguage::SimpleV1
        }
    }

    pub fn has_time_lock(&self) -> bool {
        match self {
            SimpleScript::RequireTimeBefore(_) | SimpleScript::RequireTimeAfter(_) => true,
            SimpleScript::RequireSignature(_) => false,
            SimpleScript::RequireAllOf(scripts)
            | SimpleScript::RequireAnyOf(scripts)
            | SimpleScript::RequireMOf(_, scripts) => scripts.iter().any(Self::has_time_lock),
        }
    }

    /// Every key hash the script mentions, depth first.
    pub fn key_hashes(&self) -> Vec<KeyHash> {
        let mut out = Vec::new();
        self.collect_key_hashes(&mut out);
        out
    }

    fn collect_key_hashes(&self, out: &mut Vec<KeyHash>) {
        match self {
            SimpleScript::RequireSignature(kh) => out.push(*kh),
            SimpleScript::RequireAllOf(scripts)
            | SimpleScript::RequireAnyOf(scripts)
            | SimpleScript::RequireMOf(_, scripts) => {
                for script in scripts {
                    script.collect_key_hashes(out);
                }
            }
            SimpleScript::RequireTimeBefore(_) | SimpleScript::RequireTimeAfter(_) => {}
        }
    }

    /// Reject `RequireMOf` nodes that ask for more scripts than they hold.
    pub fn check_thresholds(&self) -> Result<(), ScriptError> {
        match self {
            SimpleScript::RequireMOf(required, scripts) => {
                if *required > scripts.len() as u64 {
                    return Err(ScriptError::ThresholdTooLarge {
                        required: *required,
                        available: scripts.len(),
                    });
                }
                scripts.iter().try_for_each(Self::check_thresholds)
            }
            SimpleScript::RequireAllOf(scripts) | SimpleScript::RequireAnyOf(scripts) => {
                scripts.iter().try_for_each(Self::check_thresholds)
            }
            SimpleScript::RequireSignature(_)
            | SimpleScript::RequireTimeBefore(_)
            | SimpleScript::RequireTimeAfter(_) => Ok(()),
        }
    }
}
