//! Size limits applied to metadata leaves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bounds on leaf sizes.
///
/// The two bounds currently share a value but are separate protocol
/// parameters and may diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataLimits {
    /// Maximum length of a `Bytes` leaf.
    pub max_bytes_len: usize,
    /// Maximum UTF-8 encoded length of a `Text` leaf.
    pub max_text_len: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitsError {
    #[error("invalid limits config: {0}")]
    Toml(String),
    #[error("limit `{0}` must be greater than zero")]
    Zero(&'static str),
}

impl MetadataLimits {
    pub const DEFAULT: MetadataLimits = MetadataLimits {
        max_bytes_len: 64,
        max_text_len: 64,
    };

    /// Load limits from TOML text, e.g. `max_text_len = 128`.
    ///
    /// Missing fields take their default value.
    pub fn from_toml_str(text: &str) -> Result<Self, LimitsError> {
        let limits: MetadataLimits =
            toml::from_str(text).map_err(|e| LimitsError::Toml(e.to_string()))?;
        limits.check()?;
        tracing::debug!(
            max_bytes_len = limits.max_bytes_len,
            max_text_len = limits.max_text_len,
            "loaded metadata limits"
        );
        Ok(limits)
    }

    // The chunking engine cannot make progress with a zero bound.
    fn check(&self) -> Result<(), LimitsError> {
        if self.max_bytes_len == 0 {
            return Err(LimitsError::Zero("max_bytes_len"));
        }
        if self.max_text_len == 0 {
            return Err(LimitsError::Zero("max_text_len"));
        }
        Ok(())
    }
}

impl Default for MetadataLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_64() {
        let limits = MetadataLimits::default();
        assert_eq!(limits.max_bytes_len, 64);
        assert_eq!(limits.max_text_len, 64);
    }

    #[test]
    fn toml_overrides_one_bound_independently() {
        let limits = MetadataLimits::from_toml_str("max_text_len = 128").unwrap();
        assert_eq!(limits.max_text_len, 128);
        assert_eq!(limits.max_bytes_len, 64);
        assert_eq!(MetadataLimits::from_toml_str("").unwrap(), MetadataLimits::DEFAULT);
    }

    #[test]
    fn toml_rejects_bad_input() {
        assert!(matches!(
            MetadataLimits::from_toml_str("max_bytes_len = \"big\""),
            Err(LimitsError::Toml(_))
        ));
        assert!(matches!(
            MetadataLimits::from_toml_str("max_chars = 3"),
            Err(LimitsError::Toml(_))
        ));
        assert_eq!(
            MetadataLimits::from_toml_str("max_bytes_len = 0"),
            Err(LimitsError::Zero("max_bytes_len"))
        );
    }
}
