use crate::era::{Era, ScriptLanguage};
use crate::error::ScriptError;
use crate::simple::SimpleScript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlutusVersion {
    V1,
    V2,
    V3,
}

impl PlutusVersion {
    pub fn language(self) -> ScriptLanguage {
        match self {
            PlutusVersion::V1 => ScriptLanguage::PlutusV1,
            PlutusVersion::V2 => ScriptLanguage::PlutusV2,
            PlutusVersion::V3 => ScriptLanguage::PlutusV3,
        }
    }
}

/// A script in either of its two representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Script {
    Simple(SimpleScript),
    /// Serialised Plutus core, kept as opaque bytes.
    Plutus {
        version: PlutusVersion,
        bytes: Vec<u8>,
    },
}

impl Script {
    /// The oldest language able to carry this script.
    pub fn language(&self) -> ScriptLanguage {
        match self {
            Script::Simple(script) => script.min_language(),
            Script::Plutus { version, .. } => version.language(),
        }
    }
}

/// A script checked against the capability table of one era.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptInEra {
    era: Era,
    language: ScriptLanguage,
    script: Script,
}

impl ScriptInEra {
    /// Pair a script with the language it is declared in and the era it is
    /// used in.
    ///
    /// Fails when the era predates the language, when the declared language
    /// cannot carry the script, or when a threshold asks for more scripts
    /// than it holds.
    pub fn new(era: Era, language: ScriptLanguage, script: Script) -> Result<Self, ScriptError> {
        if !language.is_supported_in(era) {
            tracing::debug!(%language, %era, "script language not available in era");
            return Err(ScriptError::UnsupportedInEra { language, era });
        }
        let required = script.language();
        let fits = match &script {
            // Simple v2 is a superset of v1.
            Script::Simple(_) => language.is_simple() && required <= language,
            Script::Plutus { .. } => required == language,
        };
        if !fits {
            return Err(ScriptError::LanguageMismatch {
                declared: language,
                required,
            });
        }
        if let Script::Simple(simple) = &script {
            simple.check_thresholds()?;
        }
        Ok(Self {
            era,
            language,
            script,
        })
    }

    /// Like [`ScriptInEra::new`] with the script's own minimal language.
    pub fn with_min_language(era: Era, script: Script) -> Result<Self, ScriptError> {
        let language = script.language();
        Self::new(era, language, script)
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn language(&self) -> ScriptLanguage {
        self.language
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn into_script(self) -> Script {
        self.script
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple::KeyHash;

    fn sig() -> Script {
        Script::Simple(SimpleScript::RequireSignature(KeyHash::new([7; KeyHash::LEN])))
    }

    fn locked() -> Script {
        Script::Simple(SimpleScript::RequireAllOf(vec![
            SimpleScript::RequireSignature(KeyHash::new([7; KeyHash::LEN])),
            SimpleScript::RequireTimeBefore(500),
        ]))
    }

    #[test]
    fn era_gates_language() {
        assert!(ScriptInEra::new(Era::Shelley, ScriptLanguage::SimpleV1, sig()).is_ok());
        assert_eq!(
            ScriptInEra::new(Era::Byron, ScriptLanguage::SimpleV1, sig()),
            Err(ScriptError::UnsupportedInEra {
                language: ScriptLanguage::SimpleV1,
                era: Era::Byron
            })
        );
        let plutus = Script::Plutus {
            version: PlutusVersion::V3,
            bytes: vec![0x4d, 0x01],
        };
        assert_eq!(
            ScriptInEra::new(Era::Babbage, ScriptLanguage::PlutusV3, plutus.clone()),
            Err(ScriptError::UnsupportedInEra {
                language: ScriptLanguage::PlutusV3,
                era: Era::Babbage
            })
        );
        let ok = ScriptInEra::new(Era::Conway, ScriptLanguage::PlutusV3, plutus.clone()).unwrap();
        assert_eq!(ok.era(), Era::Conway);
        assert_eq!(ok.into_script(), plutus);
    }

    #[test]
    fn declared_language_must_carry_script() {
        assert_eq!(
            ScriptInEra::new(Era::Mary, ScriptLanguage::SimpleV1, locked()),
            Err(ScriptError::LanguageMismatch {
                declared: ScriptLanguage::SimpleV1,
                required: ScriptLanguage::SimpleV2
            })
        );
        assert!(ScriptInEra::new(Era::Mary, ScriptLanguage::SimpleV2, sig()).is_ok());
        assert_eq!(
            ScriptInEra::new(Era::Conway, ScriptLanguage::PlutusV1, sig()),
            Err(ScriptError::LanguageMismatch {
                declared: ScriptLanguage::PlutusV1,
                required: ScriptLanguage::SimpleV1
            })
        );
        let plutus = Script::Plutus {
            version: PlutusVersion::V1,
            bytes: vec![],
        };
        assert!(ScriptInEra::new(Era::Conway, ScriptLanguage::PlutusV2, plutus).is_err());
    }

    #[test]
    fn min_language_picks_era_check() {
        assert_eq!(
            ScriptInEra::with_min_language(Era::Shelley, locked()),
            Err(ScriptError::UnsupportedInEra {
                language: ScriptLanguage::SimpleV2,
                era: Era::Shelley
            })
        );
        let in_era = ScriptInEra::with_min_language(Era::Allegra, locked()).unwrap();
        assert_eq!(in_era.language(), ScriptLanguage::SimpleV2);
    }

    #[test]
    fn thresholds_are_enforced() {
        let script = Script::Simple(SimpleScript::RequireMOf(
            2,
            vec![SimpleScript::RequireTimeAfter(1)],
        ));
        assert_eq!(
            ScriptInEra::new(Era::Conway, ScriptLanguage::SimpleV2, script),
            Err(ScriptError::ThresholdTooLarge {
                required: 2,
                available: 1
            })
        );
    }
}
