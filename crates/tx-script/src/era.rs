//! Ledger eras and the script languages each one accepts.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Era {
    Byron,
    Shelley,
    Allegra,
    Mary,
    Alonzo,
    Babbage,
    Conway,
}

impl Era {
    pub const ALL: [Era; 7] = [
        Era::Byron,
        Era::Shelley,
        Era::Allegra,
        Era::Mary,
        Era::Alonzo,
        Era::Babbage,
        Era::Conway,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Era::Byron => "Byron",
            Era::Shelley => "Shelley",
            Era::Allegra => "Allegra",
            Era::Mary => "Mary",
            Era::Alonzo => "Alonzo",
            Era::Babbage => "Babbage",
            Era::Conway => "Conway",
        }
    }

    /// Languages usable in this era, oldest first.
    pub fn script_languages(self) -> impl Iterator<Item = ScriptLanguage> {
        ScriptLanguage::ALL
            .into_iter()
            .filter(move |lang| lang.is_supported_in(self))
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A script language together with its version.
///
/// Simple v2 adds the two time-lock constructors to simple v1. The Plutus
/// versions are opaque to this crate apart from their availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScriptLanguage {
    SimpleV1,
    SimpleV2,
    PlutusV1,
    PlutusV2,
    PlutusV3,
}

impl ScriptLanguage {
    pub const ALL: [ScriptLanguage; 5] = [
        ScriptLanguage::SimpleV1,
        ScriptLanguage::SimpleV2,
        ScriptLanguage::PlutusV1,
        ScriptLanguage::PlutusV2,
        ScriptLanguage::PlutusV3,
    ];

    /// The era that introduced this language. Every later era keeps it.
    pub fn first_era(self) -> Era {
        match self {
            ScriptLanguage::SimpleV1 => Era::Shelley,
            ScriptLanguage::SimpleV2 => Era::Allegra,
            ScriptLanguage::PlutusV1 => Era::Alonzo,
            ScriptLanguage::PlutusV2 => Era::Babbage,
            ScriptLanguage::PlutusV3 => Era::Conway,
        }
    }

    pub fn is_supported_in(self, era: Era) -> bool {
        era >= self.first_era()
    }

    pub fn is_simple(self) -> bool {
        matches!(self, ScriptLanguage::SimpleV1 | ScriptLanguage::SimpleV2)
    }

    pub fn name(self) -> &'static str {
        match self {
            ScriptLanguage::SimpleV1 => "SimpleScriptV1",
            ScriptLanguage::SimpleV2 => "SimpleScriptV2",
            ScriptLanguage::PlutusV1 => "PlutusScriptV1",
            ScriptLanguage::PlutusV2 => "PlutusScriptV2",
            ScriptLanguage::PlutusV3 => "PlutusScriptV3",
        }
    }
}

impl fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
