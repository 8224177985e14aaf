//! Script values used to authorise transaction actions.
//!
//! A [`Script`] is either a native [`SimpleScript`] (signatures, thresholds
//! and time locks) or opaque Plutus bytecode. Which languages an era accepts
//! is a runtime table on [`ScriptLanguage`], checked by [`ScriptInEra::new`].
//!
//! ```
//! use tx_script::{Era, Script, ScriptInEra, ScriptLanguage, SimpleScript};
//!
//! let script = Script::Simple(SimpleScript::RequireTimeAfter(1_000));
//! assert_eq!(script.language(), ScriptLanguage::SimpleV2);
//! assert!(ScriptInEra::new(Era::Shelley, ScriptLanguage::SimpleV2, script.clone()).is_err());
//! assert!(ScriptInEra::new(Era::Mary, ScriptLanguage::SimpleV2, script).is_ok());
//! ```

mod era;
mod error;
mod script;
mod simple;

pub mod cbor;
pub mod json;

pub use era::{Era, ScriptLanguage};
pub use error::ScriptError;
pub use script::{PlutusVersion, Script, ScriptInEra};
pub use simple::{KeyHash, SimpleScript, Slot};
