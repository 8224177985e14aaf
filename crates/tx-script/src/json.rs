//! JSON form of simple scripts.
//!
//! ```json
//! {"type": "atLeast", "required": 1, "scripts": [
//!     {"type": "sig", "keyHash": "<56 hex digits>"},
//!     {"type": "before", "slot": 4000}
//! ]}
//! ```

use serde_json::{Map, Value};

use crate::error::ScriptError;
use crate::simple::{KeyHash, SimpleScript};

pub fn simple_script_to_json(script: &SimpleScript) -> Value {
    let mut out = Map::new();
    match script {
        SimpleScript::RequireSignature(kh) => {
            out.insert("type".into(), "sig".into());
            out.insert("keyHash".into(), kh.to_hex().into());
        }
        SimpleScript::RequireAllOf(scripts) => {
            out.insert("type".into(), "all".into());
            out.insert("scripts".into(), scripts_to_json(scripts));
        }
        SimpleScript::RequireAnyOf(scripts) => {
            out.insert("type".into(), "any".into());
            out.insert("scripts".into(), scripts_to_json(scripts));
        }
        SimpleScript::RequireMOf(required, scripts) => {
            out.insert("type".into(), "atLeast".into());
            out.insert("required".into(), (*required).into());
            out.insert("scripts".into(), scripts_to_json(scripts));
        }
        SimpleScript::RequireTimeBefore(slot) => {
            out.insert("type".into(), "before".into());
            out.insert("slot".into(), (*slot).into());
        }
        SimpleScript::RequireTimeAfter(slot) => {
            out.insert("type".into(), "after".into());
            out.insert("slot".into(), (*slot).into());
        }
    }
    Value::Object(out)
}

fn scripts_to_json(scripts: &[SimpleScript]) -> Value {
    Value::Array(scripts.iter().map(simple_script_to_json).collect())
}

/// Parse a simple script, checking key hashes and `atLeast` thresholds.
pub fn simple_script_from_json(value: &Value) -> Result<SimpleScript, ScriptError> {
    let fields = value
        .as_object()
        .ok_or_else(|| bad("expected an object", value))?;
    let kind = fields
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| bad("missing \"type\"", value))?;
    match kind {
        "sig" => {
            let text = fields
                .get("keyHash")
                .and_then(Value::as_str)
                .ok_or_else(|| bad("missing \"keyHash\"", value))?;
            Ok(SimpleScript::RequireSignature(KeyHash::from_hex(text)?))
        }
        "all" => Ok(SimpleScript::RequireAllOf(scripts_field(fields, value)?)),
        "any" => Ok(SimpleScript::RequireAnyOf(scripts_field(fields, value)?)),
        "atLeast" => {
            let required = u64_field(fields, "required", value)?;
            let scripts = scripts_field(fields, value)?;
            if required > scripts.len() as u64 {
                return Err(ScriptError::ThresholdTooLarge {
                    required,
                    available: scripts.len(),
                });
            }
            Ok(SimpleScript::RequireMOf(required, scripts))
        }
        "before" => Ok(SimpleScript::RequireTimeBefore(u64_field(fields, "slot", value)?)),
        "after" => Ok(SimpleScript::RequireTimeAfter(u64_field(fields, "slot", value)?)),
        _ => Err(bad("unknown script type", value)),
    }
}

fn scripts_field(
    fields: &Map<String, Value>,
    whole: &Value,
) -> Result<Vec<SimpleScript>, ScriptError> {
    fields
        .get("scripts")
        .and_then(Value::as_array)
        .ok_or_else(|| bad("missing \"scripts\" array", whole))?
        .iter()
        .map(simple_script_from_json)
        .collect()
}

fn u64_field(
    fields: &Map<String, Value>,
    name: &'static str,
    whole: &Value,
) -> Result<u64, ScriptError> {
    fields
        .get(name)
        .and_then(Value::as_u64)
        .ok_or_else(|| bad(name, whole))
}

fn bad(reason: &'static str, found: &Value) -> ScriptError {
    ScriptError::BadJson {
        reason,
        found: found.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn time_locks() {
        let script = SimpleScript::RequireAnyOf(vec![
            SimpleScript::RequireTimeBefore(10),
            SimpleScript::RequireTimeAfter(u64::MAX),
        ]);
        let json = simple_script_to_json(&script);
        assert_eq!(
            json,
            json!({"type": "any", "scripts": [
                {"type": "before", "slot": 10},
                {"type": "after", "slot": 18446744073709551615u64}
            ]})
        );
        assert_eq!(simple_script_from_json(&json), Ok(script));
    }

    #[test]
    fn shape_errors() {
        assert!(matches!(
            simple_script_from_json(&json!([])),
            Err(ScriptError::BadJson { reason: "expected an object", .. })
        ));
        assert!(matches!(
            simple_script_from_json(&json!({"type": "nope"})),
            Err(ScriptError::BadJson { reason: "unknown script type", .. })
        ));
        assert!(matches!(
            simple_script_from_json(&json!({"type": "before", "slot": -1})),
            Err(ScriptError::BadJson { reason: "slot", .. })
        ));
        assert!(matches!(
            simple_script_from_json(&json!({"type": "all"})),
            Err(ScriptError::BadJson { .. })
        ));
    }
}
