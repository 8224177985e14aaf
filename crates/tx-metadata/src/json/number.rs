//! Exact integer handling for JSON numbers.
//!
//! `serde_json` is built with `arbitrary_precision`, so a number that does
//! not fit `i64`/`u64` still carries its literal text. That text is read
//! here as a decimal with optional fraction and exponent; the number is
//! accepted when its value is integral.

use serde_json::Number;

use super::error::JsonSchemaError;

// i128 has at most 39 decimal digits.
const MAX_DIGITS: usize = 39;

pub(crate) fn json_integer(n: &Number) -> Result<i128, JsonSchemaError> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    let text = n.to_string();
    let not_integer = || JsonSchemaError::NumberNotInteger(n.as_f64().unwrap_or(f64::NAN));
    let too_large = || JsonSchemaError::NumberTooLarge(text.clone());

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], &body[at + 1..]),
        None => (body, "0"),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };

    let digits: String = format!("{int_part}{frac_part}")
        .trim_start_matches('0')
        .to_owned();
    if digits.is_empty() {
        return Ok(0);
    }

    // Exponents that do not fit i64 are either absurdly large or push every
    // non-zero digit below the decimal point.
    let exponent: i64 = match exponent.parse() {
        Ok(e) => e,
        Err(_) if exponent.starts_with('-') => return Err(not_integer()),
        Err(_) => return Err(too_large()),
    };
    let scale = exponent.saturating_sub(frac_part.len() as i64);

    let digits = if scale < 0 {
        let drop = scale.unsigned_abs() as usize;
        if drop >= digits.len() {
            return Err(not_integer());
        }
        let (kept, dropped) = digits.split_at(digits.len() - drop);
        if dropped.bytes().any(|b| b != b'0') {
            return Err(not_integer());
        }
        kept.to_owned()
    } else {
        // `scale` may be close to i64::MAX, so compare before adding.
        if scale > MAX_DIGITS as i64 - digits.len().min(MAX_DIGITS + 1) as i64 {
            return Err(too_large());
        }
        format!("{digits}{}", "0".repeat(scale as usize))
    };

    let magnitude: u128 = digits.parse().map_err(|_| too_large())?;
    if negative {
        if magnitude == 0 {
            return Ok(0);
        }
        i128::try_from(magnitude - 1)
            .map(|m| -m - 1)
            .map_err(|_| too_large())
    } else {
        i128::try_from(magnitude).map_err(|_| too_large())
    }
}

/// Exact JSON number for any `i128`.
pub(crate) fn json_number(n: i128) -> Number {
    if let Ok(i) = i64::try_from(n) {
        return Number::from(i);
    }
    if let Ok(u) = u64::try_from(n) {
        return Number::from(u);
    }
    // Beyond the 64-bit range the literal text is the number; with
    // `arbitrary_precision` any decimal integer parses. The saturated
    // fallback only keeps encoding total.
    n.to_string().parse().unwrap_or_else(|_| {
        if n < 0 {
            Number::from(i64::MIN)
        } else {
            Number::from(u64::MAX)
        }
    })
}
