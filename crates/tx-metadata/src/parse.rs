//! Whole-input parsers for decimal integers and `0x`-prefixed hex bytes.
//!
//! Shared by the no-schema JSON codec (string values and object keys) and
//! by top-level label parsing. Every parser consumes the entire input.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("invalid character {found:?} at offset {offset}")]
    InvalidChar { offset: usize, found: char },
    #[error("redundant leading zero")]
    LeadingZero,
    #[error("integer does not fit")]
    Overflow,
    #[error("missing 0x prefix")]
    MissingHexPrefix,
    #[error("odd number of hex digits")]
    OddHexLength,
    #[error("uppercase hex digit {found:?} at offset {offset}")]
    UppercaseHex { offset: usize, found: char },
}

/// Parse one or more decimal digits with no redundant leading zero.
///
/// `"0"` is accepted; `"01"` and `"00"` are not.
pub fn parse_unsigned(input: &str) -> Result<u128, ParseError> {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut acc: u128 = 0;
    for (offset, ch) in input.char_indices() {
        let digit = ch.to_digit(10).ok_or(ParseError::InvalidChar { offset, found: ch })?;
        acc = acc
            .checked_mul(10)
            .and_then(|a| a.checked_add(digit as u128))
            .ok_or(ParseError::Overflow)?;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return Err(ParseError::LeadingZero);
    }
    Ok(acc)
}

/// Parse a decimal label that must fit in `u64`.
pub fn parse_label(input: &str) -> Result<u64, ParseError> {
    let n = parse_unsigned(input)?;
    u64::try_from(n).map_err(|_| ParseError::Overflow)
}

/// Parse an optionally signed (`-` or `+`) decimal integer.
pub fn parse_signed(input: &str) -> Result<i128, ParseError> {
    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let magnitude = parse_unsigned(digits)?;
    if negative {
        // i128::MIN has no positive counterpart, so go through the negation
        // of the magnitude minus one.
        if magnitude == 0 {
            return Ok(0);
        }
        let m1 = i128::try_from(magnitude - 1).map_err(|_| ParseError::Overflow)?;
        Ok(-m1 - 1)
    } else {
        i128::try_from(magnitude).map_err(|_| ParseError::Overflow)
    }
}

/// Parse `0x` followed by an even number of lowercase hex digits.
///
/// Uppercase `A`-`F` anywhere in the body is a hard failure. `"0x"` alone
/// yields an empty byte string.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, ParseError> {
    let body = input.strip_prefix("0x").ok_or(ParseError::MissingHexPrefix)?;
    for (i, ch) in body.char_indices() {
        let offset = i + 2;
        match ch {
            '0'..='9' | 'a'..='f' => {}
            'A'..='F' => return Err(ParseError::UppercaseHex { offset, found: ch }),
            _ => return Err(ParseError::InvalidChar { offset, found: ch }),
        }
    }
    if body.len() % 2 != 0 {
        return Err(ParseError::OddHexLength);
    }
    hex::decode(body).map_err(|_| ParseError::OddHexLength)
}
