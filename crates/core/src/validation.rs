//! Input validators.
//!
//! Every validator applies its rules in a fixed order and reports only the
//! first one that fails.

use serde::Serialize;

use crate::error::{ValidationError, ValidationResult};
use crate::form::Selection;

/// Display name of the only account allowed to mint coins.
pub const COIN_ISSUER: &str = "Goofy";

/// A username that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for Username {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A whole-number amount that passed validation.
///
/// Keeps the text as entered alongside its numeric value, since the accepted
/// spellings (`1e3`, `0x10`, `Infinity`) do not round-trip through `f64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amount {
    text: String,
    value: f64,
}

impl Amount {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// The ECMAScript `\s` class. Unlike `char::is_whitespace` it includes
/// U+FEFF and excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn has_whitespace(raw: &str) -> bool {
    raw.chars().any(is_js_whitespace)
}

/// Validate a username: non-empty, no whitespace, ASCII letters and digits
/// only.
pub fn validate_username(raw: &str) -> ValidationResult<Username> {
    if raw.is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    if has_whitespace(raw) {
        return Err(ValidationError::Whitespace);
    }
    if !raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ValidationError::NotAlphanumeric);
    }
    Ok(Username(raw.to_string()))
}

/// Validate a coin amount: non-empty, no whitespace, no decimal point, and
/// numeric.
pub fn validate_amount(raw: &str) -> ValidationResult<Amount> {
    if raw.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    if has_whitespace(raw) {
        return Err(ValidationError::Whitespace);
    }
    if raw.contains('.') {
        return Err(ValidationError::Fractional);
    }
    let value = parse_numeric(raw).ok_or(ValidationError::NotNumeric)?;
    Ok(Amount {
        text: raw.to_string(),
        value,
    })
}

/// Only [`COIN_ISSUER`] may create coins. The comparison is case-sensitive.
pub fn validate_coin_issuer(selected_user: Option<&Selection>) -> ValidationResult<()> {
    match selected_user {
        Some(user) if user.text == COIN_ISSUER => Ok(()),
        _ => Err(ValidationError::NotCoinIssuer),
    }
}

/// A receiver must be chosen; the placeholder option does not count.
pub fn validate_receiver(selection: Option<Selection>) -> ValidationResult<Selection> {
    match selection {
        Some(receiver) if !receiver.is_sentinel() => Ok(receiver),
        _ => Err(ValidationError::NoReceiver),
    }
}

/// Numeric coercion for amount text, mirroring what a browser's `Number()`
/// accepts for strings without whitespace or a decimal point.
fn parse_numeric(raw: &str) -> Option<f64> {
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = raw.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let (negative, body) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if body == "Infinity" {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    // f64::from_str also takes "inf" and "NaN", which are not numbers here.
    if !body.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let value: f64 = body.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
