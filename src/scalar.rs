//! Decoding of raw literal text into typed scalar values.
//!
//! The lexer hands literals through verbatim; everything that can actually
//! fail about a scalar fails here, exactly once per occurrence.

use thiserror::Error;

/// Why a raw literal could not be decoded. Converted into a spanned
/// diagnostic by whoever holds the source text.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum DecodeFailure {
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("escape sequence is truncated")]
    TruncatedEscape,
    #[error("`\\u` escape is not four hex digits")]
    InvalidUnicodeEscape,
    #[error("`\\u` escape does not form a valid character")]
    InvalidCodePoint,
    #[error("not a valid 64-bit signed integer")]
    IntegerFormat,
    #[error("not a valid 64-bit float")]
    FloatFormat,
}

/// Strips the surrounding quotes from a raw string literal and resolves
/// JSON-style backslash escapes.
pub fn decode_string(raw: &str) -> Result<String, DecodeFailure> {
    // The lexer only emits string tokens it saw both quotes of.
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => out.push(decode_unicode_escape(&mut chars)?),
            Some(other) => return Err(DecodeFailure::InvalidEscape(other)),
            None => return Err(DecodeFailure::TruncatedEscape),
        }
    }
    Ok(out)
}

/// Decodes the `XXXX` part of a `\uXXXX` escape, pairing up UTF-16
/// surrogates the way JSON requires.
fn decode_unicode_escape(chars: &mut std::str::Chars<'_>) -> Result<char, DecodeFailure> {
    let high = read_hex4(chars)?;

    if (0xD800..=0xDBFF).contains(&high) {
        // High surrogate: a `\uXXXX` low surrogate must follow.
        if chars.next() != Some('\\') || chars.next() != Some('u') {
            return Err(DecodeFailure::InvalidCodePoint);
        }
        let low = read_hex4(chars)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(DecodeFailure::InvalidCodePoint);
        }
        let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(combined).ok_or(DecodeFailure::InvalidCodePoint);
    }

    char::from_u32(high).ok_or(DecodeFailure::InvalidCodePoint)
}

fn read_hex4(chars: &mut std::str::Chars<'_>) -> Result<u32, DecodeFailure> {
    let mut value = 0u32;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(DecodeFailure::InvalidUnicodeEscape)?;
        value = value * 16 + digit;
    }
    Ok(value)
}

/// Parses an integer literal as a 64-bit signed integer.
pub fn decode_integer(raw: &str) -> Result<i64, DecodeFailure> {
    raw.parse::<i64>().map_err(|_| DecodeFailure::IntegerFormat)
}

/// Parses a float literal as a 64-bit IEEE-754 double. `Infinity`,
/// `-Infinity` and `NaN` parse to the corresponding non-finite values.
pub fn decode_float(raw: &str) -> Result<f64, DecodeFailure> {
    raw.parse::<f64>().map_err(|_| DecodeFailure::FloatFormat)
}
