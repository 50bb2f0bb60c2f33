//! Typed value conversion shared by the form engine and the API client
//!
//! Users type strings; the backend expects numbers for numeric columns.
//! All string/number conversion lives here so both layers parse identically.

use serde_json::{Map, Number, Value};

use crate::shared::metadata::FieldKind;

/// Largest integer an `f64` represents exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse the longest numeric prefix of `input`, ignoring leading whitespace.
///
/// `"12.5kg"` gives `12.5`, `"abc"` gives `None`. Never panics.
pub fn parse_number_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse `input` as a whole decimal number (surrounding whitespace allowed).
///
/// Rejects empty and blank strings as well as `inf`/`NaN` spellings.
pub fn parse_number_strict(input: &str) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// JSON number for `n`, integral values encoded as integers (`10`, not `10.0`).
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Truthiness of a draft value: `""`, `null`, `0` and `false` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Convert raw user input for a field of `kind` into its draft value.
///
/// Numeric fields keep `""` as `""` and otherwise go through
/// [`parse_number_prefix`], falling back to `""` when nothing parses.
/// Every other kind keeps the text verbatim.
pub fn capture_input(kind: FieldKind, raw: &str) -> Value {
    if !kind.is_numeric() {
        return Value::String(raw.to_string());
    }
    if raw.is_empty() {
        return Value::String(String::new());
    }
    parse_number_prefix(raw)
        .map(number_value)
        .unwrap_or_else(|| Value::String(String::new()))
}

/// Convert a draft value to the type a field of `kind` is submitted as.
///
/// Falsy values and non-numeric kinds pass through unchanged. A numeric
/// field holding text that does not parse becomes `null`.
pub fn coerce_for_kind(kind: FieldKind, value: &Value) -> Value {
    if !kind.is_numeric() || !is_truthy(value) {
        return value.clone();
    }
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) => parse_number_strict(s)
            .map(number_value)
            .unwrap_or(Value::Null),
        Value::Bool(true) => Value::from(1),
        _ => Value::Null,
    }
}

/// Replace every non-empty string in `payload` that reads as a number with
/// that number. Applied to create and full-update bodies.
pub fn coerce_numeric_strings(payload: &mut Map<String, Value>) {
    for value in payload.values_mut() {
        let parsed = match value {
            Value::String(s) if !s.is_empty() => parse_number_strict(s),
            _ => None,
        };
        if let Some(n) = parsed {
            *value = number_value(n);
        }
    }
}
