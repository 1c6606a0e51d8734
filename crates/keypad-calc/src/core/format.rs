//! Number formatting, lenient operand parsing and the display renderer
//!
//! The page this calculator drives shows numbers exactly the way a browser
//! converts them to strings, and reads operands back with a prefix-tolerant
//! float parse. Both conversions live here so the engine never formats or
//! parses on its own.

use crate::core::buffer::InputBuffer;

/// Text shown for the division-by-zero error state
pub const ERROR_TEXT: &str = "Error";

/// Text shown when the input buffer is empty
pub const PLACEHOLDER: &str = "0";

/// Renders the input buffer into the display string.
///
/// Pure: the same buffer always renders the same text.
#[must_use]
pub fn render(buffer: &InputBuffer) -> &str {
    match buffer {
        InputBuffer::Error => ERROR_TEXT,
        InputBuffer::Text(text) if text.is_empty() => PLACEHOLDER,
        InputBuffer::Text(text) => text,
    }
}

/// Formats a number the way the browser's number-to-string conversion does.
///
/// Shortest round-trip digits, no trailing `.0`, exponent form outside
/// `[1e-6, 1e21)` with an explicit exponent sign.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers -0.0 as well.
    if value == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

/// Parses an operand with browser `parseFloat` semantics.
///
/// The longest numeric prefix is used; text with no numeric prefix is NaN.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let prefix = numeric_prefix(text.trim_start());
    if prefix.is_empty() {
        return f64::NAN;
    }
    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

/// Longest prefix matching `[sign] (Infinity | digits [. digits] [e [sign] digits])`.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return &text[..end + "Infinity".len()];
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
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
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

    &text[..end]
}
