//! Numeric text rules
//!
//! Every numeric code path on a [`Cell`](super::Cell) goes through these
//! helpers, so they define what "numeric text" means for the whole crate:
//!
//! - leading whitespace is skipped, the rest must be a complete decimal
//!   float literal (`[+-]digits[.digits][e[+-]digits]`), nothing may follow
//! - a value of zero is not numeric, but any text starting with a NUL
//!   character is numeric with value zero
//! - a comma decimal separator is accepted only if swapping every comma for
//!   a period yields numeric text

/// Parse `text` as numeric text, returning its value.
pub(crate) fn parse_numeric(text: &str) -> Option<f64> {
    // NUL-led text is numeric with value zero, whatever follows
    if text.starts_with('\0') {
        return Some(0.0);
    }

    let body = text.trim_start_matches(is_stream_whitespace);
    if !is_float_literal(body) {
        return None;
    }

    let value: f64 = body.parse().ok()?;
    (value != 0.0).then_some(value)
}

/// Check whether `text` is numeric text.
pub(crate) fn is_numeric(text: &str) -> bool {
    parse_numeric(text).is_some()
}

/// Bring `text` into period-decimal form.
///
/// Returns the text itself when it is already numeric, the comma-swapped copy
/// when that copy is numeric, and `None` when neither is.
pub(crate) fn normalize_decimal(text: &str) -> Option<String> {
    if is_numeric(text) {
        return Some(text.to_owned());
    }

    if !text.contains(',') {
        return None;
    }

    let swapped = text.replace(',', ".");
    is_numeric(&swapped).then_some(swapped)
}

/// Read an operand string as a number, accepting comma decimals.
pub(crate) fn parse_operand(text: &str) -> Option<f64> {
    normalize_decimal(text).and_then(|t| parse_numeric(&t))
}

/// Render a float with six fixed decimals, then drop superfluous zeros.
pub(crate) fn format_float(value: f64) -> String {
    let mut text = format!("{:.6}", value);
    strip_trailing_zeros(&mut text);
    text
}

/// Remove trailing zeros after the decimal point and an exposed trailing
/// point. Leaves non-numeric and exponential text alone.
pub(crate) fn strip_trailing_zeros(text: &mut String) {
    if !is_numeric(text) || text.contains(['e', 'E']) || !text.contains('.') {
        return;
    }

    let kept = text.trim_end_matches('0').trim_end_matches('.').len();
    text.truncate(kept);
}

fn is_stream_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn is_float_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
