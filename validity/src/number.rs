//! HTML number parsing and formatting.
//!
//! `<input type="number">` only accepts a "valid floating-point number":
//! an optional `-`, digits with an optional fraction (or a bare fraction such
//! as `.5`), and an optional exponent. No `+` sign, no surrounding whitespace,
//! no trailing `.`. The same grammar decides whether a `min`/`max` attribute
//! applies a bound at all.

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

/// Parse `input` as a valid floating-point number.
///
/// Returns `None` for empty text, text outside the grammar, or values that
/// overflow to infinity.
pub fn parse_number(input: &str) -> Option<f64> {
    if !is_valid_float(input) {
        return None;
    }
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Format a number the way the browser serializes it into messages and form data.
///
/// Integers print without a fraction and negative zero prints as `0`.
/// Matches JavaScript's `Number#toString` for magnitudes in `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

fn is_valid_float(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        if frac_digits == 0 {
            return false;
        }
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'-' | b'+')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
