//! Numeric input validation
//!
//! Turns a raw field value into a finite `f64` using the same rules a browser
//! applies in `Number(value)`: surrounding whitespace is ignored, decimal
//! literals may carry a sign, a fraction and an exponent, and unsigned
//! `0x`/`0o`/`0b` integer literals are accepted. Anything that is absent,
//! blank, malformed or not finite is rejected.
//!
//! ## Example
//!
//! ```rust
//! use multab::core::validate::{validate, RawValue};
//!
//! assert_eq!(validate("  7 "), Some(7.0));
//! assert_eq!(validate(""), None);
//! assert_eq!(validate("abc"), None);
//! assert_eq!(validate(RawValue::Absent), None);
//! ```

/// A raw user-supplied value, before any validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// The field was missing (`null` / `undefined` on the host side)
    Absent,
    /// Free text as typed by the user
    Text(&'a str),
    /// A value the host already holds as a number
    Number(f64),
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(text: &'a str) -> Self {
        RawValue::Text(text)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(text: &'a String) -> Self {
        RawValue::Text(text.as_str())
    }
}

impl From<f64> for RawValue<'_> {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl<'a, T: Into<RawValue<'a>>> From<Option<T>> for RawValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Absent, Into::into)
    }
}

/// Result of validation: `Some` always holds a finite number.
pub type ValidatedNumber = Option<f64>;

/// Validate a raw value into a finite number.
///
/// Never panics and never errors; failure is reported as `None`.
pub fn validate<'a>(raw: impl Into<RawValue<'a>>) -> ValidatedNumber {
    match raw.into() {
        RawValue::Absent => None,
        RawValue::Number(value) => value.is_finite().then_some(value),
        RawValue::Text(text) => {
            let trimmed = text.trim_matches(is_js_whitespace);
            if trimmed.is_empty() {
                return None;
            }
            parse_number(trimmed).filter(|v| v.is_finite())
        }
    }
}

/// Whitespace and line terminators stripped by `Number()`: the `Zs` space
/// separators, the ASCII controls, `U+2028`/`U+2029` and the byte order mark.
/// `char::is_whitespace` differs from this set in accepting `U+0085`.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r'
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

/// Parse an already-trimmed numeric literal.
fn parse_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix_integer(&s[2..], radix);
        }
    }

    if is_decimal_literal(bytes) {
        s.parse::<f64>().ok()
    } else {
        None
    }
}

fn parse_radix_integer(digits: &str, radix: u32) -> Option<f64> {
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`
///
/// Rust's float parser additionally accepts `inf`, `nan` and `infinity`, which
/// must not pass here.
fn is_decimal_literal(bytes: &[u8]) -> bool {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(validate("  7 "), Some(7.0));
        assert_eq!(validate("\t-3\n"), Some(-3.0));
        assert_eq!(validate("\u{FEFF}12"), Some(12.0));
        assert_eq!(validate("\u{A0}5\u{2028}"), Some(5.0));
        assert_eq!(validate("\u{3000}\u{0B}9\u{0C}"), Some(9.0));
    }

    #[test]
    fn test_rejects_blank_and_absent() {
        assert_eq!(validate(""), None);
        assert_eq!(validate("   "), None);
        assert_eq!(validate(RawValue::Absent), None);
        assert_eq!(validate(None::<&str>), None);
    }

    #[test]
    fn test_rejects_garbage() {
        for input in [
            "abc", "12px", "1,5", "--1", "+-1", ".", "1e", "e5", "0x", "1 2", "\u{85}7",
        ] {
            assert_eq!(validate(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        for input in ["Infinity", "-Infinity", "inf", "NaN", "nan", "1e999"] {
            assert_eq!(validate(input), None, "input {:?}", input);
        }
        assert_eq!(validate(f64::NAN), None);
        assert_eq!(validate(f64::INFINITY), None);
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(validate(".5"), Some(0.5));
        assert_eq!(validate("5."), Some(5.0));
        assert_eq!(validate("+4"), Some(4.0));
        assert_eq!(validate("1e3"), Some(1000.0));
        assert_eq!(validate("2.5E-1"), Some(0.25));
        assert_eq!(validate("007"), Some(7.0));
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(validate("0x1F"), Some(31.0));
        assert_eq!(validate("0o17"), Some(15.0));
        assert_eq!(validate("0b101"), Some(5.0));
        // Signed radix literals are not numbers in the browser either
        assert_eq!(validate("-0x10"), None);
        assert_eq!(validate("0xZZ"), None);
    }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(validate(3.75), Some(3.75));
        assert_eq!(validate(Some("8")), Some(8.0));
    }
}
