use std::sync::LazyLock;

use regex::Regex;

/// Sign characters and browser whitespace, stripped before parsing.
///
/// The whitespace set is the ECMAScript one: it includes U+FEFF and leaves
/// U+0085 alone, unlike Unicode `White_Space`.
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[+\-\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]",
    )
    .expect("separator pattern is valid")
});

/// Digits, an `e` in either case, digits.
static SCIENTIFIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+e[0-9]+").expect("scientific pattern is valid")
});

/// Remove every `+`, `-` and whitespace character.
///
/// Nothing else is touched: `"1,000"` stays `"1,000"`.
pub fn clean_input_string(raw: &str) -> String {
    SEPARATORS.replace_all(raw, "").into_owned()
}

/// Return the first substring shaped like scientific notation, if any.
pub fn is_invalid_input(cleaned: &str) -> Option<&str> {
    SCIENTIFIC.find(cleaned).map(|m| m.as_str())
}

/// Convert a cleaned value to a number the way a browser form would.
///
/// Empty text is zero. Radix-prefixed integers (`0x`, `0o`, `0b`) and
/// `Infinity` are accepted. Anything that is not a plain decimal becomes NaN
/// and is left to flow through the arithmetic.
pub fn to_number(cleaned: &str) -> f64 {
    if cleaned.is_empty() {
        return 0.0;
    }
    if cleaned == "Infinity" {
        return f64::INFINITY;
    }

    let prefixed = cleaned
        .get(..2)
        .map(str::to_ascii_lowercase)
        .and_then(|prefix| match prefix.as_str() {
            "0x" => Some(16),
            "0o" => Some(8),
            "0b" => Some(2),
            _ => None,
        });
    if let Some(radix) = prefixed {
        return parse_radix(&cleaned[2..], radix);
    }

    let decimal_chars = cleaned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E'));
    if !decimal_chars {
        return f64::NAN;
    }
    cleaned.parse().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_signs_and_whitespace() {
        assert_eq!(clean_input_string(" +1 2-3\t\n"), "123");
        assert_eq!(clean_input_string("--5"), "5");
    }

    #[test]
    fn test_clean_keeps_other_characters() {
        assert_eq!(clean_input_string("1,000"), "1,000");
        assert_eq!(clean_input_string("12.5"), "12.5");
        assert_eq!(clean_input_string("abc"), "abc");
    }

    #[test]
    fn test_invalid_scientific_notation() {
        assert_eq!(is_invalid_input("1e2"), Some("1e2"));
        assert_eq!(is_invalid_input("10E30"), Some("10E30"));
        assert_eq!(is_invalid_input("x12e3y"), Some("12e3"));
    }

    #[test]
    fn test_valid_inputs_not_flagged() {
        assert_eq!(is_invalid_input("1200"), None);
        assert_eq!(is_invalid_input("e2"), None);
        assert_eq!(is_invalid_input("2e"), None);
        assert_eq!(is_invalid_input(""), None);
    }

    #[test]
    fn test_to_number_decimal() {
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("300"), 300.0);
        assert_eq!(to_number("12.5"), 12.5);
        assert_eq!(to_number(".5"), 0.5);
        assert_eq!(to_number("5."), 5.0);
    }

    #[test]
    fn test_to_number_prefixed() {
        assert_eq!(to_number("0x1A"), 26.0);
        assert_eq!(to_number("0b101"), 5.0);
        assert_eq!(to_number("0o17"), 15.0);
        assert!(to_number("0x").is_nan());
        assert!(to_number("0b2").is_nan());
    }

    #[test]
    fn test_to_number_garbage_is_nan() {
        assert!(to_number("abc").is_nan());
        assert!(to_number("1,000").is_nan());
        assert!(to_number("inf").is_nan());
        assert!(to_number(".").is_nan());
        assert_eq!(to_number("Infinity"), f64::INFINITY);
    }
}
