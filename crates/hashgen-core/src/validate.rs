//! Alphanumeric allow-list shared by the form and the service.

use std::sync::LazyLock;

use regex::Regex;

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").expect("alphanumeric pattern is valid"));

/// True when `value` consists only of ASCII letters and digits.
///
/// The empty string matches.
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_letters_digits_and_empty() {
        for value in ["", "a", "Z", "0", "abc123", "AbCdEf123", "9999"] {
            assert!(is_alphanumeric(value), "{value:?} should be accepted");
        }
    }

    #[test]
    fn test_rejects_anything_else() {
        for value in [
            " ", "abc-123", "hello world", "abc\n", "a_b", "é", "١٢٣", "abc!", "\t",
        ] {
            assert!(!is_alphanumeric(value), "{value:?} should be rejected");
        }
    }
}
