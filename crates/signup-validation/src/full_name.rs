//! Full name validation

use crate::result::ValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

static FULL_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

pub const FULL_NAME_MISSING_MESSAGE: &str = "Please enter your full name";
pub const FULL_NAME_CHARSET_MESSAGE: &str = "Full name must contain only letters and spaces";

/// Validates a full name: letters and spaces, at least two words.
///
/// An empty value and a single word share the same message.
pub fn validate_full_name(raw: &str) -> ValidationResult {
    let value = raw.trim();

    if value.is_empty() {
        return ValidationResult::failure(FULL_NAME_MISSING_MESSAGE);
    }

    if !FULL_NAME_REGEX.is_match(value) {
        return ValidationResult::failure(FULL_NAME_CHARSET_MESSAGE);
    }

    if value.split_whitespace().count() < 2 {
        return ValidationResult::failure(FULL_NAME_MISSING_MESSAGE);
    }

    ValidationResult::success()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_full_name("John Smith").valid);
        assert!(validate_full_name("  Mary   Jane  Watson ").valid);
        assert!(validate_full_name("A B").valid);
        assert!(validate_full_name("Ada\tLovelace").valid);
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_full_name("").message, FULL_NAME_MISSING_MESSAGE);
        assert_eq!(validate_full_name("    ").message, FULL_NAME_MISSING_MESSAGE);
    }

    #[test]
    fn test_single_word_looks_incomplete() {
        assert_eq!(validate_full_name("Cher").message, FULL_NAME_MISSING_MESSAGE);
    }

    #[test]
    fn test_illegal_characters() {
        assert_eq!(validate_full_name("John Sm1th").message, FULL_NAME_CHARSET_MESSAGE);
        assert_eq!(validate_full_name("Jean-Luc Picard").message, FULL_NAME_CHARSET_MESSAGE);
        assert_eq!(validate_full_name("O'Brien").message, FULL_NAME_CHARSET_MESSAGE);
    }
}
