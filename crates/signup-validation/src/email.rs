//! Email validation functions

use crate::result::ValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately permissive: something@something.xx, no spaces, a single '@'
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").unwrap());

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Validate email format (value must already be trimmed)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates an email address after trimming
pub fn validate_email(raw: &str) -> ValidationResult {
    if is_valid_email(raw.trim()) {
        ValidationResult::success()
    } else {
        ValidationResult::failure(EMAIL_MESSAGE)
    }
}
