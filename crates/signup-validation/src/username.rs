//! Username validation

use crate::config::UsernameConfig;
use crate::result::ValidationResult;
use crate::text::text_length;
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

pub const USERNAME_CHARSET_MESSAGE: &str = "Username can only contain letters and numbers";

/// ASCII letters and digits only
pub fn is_alphanumeric_username(value: &str) -> bool {
    USERNAME_REGEX.is_match(value)
}

/// Validates a username
///
/// The value is trimmed first. Rules are checked in order and the first
/// failure wins:
/// - length within the configured bounds (3 to 15 by default)
/// - letters and digits only
pub fn validate_username(raw: &str, config: &UsernameConfig) -> ValidationResult {
    let value = raw.trim();
    let length = text_length(value);

    if length < config.min_length || length > config.max_length {
        return ValidationResult::failure(format!(
            "Username must be between {} and {} characters",
            config.min_length, config.max_length
        ));
    }

    if !is_alphanumeric_username(value) {
        return ValidationResult::failure(USERNAME_CHARSET_MESSAGE);
    }

    ValidationResult::success()
}
