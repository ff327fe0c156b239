// File: src/result.rs
// Purpose: Outcome of a single field validation

use serde::{Deserialize, Serialize};

/// Result of validating one field
///
/// `message` is empty whenever `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// Create a failed validation result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_empty_message() {
        let result = ValidationResult::success();
        assert!(result.valid);
        assert!(result.message.is_empty());
    }

    #[test]
    fn test_failure_keeps_message() {
        let failed = ValidationResult::failure("nope");
        assert!(!failed.valid);
        assert_eq!(failed.message, "nope");
    }
}
