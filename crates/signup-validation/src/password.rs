//! Password rules and strength classification
//!
//! A password is judged against three independent rules:
//! - minimum length (8 by default)
//! - at least one digit or symbol
//! - no meaningful fragment of the user's full name or email
//!
//! The rules drive a [`StrengthLevel`]. Strength is informational: field
//! validity only requires all three rules to pass.

use crate::config::PasswordConfig;
use crate::result::ValidationResult;
use crate::text::text_length;
use serde::{Deserialize, Serialize};

/// Symbols accepted by the digit-or-symbol rule
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[{]}\\|;:'\",<.>/?`~";

/// Separators used to break an email into fragments
const EMAIL_SEPARATORS: &[char] = &['.', '@', '_', '+', '-'];

/// Outcome of the three password rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRules {
    pub length_ok: bool,
    pub digit_or_special_ok: bool,
    pub no_name_email_ok: bool,
}

impl PasswordRules {
    /// Number of rules that pass
    pub fn passed(&self) -> usize {
        [self.length_ok, self.digit_or_special_ok, self.no_name_email_ok]
            .into_iter()
            .filter(|ok| *ok)
            .count()
    }

    pub fn all_ok(&self) -> bool {
        self.length_ok && self.digit_or_special_ok && self.no_name_email_ok
    }
}

/// Password strength rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Strong needs every rule plus the strong length; Medium needs two rules.
    pub fn classify(rules: &PasswordRules, length: usize, strong_length: usize) -> Self {
        if rules.all_ok() && length >= strong_length {
            StrengthLevel::Strong
        } else if rules.passed() >= 2 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// State of the password field after the latest recheck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PasswordCheck {
    /// Nothing typed yet: indicators stay neutral, label reads "Weak"
    #[default]
    Unjudged,
    Judged {
        rules: PasswordRules,
        strength: StrengthLevel,
    },
}

impl PasswordCheck {
    pub fn is_valid(&self) -> bool {
        match self {
            PasswordCheck::Unjudged => false,
            PasswordCheck::Judged { rules, .. } => rules.all_ok(),
        }
    }

    pub fn rules(&self) -> Option<PasswordRules> {
        match self {
            PasswordCheck::Unjudged => None,
            PasswordCheck::Judged { rules, .. } => Some(*rules),
        }
    }

    pub fn strength(&self) -> Option<StrengthLevel> {
        match self {
            PasswordCheck::Unjudged => None,
            PasswordCheck::Judged { strength, .. } => Some(*strength),
        }
    }

    /// Label shown next to the strength indicator
    pub fn strength_label(&self) -> &'static str {
        self.strength().unwrap_or(StrengthLevel::Weak).label()
    }

    /// Field-level result. The password field has no error slot, so the
    /// message is always empty. `None` while unjudged.
    pub fn result(&self) -> Option<ValidationResult> {
        match self {
            PasswordCheck::Unjudged => None,
            PasswordCheck::Judged { rules, .. } => Some(ValidationResult {
                valid: rules.all_ok(),
                message: String::new(),
            }),
        }
    }
}

/// At least one ASCII digit or one accepted symbol
pub fn has_digit_or_special(password: &str) -> bool {
    password
        .chars()
        .any(|c| c.is_ascii_digit() || PASSWORD_SYMBOLS.contains(c))
}

/// Lowercased fragments of the name and email worth protecting.
///
/// Name: whitespace-separated words. Email: the local part plus every piece
/// of the address split on `. @ _ + -`. Single-character fragments are
/// dropped.
pub fn name_email_fragments(full_name: &str, email: &str) -> Vec<String> {
    let mut fragments = Vec::new();

    let name = full_name.to_lowercase();
    fragments.extend(name.split_whitespace().map(str::to_string));

    if !email.is_empty() {
        let email = email.to_lowercase();
        if let Some(local) = email.split('@').next() {
            fragments.push(local.to_string());
        }
        fragments.extend(email.split(EMAIL_SEPARATORS).map(str::to_string));
    }

    fragments.retain(|part| text_length(part) > 1);
    fragments
}

/// Case-insensitive substring check against [`name_email_fragments`]
pub fn contains_name_or_email(password: &str, full_name: &str, email: &str) -> bool {
    let password = password.to_lowercase();
    name_email_fragments(full_name, email)
        .iter()
        .any(|part| password.contains(part.as_str()))
}

/// Judge a password against the current (trimmed) full name and email.
///
/// The password itself is not trimmed. An empty password is never judged.
pub fn check_password(
    password: &str,
    full_name: &str,
    email: &str,
    config: &PasswordConfig,
) -> PasswordCheck {
    if password.is_empty() {
        return PasswordCheck::Unjudged;
    }

    let length = text_length(password);
    let rules = PasswordRules {
        length_ok: length >= config.min_length,
        digit_or_special_ok: has_digit_or_special(password),
        no_name_email_ok: !contains_name_or_email(password, full_name, email),
    };
    let strength = StrengthLevel::classify(&rules, length, config.strong_length);

    PasswordCheck::Judged { rules, strength }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(password: &str, name: &str, email: &str) -> PasswordCheck {
        check_password(password, name, email, &PasswordConfig::default())
    }

    fn rules(password: &str, name: &str, email: &str) -> PasswordRules {
        check(password, name, email).rules().expect("judged")
    }

    #[test]
    fn test_empty_password_is_unjudged() {
        let result = check("", "John Smith", "john@example.com");
        assert_eq!(result, PasswordCheck::Unjudged);
        assert!(!result.is_valid());
        assert_eq!(result.strength_label(), "Weak");
        assert_eq!(result.result(), None);
    }

    #[test]
    fn test_whitespace_password_is_judged() {
        let result = check("   ", "", "");
        assert!(result.rules().is_some());
        assert!(!result.is_valid());
    }

    #[test]
    fn test_all_rules_short_is_medium() {
        let result = check("abc12345", "", "");
        assert_eq!(
            result.rules(),
            Some(PasswordRules {
                length_ok: true,
                digit_or_special_ok: true,
                no_name_email_ok: true,
            })
        );
        assert!(result.is_valid());
        assert_eq!(result.strength(), Some(StrengthLevel::Medium));
    }

    #[test]
    fn test_all_rules_long_is_strong() {
        let result = check("abc1234567", "", "");
        assert_eq!(result.strength(), Some(StrengthLevel::Strong));
        assert_eq!(result.strength_label(), "Strong");
    }

    #[test]
    fn test_name_fragment_blocks_password() {
        let result = check("johnsmith1", "John Smith", "");
        assert!(!result.rules().unwrap().no_name_email_ok);
        assert!(!result.is_valid());
        // Two of three rules still rate Medium
        assert_eq!(result.strength(), Some(StrengthLevel::Medium));
    }

    #[test]
    fn test_email_fragments_block_password() {
        assert!(!rules("xx-wonder-xx1", "", "alice@wonder.land").no_name_email_ok);
        assert!(!rules("Alice.Rocks1", "", "alice@wonder.land").no_name_email_ok);
        assert!(!rules("my.mail+99!", "", "my.mail+tag@host.io").no_name_email_ok);
        assert!(rules("zzzzzzzz1", "", "alice@wonder.land").no_name_email_ok);
    }

    #[test]
    fn test_single_character_fragments_ignored() {
        assert!(rules("a1b2c3d4", "A B", "a@b.c").no_name_email_ok);
    }

    #[test]
    fn test_short_name_token_matches() {
        // Two-letter tokens still count
        assert!(!rules("jojo-2024!", "Jo Lee", "").no_name_email_ok);
    }

    #[test]
    fn test_digit_or_special() {
        assert!(has_digit_or_special("abc1"));
        assert!(has_digit_or_special("abc~"));
        assert!(has_digit_or_special("abc\\"));
        assert!(has_digit_or_special("abc\""));
        assert!(!has_digit_or_special("abcdef"));
        assert!(!has_digit_or_special("abc def"));
        assert!(!has_digit_or_special("abc٣"));
    }

    #[test]
    fn test_single_rule_is_weak() {
        let result = check("abc", "", "");
        assert_eq!(result.rules().unwrap().passed(), 1);
        assert_eq!(result.strength(), Some(StrengthLevel::Weak));
    }

    #[test]
    fn test_fragments() {
        let fragments = name_email_fragments("Mary  Jane", "m.j_w@site.co");
        assert_eq!(
            fragments,
            vec!["mary", "jane", "m.j_w", "site", "co"]
        );
    }

    #[test]
    fn test_astral_characters_count_twice() {
        let result = check("😀😀😀😀", "", "");
        let rules = result.rules().unwrap();
        assert!(rules.length_ok);
        assert!(!rules.digit_or_special_ok);

        // Five emoji measure 10: all rules pass at the strong length
        let result = check("😀😀😀😀!", "", "");
        assert_eq!(result.strength(), Some(StrengthLevel::Medium));
        let result = check("😀😀😀😀😀!", "", "");
        assert_eq!(result.strength(), Some(StrengthLevel::Strong));
    }

    #[test]
    fn test_single_astral_fragment_counts() {
        // One emoji is two code units, so it is a meaningful fragment
        assert!(!rules("abc😀1234", "😀 Smith", "").no_name_email_ok);
    }

    #[test]
    fn test_strong_length_configurable() {
        let config = PasswordConfig {
            strong_length: 14,
            ..PasswordConfig::default()
        };
        let result = check_password("abc1234567", "", "", &config);
        assert_eq!(result.strength(), Some(StrengthLevel::Medium));
    }
}
