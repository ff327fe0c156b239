// File: src/state.rs
// Purpose: Form state threaded through the validation engine

use crate::field::Field;
use crate::password::PasswordCheck;
use crate::result::ValidationResult;
use serde::{Deserialize, Serialize};

/// Raw value of a field and its most recent validation result
///
/// `result` is `None` until the field is first checked (neutral display).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub value: String,
    pub result: Option<ValidationResult>,
}

impl FieldEntry {
    pub fn is_valid(&self) -> bool {
        self.result.as_ref().is_some_and(|r| r.valid)
    }

    /// Value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }
}

/// Complete state of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub username: FieldEntry,
    pub full_name: FieldEntry,
    pub email: FieldEntry,
    /// Raw password value; its judgement lives in `password_check`
    pub password: String,
    pub password_check: PasswordCheck,
    pub submittable: bool,
    pub confirmation_visible: bool,
}

impl FormState {
    /// Initial state: every field empty and neutral
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username.value,
            Field::FullName => &self.full_name.value,
            Field::Email => &self.email.value,
            Field::Password => &self.password,
        }
    }

    /// Most recent result of a field, `None` while neutral
    pub fn result(&self, field: Field) -> Option<ValidationResult> {
        match field {
            Field::Username => self.username.result.clone(),
            Field::FullName => self.full_name.result.clone(),
            Field::Email => self.email.result.clone(),
            Field::Password => self.password_check.result(),
        }
    }

    pub fn is_valid(&self, field: Field) -> bool {
        match field {
            Field::Username => self.username.is_valid(),
            Field::FullName => self.full_name.is_valid(),
            Field::Email => self.email.is_valid(),
            Field::Password => self.password_check.is_valid(),
        }
    }

    /// AND of the four most recent field results
    pub fn all_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.is_valid(*field))
    }

    /// Clear every field and derived result
    pub fn reset(&mut self) {
        let confirmation_visible = self.confirmation_visible;
        *self = Self::default();
        self.confirmation_visible = confirmation_visible;
    }
}
