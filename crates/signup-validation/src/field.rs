// File: src/field.rs
// Purpose: The four fields of the registration form

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A registration form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    FullName,
    Email,
    Password,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::FullName,
        Field::Email,
        Field::Password,
    ];

    /// Name used by the page markup and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Whether a change to this field invalidates the password check.
    /// The password is compared against the name and email fragments.
    pub fn affects_password(&self) -> bool {
        matches!(self, Field::FullName | Field::Email | Field::Password)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Field::Username),
            "fullName" | "full_name" | "full-name" => Ok(Field::FullName),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}
