// File: src/error.rs
// Purpose: Errors raised at the host boundary (validation itself never fails)

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0:?}")]
    UnknownField(String),
}
