//! Signup Validation
//!
//! Validation engine for a registration form with four fields: username,
//! full name, email and password.
//!
//! Every validator is a pure function over the raw input string. The
//! [`ValidationEngine`] threads a [`FormState`] through field-change and
//! submit events, and [`project`] renders that state onto any
//! [`Presenter`]. [`FormController`] wires the three together for hosts
//! that deliver one event per keystroke.
//!
//! ```
//! use signup_validation::{Field, FormController, FormView, TracingSink};
//!
//! let mut form = FormController::new(FormView::default(), TracingSink);
//! form.on_field_change(Field::Username, "alice");
//! form.on_field_change(Field::FullName, "Alice Liddell");
//! form.on_field_change(Field::Email, "alice@wonder.land");
//! form.on_field_change(Field::Password, "rabbit#hole9");
//!
//! assert!(form.presenter().submit_enabled);
//! assert_eq!(form.presenter().strength_label, "Strong");
//! ```

pub mod config;
pub mod controller;
pub mod email;
pub mod engine;
pub mod error;
pub mod field;
pub mod full_name;
pub mod password;
pub mod presenter;
pub mod result;
pub mod sink;
pub mod state;
pub mod text;
pub mod username;

pub use config::{PasswordConfig, UsernameConfig, ValidationConfig};
pub use controller::FormController;
pub use email::{is_valid_email, validate_email};
pub use engine::{FormEvent, UpdateOutcome, ValidationEngine};
pub use error::FormError;
pub use field::Field;
pub use full_name::validate_full_name;
pub use password::{check_password, PasswordCheck, PasswordRules, StrengthLevel};
pub use presenter::{project, FieldStatus, FieldView, FormView, Presenter, RuleSlot};
pub use result::ValidationResult;
pub use sink::{mask_password, SubmissionPayload, SubmissionSink, TracingSink};
pub use state::{FieldEntry, FormState};
pub use text::text_length;
pub use username::validate_username;
