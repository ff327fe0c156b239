// File: src/engine.rs
// Purpose: Event-driven update of FormState (field rechecks, gate, submission)

use crate::config::ValidationConfig;
use crate::email::validate_email;
use crate::field::Field;
use crate::full_name::validate_full_name;
use crate::password::{check_password, PasswordCheck};
use crate::result::ValidationResult;
use crate::sink::SubmissionPayload;
use crate::state::FormState;
use crate::username::validate_username;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Input delivered by the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormEvent {
    /// One keystroke or change in a field
    FieldChanged { field: Field, value: String },
    /// Submit attempt
    Submit,
}

impl FormEvent {
    pub fn field_changed(field: Field, value: impl Into<String>) -> Self {
        FormEvent::FieldChanged {
            field,
            value: value.into(),
        }
    }
}

/// What an update did to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Fields rechecked, in the order they ran
    Rechecked(Vec<Field>),
    /// Submit attempt while the form was not submittable
    SubmitRejected,
    /// Accepted submission; the state has been reset
    Submitted(SubmissionPayload),
}

/// Applies the validation rules to form events
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: ValidationConfig,
}

impl ValidationEngine {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn validate_username(&self, raw: &str) -> ValidationResult {
        validate_username(raw, &self.config.username)
    }

    pub fn validate_full_name(&self, raw: &str) -> ValidationResult {
        validate_full_name(raw)
    }

    pub fn validate_email(&self, raw: &str) -> ValidationResult {
        validate_email(raw)
    }

    /// Judge a password against raw full name and email values
    pub fn check_password(&self, password: &str, full_name: &str, email: &str) -> PasswordCheck {
        check_password(
            password,
            full_name.trim(),
            email.trim(),
            &self.config.password,
        )
    }

    /// Apply one event to the state
    ///
    /// Within a field change the changed field is checked first, then the
    /// password (when the change can affect it), then the submit gate.
    pub fn update(&self, state: &mut FormState, event: FormEvent) -> UpdateOutcome {
        match event {
            FormEvent::FieldChanged { field, value } => {
                UpdateOutcome::Rechecked(self.change_field(state, field, value))
            }
            FormEvent::Submit => self.submit(state),
        }
    }

    fn change_field(&self, state: &mut FormState, field: Field, value: String) -> Vec<Field> {
        let mut rechecked = Vec::with_capacity(2);

        match field {
            Field::Username => {
                state.username.result = Some(self.validate_username(&value));
                state.username.value = value;
            }
            Field::FullName => {
                state.full_name.result = Some(self.validate_full_name(&value));
                state.full_name.value = value;
            }
            Field::Email => {
                state.email.result = Some(self.validate_email(&value));
                state.email.value = value;
            }
            Field::Password => state.password = value,
        }
        if field != Field::Password {
            rechecked.push(field);
            debug!(field = %field, valid = state.is_valid(field), "field rechecked");
        }

        if field.affects_password() {
            self.recheck_password(state);
            rechecked.push(Field::Password);
        }

        self.refresh_gate(state);
        rechecked
    }

    fn recheck_password(&self, state: &mut FormState) {
        state.password_check = self.check_password(
            &state.password,
            &state.full_name.value,
            &state.email.value,
        );
        debug!(
            valid = state.password_check.is_valid(),
            strength = state.password_check.strength_label(),
            "password rechecked"
        );
    }

    fn refresh_gate(&self, state: &mut FormState) {
        let submittable = state.all_valid();
        if submittable != state.submittable {
            debug!(submittable, "submit gate changed");
        }
        state.submittable = submittable;
    }

    fn submit(&self, state: &mut FormState) -> UpdateOutcome {
        self.refresh_gate(state);

        if !state.submittable {
            debug!("submit rejected: form incomplete");
            state.confirmation_visible = false;
            return UpdateOutcome::SubmitRejected;
        }

        let payload = SubmissionPayload::from_state(state, self.config.password.mask_char);
        tracing::info!(username = %payload.username, "registration accepted");

        state.reset();
        state.confirmation_visible = true;

        UpdateOutcome::Submitted(payload)
    }
}
