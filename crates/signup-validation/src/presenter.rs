// File: src/presenter.rs
// Purpose: Presentation contract and the projection of FormState onto it

use crate::field::Field;
use crate::password::PasswordCheck;
use crate::result::ValidationResult;
use crate::state::FormState;
use serde::{Deserialize, Serialize};

/// Three-state display of a field or rule indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }
}

/// Password rule indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleSlot {
    MinLength,
    NumberOrSymbol,
    NoNameOrEmail,
    /// All three rules together
    Strength,
}

impl RuleSlot {
    pub const ALL: [RuleSlot; 4] = [
        RuleSlot::MinLength,
        RuleSlot::NumberOrSymbol,
        RuleSlot::NoNameOrEmail,
        RuleSlot::Strength,
    ];

    /// Status of this indicator for a password check
    pub fn status(&self, check: &PasswordCheck) -> FieldStatus {
        let Some(rules) = check.rules() else {
            return FieldStatus::Neutral;
        };
        FieldStatus::from_valid(match self {
            RuleSlot::MinLength => rules.length_ok,
            RuleSlot::NumberOrSymbol => rules.digit_or_special_ok,
            RuleSlot::NoNameOrEmail => rules.no_name_email_ok,
            RuleSlot::Strength => rules.all_ok(),
        })
    }
}

/// Display primitives the engine drives
///
/// Implemented by the DOM binding, the terminal host and [`FormView`].
pub trait Presenter {
    fn update_field_status(&mut self, field: Field, status: FieldStatus, message: &str);

    fn update_rule_status(&mut self, rule: RuleSlot, status: FieldStatus);

    fn set_strength_label(&mut self, label: &str);

    fn set_submit_enabled(&mut self, enabled: bool);

    fn set_confirmation_visible(&mut self, visible: bool);
}

fn field_status(result: Option<&ValidationResult>) -> (FieldStatus, &str) {
    match result {
        None => (FieldStatus::Neutral, ""),
        Some(result) => (FieldStatus::from_valid(result.valid), result.message.as_str()),
    }
}

/// Render the whole form state onto a presenter
///
/// Every displayed status is derived from `state`; calling this twice with
/// the same state produces the same display.
pub fn project<P: Presenter + ?Sized>(state: &FormState, presenter: &mut P) {
    for (field, entry) in [
        (Field::Username, &state.username),
        (Field::FullName, &state.full_name),
        (Field::Email, &state.email),
    ] {
        let (status, message) = field_status(entry.result.as_ref());
        presenter.update_field_status(field, status, message);
    }

    let check = &state.password_check;
    let password_status = match check.result() {
        None => FieldStatus::Neutral,
        Some(result) => FieldStatus::from_valid(result.valid),
    };
    presenter.update_field_status(Field::Password, password_status, "");

    for rule in RuleSlot::ALL {
        presenter.update_rule_status(rule, rule.status(check));
    }
    presenter.set_strength_label(check.strength_label());

    presenter.set_submit_enabled(state.submittable);
    presenter.set_confirmation_visible(state.confirmation_visible);
}

/// Display state of one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    pub status: FieldStatus,
    pub message: String,
}

/// Rule indicator display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleViews {
    pub min_length: FieldStatus,
    pub number_or_symbol: FieldStatus,
    pub no_name_or_email: FieldStatus,
    pub strength: FieldStatus,
}

/// Snapshot of everything a page displays
///
/// A presenter that records what it was told, used as the serialized view
/// for the WASM binding and in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub username: FieldView,
    pub full_name: FieldView,
    pub email: FieldView,
    pub password: FieldView,
    pub rules: RuleViews,
    pub strength_label: String,
    pub submit_enabled: bool,
    pub confirmation_visible: bool,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            username: FieldView::default(),
            full_name: FieldView::default(),
            email: FieldView::default(),
            password: FieldView::default(),
            rules: RuleViews::default(),
            strength_label: "Weak".to_string(),
            submit_enabled: false,
            confirmation_visible: false,
        }
    }
}

impl FormView {
    /// Projection of a state onto a fresh view
    pub fn of(state: &FormState) -> Self {
        let mut view = Self::default();
        project(state, &mut view);
        view
    }

    pub fn field(&self, field: Field) -> &FieldView {
        match field {
            Field::Username => &self.username,
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn rule(&self, rule: RuleSlot) -> FieldStatus {
        match rule {
            RuleSlot::MinLength => self.rules.min_length,
            RuleSlot::NumberOrSymbol => self.rules.number_or_symbol,
            RuleSlot::NoNameOrEmail => self.rules.no_name_or_email,
            RuleSlot::Strength => self.rules.strength,
        }
    }
}

impl Presenter for FormView {
    fn update_field_status(&mut self, field: Field, status: FieldStatus, message: &str) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        slot.status = status;
        slot.message = message.to_string();
    }

    fn update_rule_status(&mut self, rule: RuleSlot, status: FieldStatus) {
        let slot = match rule {
            RuleSlot::MinLength => &mut self.rules.min_length,
            RuleSlot::NumberOrSymbol => &mut self.rules.number_or_symbol,
            RuleSlot::NoNameOrEmail => &mut self.rules.no_name_or_email,
            RuleSlot::Strength => &mut self.rules.strength,
        };
        *slot = status;
    }

    fn set_strength_label(&mut self, label: &str) {
        self.strength_label = label.to_string();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_confirmation_visible(&mut self, visible: bool) {
        self.confirmation_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::{PasswordRules, StrengthLevel};

    #[test]
    fn test_initial_projection_is_neutral() {
        let view = FormView::of(&FormState::new());
        assert_eq!(view, FormView::default());
        for rule in RuleSlot::ALL {
            assert_eq!(view.rule(rule), FieldStatus::Neutral);
        }
    }

    #[test]
    fn test_projection_mirrors_results() {
        let mut state = FormState::new();
        state.username.result = Some(ValidationResult::failure("too short"));
        state.email.result = Some(ValidationResult::success());
        state.password_check = PasswordCheck::Judged {
            rules: PasswordRules {
                length_ok: true,
                digit_or_special_ok: false,
                no_name_email_ok: true,
            },
            strength: StrengthLevel::Medium,
        };

        let view = FormView::of(&state);
        assert_eq!(view.username.status, FieldStatus::Invalid);
        assert_eq!(view.username.message, "too short");
        assert_eq!(view.email.status, FieldStatus::Valid);
        assert_eq!(view.full_name.status, FieldStatus::Neutral);
        assert_eq!(view.password.status, FieldStatus::Invalid);
        assert_eq!(view.rule(RuleSlot::MinLength), FieldStatus::Valid);
        assert_eq!(view.rule(RuleSlot::NumberOrSymbol), FieldStatus::Invalid);
        assert_eq!(view.rule(RuleSlot::Strength), FieldStatus::Invalid);
        assert_eq!(view.strength_label, "Medium");
    }

    #[test]
    fn test_projection_overwrites_previous_display() {
        let mut view = FormView::default();
        view.username.message = "stale".to_string();
        view.rules.strength = FieldStatus::Valid;
        view.strength_label = "Strong".to_string();

        project(&FormState::new(), &mut view);
        assert_eq!(view, FormView::default());
    }
}
