//! Signup Validation WASM
//!
//! WebAssembly bindings for the signup form validator.
//! The page forwards input and submit events; every call returns a snapshot
//! of what the page should display.
//!
//! # Example (JavaScript)
//! ```javascript
//! const form = new SignupForm();
//! input.addEventListener('input', () => render(form.onFieldChange('username', input.value)));
//! signup.addEventListener('submit', (event) => {
//!     event.preventDefault();
//!     const { submitted, view } = form.submit();
//!     render(view);
//! });
//! ```

use serde::Serialize;
use signup_validation::{
    Field, FormController, FormView, PasswordRules, SubmissionPayload, SubmissionSink, ValidationConfig,
    ValidationEngine,
};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Logs accepted submissions to the browser console
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn emit(&mut self, payload: &SubmissionPayload) {
        match serde_wasm_bindgen::to_value(payload) {
            Ok(value) => web_sys::console::log_2(&JsValue::from_str("data:"), &value),
            Err(e) => web_sys::console::error_1(&JsValue::from_str(&format!(
                "Failed to serialize submission: {}",
                e
            ))),
        }
    }
}

/// Result of a submit attempt returned to JavaScript
#[derive(Serialize)]
struct SubmitResult<'a> {
    submitted: bool,
    view: &'a FormView,
}

/// Password breakdown returned by `checkPassword`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordReport {
    valid: bool,
    strength: &'static str,
    /// `null` while the password is empty
    rules: Option<PasswordRules>,
}

/// Registration form bound to a page
#[wasm_bindgen]
pub struct SignupForm {
    controller: FormController<FormView, ConsoleSink>,
}

#[wasm_bindgen]
impl SignupForm {
    /// Form with the default limits
    #[wasm_bindgen(constructor)]
    pub fn new() -> SignupForm {
        SignupForm {
            controller: FormController::new(FormView::default(), ConsoleSink),
        }
    }

    /// Form with limits read from TOML text
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(toml: &str) -> Result<SignupForm, JsValue> {
        let config = ValidationConfig::from_toml(toml)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {:#}", e)))?;
        Ok(SignupForm {
            controller: FormController::with_config(config, FormView::default(), ConsoleSink),
        })
    }

    /// Handle an input event and return the updated view
    ///
    /// `field` is one of `username`, `fullName`, `email`, `password`.
    #[wasm_bindgen(js_name = onFieldChange)]
    pub fn on_field_change(&mut self, field: &str, value: &str) -> Result<JsValue, JsValue> {
        let field = field
            .parse::<Field>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.controller.on_field_change(field, value);
        self.view()
    }

    /// Handle a submit event: `{ submitted, view }`
    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        let submitted = self.controller.on_submit();
        let result = SubmitResult {
            submitted,
            view: self.controller.presenter(),
        };
        Ok(serde_wasm_bindgen::to_value(&result)?)
    }

    /// Current view without changing anything
    pub fn view(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.controller.presenter())?)
    }

    /// Whether the submit button should be enabled
    #[wasm_bindgen(getter)]
    pub fn submittable(&self) -> bool {
        self.controller.state().submittable
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    /// Current view as a Rust value
    pub fn snapshot(&self) -> &FormView {
        self.controller.presenter()
    }
}

/// Quick username validation: `{ valid, message }`
#[wasm_bindgen(js_name = validateUsername)]
pub fn validate_username_js(value: &str) -> Result<JsValue, JsValue> {
    let result = ValidationEngine::default().validate_username(value);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Quick full name validation: `{ valid, message }`
#[wasm_bindgen(js_name = validateFullName)]
pub fn validate_full_name_js(value: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(
        &signup_validation::validate_full_name(value),
    )?)
}

/// Quick email validation: `{ valid, message }`
#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(value: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(
        &signup_validation::validate_email(value),
    )?)
}

/// Quick password check against the current name and email
#[wasm_bindgen(js_name = checkPassword)]
pub fn check_password_js(password: &str, full_name: &str, email: &str) -> Result<JsValue, JsValue> {
    let check = ValidationEngine::default().check_password(password, full_name, email);
    let report = PasswordReport {
        valid: check.is_valid(),
        strength: check.strength_label(),
        rules: check.rules(),
    };
    Ok(serde_wasm_bindgen::to_value(&report)?)
}
