// File: src/sink.rs
// Purpose: Masked submission payload and the sinks that receive it

use crate::state::FormState;
use crate::text::text_length;
use serde::{Deserialize, Serialize};

/// Data emitted on a successful submission. The password is masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SubmissionPayload {
    /// Build the payload from trimmed field values
    pub fn from_state(state: &FormState, mask_char: char) -> Self {
        Self {
            username: state.username.trimmed().to_string(),
            full_name: state.full_name.trimmed().to_string(),
            email: state.email.trimmed().to_string(),
            password: mask_password(state.password.trim(), mask_char),
        }
    }
}

/// Replace the password with `mask_char`, one per UTF-16 code unit
pub fn mask_password(password: &str, mask_char: char) -> String {
    std::iter::repeat(mask_char)
        .take(text_length(password))
        .collect()
}

/// Receives the payload of each accepted submission
pub trait SubmissionSink {
    fn emit(&mut self, payload: &SubmissionPayload);
}

/// Default sink: logs the payload through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn emit(&mut self, payload: &SubmissionPayload) {
        let json = serde_json::to_string(payload).unwrap_or_default();
        tracing::info!(
            username = %payload.username,
            full_name = %payload.full_name,
            email = %payload.email,
            "registration submitted: {}",
            json
        );
    }
}

/// Collects payloads in memory
impl SubmissionSink for Vec<SubmissionPayload> {
    fn emit(&mut self, payload: &SubmissionPayload) {
        self.push(payload.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_preserves_length() {
        assert_eq!(mask_password("hunter22", '*'), "********");
        assert_eq!(mask_password("", '*'), "");
        assert_eq!(mask_password("päss", '#'), "####");
        assert_eq!(mask_password("😀😀😀😀", '*'), "********");
    }

    #[test]
    fn test_payload_trims_and_masks() {
        let mut state = FormState::new();
        state.username.value = " alice ".to_string();
        state.full_name.value = "Alice Liddell ".to_string();
        state.email.value = "\talice@wonder.land".to_string();
        state.password = " rabbit#hole9 ".to_string();

        let payload = SubmissionPayload::from_state(&state, '*');
        assert_eq!(payload.username, "alice");
        assert_eq!(payload.full_name, "Alice Liddell");
        assert_eq!(payload.email, "alice@wonder.land");
        assert_eq!(payload.password, "************");
    }

    #[test]
    fn test_payload_json_uses_camel_case() {
        let payload = SubmissionPayload {
            username: "alice".to_string(),
            full_name: "Alice Liddell".to_string(),
            email: "alice@wonder.land".to_string(),
            password: "****".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["fullName"], "Alice Liddell");
        assert_eq!(json["password"], "****");
    }
}
