// File: src/controller.rs
// Purpose: Single dispatcher tying engine, state, presenter and sink together

use crate::config::ValidationConfig;
use crate::engine::{FormEvent, UpdateOutcome, ValidationEngine};
use crate::field::Field;
use crate::presenter::{project, Presenter};
use crate::sink::SubmissionSink;
use crate::state::FormState;

/// Owns the form state and re-renders it after every event
pub struct FormController<P, S> {
    engine: ValidationEngine,
    state: FormState,
    presenter: P,
    sink: S,
}

impl<P: Presenter, S: SubmissionSink> FormController<P, S> {
    /// Controller with the default limits. The presenter is rendered once so
    /// the page starts from the neutral display.
    pub fn new(presenter: P, sink: S) -> Self {
        Self::with_engine(ValidationEngine::default(), presenter, sink)
    }

    pub fn with_config(config: ValidationConfig, presenter: P, sink: S) -> Self {
        Self::with_engine(ValidationEngine::new(config), presenter, sink)
    }

    pub fn with_engine(engine: ValidationEngine, presenter: P, sink: S) -> Self {
        let mut controller = Self {
            engine,
            state: FormState::new(),
            presenter,
            sink,
        };
        project(&controller.state, &mut controller.presenter);
        controller
    }

    /// Handle one keystroke/change in a field
    pub fn on_field_change(&mut self, field: Field, value: &str) -> UpdateOutcome {
        self.dispatch(FormEvent::field_changed(field, value))
    }

    /// Handle a submit attempt. Returns true when the submission was
    /// accepted. The host's default submission is always suppressed.
    pub fn on_submit(&mut self) -> bool {
        matches!(self.dispatch(FormEvent::Submit), UpdateOutcome::Submitted(_))
    }

    pub fn dispatch(&mut self, event: FormEvent) -> UpdateOutcome {
        let outcome = self.engine.update(&mut self.state, event);
        if let UpdateOutcome::Submitted(payload) = &outcome {
            self.sink.emit(payload);
        }
        project(&self.state, &mut self.presenter);
        outcome
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (FormState, P, S) {
        (self.state, self.presenter, self.sink)
    }
}
