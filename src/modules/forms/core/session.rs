// Local state of one rendered form.
//
// Purpose
// - Hold what the user typed, the inline errors of the last attempt, the last
//   submitted values and the submission lifecycle state.
//
// Responsibilities
// - Errors are replaced wholesale on every attempt, never accumulated.
// - Edits move a resolved session back to Idle.

use crate::modules::forms::core::submit_state::{SubmitEvent, SubmitState, evolve};
use crate::shared::core::form_values::{FieldValue, FormValues};
use crate::shared::core::user_context::UserContext;
use crate::shared::forms::definition::FormDefinition;
use crate::shared::forms::field_errors::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    initial: FormValues,
    values: FormValues,
    errors: FieldErrors,
    last_submitted: Option<FormValues>,
    state: SubmitState,
}

impl FormSession {
    pub fn new(initial: FormValues) -> Self {
        Self {
            values: initial.clone(),
            initial,
            ..Self::default()
        }
    }

    /// A fresh session with every prefilled field taken from the user context.
    pub fn for_form(definition: &FormDefinition, user: &UserContext) -> Self {
        Self::new(definition.initial_values(user))
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.set(field, value);
        self.state = evolve(self.state, SubmitEvent::Edited);
    }

    /// Overwrite the given fields, keeping any prefilled field the input does not mention.
    pub fn fill(&mut self, input: FormValues) {
        for (field, value) in input.iter() {
            self.values.set(field.clone(), value.clone());
        }
        self.state = evolve(self.state, SubmitEvent::Edited);
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors = FieldErrors::new();
        self.state = SubmitState::Idle;
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn last_submitted(&self) -> Option<&FormValues> {
        self.last_submitted.as_ref()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub(crate) fn replace_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub(crate) fn remember_submitted(&mut self) {
        self.last_submitted = Some(self.values.clone());
    }

    pub(crate) fn apply(&mut self, event: SubmitEvent) {
        self.state = evolve(self.state, event);
    }
}
