// A flow is one form-to-submission pipeline: booking, registration, profile, ...
//
// Purpose
// - Describe everything that differs between flows so a single handler can run all of them.
//
// Responsibilities
// - Provide the form definition, the endpoint, the toast messages and what to do on success.
// - Turn validated values into the typed request body the remote API expects.

use crate::shared::core::form_values::FormValues;
use crate::shared::core::user_context::UserContext;
use crate::shared::forms::definition::{FormDefinition, ValidationRule};
use crate::shared::infrastructure::submitter::Endpoint;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowMessages {
    pub success: String,
    pub failure: String,
}

impl FlowMessages {
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
        }
    }
}

/// What happens to the entered values once the API accepted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "path", rename_all = "camelCase")]
pub enum SuccessAction {
    Keep,
    Reset,
    Redirect(String),
}

/// A validated value that still cannot be turned into the request body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct PayloadError {
    pub field: String,
    pub message: String,
}

pub trait Flow: Send + Sync + 'static {
    type Payload: Serialize + Send;

    fn name(&self) -> &str;
    fn form(&self) -> &FormDefinition;
    fn endpoint(&self) -> &Endpoint;
    fn messages(&self) -> &FlowMessages;
    fn on_success(&self) -> SuccessAction;
    fn payload(
        &self,
        values: &FormValues,
        user: &UserContext,
    ) -> Result<Self::Payload, PayloadError>;
}

/// Trimmed text of a field, or the field's own required message when it is blank.
pub fn text_field(
    form: &FormDefinition,
    values: &FormValues,
    field: &str,
) -> Result<String, PayloadError> {
    values
        .text(field)
        .ok_or_else(|| payload_error(form, field, "is required"))
}

/// Text of a field exactly as entered, untrimmed. Missing fields become empty.
pub fn raw_text_field(values: &FormValues, field: &str) -> String {
    values.get(field).map(|v| v.as_text()).unwrap_or_default()
}

/// Text of an optional field; blank becomes `None`.
pub fn optional_text_field(values: &FormValues, field: &str) -> Option<String> {
    values.text(field)
}

pub(crate) fn payload_error(form: &FormDefinition, field: &str, fallback: &str) -> PayloadError {
    let message = form
        .field_named(field)
        .and_then(|spec| {
            spec.rules
                .iter()
                .find(|rule| matches!(rule, ValidationRule::Required { .. }))
        })
        .map(|rule| rule.message().to_string())
        .unwrap_or_else(|| format!("{field} {fallback}"));
    PayloadError {
        field: field.to_string(),
        message,
    }
}
