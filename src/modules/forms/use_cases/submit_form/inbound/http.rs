use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::modules::forms::use_cases::submit_form::flow::Flow;
use crate::modules::forms::use_cases::submit_form::handler::{FlowError, SubmitFormHandler};
use crate::shared::core::form_values::FormValues;
use crate::shared::core::notification::Notification;
use crate::shared::core::user_context::UserContext;
use crate::shared::forms::field_errors::FieldErrors;

#[derive(Deserialize)]
pub struct SubmitFormBody {
    #[serde(default)]
    pub values: FormValues,
    #[serde(default)]
    pub user: UserContext,
}

#[derive(Serialize)]
pub struct SubmitFormResponse {
    pub values: FormValues,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

pub async fn handle<F: Flow>(
    State(handler): State<Arc<SubmitFormHandler<F>>>,
    body: Result<Json<SubmitFormBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    let mut session = handler.open(&body.user);
    session.fill(body.values);

    let result = handler.handle(&mut session, &body.user).await;
    let values = session.values().clone();

    match result {
        Ok(submitted) => (
            StatusCode::OK,
            Json(SubmitFormResponse {
                values,
                errors: FieldErrors::new(),
                notification: Some(submitted.notification),
                response: Some(submitted.response),
                redirect: submitted.redirect,
            }),
        )
            .into_response(),
        Err(FlowError::Validation(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmitFormResponse {
                values,
                errors,
                notification: None,
                response: None,
                redirect: None,
            }),
        )
            .into_response(),
        Err(FlowError::Submission { notification, .. }) => (
            StatusCode::BAD_GATEWAY,
            Json(SubmitFormResponse {
                values,
                errors: FieldErrors::new(),
                notification: Some(notification),
                response: None,
                redirect: None,
            }),
        )
            .into_response(),
        Err(FlowError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
