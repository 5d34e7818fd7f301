use crate::modules::forms::core::session::FormSession;
use crate::modules::forms::core::submission_result::SubmissionResult;
use crate::modules::forms::core::submit_state::SubmitEvent;
use crate::modules::forms::use_cases::submit_form::decide::decide_submit;
use crate::modules::forms::use_cases::submit_form::decision::Decision;
use crate::modules::forms::use_cases::submit_form::flow::{Flow, SuccessAction};
use crate::shared::core::notification::Notification;
use crate::shared::core::user_context::UserContext;
use crate::shared::forms::field_errors::FieldErrors;
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::submitter::{SubmissionError, Submitter};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("submission failed: {source}")]
    Submission {
        source: SubmissionError,
        notification: Notification,
    },

    #[error("unexpected: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub response: serde_json::Value,
    pub notification: Notification,
    pub redirect: Option<String>,
}

/// Runs validate -> submit -> notify for any flow.
pub struct SubmitFormHandler<F: Flow> {
    flow: F,
    submitter: Arc<dyn Submitter>,
    notifier: Arc<dyn Notifier>,
}

impl<F: Flow> SubmitFormHandler<F> {
    pub fn new(flow: F, submitter: Arc<dyn Submitter>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            flow,
            submitter,
            notifier,
        }
    }

    pub fn flow(&self) -> &F {
        &self.flow
    }

    /// A fresh session for this flow, prefilled from the user context.
    pub fn open(&self, user: &UserContext) -> FormSession {
        FormSession::for_form(self.flow.form(), user)
    }

    pub async fn handle(
        &self,
        session: &mut FormSession,
        user: &UserContext,
    ) -> Result<Submitted, FlowError> {
        let attempt = Uuid::now_v7();
        let flow = self.flow.name();

        let payload = match decide_submit(&self.flow, session.values(), user) {
            Decision::Accepted { payload } => payload,
            Decision::Rejected { errors } => {
                debug!(%flow, %attempt, %errors, "submission blocked by validation");
                session.replace_errors(errors.clone());
                return Err(FlowError::Validation(errors));
            }
        };
        session.replace_errors(FieldErrors::new());

        let body = serde_json::to_value(payload)
            .map_err(|err| FlowError::Unexpected(err.to_string()))?;

        session.apply(SubmitEvent::Started);
        session.remember_submitted();
        info!(%flow, %attempt, endpoint = %self.flow.endpoint().name, "submitting form");

        let result: SubmissionResult = self
            .submitter
            .submit(self.flow.endpoint(), &body)
            .await
            .into();

        match result {
            SubmissionResult::Success { server_response } => {
                session.apply(SubmitEvent::Succeeded);
                let notification = Notification::success(&self.flow.messages().success);
                self.notifier.notify(notification.clone()).await;
                info!(%flow, %attempt, "form submitted");

                let redirect = match self.flow.on_success() {
                    SuccessAction::Keep => None,
                    SuccessAction::Reset => {
                        session.reset();
                        None
                    }
                    SuccessAction::Redirect(path) => Some(path),
                };
                Ok(Submitted {
                    response: server_response,
                    notification,
                    redirect,
                })
            }
            SubmissionResult::Failure { error } => {
                session.apply(SubmitEvent::Failed);
                let notification = Notification::failure(&self.flow.messages().failure);
                self.notifier.notify(notification.clone()).await;
                warn!(%flow, %attempt, %error, "form submission failed");
                Err(FlowError::Submission {
                    source: error,
                    notification,
                })
            }
        }
    }
}
