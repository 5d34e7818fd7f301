use crate::modules::booking::flow::BookingFlow;
use crate::modules::forms::use_cases::submit_form::flow::{Flow, FlowMessages};
use crate::modules::forms::use_cases::submit_form::handler::SubmitFormHandler;
use crate::modules::profile::change_password::ChangePasswordFlow;
use crate::modules::profile::update_profile::ProfileFlow;
use crate::modules::registration::flow::RegistrationFlow;
use crate::shared::forms::definition::FormDefinition;
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::submitter::Submitter;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub booking: Arc<SubmitFormHandler<BookingFlow>>,
    pub registration: Arc<SubmitFormHandler<RegistrationFlow>>,
    pub profile: Arc<SubmitFormHandler<ProfileFlow>>,
    pub change_password: Arc<SubmitFormHandler<ChangePasswordFlow>>,
}

#[derive(Debug, Serialize)]
pub struct FormDescription<'a> {
    pub form: &'a FormDefinition,
    pub messages: &'a FlowMessages,
}

impl<'a, F: Flow> From<&'a SubmitFormHandler<F>> for FormDescription<'a> {
    fn from(handler: &'a SubmitFormHandler<F>) -> Self {
        Self {
            form: handler.flow().form(),
            messages: handler.flow().messages(),
        }
    }
}

impl AppState {
    /// Wire every flow. Profile flows get their own submitter so they can stay local.
    pub fn new(
        api: Arc<dyn Submitter>,
        profile_store: Arc<dyn Submitter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            booking: Arc::new(SubmitFormHandler::new(
                BookingFlow::default(),
                api.clone(),
                notifier.clone(),
            )),
            registration: Arc::new(SubmitFormHandler::new(
                RegistrationFlow::default(),
                api,
                notifier.clone(),
            )),
            profile: Arc::new(SubmitFormHandler::new(
                ProfileFlow::default(),
                profile_store.clone(),
                notifier.clone(),
            )),
            change_password: Arc::new(SubmitFormHandler::new(
                ChangePasswordFlow::default(),
                profile_store,
                notifier,
            )),
        }
    }

    pub fn describe(&self, form: &str) -> Option<FormDescription<'_>> {
        match form {
            "booking" => Some(self.booking.as_ref().into()),
            "register" => Some(self.registration.as_ref().into()),
            "profile" => Some(self.profile.as_ref().into()),
            "change-password" => Some(self.change_password.as_ref().into()),
            _ => None,
        }
    }
}
