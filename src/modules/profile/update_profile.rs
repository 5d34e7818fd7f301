// Profile flow: edit the signed in user's account details.
//
// Responsibilities
// - Prefill email, username and full name from the user context.
// - Require all three; the email must look like an email.
// - Address the update to the user from the context, never to a form field.

use crate::modules::forms::use_cases::submit_form::flow::{
    Flow, FlowMessages, PayloadError, SuccessAction, text_field,
};
use crate::shared::core::form_values::FormValues;
use crate::shared::core::user_context::UserContext;
use crate::shared::forms::definition::{FieldKind, FieldSpec, FormDefinition};
use crate::shared::infrastructure::submitter::Endpoint;
use serde::{Deserialize, Serialize};

pub const PROFILE_SUCCESS: &str = "Profile Updated Successfully!";
pub const PROFILE_FAILURE: &str = "Profile Update Failed!";
pub const SIGN_IN_REQUIRED: &str = "Please sign in to update your profile!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub user_id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
}

pub struct ProfileFlow {
    form: FormDefinition,
    endpoint: Endpoint,
    messages: FlowMessages,
}

impl Default for ProfileFlow {
    fn default() -> Self {
        Self::new(Endpoint::new("profile-update", "/api/user/profile"))
    }
}

impl ProfileFlow {
    pub fn new(endpoint: Endpoint) -> Self {
        let form = FormDefinition::new("profile")
            .field(
                FieldSpec::new("email", "Email Address", FieldKind::Email)
                    .required("Email address is required")
                    .email("Email address is invalid")
                    .prefill_from("email"),
            )
            .field(
                FieldSpec::new("username", "Username", FieldKind::Text)
                    .required("Username is required")
                    .prefill_from("username"),
            )
            .field(
                FieldSpec::new("fullName", "FullName", FieldKind::Text)
                    .required("Fullname is required")
                    .prefill_from("fullName"),
            );
        Self {
            form,
            endpoint,
            messages: FlowMessages::new(PROFILE_SUCCESS, PROFILE_FAILURE),
        }
    }
}

impl Flow for ProfileFlow {
    type Payload = UpdateProfile;

    fn name(&self) -> &str {
        "profile"
    }

    fn form(&self) -> &FormDefinition {
        &self.form
    }

    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn messages(&self) -> &FlowMessages {
        &self.messages
    }

    fn on_success(&self) -> SuccessAction {
        SuccessAction::Keep
    }

    fn payload(&self, values: &FormValues, user: &UserContext) -> Result<UpdateProfile, PayloadError> {
        if user.is_anonymous() {
            return Err(PayloadError {
                field: "username".to_string(),
                message: SIGN_IN_REQUIRED.to_string(),
            });
        }
        Ok(UpdateProfile {
            user_id: user.user_id.clone(),
            email: text_field(&self.form, values, "email")?,
            username: text_field(&self.form, values, "username")?,
            full_name: text_field(&self.form, values, "fullName")?,
        })
    }
}
