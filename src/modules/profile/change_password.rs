// Password change, the profile's sub-flow.
//
// Responsibilities
// - Require the current password, a new password and its confirmation.
// - Refuse to submit when the confirmation differs from the new password.

use crate::modules::forms::use_cases::submit_form::flow::{
    Flow, FlowMessages, PayloadError, SuccessAction, raw_text_field,
};
use crate::modules::profile::update_profile::SIGN_IN_REQUIRED;
use crate::shared::core::form_values::FormValues;
use crate::shared::core::user_context::UserContext;
use crate::shared::forms::definition::{FieldKind, FieldSpec, FormDefinition};
use crate::shared::infrastructure::submitter::Endpoint;
use serde::{Deserialize, Serialize};

pub const PASSWORD_SUCCESS: &str = "Password Changed Successfully!";
pub const PASSWORD_FAILURE: &str = "Password Change Failed!";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    pub user_id: String,
    pub current_password: String,
    pub new_password: String,
}

pub struct ChangePasswordFlow {
    form: FormDefinition,
    endpoint: Endpoint,
    messages: FlowMessages,
}

impl Default for ChangePasswordFlow {
    fn default() -> Self {
        Self::new(Endpoint::new("change-password", "/api/user/change-password"))
    }
}

impl ChangePasswordFlow {
    pub fn new(endpoint: Endpoint) -> Self {
        let form = FormDefinition::new("change-password")
            .field(
                FieldSpec::new("currentPassword", "Your Password", FieldKind::Password)
                    .required("Your password is required"),
            )
            .field(
                FieldSpec::new("newPassword", "New Password", FieldKind::Password)
                    .required("New password is required"),
            )
            .field(
                FieldSpec::new("confirmPassword", "Confirm Password", FieldKind::Password)
                    .required("Confirm password is required")
                    .matches("newPassword", PASSWORDS_DO_NOT_MATCH),
            );
        Self {
            form,
            endpoint,
            messages: FlowMessages::new(PASSWORD_SUCCESS, PASSWORD_FAILURE),
        }
    }
}

impl Flow for ChangePasswordFlow {
    type Payload = ChangePassword;

    fn name(&self) -> &str {
        "change-password"
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

    fn payload(&self, values: &FormValues, user: &UserContext) -> Result<ChangePassword, PayloadError> {
        if user.is_anonymous() {
            return Err(PayloadError {
                field: "currentPassword".to_string(),
                message: SIGN_IN_REQUIRED.to_string(),
            });
        }
        Ok(ChangePassword {
            user_id: user.user_id.clone(),
            current_password: raw_text_field(values, "currentPassword"),
            new_password: raw_text_field(values, "newPassword"),
        })
    }
}
