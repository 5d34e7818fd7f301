// Registration flow: create a salon account.
//
// Responsibilities
// - Require username, phone number, password, its confirmation and email. Full name is optional.
// - The confirmation must equal the password and is never sent to the API.
// - On success send the user to the login page.

use crate::modules::forms::use_cases::submit_form::flow::{
    Flow, FlowMessages, PayloadError, SuccessAction, optional_text_field, raw_text_field,
    text_field,
};
use crate::shared::core::form_values::FormValues;
use crate::shared::core::user_context::UserContext;
use crate::shared::forms::definition::{FieldKind, FieldSpec, FormDefinition};
use crate::shared::infrastructure::submitter::Endpoint;
use serde::{Deserialize, Serialize};

pub const REGISTER_SUCCESS: &str = "Register Successfully!";
pub const REGISTER_FAILURE: &str = "Register Failed! Please check information again.";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccount {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub phone_number: String,
    pub password: String,
    pub email: String,
}

pub struct RegistrationFlow {
    form: FormDefinition,
    endpoint: Endpoint,
    messages: FlowMessages,
}

impl Default for RegistrationFlow {
    fn default() -> Self {
        Self::new(Endpoint::new("register", "/api/user/register"))
    }
}

impl RegistrationFlow {
    pub fn new(endpoint: Endpoint) -> Self {
        let form = FormDefinition::new("register")
            .field(
                FieldSpec::new("username", "Username", FieldKind::Text)
                    .required("Please input your username!"),
            )
            .field(FieldSpec::new("fullName", "FullName", FieldKind::Text))
            .field(
                FieldSpec::new("phoneNumber", "Phone Number", FieldKind::Phone)
                    .required("Please input your phone number!"),
            )
            .field(
                FieldSpec::new("password", "Password", FieldKind::Password)
                    .required("Please input your password!"),
            )
            .field(
                FieldSpec::new("confirmPassword", "Confirm Password", FieldKind::Password)
                    .required("Please confirm your password!")
                    .matches(
                        "password",
                        "The two passwords that you entered do not match!",
                    ),
            )
            .field(
                FieldSpec::new("email", "Email", FieldKind::Email)
                    .required("Please input your email!")
                    .email("The input is not valid E-mail!"),
            );
        Self {
            form,
            endpoint,
            messages: FlowMessages::new(REGISTER_SUCCESS, REGISTER_FAILURE),
        }
    }
}

impl Flow for RegistrationFlow {
    type Payload = RegisterAccount;

    fn name(&self) -> &str {
        "register"
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
        SuccessAction::Redirect(LOGIN_PATH.to_string())
    }

    fn payload(&self, values: &FormValues, _user: &UserContext) -> Result<RegisterAccount, PayloadError> {
        Ok(RegisterAccount {
            username: text_field(&self.form, values, "username")?,
            full_name: optional_text_field(values, "fullName"),
            phone_number: text_field(&self.form, values, "phoneNumber")?,
            password: raw_text_field(values, "password"),
            email: text_field(&self.form, values, "email")?,
        })
    }
}
