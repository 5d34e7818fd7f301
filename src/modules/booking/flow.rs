// Booking flow: book an appointment with a stylist.
//
// Responsibilities
// - Require a booking time, a service, a stylist and the booking user.
// - Prefill the user from the context so a signed in user does not retype it.
// - Keep the entered values on success; the appointment form stays on screen.

use crate::modules::forms::use_cases::submit_form::flow::{
    Flow, FlowMessages, PayloadError, SuccessAction, payload_error, text_field,
};
use crate::shared::core::form_values::FormValues;
use crate::shared::core::user_context::UserContext;
use crate::shared::forms::definition::{FieldKind, FieldSpec, FormDefinition};
use crate::shared::infrastructure::submitter::Endpoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const BOOKING_SUCCESS: &str = "Booking Successfully!";
pub const BOOKING_FAILURE: &str = "Booking Failed!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub booking_time: DateTime<Utc>,
    pub service_name: String,
    pub stylist_name: String,
    pub user_id: String,
}

pub struct BookingFlow {
    form: FormDefinition,
    endpoint: Endpoint,
    messages: FlowMessages,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new(Endpoint::new("booking-create", "/api/booking/create"))
    }
}

impl BookingFlow {
    pub fn new(endpoint: Endpoint) -> Self {
        let form = FormDefinition::new("booking")
            .field(
                FieldSpec::new("bookingTime", "Booking Time", FieldKind::DateTime)
                    .required("Please select booking time!")
                    .timestamp("Please select a valid booking time!"),
            )
            .field(
                FieldSpec::new("serviceName", "Service Name", FieldKind::Text)
                    .required("Please input service name!"),
            )
            .field(
                FieldSpec::new("stylistName", "Stylist Name", FieldKind::Text)
                    .required("Please input stylist name!"),
            )
            .field(
                FieldSpec::new("userId", "User ID", FieldKind::Text)
                    .required("Please input user ID!")
                    .prefill_from("userId"),
            );
        Self {
            form,
            endpoint,
            messages: FlowMessages::new(BOOKING_SUCCESS, BOOKING_FAILURE),
        }
    }
}

impl Flow for BookingFlow {
    type Payload = CreateBooking;

    fn name(&self) -> &str {
        "booking"
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

    fn payload(&self, values: &FormValues, _user: &UserContext) -> Result<CreateBooking, PayloadError> {
        let booking_time = values
            .timestamp("bookingTime")
            .ok_or_else(|| payload_error(&self.form, "bookingTime", "is required"))?;
        Ok(CreateBooking {
            booking_time,
            service_name: text_field(&self.form, values, "serviceName")?,
            stylist_name: text_field(&self.form, values, "stylistName")?,
            user_id: text_field(&self.form, values, "userId")?,
        })
    }
}
