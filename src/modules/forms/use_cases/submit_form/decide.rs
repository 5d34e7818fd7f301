// Pure decision for a submission attempt.
//
// Responsibilities
// - Run every rule of the flow's form against the values.
// - On a clean pass, build the typed request body. A body that cannot be built
//   rejects the attempt with an error on the offending field.
// - Never perform input or output.

use crate::modules::forms::use_cases::submit_form::decision::Decision;
use crate::modules::forms::use_cases::submit_form::flow::Flow;
use crate::shared::core::form_values::FormValues;
use crate::shared::core::user_context::UserContext;
use crate::shared::forms::field_errors::FieldErrors;
use crate::shared::forms::validate::validate;

pub fn decide_submit<F: Flow>(
    flow: &F,
    values: &FormValues,
    user: &UserContext,
) -> Decision<F::Payload> {
    let errors = validate(flow.form(), values);
    if !errors.is_empty() {
        return Decision::Rejected { errors };
    }
    match flow.payload(values, user) {
        Ok(payload) => Decision::Accepted { payload },
        Err(err) => Decision::Rejected {
            errors: FieldErrors::single(err.field, err.message),
        },
    }
}
