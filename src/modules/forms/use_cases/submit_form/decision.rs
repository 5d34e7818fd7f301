use crate::shared::forms::field_errors::FieldErrors;

pub enum Decision<TPayload> {
    Accepted { payload: TPayload },
    Rejected { errors: FieldErrors },
}
