use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::modules::forms::use_cases::describe_form::inbound::http as describe_http;
use crate::modules::forms::use_cases::submit_form::flow::Flow;
use crate::modules::forms::use_cases::submit_form::handler::SubmitFormHandler;
use crate::modules::forms::use_cases::submit_form::inbound::http as submit_http;
use crate::shell::state::AppState;

fn submit_route<F: Flow>(path: &str, handler: Arc<SubmitFormHandler<F>>) -> Router<AppState> {
    Router::new()
        .route(path, post(submit_http::handle::<F>))
        .with_state(handler)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(submit_route("/booking", state.booking.clone()))
        .merge(submit_route("/register", state.registration.clone()))
        .merge(submit_route("/profile", state.profile.clone()))
        .merge(submit_route("/profile/password", state.change_password.clone()))
        .route("/forms/{form}", get(describe_http::handle))
        .with_state(state)
}
