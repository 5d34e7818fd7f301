use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

/// Form definition and toast messages of one flow, for a renderer to draw the form.
pub async fn handle(State(state): State<AppState>, Path(form): Path<String>) -> impl IntoResponse {
    match state.describe(&form) {
        Some(description) => Json(description).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
