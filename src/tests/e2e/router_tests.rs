use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::profile::adapters::in_memory_profile_store::InMemoryProfileStore;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::submitter::in_memory::InMemorySubmitter;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn app(api: InMemorySubmitter) -> Router {
    router(AppState::new(
        Arc::new(api),
        Arc::new(InMemoryProfileStore::new()),
        Arc::new(InMemoryNotifier::new()),
    ))
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn books_through_the_router() {
    let (status, json) = post(
        app(InMemorySubmitter::new()),
        "/booking",
        json!({
            "values": {
                "bookingTime": "2024-05-01T09:30:00Z",
                "serviceName": "Haircut",
                "stylistName": "Alice"
            },
            "user": {"userId": "u123"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["notification"]["message"], "Booking Successfully!");
    assert_eq!(json["values"]["userId"], "u123");
}

#[tokio::test]
async fn returns_booking_failure_with_the_entered_values() {
    let mut api = InMemorySubmitter::new();
    api.reject_with(500);
    let (status, json) = post(
        app(api),
        "/booking",
        json!({
            "values": {
                "bookingTime": "2024-05-01T09:30:00Z",
                "serviceName": "Haircut",
                "stylistName": "Alice",
                "userId": "u123"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["notification"]["kind"], "failure");
    assert_eq!(json["notification"]["message"], "Booking Failed!");
    assert_eq!(json["values"]["serviceName"], "Haircut");
    assert_eq!(json["values"]["stylistName"], "Alice");
}

#[tokio::test]
async fn redirects_after_registration() {
    let (status, json) = post(
        app(InMemorySubmitter::new()),
        "/register",
        json!({
            "values": {
                "username": "testuser",
                "phoneNumber": "0901234567",
                "password": "password123",
                "confirmPassword": "password123",
                "email": "test@example.com"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["notification"]["message"], "Register Successfully!");
    assert_eq!(json["redirect"], "/login");
}

#[tokio::test]
async fn rejects_a_mismatched_password_change() {
    let (status, json) = post(
        app(InMemorySubmitter::new()),
        "/profile/password",
        json!({
            "values": {
                "currentPassword": "oldpassword",
                "newPassword": "newpassword",
                "confirmPassword": "otherpassword"
            },
            "user": {"userId": "u123", "username": "testuser"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["errors"]["confirmPassword"], "Passwords do not match");
}

#[tokio::test]
async fn updates_the_profile_from_the_user_context() {
    let (status, json) = post(
        app(InMemorySubmitter::new()),
        "/profile",
        json!({
            "values": {"fullName": "New User"},
            "user": {
                "userId": "u123",
                "username": "testuser",
                "fullName": "Test User",
                "email": "test@example.com"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["notification"]["message"], "Profile Updated Successfully!");
    assert_eq!(json["response"]["fullName"], "New User");
    assert_eq!(json["values"]["email"], "test@example.com");
}

#[tokio::test]
async fn treats_null_fields_as_missing() {
    let (status, json) = post(
        app(InMemorySubmitter::new()),
        "/register",
        json!({
            "values": {
                "username": null,
                "phoneNumber": "0901234567",
                "password": "password123",
                "confirmPassword": "password123",
                "email": "test@example.com"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["errors"]["username"], "Please input your username!");
    assert_eq!(json["errors"].as_object().unwrap().len(), 1);
    assert!(json["values"].get("username").is_none());
}
