use crate::modules::booking::flow::{BOOKING_FAILURE, BOOKING_SUCCESS, BookingFlow};
use crate::modules::forms::core::submit_state::SubmitState;
use crate::modules::forms::use_cases::submit_form::handler::{FlowError, SubmitFormHandler};
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::submitter::SubmissionError;
use crate::shared::infrastructure::submitter::http::{HttpSubmitter, HttpSubmitterConfig};
use crate::tests::fixtures::values::{booking_values, test_user};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn handler_for(server: &MockServer, notifier: Arc<InMemoryNotifier>) -> SubmitFormHandler<BookingFlow> {
    let submitter = HttpSubmitter::new(HttpSubmitterConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    SubmitFormHandler::new(BookingFlow::default(), Arc::new(submitter), notifier)
}

#[tokio::test]
async fn books_a_haircut_against_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/booking/create"))
        .and(body_json(json!({
            "bookingTime": "2024-05-01T09:30:00Z",
            "serviceName": "Haircut",
            "stylistName": "Alice",
            "userId": "u123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "b-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(InMemoryNotifier::new());
    let handler = handler_for(&server, notifier.clone());
    let user = test_user();
    let mut session = handler.open(&user);
    session.fill(booking_values());

    let submitted = handler.handle(&mut session, &user).await.unwrap();

    assert_eq!(submitted.response, json!({"id": "b-1"}));
    assert_eq!(submitted.redirect, None);
    assert_eq!(notifier.messages().await, vec![BOOKING_SUCCESS.to_string()]);
    assert_eq!(session.state(), SubmitState::Succeeded);
    assert_eq!(session.values(), &booking_values());
}

#[tokio::test]
async fn keeps_the_booking_values_when_the_api_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/booking/create"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(InMemoryNotifier::new());
    let handler = handler_for(&server, notifier.clone());
    let user = test_user();
    let mut session = handler.open(&user);
    session.fill(booking_values());

    let err = handler.handle(&mut session, &user).await.unwrap_err();

    assert!(matches!(
        err,
        FlowError::Submission {
            source: SubmissionError::Status { status: 500 },
            ..
        }
    ));
    assert_eq!(notifier.messages().await, vec![BOOKING_FAILURE.to_string()]);
    assert_eq!(session.state(), SubmitState::Failed);
    assert_eq!(session.values(), &booking_values());
    assert_eq!(session.last_submitted(), Some(&booking_values()));
}

#[tokio::test]
async fn does_not_call_the_api_with_missing_booking_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = Arc::new(InMemoryNotifier::new());
    let handler = handler_for(&server, notifier.clone());
    let user = test_user();
    let mut session = handler.open(&user);
    session.set("serviceName", "Haircut");

    let err = handler.handle(&mut session, &user).await.unwrap_err();

    let FlowError::Validation(errors) = err else {
        panic!("expected validation errors, got {err:?}");
    };
    assert_eq!(
        errors.message_for("bookingTime"),
        Some("Please select booking time!")
    );
    assert_eq!(
        errors.message_for("stylistName"),
        Some("Please input stylist name!")
    );
    assert_eq!(errors.message_for("userId"), None);
    assert!(notifier.messages().await.is_empty());
    assert_eq!(session.state(), SubmitState::Idle);
}
