use crate::modules::forms::use_cases::submit_form::handler::{FlowError, SubmitFormHandler};
use crate::modules::registration::flow::{
    LOGIN_PATH, REGISTER_FAILURE, REGISTER_SUCCESS, RegistrationFlow,
};
use crate::shared::core::user_context::UserContext;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::submitter::in_memory::InMemorySubmitter;
use crate::tests::fixtures::values::registration_values;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

fn setup(
    submitter: InMemorySubmitter,
) -> (
    SubmitFormHandler<RegistrationFlow>,
    Arc<InMemorySubmitter>,
    Arc<InMemoryNotifier>,
) {
    let submitter = Arc::new(submitter);
    let notifier = Arc::new(InMemoryNotifier::new());
    let handler = SubmitFormHandler::new(
        RegistrationFlow::default(),
        submitter.clone(),
        notifier.clone(),
    );
    (handler, submitter, notifier)
}

#[tokio::test]
async fn reports_every_missing_field_of_an_empty_registration() {
    let (handler, submitter, notifier) = setup(InMemorySubmitter::new());
    let user = UserContext::anonymous();
    let mut session = handler.open(&user);

    let err = handler.handle(&mut session, &user).await.unwrap_err();

    assert!(matches!(err, FlowError::Validation(_)));
    let messages: Vec<&str> = session.errors().messages().collect();
    for expected in [
        "Please input your username!",
        "Please input your phone number!",
        "Please input your password!",
        "Please confirm your password!",
        "Please input your email!",
    ] {
        assert!(messages.contains(&expected), "missing {expected}");
    }
    assert_eq!(session.errors().message_for("fullName"), None);
    assert_eq!(submitter.call_count().await, 0);
    assert!(notifier.messages().await.is_empty());
}

#[tokio::test]
async fn registers_and_redirects_to_login() {
    let (handler, submitter, notifier) = setup(InMemorySubmitter::responding_with(
        json!({"token": "mockToken", "fullName": "Test User"}),
    ));
    let user = UserContext::anonymous();
    let mut session = handler.open(&user);
    session.fill(registration_values());

    let submitted = handler.handle(&mut session, &user).await.unwrap();

    assert_eq!(submitted.redirect.as_deref(), Some(LOGIN_PATH));
    assert_eq!(submitted.response["token"], "mockToken");
    assert_eq!(notifier.messages().await, vec![REGISTER_SUCCESS.to_string()]);

    let calls = submitter.calls.lock().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].endpoint, "register");
    assert_eq!(
        calls[0].payload,
        json!({
            "username": "testuser",
            "fullName": "Test User",
            "phoneNumber": "0901234567",
            "password": "password123",
            "email": "test@example.com"
        })
    );
}

#[tokio::test]
async fn keeps_the_entered_values_when_registration_is_rejected() {
    let mut submitter = InMemorySubmitter::new();
    submitter.reject_with(400);
    let (handler, _submitter, notifier) = setup(submitter);
    let user = UserContext::anonymous();
    let mut session = handler.open(&user);
    session.fill(registration_values());

    let err = handler.handle(&mut session, &user).await.unwrap_err();

    assert!(matches!(err, FlowError::Submission { .. }));
    assert_eq!(notifier.messages().await, vec![REGISTER_FAILURE.to_string()]);
    assert_eq!(session.values(), &registration_values());
}

#[tokio::test]
async fn blocks_mismatched_passwords_and_bad_emails() {
    let (handler, submitter, _notifier) = setup(InMemorySubmitter::new());
    let user = UserContext::anonymous();
    let mut session = handler.open(&user);
    session.fill(
        registration_values()
            .with("confirmPassword", "password124")
            .with("email", "not-an-email"),
    );

    handler.handle(&mut session, &user).await.unwrap_err();

    assert_eq!(
        session.errors().message_for("confirmPassword"),
        Some("The two passwords that you entered do not match!")
    );
    assert_eq!(
        session.errors().message_for("email"),
        Some("The input is not valid E-mail!")
    );
    assert_eq!(submitter.call_count().await, 0);
}

#[rstest]
#[case("username", "Please input your username!")]
#[case("phoneNumber", "Please input your phone number!")]
#[case("email", "Please input your email!")]
#[tokio::test]
async fn reports_only_the_single_missing_registration_field(
    #[case] field: &str,
    #[case] message: &str,
) {
    let (handler, submitter, notifier) = setup(InMemorySubmitter::new());
    let user = UserContext::anonymous();
    let mut session = handler.open(&user);
    session.fill(registration_values().with(field, ""));

    handler.handle(&mut session, &user).await.unwrap_err();

    assert_eq!(session.errors().len(), 1);
    assert_eq!(session.errors().message_for(field), Some(message));
    assert_eq!(submitter.call_count().await, 0);
    assert!(notifier.messages().await.is_empty());
}

#[tokio::test]
async fn reports_only_a_missing_confirmation() {
    let (handler, submitter, _notifier) = setup(InMemorySubmitter::new());
    let user = UserContext::anonymous();
    let mut session = handler.open(&user);
    session.fill(registration_values().with("confirmPassword", ""));

    handler.handle(&mut session, &user).await.unwrap_err();

    assert_eq!(session.errors().len(), 1);
    assert_eq!(
        session.errors().message_for("confirmPassword"),
        Some("Please confirm your password!")
    );
    assert_eq!(submitter.call_count().await, 0);
}

#[tokio::test]
async fn flags_the_confirmation_once_the_password_is_cleared() {
    let (handler, submitter, _notifier) = setup(InMemorySubmitter::new());
    let user = UserContext::anonymous();
    let mut session = handler.open(&user);
    session.fill(registration_values().with("password", ""));

    handler.handle(&mut session, &user).await.unwrap_err();

    assert_eq!(session.errors().len(), 2);
    assert_eq!(
        session.errors().message_for("password"),
        Some("Please input your password!")
    );
    assert_eq!(
        session.errors().message_for("confirmPassword"),
        Some("The two passwords that you entered do not match!")
    );
    assert_eq!(submitter.call_count().await, 0);
}
