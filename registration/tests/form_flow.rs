//! Form controller driven through the runtime store.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use fest_registration::mocks::{fixtures, MockRegistrationClient};
use fest_registration::state::Modal;
use fest_registration::{
    Catalog, EventId, FormAction, FormConfig, FormEnvironment, FormReducer, FormState,
    RegistrationError, RegistrationId, RegistrationResponse,
};
use fest_runtime::Store;
use std::sync::Arc;
use std::time::Duration;

type TestStore = Store<
    FormState,
    FormAction,
    FormEnvironment<MockRegistrationClient>,
    FormReducer<MockRegistrationClient>,
>;

fn store(client: MockRegistrationClient, toast: Duration) -> TestStore {
    let env = FormEnvironment::new(
        client,
        Arc::new(Catalog::default()),
        FormConfig::default().with_toast_duration(toast),
    );
    Store::new(FormState::default(), FormReducer::new(), env)
}

/// Fill Asha's details, pick chess and carrom, open the payment step.
async fn ready_to_pay(store: &TestStore) {
    for (field, value) in fixtures::asha_fields() {
        store
            .send(FormAction::UpdateField { field, value: value.to_string() })
            .await;
    }
    store.send(FormAction::ToggleEvent { id: EventId::new("chess") }).await;
    store.send(FormAction::ToggleEvent { id: EventId::new("carrom") }).await;
    store.send(FormAction::Register).await;
    store.send(FormAction::SetTransactionId(" UTR1 ".into())).await;
}

async fn confirm(store: &TestStore) -> FormAction {
    let outcome = store
        .send_and_wait_for(
            FormAction::ConfirmPayment,
            |a| {
                matches!(
                    a,
                    FormAction::SubmissionSucceeded { .. } | FormAction::SubmissionFailed { .. }
                )
            },
            Duration::from_secs(2),
        )
        .await
        .expect("submission should settle");

    // The outcome is broadcast before it is reduced
    tokio::time::sleep(Duration::from_millis(50)).await;
    outcome
}

#[tokio::test]
async fn test_successful_submission_shows_confirmation() {
    let client = MockRegistrationClient::new();
    client.respond_with(Ok(RegistrationResponse::accepted(RegistrationId(7))));
    let store = store(client.clone(), Duration::from_secs(3));
    ready_to_pay(&store).await;

    confirm(&store).await;

    let submissions = client.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].transaction_id, "UTR1");
    assert_eq!(submissions[0].total, 250);
    let names: Vec<&str> = submissions[0].event_names().collect();
    assert_eq!(names, vec!["CARROM", "CHESS"]);

    let (modal, confirmation, submitting) = store
        .state(|s| (s.modal, s.confirmation.clone(), s.submitting))
        .await;
    assert_eq!(modal, Modal::Success);
    assert!(!submitting);
    let confirmation = confirmation.unwrap();
    assert_eq!(confirmation.amount, 250);
    assert_eq!(confirmation.transaction_id, "UTR1");
    assert_eq!(confirmation.registration_id, Some(RegistrationId(7)));

    store.send(FormAction::CloseSuccess).await;
    let (modal, selected) = store.state(|s| (s.modal, s.selected.len())).await;
    assert_eq!(modal, Modal::None);
    assert_eq!(selected, 0);
}

#[tokio::test]
async fn test_network_failure_never_shows_success() {
    let client = MockRegistrationClient::new();
    client.fail_network();
    let store = store(client, Duration::from_secs(3));
    ready_to_pay(&store).await;

    let outcome = confirm(&store).await;

    assert!(matches!(outcome, FormAction::SubmissionFailed { .. }));
    let (modal, confirmation, submitting, toast) = store
        .state(|s| (s.modal, s.confirmation.clone(), s.submitting, s.toast.clone()))
        .await;
    assert_eq!(modal, Modal::Payment);
    assert!(confirmation.is_none());
    assert!(!submitting);
    assert_eq!(toast.unwrap().message, "Could not reach the server. Please try again.");
}

#[tokio::test]
async fn test_server_rejection_shows_server_message() {
    let client = MockRegistrationClient::new();
    client.respond_with(Err(RegistrationError::Rejected {
        status: 500,
        message: "Database error. Please try again.".into(),
    }));
    let store = store(client, Duration::from_secs(3));
    ready_to_pay(&store).await;

    confirm(&store).await;

    let toast = store.state(|s| s.toast.clone()).await.unwrap();
    assert_eq!(toast.message, "Database error. Please try again.");
}

#[tokio::test]
async fn test_toast_expires_after_duration() {
    let store = store(MockRegistrationClient::new(), Duration::from_millis(30));

    store.send(FormAction::ShowToast { message: "hello".into() }).await;
    assert!(store.state(|s| s.toast.is_some()).await);

    let expired = store
        .send_and_wait_for(
            FormAction::ShowToast { message: "again".into() },
            |a| matches!(a, FormAction::ToastExpired { generation: 2 }),
            Duration::from_secs(1),
        )
        .await
        .unwrap();
    assert_eq!(expired, FormAction::ToastExpired { generation: 2 });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(store.state(|s| s.toast.is_none()).await);
}
