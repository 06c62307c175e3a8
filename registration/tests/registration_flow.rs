//! End-to-end registration pipeline through the runtime store.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use fest_registration::mocks::{fixtures, FixedClock, MockEmailProvider, MockRegistrationRepository};
use fest_registration::providers::EmailBody;
use fest_registration::{
    Catalog, NotificationConfig, PaymentStatus, RegistrationAction, RegistrationEnvironment,
    RegistrationError, RegistrationReducer, RegistrationState,
};
use fest_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

type TestStore = Store<
    RegistrationState,
    RegistrationAction,
    RegistrationEnvironment<MockRegistrationRepository, MockEmailProvider>,
    RegistrationReducer<MockRegistrationRepository, MockEmailProvider>,
>;

struct Harness {
    store: TestStore,
    repository: MockRegistrationRepository,
    mailer: MockEmailProvider,
}

fn harness() -> Harness {
    let repository = MockRegistrationRepository::new();
    let mailer = MockEmailProvider::new();
    let env = RegistrationEnvironment::new(
        repository.clone(),
        mailer.clone(),
        Arc::new(FixedClock::default()),
        NotificationConfig::new("fest@gmail.com").with_organizer_email("ops@fest.in"),
        Arc::new(Catalog::default()),
    );

    Harness {
        store: Store::new(RegistrationState::default(), RegistrationReducer::new(), env),
        repository,
        mailer,
    }
}

async fn submit(
    store: &TestStore,
    request: fest_registration::RegistrationRequest,
) -> RegistrationAction {
    let correlation_id = Uuid::new_v4();
    store
        .send_and_wait_for(
            RegistrationAction::Submit { correlation_id, request },
            move |a| a.is_terminal() && a.correlation_id() == correlation_id,
            Duration::from_secs(2),
        )
        .await
        .expect("pipeline should reach a terminal action")
}

#[tokio::test]
async fn test_valid_registration_is_stored_and_confirmed() {
    let h = harness();

    let terminal = submit(&h.store, fixtures::asha_request()).await;

    let response = terminal.response().unwrap();
    assert!(response.success);
    assert_eq!(response.message, "Registration successful! Check your email for confirmation.");
    assert!(response.id.is_some());

    let rows = h.repository.registrations();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].full_name, "Asha");
    assert_eq!(rows[0].department, "CS");
    assert_eq!(rows[0].total_amount, 100);
    assert_eq!(rows[0].payment_status, PaymentStatus::PendingVerification);

    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, "a@b.com");
    assert!(matches!(sent[0].body, EmailBody::Html(_)));
    assert_eq!(sent[1].to, "ops@fest.in");
    assert_eq!(sent[1].subject, "🆕 New Registration — Asha");
}

#[tokio::test]
async fn test_missing_name_creates_no_record() {
    let h = harness();
    let mut request = fixtures::asha_request();
    request.name = String::new();

    let terminal = submit(&h.store, request).await;

    assert!(matches!(
        terminal,
        RegistrationAction::Rejected { reason: RegistrationError::MissingFields(_), .. }
    ));
    assert_eq!(terminal.response().unwrap().message, "All fields are required.");
    assert!(h.repository.registrations().is_empty());
    assert!(h.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_database_failure_sends_no_email() {
    let h = harness();
    h.repository.fail_inserts(true);

    let terminal = submit(&h.store, fixtures::asha_request()).await;

    let response = terminal.response().unwrap();
    assert!(!response.success);
    assert_eq!(response.message, "Database error. Please try again.");
    assert!(h.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_participant_email_failure_still_succeeds() {
    let h = harness();
    h.mailer.fail_for("a@b.com");

    let terminal = submit(&h.store, fixtures::asha_request()).await;

    let RegistrationAction::NotificationsDispatched { report, .. } = &terminal else {
        unreachable!("expected NotificationsDispatched, got {terminal:?}");
    };
    assert!(!report.participant.is_sent());
    assert!(report.organizer.is_sent());
    assert!(terminal.response().unwrap().success);

    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ops@fest.in");
}

#[tokio::test]
async fn test_organizer_email_failure_still_succeeds() {
    let h = harness();
    h.mailer.fail_for("ops@fest.in");

    let terminal = submit(&h.store, fixtures::asha_request()).await;

    assert!(terminal.response().unwrap().success);
    assert_eq!(h.mailer.sent().len(), 1);
    assert_eq!(h.repository.registrations().len(), 1);
}
