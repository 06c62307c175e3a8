//! Registration endpoint reducer.
//!
//! # Flow
//!
//! 1. `Submit`: presence check, then insert the registration
//! 2. `Persisted`: send participant receipt and organizer notice
//! 3. `NotificationsDispatched`: done
//!
//! A missing field ends the flow with `Rejected`, a failed insert with
//! `PersistenceFailed`. Email failures never end the flow early: each email
//! is attempted on its own and the outcome is only reported.

use crate::actions::{DeliveryOutcome, NotificationReport, RegistrationAction};
use crate::environment::RegistrationEnvironment;
use crate::error::RegistrationError;
use crate::model::Registration;
use crate::providers::{EmailProvider, OutgoingEmail, RegistrationRepository};
use crate::state::RegistrationState;
use crate::templates;
use fest_core::effect::Effect;
use fest_core::reducer::Reducer;
use fest_core::{smallvec, SmallVec};
use std::sync::Arc;

/// Registration endpoint reducer.
#[derive(Debug, Clone)]
pub struct RegistrationReducer<R, M> {
    _phantom: std::marker::PhantomData<(R, M)>,
}

impl<R, M> RegistrationReducer<R, M> {
    /// Create a new registration reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<R, M> Default for RegistrationReducer<R, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, M> Reducer for RegistrationReducer<R, M>
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    type State = RegistrationState;
    type Action = RegistrationAction;
    type Environment = RegistrationEnvironment<R, M>;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            RegistrationAction::Submit {
                correlation_id,
                request,
            } => {
                state.correlation_id = Some(correlation_id);

                let missing = request.missing_fields();
                if !missing.is_empty() {
                    tracing::info!(
                        %correlation_id,
                        ?missing,
                        "Registration rejected: missing fields"
                    );
                    metrics::counter!("registration.rejected").increment(1);

                    return smallvec![Effect::Future(Box::pin(async move {
                        Some(RegistrationAction::Rejected {
                            correlation_id,
                            reason: RegistrationError::MissingFields(missing),
                        })
                    }))];
                }

                let expected = env.catalog.price_of(request.event_names());
                if expected != request.total {
                    tracing::warn!(
                        %correlation_id,
                        submitted = request.total,
                        expected,
                        "Submitted total does not match catalog fees; storing submitted value"
                    );
                }

                let registration = Registration::from_request(&request, env.clock.now());
                state.registration = Some(registration.clone());

                let repository = Arc::clone(&env.repository);
                smallvec![Effect::Future(Box::pin(async move {
                    match repository.insert(&registration).await {
                        Ok(id) => Some(RegistrationAction::Persisted { correlation_id, id }),
                        Err(error) => Some(RegistrationAction::PersistenceFailed {
                            correlation_id,
                            error,
                        }),
                    }
                }))]
            },

            RegistrationAction::Persisted { correlation_id, id } => {
                state.id = Some(id);
                tracing::info!(%correlation_id, %id, "Registration stored");
                metrics::counter!("registration.accepted").increment(1);

                let Some(registration) = state.registration.as_ref() else {
                    tracing::error!(
                        %correlation_id,
                        %id,
                        "Persisted without a pending registration"
                    );
                    return smallvec![Effect::None];
                };

                let receipt = templates::participant_receipt(registration, &env.notifications);
                let notice = templates::organizer_notification(registration, &env.notifications);
                let mailer = Arc::clone(&env.mailer);

                smallvec![Effect::Future(Box::pin(async move {
                    let participant = deliver(mailer.as_ref(), &receipt, "participant").await;
                    let organizer = deliver(mailer.as_ref(), &notice, "organizer").await;

                    Some(RegistrationAction::NotificationsDispatched {
                        correlation_id,
                        id,
                        report: NotificationReport {
                            participant,
                            organizer,
                        },
                    })
                }))]
            },

            RegistrationAction::PersistenceFailed {
                correlation_id,
                error,
            } => {
                tracing::error!(%correlation_id, error = %error, "Failed to store registration");
                metrics::counter!("registration.persistence_failed").increment(1);
                state.error = Some(error);
                smallvec![Effect::None]
            },

            RegistrationAction::Rejected { reason, .. } => {
                state.error = Some(reason);
                smallvec![Effect::None]
            },

            RegistrationAction::NotificationsDispatched {
                correlation_id,
                id,
                report,
            } => {
                tracing::info!(
                    %correlation_id,
                    %id,
                    all_sent = report.all_sent(),
                    "Registration notifications dispatched"
                );
                state.notifications = Some(report);
                smallvec![Effect::None]
            },
        }
    }
}

/// Send one email, logging instead of failing.
async fn deliver<M: EmailProvider>(
    mailer: &M,
    email: &OutgoingEmail,
    kind: &'static str,
) -> DeliveryOutcome {
    match mailer.send(email).await {
        Ok(()) => DeliveryOutcome::Sent,
        Err(error) => {
            tracing::warn!(kind, to = %email.to, error = %error, "Notification email failed");
            metrics::counter!("registration.email.failed", "kind" => kind).increment(1);
            DeliveryOutcome::Failed(error.to_string())
        },
    }
}
