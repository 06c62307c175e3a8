//! Registration endpoint.
//!
//! ```text
//! POST    /api/register   → 200 | 400 | 408 | 500
//! OPTIONS /api/register   → 200, empty body
//! *       /api/register   → 405
//! ```
//!
//! Each request runs on its own `Store`; the handler sends `Submit` and
//! answers on the first terminal action carrying its correlation id.
//! Once the row is stored the answer is 200 even if the notification
//! emails are still in flight when the request timeout fires.

use crate::error::AppError;
use crate::extractors::CorrelationId;
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use fest_registration::constants::messages;
use fest_registration::providers::{EmailProvider, RegistrationRepository};
use fest_registration::{
    RegistrationAction, RegistrationReducer, RegistrationRequest, RegistrationResponse,
    RegistrationState,
};
use fest_runtime::Store;
use fest_runtime::error::StoreError;

/// Accept a registration.
///
/// # Errors
///
/// - 400 when the body is not a registration or a field is missing
/// - 408 when nothing was stored within the request timeout
/// - 500 when the registration cannot be stored
pub async fn register<R, M>(
    State(state): State<AppState<R, M>>,
    CorrelationId(correlation_id): CorrelationId,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<Json<RegistrationResponse>, AppError>
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::info!(%correlation_id, error = %rejection, "Unreadable registration body");
        metrics::counter!("registration.rejected").increment(1);
        AppError::bad_request(messages::INVALID_BODY)
    })?;

    let store = Store::new(
        RegistrationState::default(),
        RegistrationReducer::new(),
        state.environment.clone(),
    );

    let outcome = store
        .send_and_wait_for(
            RegistrationAction::Submit {
                correlation_id,
                request,
            },
            move |action| action.is_terminal() && action.correlation_id() == correlation_id,
            state.request_timeout,
        )
        .await;

    match outcome {
        Ok(RegistrationAction::NotificationsDispatched { id, .. }) => {
            Ok(Json(RegistrationResponse::accepted(id)))
        },
        Ok(RegistrationAction::Rejected { reason, .. }) => {
            Err(AppError::bad_request(reason.user_message()))
        },
        Ok(RegistrationAction::PersistenceFailed { error, .. }) => {
            Err(AppError::internal(error.user_message()).with_source(error.into()))
        },
        Ok(RegistrationAction::Submit { .. } | RegistrationAction::Persisted { .. }) => Err(
            AppError::internal(messages::FALLBACK_FAILURE)
                .with_source(anyhow::anyhow!(
                    "registration pipeline stopped before a terminal action"
                )),
        ),
        Err(StoreError::Timeout) => match store.state(|s| s.id).await {
            Some(id) => {
                tracing::warn!(
                    %correlation_id,
                    %id,
                    timeout = ?state.request_timeout,
                    "Notifications still pending at timeout, registration already stored"
                );
                metrics::counter!("registration.notifications_pending").increment(1);
                Ok(Json(RegistrationResponse::accepted(id)))
            },
            None => {
                tracing::warn!(
                    %correlation_id,
                    timeout = ?state.request_timeout,
                    "Registration timed out"
                );
                metrics::counter!("registration.timed_out").increment(1);
                Err(AppError::timeout(messages::TIMEOUT))
            },
        },
        Err(error @ StoreError::ChannelClosed) => {
            Err(AppError::internal(messages::FALLBACK_FAILURE).with_source(error.into()))
        },
    }
}

/// Bare `OPTIONS` request.
///
/// CORS preflights carrying `Origin` and `Access-Control-Request-Method`
/// are answered by the CORS layer before reaching this handler.
#[allow(clippy::unused_async)]
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method other than `POST` or `OPTIONS`.
#[allow(clippy::unused_async)]
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
