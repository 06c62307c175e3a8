//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use fest_registration::providers::{EmailProvider, RegistrationRepository};
use fest_runtime::HealthCheck;

/// Simple health check endpoint (for basic liveness).
///
/// Does not touch the database.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness check: pings the registration store.
///
/// # Status Codes
///
/// - 200 OK: the store answered
/// - 503 Service Unavailable: it did not
///
/// # Endpoint
///
/// ```text
/// GET /health/ready
/// ```
///
/// # Response
///
/// ```json
/// {
///   "component": "database",
///   "status": "Healthy",
///   "message": null,
///   "metadata": { "catalog_events": "10" }
/// }
/// ```
pub async fn readiness<R, M>(State(state): State<AppState<R, M>>) -> (StatusCode, Json<HealthCheck>)
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    let health = match state.environment.repository.ping().await {
        Ok(()) => HealthCheck::healthy("database").with_metadata(
            "catalog_events",
            state.environment.catalog.events().len().to_string(),
        ),
        Err(error) => {
            tracing::warn!(error = %error, "Readiness check failed");
            HealthCheck::unhealthy("database", error.to_string())
        },
    };

    let status = if health.status.is_operational() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(health))
}
