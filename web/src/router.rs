//! Route table and middleware stack.

use crate::handlers::{
    health_check, list_events, method_not_allowed, preflight, readiness, register,
};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use fest_registration::providers::{EmailProvider, RegistrationRepository};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// | Route | Methods |
/// |---|---|
/// | `/api/register` | `POST`, `OPTIONS` (others get 405) |
/// | `/api/events` | `GET` |
/// | `/health` | `GET` |
/// | `/health/ready` | `GET` |
///
/// CORS allows any origin, `POST`/`OPTIONS` and the `Content-Type` header.
#[must_use]
pub fn router<R, M>(state: AppState<R, M>) -> Router
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/register",
            post(register::<R, M>)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/api/events", get(list_events::<R, M>))
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness::<R, M>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}
