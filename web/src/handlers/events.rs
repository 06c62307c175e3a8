//! Catalog endpoint.

use crate::state::AppState;
use axum::{Json, extract::State};
use fest_registration::Catalog;
use fest_registration::providers::{EmailProvider, RegistrationRepository};

/// List the events on offer, in display order.
///
/// # Endpoint
///
/// ```text
/// GET /api/events
/// ```
///
/// # Response
///
/// ```json
/// {
///   "events": [
///     {
///       "id": "chess",
///       "name": "CHESS",
///       "category": "non-technical",
///       "fee": 100,
///       "feeLabel": "₹100"
///     }
///   ]
/// }
/// ```
#[allow(clippy::unused_async)]
pub async fn list_events<R, M>(State(state): State<AppState<R, M>>) -> Json<Catalog>
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    Json(state.environment.catalog.as_ref().clone())
}
