//! Custom Axum extractors.

use crate::middleware::header_correlation_id;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Correlation ID for request tracing.
///
/// Uses the id stored by [`correlation_id_layer`](crate::correlation_id_layer)
/// when the layer is installed. Otherwise reads the `X-Correlation-ID`
/// header, or generates a new UUID v4.
///
/// # Example
///
/// ```ignore
/// async fn handler(CorrelationId(id): CorrelationId) -> String {
///     format!("Request ID: {id}")
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let correlation_id = parts
            .extensions
            .get::<Uuid>()
            .copied()
            .or_else(|| header_correlation_id(&parts.headers))
            .unwrap_or_else(Uuid::new_v4);

        Ok(Self(correlation_id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Uuid {
        let (mut parts, ()) = request.into_parts();
        let CorrelationId(id) = CorrelationId::from_request_parts(&mut parts, &()).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_prefers_extension_over_header() {
        let stored = Uuid::new_v4();
        let mut request = Request::builder()
            .header("X-Correlation-ID", Uuid::new_v4().to_string())
            .body(())
            .unwrap();
        request.extensions_mut().insert(stored);

        assert_eq!(extract(request).await, stored);
    }

    #[tokio::test]
    async fn test_reads_header_without_layer() {
        let id = Uuid::new_v4();
        let request = Request::builder()
            .header("X-Correlation-ID", id.to_string())
            .body(())
            .unwrap();

        assert_eq!(extract(request).await, id);
    }

    #[tokio::test]
    async fn test_invalid_header_generates_new_id() {
        let request = Request::builder()
            .header("X-Correlation-ID", "not-a-uuid")
            .body(())
            .unwrap();

        assert_ne!(extract(request).await, Uuid::nil());
    }
}
