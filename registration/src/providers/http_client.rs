//! HTTP registration client using reqwest.

use crate::error::{RegistrationError, Result};
use crate::payload::{RegistrationRequest, RegistrationResponse};
use crate::providers::RegistrationClient;

/// Posts registrations to the endpoint as JSON.
#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRegistrationClient {
    /// Create a client for an endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RegistrationClient for HttpRegistrationClient {
    async fn submit(&self, request: &RegistrationRequest) -> Result<RegistrationResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| RegistrationError::Transport(e.to_string()))?;

        let status = response.status();
        match response.json::<RegistrationResponse>().await {
            Ok(envelope) if status.is_success() && envelope.success => Ok(envelope),
            Ok(envelope) => Err(RegistrationError::Rejected {
                status: status.as_u16(),
                message: envelope.message,
            }),
            Err(e) if status.is_success() => Err(RegistrationError::Transport(format!(
                "Unreadable response from {}: {e}",
                self.endpoint
            ))),
            Err(_) => Err(RegistrationError::Rejected {
                status: status.as_u16(),
                message: String::new(),
            }),
        }
    }
}
