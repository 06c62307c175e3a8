//! Mock registration client for testing.

use crate::error::{RegistrationError, Result};
use crate::model::RegistrationId;
use crate::payload::{RegistrationRequest, RegistrationResponse};
use crate::providers::RegistrationClient;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock registration client.
///
/// Records submissions and answers with a scripted outcome. Defaults to
/// accepting with id 1.
#[derive(Debug, Clone)]
pub struct MockRegistrationClient {
    submissions: Arc<Mutex<Vec<RegistrationRequest>>>,
    outcome: Arc<Mutex<Result<RegistrationResponse>>>,
}

impl MockRegistrationClient {
    /// Create a client that accepts every submission.
    #[must_use]
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
            outcome: Arc::new(Mutex::new(Ok(RegistrationResponse::accepted(RegistrationId(1))))),
        }
    }

    /// Answer following submissions with `outcome`.
    pub fn respond_with(&self, outcome: Result<RegistrationResponse>) {
        if let Ok(mut current) = self.outcome.lock() {
            *current = outcome;
        }
    }

    /// Simulate an unreachable endpoint.
    pub fn fail_network(&self) {
        self.respond_with(Err(RegistrationError::Transport("connection reset".to_string())));
    }

    /// Submissions received so far.
    #[must_use]
    pub fn submissions(&self) -> Vec<RegistrationRequest> {
        self.submissions.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Default for MockRegistrationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationClient for MockRegistrationClient {
    fn submit(
        &self,
        request: &RegistrationRequest,
    ) -> impl Future<Output = Result<RegistrationResponse>> + Send {
        if let Ok(mut submissions) = self.submissions.lock() {
            submissions.push(request.clone());
        }
        let outcome = self
            .outcome
            .lock()
            .map(|o| o.clone())
            .unwrap_or_else(|_| {
                Err(RegistrationError::Transport("mock lock poisoned".to_string()))
            });

        async move { outcome }
    }
}
