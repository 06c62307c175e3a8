//! Application state for Axum handlers.

use fest_registration::RegistrationEnvironment;
use fest_registration::providers::{EmailProvider, RegistrationRepository};
use std::time::Duration;

/// Application state shared across all HTTP handlers.
///
/// Holds the registration environment, not a store: each request builds
/// its own `Store` from a clone of the environment, so no reducer state is
/// shared between requests.
pub struct AppState<R, M>
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    /// Providers, clock and notification settings.
    pub environment: RegistrationEnvironment<R, M>,

    /// How long a request waits for the registration pipeline.
    pub request_timeout: Duration,
}

impl<R, M> AppState<R, M>
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    /// Create a new application state.
    #[must_use]
    pub const fn new(
        environment: RegistrationEnvironment<R, M>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            environment,
            request_timeout,
        }
    }
}

impl<R, M> Clone for AppState<R, M>
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    fn clone(&self) -> Self {
        Self {
            environment: self.environment.clone(),
            request_timeout: self.request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fest_registration::mocks::{FixedClock, MockEmailProvider, MockRegistrationRepository};
    use fest_registration::{Catalog, NotificationConfig};
    use std::sync::Arc;

    #[test]
    fn test_clones_share_providers() {
        let state = AppState::new(
            RegistrationEnvironment::new(
                MockRegistrationRepository::new(),
                MockEmailProvider::new(),
                Arc::new(FixedClock::default()),
                NotificationConfig::default(),
                Arc::new(Catalog::default()),
            ),
            Duration::from_secs(5),
        );

        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.environment.repository, &clone.environment.repository));
        assert_eq!(clone.request_timeout, Duration::from_secs(5));
    }
}
