//! Reducer environments.
//!
//! Providers are held behind `Arc` so an environment can be cloned into
//! effects and into per-request stores cheaply.

use crate::catalog::Catalog;
use crate::config::{FormConfig, NotificationConfig};
use crate::providers::{EmailProvider, RegistrationClient, RegistrationRepository};
use fest_core::environment::Clock;
use std::sync::Arc;

/// Dependencies of the registration endpoint reducer.
pub struct RegistrationEnvironment<R, M>
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    /// Registration store.
    pub repository: Arc<R>,

    /// Email delivery.
    pub mailer: Arc<M>,

    /// Timestamps for new registrations.
    pub clock: Arc<dyn Clock>,

    /// Email addresses and fest name.
    pub notifications: NotificationConfig,

    /// Catalog used to cross-check submitted totals.
    pub catalog: Arc<Catalog>,
}

impl<R, M> RegistrationEnvironment<R, M>
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    /// Create a new registration environment.
    #[must_use]
    pub fn new(
        repository: R,
        mailer: M,
        clock: Arc<dyn Clock>,
        notifications: NotificationConfig,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            mailer: Arc::new(mailer),
            clock,
            notifications,
            catalog,
        }
    }
}

impl<R, M> Clone for RegistrationEnvironment<R, M>
where
    R: RegistrationRepository,
    M: EmailProvider,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            mailer: Arc::clone(&self.mailer),
            clock: Arc::clone(&self.clock),
            notifications: self.notifications.clone(),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

/// Dependencies of the form controller reducer.
pub struct FormEnvironment<C>
where
    C: RegistrationClient,
{
    /// Endpoint client.
    pub client: Arc<C>,

    /// Events on offer.
    pub catalog: Arc<Catalog>,

    /// Toast timing and endpoint.
    pub config: FormConfig,
}

impl<C> FormEnvironment<C>
where
    C: RegistrationClient,
{
    /// Create a new form environment.
    #[must_use]
    pub fn new(client: C, catalog: Arc<Catalog>, config: FormConfig) -> Self {
        Self {
            client: Arc::new(client),
            catalog,
            config,
        }
    }
}

impl<C> Clone for FormEnvironment<C>
where
    C: RegistrationClient,
{
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            catalog: Arc::clone(&self.catalog),
            config: self.config.clone(),
        }
    }
}
