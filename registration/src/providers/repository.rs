//! Registration repository trait.

use crate::error::Result;
use crate::model::{Registration, RegistrationId};

/// Registration storage.
///
/// Rows are only ever inserted. Payment status changes happen outside this
/// system.
pub trait RegistrationRepository: Send + Sync + 'static {
    /// Insert a registration and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Database`](crate::RegistrationError::Database)
    /// if the insert fails.
    fn insert(
        &self,
        registration: &Registration,
    ) -> impl std::future::Future<Output = Result<RegistrationId>> + Send;

    /// Check that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Database`](crate::RegistrationError::Database)
    /// if the store cannot be reached.
    fn ping(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}
