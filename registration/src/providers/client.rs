//! Registration client trait.

use crate::error::Result;
use crate::payload::{RegistrationRequest, RegistrationResponse};

/// Submits a registration to the endpoint.
///
/// Used by the form controller. A single call per submission, no retries.
pub trait RegistrationClient: Send + Sync + 'static {
    /// Post one registration.
    ///
    /// Resolves to the success envelope only when the endpoint stored the
    /// registration.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::Rejected`](crate::RegistrationError::Rejected):
    ///   the endpoint answered with a failure envelope
    /// - [`RegistrationError::Transport`](crate::RegistrationError::Transport):
    ///   the endpoint could not be reached or answered with something else
    fn submit(
        &self,
        request: &RegistrationRequest,
    ) -> impl std::future::Future<Output = Result<RegistrationResponse>> + Send;
}
