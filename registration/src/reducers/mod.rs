//! Reducers of the registration system.
//!
//! - [`FormReducer`]: the client form controller
//! - [`RegistrationReducer`]: the registration endpoint pipeline

pub mod form;
pub mod registration;

pub use form::FormReducer;
pub use registration::RegistrationReducer;
