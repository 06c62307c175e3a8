//! # Fest Registration
//!
//! Event registration for the fest: the event catalog, the form controller
//! that participants drive, and the endpoint pipeline that stores a
//! registration and sends the confirmation emails.
//!
//! ## Architecture
//!
//! Both halves are reducers run by the `fest-runtime` store:
//!
//! ```text
//! FormAction         → FormReducer         → RegistrationClient::submit
//! RegistrationAction → RegistrationReducer → RegistrationRepository::insert
//!                                          → EmailProvider::send (x2, best effort)
//! ```
//!
//! ## Example
//!
//! ```
//! use fest_registration::catalog::{Catalog, EventId};
//! use fest_registration::state::FormState;
//!
//! let catalog = Catalog::default();
//! let mut form = FormState::default();
//! form.selected.insert(EventId::new("chess"));
//! form.selected.insert(EventId::new("workshop-ai"));
//!
//! assert_eq!(form.total(&catalog), 350);
//! assert_eq!(form.selection_summary(&catalog), "CHESS, AI & ML WORKSHOP");
//! ```

// Public modules
pub mod actions;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod model;
pub mod payload;
pub mod providers;
pub mod reducers;
pub mod state;
pub mod stores;
pub mod templates;
pub mod validation;

/// Mock providers (enabled with the `test-utils` feature).
#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use actions::{DeliveryOutcome, FormAction, NotificationReport, RegistrationAction};
pub use catalog::{Catalog, Category, CategoryFilter, EventId, FestEvent};
pub use config::{FormConfig, NotificationConfig};
pub use environment::{FormEnvironment, RegistrationEnvironment};
pub use error::{RegistrationError, Result};
pub use model::{PaymentStatus, Registration, RegistrationId};
pub use payload::{EventSelection, RegistrationRequest, RegistrationResponse};
pub use reducers::{FormReducer, RegistrationReducer};
pub use state::{FormState, RegistrationState};
pub use validation::ValidationError;
