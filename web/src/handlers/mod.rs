//! HTTP request handlers.

pub mod events;
pub mod health;
pub mod register;

pub use events::list_events;
pub use health::{health_check, readiness};
pub use register::{method_not_allowed, preflight, register};
