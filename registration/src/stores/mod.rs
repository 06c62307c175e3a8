//! Storage implementations.
//!
//! - `postgres`: the production registration store (feature `postgres`)

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRegistrationRepository;
