//! Mock provider implementations for testing.
//!
//! This module provides simple, in-memory implementations of all provider traits
//! for use in unit and integration tests.

pub mod client;
pub mod clock;
pub mod email;
pub mod fixtures;
pub mod repository;

pub use client::MockRegistrationClient;
pub use clock::FixedClock;
pub use email::MockEmailProvider;
pub use repository::MockRegistrationRepository;
