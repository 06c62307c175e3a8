//! HTTP server for fest registrations.
//!
//! Axum is the imperative shell around the registration reducer:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, CORS
//! │  - Request parsing                      │  ← Correlation ids
//! │  - Response envelopes                   │  ← Tracing
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - RegistrationReducer                  │  ← Presence check, insert,
//! │  - Effect descriptions (values)         │    notification emails
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **Extract** the JSON body and correlation id
//! 2. **Build** a `Store` over a clone of the shared environment
//! 3. **Dispatch** `RegistrationAction::Submit`
//! 4. **Wait** for the terminal action with the same correlation id
//! 5. **Map** it to `{success, message, id?}` and a status code

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use extractors::CorrelationId;
pub use middleware::{CORRELATION_ID_HEADER, correlation_id_layer};
pub use router::router;
pub use state::AppState;
