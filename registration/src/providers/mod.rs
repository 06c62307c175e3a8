//! Provider traits and their production implementations.
//!
//! Reducers only see the traits. Mocks for tests live in
//! [`crate::mocks`].

pub mod any_email;
pub mod client;
pub mod console_email;
pub mod email;
pub mod http_client;
pub mod repository;
pub mod smtp_email;

pub use any_email::AnyEmailProvider;
pub use client::RegistrationClient;
pub use console_email::ConsoleEmailProvider;
pub use email::{EmailBody, EmailProvider, OutgoingEmail};
pub use http_client::HttpRegistrationClient;
pub use repository::RegistrationRepository;
pub use smtp_email::SmtpEmailProvider;
