//! Error types for registration operations.

use crate::constants::messages;
use thiserror::Error;

/// Result type alias for registration operations.
pub type Result<T> = std::result::Result<T, RegistrationError>;

/// Failure modes of the registration pipeline and the form client.
///
/// The `Display` text is meant for logs. Use [`RegistrationError::user_message`]
/// for anything shown to a participant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    // ═══════════════════════════════════════════════════════════
    // Request Errors
    // ═══════════════════════════════════════════════════════════

    /// A required field was absent or empty.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The request body was not a registration document.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ═══════════════════════════════════════════════════════════
    // System Errors
    // ═══════════════════════════════════════════════════════════

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Email could not be built or delivered.
    #[error("Email error: {0}")]
    Email(String),

    /// A sender or recipient address could not be parsed.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    // ═══════════════════════════════════════════════════════════
    // Client Errors
    // ═══════════════════════════════════════════════════════════

    /// The endpoint answered with a failure envelope.
    #[error("Registration rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code of the response
        status: u16,
        /// Message from the response envelope
        message: String,
    },

    /// The endpoint could not be reached or answered with garbage.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl RegistrationError {
    /// Returns `true` if this error is caused by the submitted data.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fest_registration::RegistrationError;
    /// assert!(RegistrationError::MissingFields(vec!["name"]).is_user_error());
    /// assert!(!RegistrationError::Database("pool timed out".into()).is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::MissingFields(_) | Self::InvalidBody(_))
    }

    /// Message safe to show to a participant.
    ///
    /// Internal details (SQL errors, SMTP replies) never leak through here.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingFields(_) => messages::MISSING_FIELDS,
            Self::InvalidBody(_) => messages::INVALID_BODY,
            Self::Database(_) => messages::DATABASE_ERROR,
            Self::Email(_) | Self::InvalidAddress(_) => messages::FALLBACK_FAILURE,
            Self::Rejected { message, .. } if !message.trim().is_empty() => message,
            Self::Rejected { .. } => messages::FALLBACK_FAILURE,
            Self::Transport(_) => messages::NETWORK_FAILURE,
        }
    }
}
