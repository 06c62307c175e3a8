//! Registration configuration.
//!
//! Values are supplied by the application (see the web crate's `Config`),
//! these types only carry them with sensible defaults.

use crate::constants::{DEFAULT_FEST_NAME, DEFAULT_ORGANIZER_EMAIL, DEFAULT_UPI_ID, TOAST_DURATION};
use std::time::Duration;

/// Email notification configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Fest name used in subjects and sender names.
    ///
    /// Default: `Electryonz 2026`
    pub fest_name: String,

    /// Sender address (the SMTP account).
    pub sender: String,

    /// Address that receives the organizer notification.
    ///
    /// Default: `altranz2026@gmail.com`
    pub organizer_email: String,

    /// Address shown to participants for queries.
    ///
    /// Default: same as the organizer address
    pub contact_email: String,
}

impl NotificationConfig {
    /// Create a notification configuration for a sender address.
    #[must_use]
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            ..Self::default()
        }
    }

    /// Set the fest name.
    #[must_use]
    pub fn with_fest_name(mut self, fest_name: impl Into<String>) -> Self {
        self.fest_name = fest_name.into();
        self
    }

    /// Set the organizer address.
    #[must_use]
    pub fn with_organizer_email(mut self, email: impl Into<String>) -> Self {
        self.organizer_email = email.into();
        self
    }

    /// Set the contact address.
    #[must_use]
    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = email.into();
        self
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            fest_name: DEFAULT_FEST_NAME.to_string(),
            sender: DEFAULT_ORGANIZER_EMAIL.to_string(),
            organizer_email: DEFAULT_ORGANIZER_EMAIL.to_string(),
            contact_email: DEFAULT_ORGANIZER_EMAIL.to_string(),
        }
    }
}

/// Form controller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Registration endpoint URL.
    ///
    /// Default: `http://localhost:3000/api/register`
    pub endpoint: String,

    /// How long toasts stay visible.
    ///
    /// Default: 3 seconds
    pub toast_duration: Duration,

    /// UPI id shown on the payment step.
    pub upi_id: String,
}

impl FormConfig {
    /// Create a form configuration for an endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Set toast duration.
    #[must_use]
    pub const fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// Set the UPI id.
    #[must_use]
    pub fn with_upi_id(mut self, upi_id: impl Into<String>) -> Self {
        self.upi_id = upi_id.into();
        self
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/api/register".to_string(),
            toast_duration: TOAST_DURATION,
            upi_id: DEFAULT_UPI_ID.to_string(),
        }
    }
}
