//! Registration constants.
//!
//! User-facing strings live here so the endpoint, the form controller and
//! the tests agree on them.

use std::time::Duration;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Connect and command timeout of the SMTP relay.
///
/// Both emails go out one after the other, so this stays well under the
/// endpoint's request timeout.
pub const DEFAULT_SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Fest name used in email subjects and sender names.
pub const DEFAULT_FEST_NAME: &str = "Electryonz 2026";

/// Address that receives organizer notifications and participant queries.
pub const DEFAULT_ORGANIZER_EMAIL: &str = "altranz2026@gmail.com";

/// UPI id shown on the payment step.
pub const DEFAULT_UPI_ID: &str = "altranz2026@okaxis";

/// Response and toast messages.
pub mod messages {
    /// Registration was persisted.
    pub const SUCCESS: &str = "Registration successful! Check your email for confirmation.";

    /// A required field was absent or empty.
    pub const MISSING_FIELDS: &str = "All fields are required.";

    /// Body was not a registration document.
    pub const INVALID_BODY: &str = "Invalid request body.";

    /// Insert failed.
    pub const DATABASE_ERROR: &str = "Database error. Please try again.";

    /// Anything other than POST or OPTIONS on the register route.
    pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

    /// The pipeline did not reach a terminal action in time.
    pub const TIMEOUT: &str = "Registration timed out. Please try again.";

    /// Failure without a usable message.
    pub const FALLBACK_FAILURE: &str = "Something went wrong. Please try again.";

    /// The endpoint could not be reached.
    pub const NETWORK_FAILURE: &str = "Could not reach the server. Please try again.";

    /// Payment confirmed without a transaction reference.
    pub const MISSING_TRANSACTION_ID: &str = "Please enter your Transaction / UTR ID";

    /// UPI id placed on the clipboard.
    pub const UPI_COPIED: &str = "UPI ID copied!";

    /// Selection summary for an empty selection.
    pub const NO_EVENTS_SELECTED: &str = "No events selected";
}

/// Confirm button labels.
pub mod labels {
    /// Idle confirm button.
    pub const CONFIRM: &str = "CONFIRM REGISTRATION";

    /// Confirm button while the submission is in flight.
    pub const PROCESSING: &str = "PROCESSING...";
}
