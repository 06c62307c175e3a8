//! Registration actions.
//!
//! Both reducers take commands (user intent, incoming requests) and events
//! (results of effects) through a single action enum each.

use crate::catalog::{CategoryFilter, EventId};
use crate::error::RegistrationError;
use crate::model::RegistrationId;
use crate::payload::{RegistrationRequest, RegistrationResponse};
use crate::state::FormField;
use serde::Serialize;
use uuid::Uuid;

/// Form controller action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    // ═══════════════════════════════════════════════════════════════════════
    // Catalog
    // ═══════════════════════════════════════════════════════════════════════
    /// Select or deselect an event card.
    ToggleEvent {
        /// Event slug
        id: EventId,
    },

    /// Pick a category filter button.
    SetCategory(CategoryFilter),

    /// Search box changed.
    SetSearch(String),

    // ═══════════════════════════════════════════════════════════════════════
    // Form
    // ═══════════════════════════════════════════════════════════════════════
    /// A text input changed.
    UpdateField {
        /// Which input
        field: FormField,
        /// New raw value
        value: String,
    },

    /// Register button: validate and open the payment step.
    Register,

    /// Transaction id input changed.
    SetTransactionId(String),

    /// Confirm button of the payment step: submit.
    ConfirmPayment,

    /// The endpoint stored the registration.
    SubmissionSucceeded {
        /// Response envelope
        response: RegistrationResponse,
    },

    /// The submission failed (network or endpoint).
    SubmissionFailed {
        /// Toast text
        message: String,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Dialogs and toasts
    // ═══════════════════════════════════════════════════════════════════════
    /// Close the payment step.
    CloseModal,

    /// Close the success dialog and reset the form.
    CloseSuccess,

    /// Show a toast.
    ShowToast {
        /// Text
        message: String,
    },

    /// A toast timer fired.
    ToastExpired {
        /// Generation the timer was started for
        generation: u64,
    },

    /// The host tried to copy the UPI id to the clipboard.
    UpiIdCopied {
        /// Whether the clipboard write succeeded
        copied: bool,
    },
}

/// Outcome of one email send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// Handed to the relay
    Sent,
    /// Build or delivery failed; the reason was logged
    Failed(String),
}

impl DeliveryOutcome {
    /// Whether the mail went out.
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Outcome of both notification emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationReport {
    /// Receipt to the participant
    pub participant: DeliveryOutcome,
    /// Notification to the organizers
    pub organizer: DeliveryOutcome,
}

impl NotificationReport {
    /// Whether both emails went out.
    #[must_use]
    pub const fn all_sent(&self) -> bool {
        self.participant.is_sent() && self.organizer.is_sent()
    }
}

/// Registration endpoint action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    /// A request arrived.
    Submit {
        /// Correlation ID for request tracing.
        correlation_id: Uuid,
        /// Parsed body
        request: RegistrationRequest,
    },

    /// The row was inserted.
    Persisted {
        /// Correlation ID for request tracing.
        correlation_id: Uuid,
        /// Assigned id
        id: RegistrationId,
    },

    /// The insert failed. Terminal.
    PersistenceFailed {
        /// Correlation ID for request tracing.
        correlation_id: Uuid,
        /// Repository error
        error: RegistrationError,
    },

    /// The request was refused before any I/O. Terminal.
    Rejected {
        /// Correlation ID for request tracing.
        correlation_id: Uuid,
        /// Why
        reason: RegistrationError,
    },

    /// Both emails were attempted. Terminal.
    NotificationsDispatched {
        /// Correlation ID for request tracing.
        correlation_id: Uuid,
        /// Stored row id
        id: RegistrationId,
        /// Per-email outcome
        report: NotificationReport,
    },
}

impl RegistrationAction {
    /// Correlation id carried by every variant.
    #[must_use]
    pub const fn correlation_id(&self) -> Uuid {
        match self {
            Self::Submit { correlation_id, .. }
            | Self::Persisted { correlation_id, .. }
            | Self::PersistenceFailed { correlation_id, .. }
            | Self::Rejected { correlation_id, .. }
            | Self::NotificationsDispatched { correlation_id, .. } => *correlation_id,
        }
    }

    /// Whether the HTTP handler can answer on this action.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::PersistenceFailed { .. }
                | Self::Rejected { .. }
                | Self::NotificationsDispatched { .. }
        )
    }

    /// Response envelope for a terminal action.
    ///
    /// Returns `None` for intermediate actions.
    #[must_use]
    pub fn response(&self) -> Option<RegistrationResponse> {
        match self {
            Self::NotificationsDispatched { id, .. } => Some(RegistrationResponse::accepted(*id)),
            Self::PersistenceFailed { error, .. } | Self::Rejected { reason: error, .. } => {
                Some(RegistrationResponse::failed(error.user_message()))
            },
            Self::Submit { .. } | Self::Persisted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_actions_map_to_envelopes() {
        let correlation_id = Uuid::new_v4();

        let done = RegistrationAction::NotificationsDispatched {
            correlation_id,
            id: RegistrationId(3),
            report: NotificationReport {
                participant: DeliveryOutcome::Failed("relay down".into()),
                organizer: DeliveryOutcome::Sent,
            },
        };
        assert!(done.is_terminal());
        assert_eq!(done.response(), Some(RegistrationResponse::accepted(RegistrationId(3))));

        let failed = RegistrationAction::PersistenceFailed {
            correlation_id,
            error: RegistrationError::Database("boom".into()),
        };
        assert_eq!(
            failed.response().map(|r| r.message),
            Some("Database error. Please try again.".to_string())
        );

        let persisted = RegistrationAction::Persisted { correlation_id, id: RegistrationId(3) };
        assert!(!persisted.is_terminal());
        assert_eq!(persisted.response(), None);
        assert_eq!(persisted.correlation_id(), correlation_id);
    }

    #[test]
    fn test_report_all_sent() {
        let report = NotificationReport {
            participant: DeliveryOutcome::Sent,
            organizer: DeliveryOutcome::Sent,
        };
        assert!(report.all_sent());
    }
}
