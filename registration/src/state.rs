//! State of the form controller and of one registration request.

use crate::actions::NotificationReport;
use crate::catalog::{Catalog, CategoryFilter, CategoryGroup, EventId, FestEvent};
use crate::constants::{labels, messages};
use crate::error::RegistrationError;
use crate::model::{Registration, RegistrationId};
use crate::validation::ParticipantDetails;
use std::collections::BTreeSet;

// ═══════════════════════════════════════════════════════════════════════
// Form controller
// ═══════════════════════════════════════════════════════════════════════

/// Editable text field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Full name
    FullName,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// College
    College,
    /// Department
    Department,
    /// Year of study (dropdown)
    Year,
}

/// Raw, untrimmed form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// College
    pub college: String,
    /// Department
    pub department: String,
    /// Year of study
    pub year: String,
}

impl FormFields {
    /// Replace one field's value.
    pub fn set(&mut self, field: FormField, value: String) {
        *self.slot(field) = value;
    }

    /// Current value of a field.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::College => &self.college,
            FormField::Department => &self.department,
            FormField::Year => &self.year,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::College => &mut self.college,
            FormField::Department => &mut self.department,
            FormField::Year => &mut self.year,
        }
    }
}

/// Which dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    /// No dialog
    #[default]
    None,
    /// Payment step: transaction id entry
    Payment,
    /// Registration confirmed
    Success,
}

/// Transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Text
    pub message: String,
    /// Only an expiry carrying this generation hides the toast
    pub generation: u64,
}

/// Snapshot taken when the payment step opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    /// Validated details
    pub details: ParticipantDetails,
    /// Selected events in catalog order
    pub events: Vec<FestEvent>,
    /// Total in rupees
    pub total: u32,
}

/// What the success dialog shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Participant name
    pub name: String,
    /// Participant email
    pub email: String,
    /// Registered event names
    pub events: Vec<String>,
    /// Amount paid
    pub amount: u32,
    /// Transaction id as entered
    pub transaction_id: String,
    /// Stored row id, when the endpoint returned one
    pub registration_id: Option<RegistrationId>,
}

/// Form controller state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Text inputs
    pub fields: FormFields,
    /// Selected events
    pub selected: BTreeSet<EventId>,
    /// Category filter
    pub category: CategoryFilter,
    /// Search text
    pub search: String,
    /// Transaction id input of the payment step
    pub transaction_id: String,
    /// Open dialog
    pub modal: Modal,
    /// Submission prepared by `Register`
    pub pending: Option<PendingSubmission>,
    /// A submission is in flight; the confirm button is disabled
    pub submitting: bool,
    /// Contents of the success dialog
    pub confirmation: Option<Confirmation>,
    /// Visible toast
    pub toast: Option<Toast>,
    /// Last toast generation handed out
    pub toast_generation: u64,
}

impl FormState {
    /// Running total of the selection.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> u32 {
        catalog.total(&self.selected)
    }

    /// `No events selected`, or the selected names joined by `, `.
    #[must_use]
    pub fn selection_summary(&self, catalog: &Catalog) -> String {
        let names: Vec<&str> = catalog
            .selected(&self.selected)
            .map(|e| e.name.as_str())
            .collect();

        if names.is_empty() {
            messages::NO_EVENTS_SELECTED.to_string()
        } else {
            names.join(", ")
        }
    }

    /// Visible catalog groups for the current filter, search and selection.
    #[must_use]
    pub fn catalog_view(&self, catalog: &Catalog) -> Vec<CategoryGroup> {
        catalog.view(self.category, &self.search, &self.selected)
    }

    /// Label of the confirm button.
    #[must_use]
    pub const fn confirm_label(&self) -> &'static str {
        if self.submitting {
            labels::PROCESSING
        } else {
            labels::CONFIRM
        }
    }

    /// Clear everything the participant typed or picked.
    pub(crate) fn reset(&mut self) {
        self.fields = FormFields::default();
        self.selected.clear();
        self.category = CategoryFilter::All;
        self.search.clear();
        self.transaction_id.clear();
        self.pending = None;
        self.submitting = false;
        self.confirmation = None;
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Registration endpoint
// ═══════════════════════════════════════════════════════════════════════

/// State of one registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationState {
    /// Correlation id of the request being processed
    pub correlation_id: Option<uuid::Uuid>,
    /// Registration built from the request
    pub registration: Option<Registration>,
    /// Id assigned by the repository
    pub id: Option<RegistrationId>,
    /// Email outcome
    pub notifications: Option<NotificationReport>,
    /// Why the request failed, if it did
    pub error: Option<RegistrationError>,
}
