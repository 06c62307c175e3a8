//! Shared test data.

use crate::payload::{EventSelection, RegistrationRequest};
use crate::state::FormField;

/// The reference participant: Asha registering for chess.
#[must_use]
pub fn asha_request() -> RegistrationRequest {
    RegistrationRequest {
        name: "Asha".to_string(),
        email: "a@b.com".to_string(),
        phone: "9876543210".to_string(),
        college: "X".to_string(),
        dept: "CS".to_string(),
        year: "2".to_string(),
        events: vec![EventSelection {
            name: "CHESS".to_string(),
            fee: Some(100),
            ..EventSelection::default()
        }],
        total: 100,
        transaction_id: "UTR1".to_string(),
    }
}

/// Asha's details as typed into the form.
#[must_use]
pub const fn asha_fields() -> [(FormField, &'static str); 6] {
    [
        (FormField::FullName, "Asha"),
        (FormField::Email, "a@b.com"),
        (FormField::Phone, "9876543210"),
        (FormField::College, "X"),
        (FormField::Department, "CS"),
        (FormField::Year, "2"),
    ]
}
