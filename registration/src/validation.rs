//! Client-side validation of the registration form.
//!
//! The endpoint only checks presence. Format checks happen here, before a
//! submission is ever built.

use crate::state::FormFields;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First failing rule of [`validate`]. `Display` is the toast text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name empty after trimming.
    #[error("Please enter your full name")]
    MissingName,

    /// Email empty or malformed.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Phone is not exactly ten digits.
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,

    /// College empty after trimming.
    #[error("Please enter your college name")]
    MissingCollege,

    /// Department empty after trimming.
    #[error("Please enter your department")]
    MissingDepartment,

    /// No year of study picked.
    #[error("Please select your year of study")]
    MissingYear,

    /// Nothing selected.
    #[error("Please select at least one event")]
    NoEventsSelected,
}

/// Trimmed, validated participant details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDetails {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Ten-digit phone number
    pub phone: String,
    /// College
    pub college: String,
    /// Department
    pub dept: String,
    /// Year of study
    pub year: String,
}

/// Check an email address against `local@domain.tld` shape.
///
/// Equivalent to the pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one `@`,
/// no whitespace, a non-empty local part, and a dot in the domain with at
/// least one character on each side.
///
/// # Examples
///
/// ```
/// use fest_registration::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(is_valid_email("first.last@dept.college.edu"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("a b@c.com"));
/// assert!(!is_valid_email("@b.com"));
/// assert!(!is_valid_email("a@b.com@c.org"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check for exactly ten ASCII digits.
///
/// # Examples
///
/// ```
/// use fest_registration::validation::is_valid_phone;
///
/// assert!(is_valid_phone("9876543210"));
/// assert!(!is_valid_phone("98765 43210"));
/// assert!(!is_valid_phone("+919876543210"));
/// ```
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Validate the form in field order.
///
/// Text fields are trimmed first. The year is a dropdown value and is only
/// checked for presence.
///
/// # Errors
///
/// Returns the first rule that fails.
pub fn validate(
    fields: &FormFields,
    selected_events: usize,
) -> Result<ParticipantDetails, ValidationError> {
    let name = fields.full_name.trim();
    let email = fields.email.trim();
    let phone = fields.phone.trim();
    let college = fields.college.trim();
    let dept = fields.department.trim();
    let year = fields.year.as_str();

    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if college.is_empty() {
        return Err(ValidationError::MissingCollege);
    }
    if dept.is_empty() {
        return Err(ValidationError::MissingDepartment);
    }
    if year.is_empty() {
        return Err(ValidationError::MissingYear);
    }
    if selected_events == 0 {
        return Err(ValidationError::NoEventsSelected);
    }

    Ok(ParticipantDetails {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        college: college.to_string(),
        dept: dept.to_string(),
        year: year.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn asha() -> FormFields {
        FormFields {
            full_name: "  Asha ".into(),
            email: "a@b.com ".into(),
            phone: " 9876543210".into(),
            college: "X".into(),
            department: "CS".into(),
            year: "2".into(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let details = validate(&asha(), 1);
        assert_eq!(
            details,
            Ok(ParticipantDetails {
                name: "Asha".into(),
                email: "a@b.com".into(),
                phone: "9876543210".into(),
                college: "X".into(),
                dept: "CS".into(),
                year: "2".into(),
            })
        );
    }

    #[test]
    fn test_rules_apply_in_field_order() {
        let mut fields = asha();
        fields.full_name = "   ".into();
        fields.email = "nope".into();
        assert_eq!(validate(&fields, 0), Err(ValidationError::MissingName));

        fields.full_name = "Asha".into();
        assert_eq!(validate(&fields, 0), Err(ValidationError::InvalidEmail));

        fields.email = "a@b.com".into();
        fields.phone = "12345".into();
        assert_eq!(validate(&fields, 0), Err(ValidationError::InvalidPhone));

        fields.phone = "9876543210".into();
        fields.college = String::new();
        assert_eq!(validate(&fields, 0), Err(ValidationError::MissingCollege));

        fields.college = "X".into();
        fields.department = " ".into();
        assert_eq!(validate(&fields, 0), Err(ValidationError::MissingDepartment));

        fields.department = "CS".into();
        fields.year = String::new();
        assert_eq!(validate(&fields, 0), Err(ValidationError::MissingYear));

        fields.year = "4".into();
        assert_eq!(validate(&fields, 0), Err(ValidationError::NoEventsSelected));
    }

    #[test]
    fn test_toast_texts() {
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid 10-digit phone number"
        );
        assert_eq!(
            ValidationError::NoEventsSelected.to_string(),
            "Please select at least one event"
        );
    }

    #[test]
    fn test_email_edge_cases() {
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email(""));
    }

    proptest! {
        #[test]
        fn prop_email_without_at_is_rejected(s in "[^@]*") {
            prop_assert!(!is_valid_email(&s));
        }

        #[test]
        fn prop_email_without_domain_dot_is_rejected(
            local in "[a-z0-9]{1,12}",
            domain in "[a-z0-9]{0,12}",
        ) {
            let email = format!("{local}@{domain}");
            prop_assert!(!is_valid_email(&email));
        }

        #[test]
        fn prop_email_of_plain_parts_is_accepted(
            local in "[a-z0-9._]{1,12}",
            host in "[a-z0-9]{1,12}",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{local}@{host}.{tld}");
            prop_assert!(is_valid_email(&email));
        }

        #[test]
        fn prop_phone_of_wrong_length_is_rejected(s in "[0-9]{0,9}|[0-9]{11,16}") {
            prop_assert!(!is_valid_phone(&s));
        }

        #[test]
        fn prop_phone_with_non_digit_is_rejected(
            prefix in "[0-9]{0,9}",
            c in "[^0-9]",
            suffix in "[0-9]{0,9}",
        ) {
            let phone = format!("{prefix}{c}{suffix}");
            prop_assert!(!is_valid_phone(&phone));
        }

        #[test]
        fn prop_zero_events_is_always_rejected(name in "[A-Za-z ]{0,20}", phone in "[0-9]{10}") {
            let fields = FormFields {
                full_name: name,
                email: "a@b.com".into(),
                phone,
                college: "X".into(),
                department: "CS".into(),
                year: "1".into(),
            };
            prop_assert!(validate(&fields, 0).is_err());
        }
    }
}
