//! Persisted registration entity.

use crate::payload::RegistrationRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Database id of a stored registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(pub i64);

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment verification status.
///
/// New rows are always `PendingVerification`. Organizers move them on by
/// editing the row directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting a human check of the transaction id
    #[default]
    PendingVerification,
    /// Payment found
    Verified,
    /// Payment not found
    Rejected,
}

impl PaymentStatus {
    /// Column value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingVerification => "pending_verification",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_verification" => Ok(Self::PendingVerification),
            "verified" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("unknown payment status: {other}")),
        }
    }
}

/// One participant's registration, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
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
    pub year_of_study: String,
    /// Selected event names
    pub events: Vec<String>,
    /// Total fee in rupees, as submitted
    pub total_amount: u32,
    /// Payment transaction / UTR reference
    pub transaction_id: String,
    /// When the registration was accepted
    pub registered_at: DateTime<Utc>,
    /// Payment status
    pub payment_status: PaymentStatus,
}

impl Registration {
    /// Build a pending registration from a request that passed the presence check.
    #[must_use]
    pub fn from_request(request: &RegistrationRequest, registered_at: DateTime<Utc>) -> Self {
        Self {
            full_name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            college: request.college.clone(),
            department: request.dept.clone(),
            year_of_study: request.year.clone(),
            events: request.event_names().map(str::to_string).collect(),
            total_amount: request.total,
            transaction_id: request.transaction_id.clone(),
            registered_at,
            payment_status: PaymentStatus::PendingVerification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_round_trips_through_column_value() {
        for status in [
            PaymentStatus::PendingVerification,
            PaymentStatus::Verified,
            PaymentStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<PaymentStatus>(), Ok(status));
        }
        assert!("paid".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::PendingVerification);
    }
}
