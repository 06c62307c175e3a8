//! Wire types of `POST /api/register`.

use crate::catalog::{Category, EventId, FestEvent};
use crate::constants::messages;
use crate::model::RegistrationId;
use crate::validation::ParticipantDetails;
use serde::{Deserialize, Deserializer, Serialize};

/// Registration request body.
///
/// Every field is optional on the wire. Absent and `null` fields become
/// empty values, which the presence check then rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRequest {
    /// Full name
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Email address
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    /// Phone number
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    /// College
    #[serde(deserialize_with = "nullable")]
    pub college: String,
    /// Department
    #[serde(deserialize_with = "nullable")]
    pub dept: String,
    /// Year of study
    #[serde(deserialize_with = "nullable")]
    pub year: String,
    /// Selected events
    #[serde(deserialize_with = "nullable")]
    pub events: Vec<EventSelection>,
    /// Client-computed total in rupees
    #[serde(deserialize_with = "nullable")]
    pub total: u32,
    /// Payment transaction / UTR reference
    #[serde(deserialize_with = "nullable")]
    pub transaction_id: String,
}

/// One selected event as sent by the client.
///
/// Only `name` is stored. The other fields mirror the catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSelection {
    /// Display name
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Displayed fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_label: Option<String>,
    /// Fee in rupees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<u32>,
    /// Catalog slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl From<&FestEvent> for EventSelection {
    fn from(event: &FestEvent) -> Self {
        Self {
            name: event.name.clone(),
            fee_label: Some(event.fee_label.clone()),
            fee: Some(event.fee),
            id: Some(event.id.clone()),
            category: Some(event.category),
        }
    }
}

impl RegistrationRequest {
    /// Build the body the form controller posts.
    #[must_use]
    pub fn from_submission(
        details: &ParticipantDetails,
        events: &[FestEvent],
        total: u32,
        transaction_id: impl Into<String>,
    ) -> Self {
        Self {
            name: details.name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            college: details.college.clone(),
            dept: details.dept.clone(),
            year: details.year.clone(),
            events: events.iter().map(EventSelection::from).collect(),
            total,
            transaction_id: transaction_id.into(),
        }
    }

    /// Names of the selected events, in submitted order.
    pub fn event_names(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.name.as_str())
    }

    /// Wire names of the required fields that are empty.
    ///
    /// Only presence is checked here; formats are the form's concern. The
    /// total is not required, a zero total is accepted.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_empty()),
            ("email", self.email.is_empty()),
            ("phone", self.phone.is_empty()),
            ("college", self.college.is_empty()),
            ("dept", self.dept.is_empty()),
            ("year", self.year.is_empty()),
            ("events", self.events.is_empty()),
            ("transactionId", self.transaction_id.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect()
    }
}

/// Response envelope of the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// Whether the registration was stored
    #[serde(default)]
    pub success: bool,
    /// Human readable outcome
    #[serde(default)]
    pub message: String,
    /// Id of the stored row, on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RegistrationId>,
}

impl RegistrationResponse {
    /// Success envelope for a stored registration.
    #[must_use]
    pub fn accepted(id: RegistrationId) -> Self {
        Self {
            success: true,
            message: messages::SUCCESS.to_string(),
            id: Some(id),
        }
    }

    /// Failure envelope.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }
}

/// Treat an explicit `null` like an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
