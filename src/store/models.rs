//! Store models
//!
//! Rust structs representing the session entities.
//! All models use serde for serialization to the frontend; field names
//! follow the frontend's camelCase contract.

use serde::{Deserialize, Serialize};

/// Placement of a quote in the two-tab list, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Created for an already-onboarded customer
    Scheduled,
    /// Created for a non-onboarded customer; stays here even after onboarding
    Sent,
}

/// Which entry path produced a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerType {
    Onboarded,
    NonOnboarded,
}

/// An onboarded customer in the client directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// A quote, carrying a denormalized copy of the client's identity taken at
/// the time the quote was made. The copy is deliberate: it is what was
/// quoted, not a live reference, and it survives later changes to the
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub name: String,
    pub client_name: String,
    pub client_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    /// Back-reference to the live directory record. Set only when the quote
    /// was created for an existing client; onboarding never backfills it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub scheduled_date: String,
    pub amount: f64,
    pub status: QuoteStatus,
    /// The one field that changes after creation: flipped when the quote's
    /// customer is onboarded into the directory.
    #[serde(default)]
    pub is_client_onboarded: bool,
}

impl Quote {
    /// Whether the convert-to-job action is available for this quote
    pub fn can_convert_to_job(&self) -> bool {
        self.is_client_onboarded
    }
}

/// Resolved client identity captured onto a new quote
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSnapshot {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<&Client> for ClientSnapshot {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            address: client.address.clone(),
            email: Some(client.email.clone()),
            phone: Some(client.phone.clone()),
        }
    }
}

/// Create quote request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    pub name: String,
    pub client: ClientSnapshot,
    /// Grand total computed by the pricing step
    pub amount: f64,
    /// Directory id of the client, when the onboarded path resolved one
    #[serde(default)]
    pub client_id: Option<String>,
}

/// Result of onboarding a customer from a quote. The message is data for
/// the view layer to surface however it likes; the core never blocks on it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingOutcome {
    pub client: Client,
    pub message: String,
}

/// Outcome of a convert-to-job attempt; refusal is a value, not an error
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum JobConversion {
    /// The quote's customer is onboarded and the conversion may proceed
    Started { message: String },
    /// The customer has not been onboarded; the action stays disabled
    Restricted { reason: String },
}
