//! Add-quote intake
//!
//! The non-visual logic of the two-step add-quote flow: the new-customer
//! contact form, its presence checks, and resolution of either entry path
//! into the client snapshot a new quote carries.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::services::ClientsService;
use crate::store::ClientSnapshot;

/// Contact form filled in for a non-onboarded customer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub email: String,
}

impl CustomerForm {
    /// Whether every required field is present.
    ///
    /// Company name and postal code are optional; the rest gate the
    /// "Continue to Quote" control. Incompleteness only disables the
    /// control, it never raises an error.
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.email.trim().is_empty()
    }

    /// Synthesize the denormalized client identity a quote will carry.
    ///
    /// Name joins first and last name; the postal code is appended to the
    /// address when present. Blank contact fields are carried as absent so
    /// the "N/A" substitution happens in one place, at onboarding.
    pub fn client_snapshot(&self) -> ClientSnapshot {
        let address = if self.postal_code.trim().is_empty() {
            self.address.clone()
        } else {
            format!("{}, {}", self.address, self.postal_code)
        };

        ClientSnapshot {
            name: format!("{} {}", self.first_name, self.last_name),
            address,
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
        }
    }
}

/// Resolve the onboarded entry path: look up the selected directory client
/// and capture its identity onto the draft quote. The view keeps the
/// continue control disabled until a selection exists, so an unknown id
/// here means a stale selection.
pub fn resolve_existing_client(clients: &ClientsService, client_id: &str) -> Result<ClientSnapshot> {
    let client = clients.get_client(client_id)?;
    Ok(ClientSnapshot::from(&client))
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
