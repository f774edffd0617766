//! Contact data models.

use maildesk_store::new_id;
use serde::{Deserialize, Serialize};

/// An address book entry.
///
/// Contacts carry no timestamps; the address book is ordered by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Email address, normalized to lowercase.
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: String,
    /// Optional company.
    #[serde(default)]
    pub company: String,
    /// Optional location.
    #[serde(default)]
    pub location: String,
    /// Optional free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl Contact {
    /// Build a new contact. The email is trimmed and lowercased.
    #[must_use]
    pub fn from_params(params: ContactParams) -> Self {
        Self {
            id: new_id(),
            name: params.name.unwrap_or_default(),
            email: params
                .email
                .map(|e| e.trim().to_lowercase())
                .unwrap_or_default(),
            phone: params.phone.unwrap_or_default(),
            company: params.company.unwrap_or_default(),
            location: params.location.unwrap_or_default(),
            notes: params.notes.unwrap_or_default(),
        }
    }

    /// Whether name, email, or company contains `query`,
    /// case-insensitively.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.email.contains(&query)
            || self.company.to_lowercase().contains(&query)
    }
}

/// Partial input for creating a contact.
#[derive(Debug, Clone, Default)]
pub struct ContactParams {
    /// Full name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Company.
    pub company: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// A shallow merge applied to an existing contact.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    /// Replace the name.
    pub name: Option<String>,
    /// Replace the email; normalized to lowercase.
    pub email: Option<String>,
    /// Replace the phone number.
    pub phone: Option<String>,
    /// Replace the company.
    pub company: Option<String>,
    /// Replace the location.
    pub location: Option<String>,
    /// Replace the notes.
    pub notes: Option<String>,
}

impl ContactPatch {
    /// Merge this patch into `contact`.
    pub fn apply(self, contact: &mut Contact) {
        if let Some(name) = self.name {
            contact.name = name;
        }
        if let Some(email) = self.email {
            contact.email = email.trim().to_lowercase();
        }
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(company) = self.company {
            contact.company = company;
        }
        if let Some(location) = self.location {
            contact.location = location;
        }
        if let Some(notes) = self.notes {
            contact.notes = notes;
        }
    }
}
