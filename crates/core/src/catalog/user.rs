//! Storefront customer accounts.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned user ID.
    pub id: UserId,
    /// Full (three-part) name as entered at registration.
    pub full_name: String,
    /// Phone number used to log in.
    pub phone_number: String,
    /// Whether the user may curate the catalog.
    pub is_admin: bool,
}

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub full_name: String,
    pub phone_number: String,
    /// Defaults to `false` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

impl NewUser {
    /// Build the stored record for this input under the given id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            full_name: self.full_name,
            phone_number: self.phone_number,
            is_admin: self.is_admin.unwrap_or(false),
        }
    }
}
