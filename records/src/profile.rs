//! User profiles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Record, Table};

/// A user profile. Mirrors the `profiles` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub full_name: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Profile {
    /// Name for display, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() { &self.email } else { &self.full_name }
    }
}

impl Record for Profile {
    const TABLE: Table = Table::Profiles;

    fn id(&self) -> Uuid {
        self.id
    }
}
