//! Contact form inquiries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Record, Table};

wire_enum! {
    /// Inquiry handling status.
    pub enum InquiryStatus {
        New => ("new", "New"),
        Replied => ("replied", "Replied"),
        Closed => ("closed", "Closed"),
    }
}

/// A contact inquiry. Mirrors the `contact_inquiries` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub subject: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub message: String,
    pub status: InquiryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Record for ContactInquiry {
    const TABLE: Table = Table::ContactInquiries;

    fn id(&self) -> Uuid {
        self.id
    }
}
