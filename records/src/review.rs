//! Customer reviews.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::{CustomerSummary, TourSummary, WITH_CUSTOMER_AND_TOUR};
use crate::{Record, Table};

/// A tour review. Mirrors the `reviews` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub tour_package_id: Option<Uuid>,
    #[serde(default)]
    pub profiles: Option<CustomerSummary>,
    #[serde(default)]
    pub tour_packages: Option<TourSummary>,
    pub rating: u8,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub content: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Review {
    /// Reviewer name from the embedded profile, empty when absent.
    #[must_use]
    pub fn reviewer_name(&self) -> &str {
        self.profiles
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .unwrap_or_default()
    }

    /// Reviewed tour title, empty when absent.
    #[must_use]
    pub fn tour_title(&self) -> &str {
        self.tour_packages.as_ref().map_or("", |t| t.title.as_str())
    }

    /// Rating clamped to the 0..=5 star range.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.rating.min(5)
    }
}

impl Record for Review {
    const TABLE: Table = Table::Reviews;
    const SELECT: &'static str = WITH_CUSTOMER_AND_TOUR;

    fn id(&self) -> Uuid {
        self.id
    }
}
