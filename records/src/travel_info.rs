//! Travel guide articles with quick facts and checklists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{Record, Table};

wire_enum! {
    /// Fixed set of travel guide topics.
    #[derive(Default)]
    pub enum TravelInfoCategory {
        #[default]
        Tips => ("tips", "Travel Tips"),
        Packing => ("packing", "What to Pack"),
        Visa => ("visa", "Visa & Entry"),
        BestTime => ("best-time", "Best Time to Visit"),
        HealthSafety => ("health-safety", "Health & Safety"),
        Currency => ("currency", "Currency & Payments"),
        Weather => ("weather", "Weather Information"),
    }
}

/// Label/value chip rendered on guide pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuickFact {
    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,
    #[validate(length(min = 1, message = "Value is required"))]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A travel guide. Mirrors the `travel_info` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelInfo {
    pub id: Uuid,
    pub title: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub content: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub featured_image: String,
    pub category: TravelInfoCategory,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub quick_facts: Vec<QuickFact>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub checklist_items: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub active: bool,
}

impl Record for TravelInfo {
    const TABLE: Table = Table::TravelInfo;

    fn id(&self) -> Uuid {
        self.id
    }
}
