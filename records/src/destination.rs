//! Destinations shown on the public site.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Difficulty, Record, Table};

wire_enum! {
    /// Destination grouping used by the public filter chips.
    #[derive(Default)]
    pub enum DestinationCategory {
        #[default]
        Mountain => ("mountain", "Mountains & Peaks"),
        Park => ("park", "National Parks"),
        Cultural => ("cultural", "Cultural & Historical"),
        Coastal => ("coastal", "Coastal & Islands"),
        Adventure => ("adventure", "Adventure"),
    }
}

/// Geographic position and administrative area.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub region: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub district: String,
}

/// A destination. Mirrors the `destinations` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub short_description: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub featured_image: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub images: Vec<String>,
    /// Kept as text: older rows carry free-form categories ("City", "Beach").
    #[serde(default, deserialize_with = "crate::nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub location: Location,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub best_time_to_visit: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub activities: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub difficulty_level: Difficulty,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub duration_recommended: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub entry_requirements: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub accommodation_options: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub transportation: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub active: bool,
}

impl Destination {
    /// Category label for display, falling back to the raw value.
    #[must_use]
    pub fn category_label(&self) -> String {
        self.category
            .parse::<DestinationCategory>()
            .map_or_else(|_| self.category.clone(), |c| c.label().to_owned())
    }

    /// Public route for the destination.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/destinations/{}", self.slug)
    }
}

impl Record for Destination {
    const TABLE: Table = Table::Destinations;

    fn id(&self) -> Uuid {
        self.id
    }
}
