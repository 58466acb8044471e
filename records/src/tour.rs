//! Tour packages and their itinerary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Record, Table};

wire_enum! {
    /// Top-level tour grouping used in routes and filters.
    #[derive(Default)]
    pub enum TourCategory {
        #[default]
        MountainClimbing => ("mountain-climbing", "Mountain Climbing"),
        Safari => ("safari", "Safari"),
        DayTrips => ("day-trips", "Day Trips"),
    }
}

impl TourCategory {
    /// Destination name shown in the hero search and deal cards.
    #[must_use]
    pub fn destination_label(self) -> &'static str {
        match self {
            Self::MountainClimbing => "Mount Kilimanjaro",
            Self::Safari => "Safari Parks",
            Self::DayTrips => "Day Trips",
        }
    }
}

wire_enum! {
    /// Physical difficulty rating.
    #[derive(Default)]
    pub enum Difficulty {
        Easy => ("easy", "Easy"),
        #[default]
        Moderate => ("moderate", "Moderate"),
        Challenging => ("challenging", "Challenging"),
        Extreme => ("extreme", "Extreme"),
    }
}

/// One day of a tour itinerary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayItinerary {
    pub day: u32,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub activities: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub accommodation: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub meals: Vec<String>,
}

impl DayItinerary {
    /// A blank day with one empty activity and meal slot.
    #[must_use]
    pub fn blank(day: u32) -> Self {
        Self {
            day,
            activities: vec![String::new()],
            meals: vec![String::new()],
            ..Self::default()
        }
    }
}

/// A bookable tour package. Mirrors the `tour_packages` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TourPackage {
    pub id: Uuid,
    pub title: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub short_description: String,
    pub category: TourCategory,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub min_participants: u32,
    #[serde(default)]
    pub max_participants: u32,
    #[serde(default)]
    pub price_usd: f64,
    #[serde(default)]
    pub price_tzs: f64,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub includes: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub excludes: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub best_time: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub itinerary: Vec<DayItinerary>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl TourPackage {
    /// First image, if any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Short blurb for cards: the short description, or the first 150
    /// characters of the full description.
    #[must_use]
    pub fn blurb(&self) -> String {
        if self.short_description.trim().is_empty() {
            self.description.chars().take(150).collect()
        } else {
            self.short_description.clone()
        }
    }

    /// Public detail route.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/tours/{}/{}", self.category, self.slug)
    }
}

impl Record for TourPackage {
    const TABLE: Table = Table::TourPackages;

    fn id(&self) -> Uuid {
        self.id
    }
}
