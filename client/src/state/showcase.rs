//! Derived slices for the home-page sections.
//!
//! Every section fetches its collection independently and maps the first
//! few rows into a card model. Sections with a static fallback show it when
//! the fetch fails; the others hide themselves.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use records::{Destination, Review, TourCategory, TourPackage};

use crate::net::BackendError;

const PEXELS: &str = "https://images.pexels.com/photos";
const DEAL_IMAGE_FALLBACK: &str =
    "https://images.pexels.com/photos/1470332/pexels-photo-1470332.jpeg?auto=compress&cs=tinysrgb&w=1920";
const TRIP_IMAGE_FALLBACK: &str = "https://images.pexels.com/photos/1470332/pexels-photo-1470332.jpeg";

pub const POPULAR_LIMIT: usize = 4;
pub const DEALS_LIMIT: usize = 3;
pub const SPECIAL_TRIPS_LIMIT: usize = 6;
pub const GALLERY_LIMIT: usize = 9;
pub const DEAL_DISCOUNT_PERCENT: u32 = 25;
pub const TESTIMONIALS_LIMIT: usize = 3;
const DEAL_PRICE_FALLBACK: f64 = 2000.0;
const DEAL_MARKUP: f64 = 1.3;

fn pexels(photo: u32) -> String {
    format!("{PEXELS}/{photo}/pexels-photo-{photo}.jpeg")
}

// =============================================================================
// POPULAR LOCATIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationCard {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub image: String,
}

impl LocationCard {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/destinations/{}", self.slug)
    }
}

fn fallback_locations() -> Vec<LocationCard> {
    [
        ("Singapore", "City", 2_398_220),
        ("Australia", "Beach", 3_573_351),
        ("Thailand", "Culture", 2_356_059),
        ("Japan", "Adventure", 1_591_373),
    ]
    .into_iter()
    .map(|(name, category, photo)| LocationCard {
        name: name.to_owned(),
        slug: name.to_lowercase(),
        category: category.to_owned(),
        image: format!("{}?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop", pexels(photo)),
    })
    .collect()
}

/// First four destinations, or the static set when the fetch failed.
#[must_use]
pub fn popular_locations(result: &Result<Vec<Destination>, BackendError>) -> Vec<LocationCard> {
    match result {
        Ok(destinations) => destinations
            .iter()
            .take(POPULAR_LIMIT)
            .map(|d| LocationCard {
                name: d.name.clone(),
                slug: d.slug.clone(),
                category: d.category_label(),
                image: d.featured_image.clone(),
            })
            .collect(),
        Err(e) => {
            leptos::logging::error!("popular locations: {e}");
            fallback_locations()
        }
    }
}

// =============================================================================
// TRUST AND SOCIAL PROOF
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrustBadge {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TRUST_BADGES: [TrustBadge; 4] = [
    TrustBadge { icon: "✔", title: "Verified Tours", description: "All tours are verified and tested" },
    TrustBadge { icon: "🏆", title: "Award Winning", description: "Recognized for excellence in service" },
    TrustBadge { icon: "🛡", title: "Secure Booking", description: "Encrypted and protected transactions" },
    TrustBadge { icon: "👥", title: "Expert Guides", description: "Professional guides with years of experience" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadlineStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HEADLINE_STATS: [HeadlineStat; 4] = [
    HeadlineStat { value: "2,500+", label: "Happy Customers" },
    HeadlineStat { value: "4.9★", label: "Average Rating" },
    HeadlineStat { value: "50+", label: "Tours Available" },
    HeadlineStat { value: "20+", label: "Years Experience" },
];

pub const TESTIMONIAL_SOURCE: &str = "Verified Traveler";
const ANONYMOUS_AUTHOR: &str = "Happy Traveler";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub tour: String,
}

fn fallback_testimonials() -> Vec<Testimonial> {
    [
        ("Sarah M.", "Best safari experience ever! The guides were incredibly knowledgeable."),
        ("John D.", "Mount Kilimanjaro climb was unforgettable. Highly recommended!"),
        ("Emma W.", "Professional service from start to finish. Worth every penny!"),
    ]
    .into_iter()
    .map(|(author, text)| Testimonial {
        author: author.to_owned(),
        rating: 5,
        text: text.to_owned(),
        tour: String::new(),
    })
    .collect()
}

/// First three verified reviews with a body. Falls back to the static quotes
/// when the fetch failed or nothing qualifies.
#[must_use]
pub fn testimonials(result: &Result<Vec<Review>, BackendError>) -> Vec<Testimonial> {
    let reviews = match result {
        Ok(reviews) => reviews,
        Err(e) => {
            leptos::logging::error!("testimonials: {e}");
            return fallback_testimonials();
        }
    };
    let quotes: Vec<Testimonial> = reviews
        .iter()
        .filter(|r| r.verified && !r.content.trim().is_empty())
        .take(TESTIMONIALS_LIMIT)
        .map(|r| {
            let name = r.reviewer_name().trim();
            Testimonial {
                author: if name.is_empty() { ANONYMOUS_AUTHOR.to_owned() } else { name.to_owned() },
                rating: r.stars(),
                text: r.content.trim().to_owned(),
                tour: r.tour_title().to_owned(),
            }
        })
        .collect();
    if quotes.is_empty() { fallback_testimonials() } else { quotes }
}

// =============================================================================
// LAST-MINUTE DEALS
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct DealCard {
    pub title: String,
    pub href: String,
    pub image: String,
    pub location: &'static str,
    pub original_price: f64,
    pub price: f64,
    pub discount: u32,
    pub duration: u32,
    pub max_participants: u32,
}

/// Location label printed on deal cards.
#[must_use]
pub fn deal_location(category: TourCategory) -> &'static str {
    match category {
        TourCategory::MountainClimbing => "Mount Kilimanjaro",
        TourCategory::Safari => "Serengeti",
        TourCategory::DayTrips => "Local",
    }
}

/// Struck-through price: the tour price (2000 when unset) marked up 30 %.
#[must_use]
pub fn original_price(price_usd: f64) -> f64 {
    let base = if price_usd > 0.0 { price_usd } else { DEAL_PRICE_FALLBACK };
    (base * DEAL_MARKUP).round()
}

/// First three tours as deal cards; nothing when the fetch failed.
#[must_use]
pub fn deals(result: &Result<Vec<TourPackage>, BackendError>) -> Vec<DealCard> {
    let Ok(tours) = result else {
        return Vec::new();
    };
    tours
        .iter()
        .take(DEALS_LIMIT)
        .map(|t| DealCard {
            title: t.title.clone(),
            href: t.href(),
            image: t.cover_image().unwrap_or(DEAL_IMAGE_FALLBACK).to_owned(),
            location: deal_location(t.category),
            original_price: original_price(t.price_usd),
            price: t.price_usd,
            discount: DEAL_DISCOUNT_PERCENT,
            duration: t.duration,
            max_participants: t.max_participants,
        })
        .collect()
}

// =============================================================================
// SPECIAL TRIPS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSize {
    Large,
    Medium,
    Small,
}

impl CardSize {
    /// First card large, second medium, the rest small.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => Self::Large,
            1 => Self::Medium,
            _ => Self::Small,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Large => "trip-card trip-card--large",
            Self::Medium => "trip-card trip-card--medium",
            Self::Small => "trip-card trip-card--small",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripCard {
    pub title: String,
    pub subtitle: &'static str,
    pub href: String,
    pub image: String,
    pub size: CardSize,
}

#[must_use]
pub fn trip_subtitle(category: TourCategory) -> &'static str {
    match category {
        TourCategory::MountainClimbing => "Peak Adventure",
        TourCategory::Safari => "Wildlife Safari",
        TourCategory::DayTrips => "Unique Experience",
    }
}

/// First six tours as sized trip cards.
#[must_use]
pub fn special_trips(result: &Result<Vec<TourPackage>, BackendError>) -> Vec<TripCard> {
    let Ok(tours) = result else {
        return Vec::new();
    };
    tours
        .iter()
        .take(SPECIAL_TRIPS_LIMIT)
        .enumerate()
        .map(|(i, t)| TripCard {
            title: t.title.clone(),
            subtitle: trip_subtitle(t.category),
            href: t.href(),
            image: t.cover_image().unwrap_or(TRIP_IMAGE_FALLBACK).to_owned(),
            size: CardSize::for_index(i),
        })
        .collect()
}

// =============================================================================
// GALLERY
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    /// Masonry tiles 0 and 5 span two columns and rows.
    #[must_use]
    pub fn is_large(index: usize) -> bool {
        index == 0 || index == 5
    }
}

fn fallback_gallery() -> Vec<GalleryImage> {
    [
        (1_287_460, "Mountain"),
        (631_292, "Safari"),
        (1_670_732, "Beach"),
        (1_054_655, "Wildlife"),
        (1_821_644, "Culture"),
        (2_398_220, "City"),
        (3_573_351, "Coast"),
        (1_470_332, "Landscape"),
        (1_287_460, "Adventure"),
    ]
    .into_iter()
    .map(|(photo, alt)| GalleryImage {
        src: pexels(photo),
        alt: alt.to_owned(),
    })
    .collect()
}

/// Up to two images from each of the first nine tours, capped at nine.
#[must_use]
pub fn gallery(result: &Result<Vec<TourPackage>, BackendError>) -> Vec<GalleryImage> {
    match result {
        Ok(tours) => tours
            .iter()
            .take(GALLERY_LIMIT)
            .flat_map(|t| {
                t.images.iter().take(2).map(|src| GalleryImage {
                    src: src.clone(),
                    alt: t.title.clone(),
                })
            })
            .take(GALLERY_LIMIT)
            .collect(),
        Err(e) => {
            leptos::logging::error!("gallery: {e}");
            fallback_gallery()
        }
    }
}

// =============================================================================
// HERO SEARCH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationOption {
    pub value: TourCategory,
    pub label: &'static str,
}

/// Distinct tour categories in first-seen order; every category when the
/// fetch failed.
#[must_use]
pub fn destination_options(result: &Result<Vec<TourPackage>, BackendError>) -> Vec<DestinationOption> {
    let categories: Vec<TourCategory> = match result {
        Ok(tours) => tours.iter().fold(Vec::new(), |mut seen, t| {
            if !seen.contains(&t.category) {
                seen.push(t.category);
            }
            seen
        }),
        Err(_) => TourCategory::ALL.to_vec(),
    };
    categories
        .into_iter()
        .map(|value| DestinationOption {
            value,
            label: value.destination_label(),
        })
        .collect()
}

/// Hero search form fields, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripSearch {
    pub destination: Option<TourCategory>,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
}

impl Default for TripSearch {
    fn default() -> Self {
        Self {
            destination: None,
            check_in: String::new(),
            check_out: String::new(),
            guests: "1".to_owned(),
        }
    }
}

impl TripSearch {
    /// Listing route for the search, e.g. `/tours/safari?category=safari&guests=2`.
    #[must_use]
    pub fn href(&self) -> String {
        let mut params = Vec::new();
        if let Some(category) = self.destination {
            params.push(format!("category={category}"));
        }
        for (key, value) in [("from", &self.check_in), ("to", &self.check_out), ("guests", &self.guests)] {
            let value = value.trim();
            if !value.is_empty() {
                params.push(format!("{key}={value}"));
            }
        }
        let base = self
            .destination
            .map_or_else(|| "/tours".to_owned(), |category| format!("/tours/{category}"));
        if params.is_empty() {
            base
        } else {
            format!("{base}?{}", params.join("&"))
        }
    }
}
