//! Editable drafts for the admin forms and their validation schemas.
//!
//! Each draft derives [`Validate`] with the per-field rules the forms show
//! inline. [`check`] runs the rules and folds the result into
//! [`FieldErrors`], one message per field. Drafts turn into the JSON payload
//! sent to the backend with the slug and computed columns attached.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::blog::BlogPost;
use crate::destination::{Destination, DestinationCategory, Location};
use crate::slug::slugify;
use crate::tour::{DayItinerary, Difficulty, TourCategory, TourPackage};
use crate::travel_info::{QuickFact, TravelInfo, TravelInfoCategory};

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// First validation message per field, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Record a message for `field`. An existing message is kept.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = Self::new();
        for (field, list) in errors.field_errors() {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map_or_else(|| format!("Invalid {field}"), ToString::to_string);
                out.insert(field.to_string(), message);
            }
        }
        out
    }
}

/// Run a draft's rules, collecting per-field messages on failure.
///
/// # Errors
///
/// Returns the failing fields when any rule is violated.
pub fn check<T: Validate>(draft: &T) -> Result<(), FieldErrors> {
    draft.validate().map_err(FieldErrors::from)
}

// =============================================================================
// CUSTOM RULES
// =============================================================================

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn entries_not_blank(entries: &[String]) -> Result<(), ValidationError> {
    if entries.iter().any(|e| e.trim().is_empty()) {
        return Err(failure("blank_entry", "Entries cannot be empty"));
    }
    Ok(())
}

fn all_urls(entries: &[String]) -> Result<(), ValidationError> {
    if entries.iter().any(|e| !e.trim().validate_url()) {
        return Err(failure("url", "Every image must be a valid URL"));
    }
    Ok(())
}

fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.trim().validate_url() {
        Ok(())
    } else {
        Err(failure("url", "Please enter a valid image URL"))
    }
}

fn quick_facts_complete(facts: &[QuickFact]) -> Result<(), ValidationError> {
    if facts.iter().any(|f| f.validate().is_err()) {
        return Err(failure("quick_fact", "Every quick fact needs a label and a value"));
    }
    Ok(())
}

fn valid_location(loc: &LocationDraft) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&loc.latitude) {
        return Err(failure("latitude", "Latitude must be between -90 and 90"));
    }
    if !(-180.0..=180.0).contains(&loc.longitude) {
        return Err(failure("longitude", "Longitude must be between -180 and 180"));
    }
    Ok(())
}

/// Split a textarea value into trimmed, non-empty lines.
#[must_use]
pub fn lines_to_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn to_json<T: Serialize>(payload: &T) -> Value {
    // Drafts hold only strings, numbers, bools and vectors of those.
    serde_json::to_value(payload).unwrap_or(Value::Null)
}

// =============================================================================
// LOGIN
// =============================================================================

/// Email/password sign-in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// New password plus its confirmation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct ResetPasswordForm {
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm: String,
}

// =============================================================================
// TOUR
// =============================================================================

/// Editable tour package.
#[derive(Clone, Debug, PartialEq, Serialize, Validate)]
pub struct TourDraft {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 50, message = "Description must be at least 50 characters"))]
    pub description: String,
    #[validate(length(min = 20, message = "Short description must be at least 20 characters"))]
    pub short_description: String,
    pub category: TourCategory,
    pub difficulty: Difficulty,
    #[validate(range(min = 1, message = "Duration must be at least 1 day"))]
    pub duration: u32,
    #[validate(range(min = 1.0, message = "Price must be greater than 0"))]
    pub price_usd: f64,
    #[validate(range(min = 1.0, message = "Price must be greater than 0"))]
    pub price_tzs: f64,
    #[validate(range(min = 1, message = "Min participants must be at least 1"))]
    pub min_participants: u32,
    #[validate(range(min = 1, message = "Max participants must be at least 1"))]
    pub max_participants: u32,
    #[validate(
        length(min = 1, message = "At least one image is required"),
        custom(function = "all_urls")
    )]
    pub images: Vec<String>,
    #[validate(custom(function = "entries_not_blank"))]
    pub includes: Vec<String>,
    #[validate(custom(function = "entries_not_blank"))]
    pub excludes: Vec<String>,
    #[validate(custom(function = "entries_not_blank"))]
    pub requirements: Vec<String>,
    #[validate(length(min = 5, message = "Best time must be specified"))]
    pub best_time: String,
    #[serde(skip)]
    pub itinerary: Vec<DayItinerary>,
    pub featured: bool,
    pub active: bool,
}

impl Default for TourDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            short_description: String::new(),
            category: TourCategory::default(),
            difficulty: Difficulty::default(),
            duration: 1,
            price_usd: 0.0,
            price_tzs: 0.0,
            min_participants: 1,
            max_participants: 1,
            images: Vec::new(),
            includes: vec![String::new()],
            excludes: vec![String::new()],
            requirements: vec![String::new()],
            best_time: String::new(),
            itinerary: Vec::new(),
            featured: false,
            active: true,
        }
    }
}

impl From<&TourPackage> for TourDraft {
    fn from(tour: &TourPackage) -> Self {
        Self {
            title: tour.title.clone(),
            description: tour.description.clone(),
            short_description: tour.short_description.clone(),
            category: tour.category,
            difficulty: tour.difficulty,
            duration: tour.duration,
            price_usd: tour.price_usd,
            price_tzs: tour.price_tzs,
            min_participants: tour.min_participants,
            max_participants: tour.max_participants,
            images: tour.images.clone(),
            includes: tour.includes.clone(),
            excludes: tour.excludes.clone(),
            requirements: tour.requirements.clone(),
            best_time: tour.best_time.clone(),
            itinerary: tour.itinerary.clone(),
            featured: tour.featured,
            active: tour.active,
        }
    }
}

#[derive(Serialize)]
struct TourPayload<'a> {
    #[serde(flatten)]
    draft: &'a TourDraft,
    slug: String,
    itinerary: Vec<DayItinerary>,
}

impl TourDraft {
    /// Insert/update body: the draft plus slug and an itinerary numbered 1..n.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let itinerary = self
            .itinerary
            .iter()
            .zip(1..)
            .map(|(day, n)| DayItinerary { day: n, ..day.clone() })
            .collect();
        to_json(&TourPayload {
            draft: self,
            slug: slugify(&self.title),
            itinerary,
        })
    }
}

// =============================================================================
// BLOG
// =============================================================================

/// Editable blog post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Validate)]
pub struct BlogDraft {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 20, message = "Excerpt must be at least 20 characters"))]
    pub excerpt: String,
    #[validate(length(min = 100, message = "Content must be at least 100 characters"))]
    pub content: String,
    #[validate(url(message = "Please enter a valid image URL"))]
    pub featured_image: String,
    #[validate(length(min = 2, message = "Author name is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(custom(function = "entries_not_blank"))]
    pub tags: Vec<String>,
    pub published: bool,
    /// Publish time of the stored post, kept when it stays published.
    #[serde(skip)]
    pub published_at: Option<String>,
}

impl From<&BlogPost> for BlogDraft {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            featured_image: post.featured_image.clone(),
            author: post.author.clone(),
            category: post.category.clone(),
            tags: post.tags.clone(),
            published: post.published,
            published_at: post.published_at.clone(),
        }
    }
}

#[derive(Serialize)]
struct BlogPayload<'a> {
    #[serde(flatten)]
    draft: &'a BlogDraft,
    slug: String,
    published_at: Option<String>,
}

impl BlogDraft {
    /// Insert/update body. `now` stamps posts published for the first time;
    /// unpublished posts carry a null `published_at`.
    #[must_use]
    pub fn to_payload(&self, now: &str) -> Value {
        let published_at = self
            .published
            .then(|| self.published_at.clone().unwrap_or_else(|| now.to_owned()));
        to_json(&BlogPayload {
            draft: self,
            slug: slugify(&self.title),
            published_at,
        })
    }
}

// =============================================================================
// TRAVEL INFO
// =============================================================================

/// Editable travel guide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Validate)]
pub struct TravelInfoDraft {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 20, message = "Excerpt must be at least 20 characters"))]
    pub excerpt: String,
    #[validate(length(min = 100, message = "Content must be at least 100 characters"))]
    pub content: String,
    #[validate(url(message = "Please enter a valid image URL"))]
    pub featured_image: String,
    pub category: TravelInfoCategory,
    #[validate(custom(function = "entries_not_blank"))]
    pub tags: Vec<String>,
    #[validate(custom(function = "quick_facts_complete"))]
    pub quick_facts: Vec<QuickFact>,
    #[serde(skip)]
    pub checklist_items: Vec<String>,
    pub featured: bool,
    pub active: bool,
}

impl Default for TravelInfoDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            featured_image: String::new(),
            category: TravelInfoCategory::default(),
            tags: vec![String::new()],
            quick_facts: vec![QuickFact::default()],
            checklist_items: vec![String::new()],
            featured: false,
            active: true,
        }
    }
}

impl From<&TravelInfo> for TravelInfoDraft {
    fn from(info: &TravelInfo) -> Self {
        Self {
            title: info.title.clone(),
            excerpt: info.excerpt.clone(),
            content: info.content.clone(),
            featured_image: info.featured_image.clone(),
            category: info.category,
            tags: info.tags.clone(),
            quick_facts: info.quick_facts.clone(),
            checklist_items: info.checklist_items.clone(),
            featured: info.featured,
            active: info.active,
        }
    }
}

#[derive(Serialize)]
struct TravelInfoPayload<'a> {
    #[serde(flatten)]
    draft: &'a TravelInfoDraft,
    slug: String,
    checklist_items: Vec<&'a str>,
}

impl TravelInfoDraft {
    /// Insert/update body with blank checklist entries dropped.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let checklist_items = self
            .checklist_items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .collect();
        to_json(&TravelInfoPayload {
            draft: self,
            slug: slugify(&self.title),
            checklist_items,
        })
    }
}

// =============================================================================
// DESTINATION
// =============================================================================

/// Coordinates and area of a destination draft.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LocationDraft {
    pub latitude: f64,
    pub longitude: f64,
    pub region: String,
    pub district: String,
}

impl From<&Location> for LocationDraft {
    fn from(loc: &Location) -> Self {
        Self {
            latitude: loc.latitude,
            longitude: loc.longitude,
            region: loc.region.clone(),
            district: loc.district.clone(),
        }
    }
}

/// Editable destination.
#[derive(Clone, Debug, PartialEq, Serialize, Validate)]
pub struct DestinationDraft {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    /// Explicit slug; derived from the name when left blank.
    pub slug: String,
    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: String,
    pub short_description: String,
    #[validate(custom(function = "optional_url"))]
    pub featured_image: String,
    #[validate(custom(function = "all_urls"))]
    pub images: Vec<String>,
    pub category: String,
    #[validate(custom(function = "valid_location"))]
    pub location: LocationDraft,
    pub best_time_to_visit: String,
    pub activities: Vec<String>,
    pub highlights: Vec<String>,
    pub difficulty_level: Difficulty,
    pub duration_recommended: String,
    pub entry_requirements: Vec<String>,
    pub accommodation_options: Vec<String>,
    pub transportation: Vec<String>,
    pub featured: bool,
    pub active: bool,
}

impl Default for DestinationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            short_description: String::new(),
            featured_image: String::new(),
            images: Vec::new(),
            category: DestinationCategory::default().as_str().to_owned(),
            location: LocationDraft::default(),
            best_time_to_visit: String::new(),
            activities: Vec::new(),
            highlights: Vec::new(),
            difficulty_level: Difficulty::default(),
            duration_recommended: String::new(),
            entry_requirements: Vec::new(),
            accommodation_options: Vec::new(),
            transportation: Vec::new(),
            featured: false,
            active: true,
        }
    }
}

impl From<&Destination> for DestinationDraft {
    fn from(dest: &Destination) -> Self {
        Self {
            name: dest.name.clone(),
            slug: dest.slug.clone(),
            description: dest.description.clone(),
            short_description: dest.short_description.clone(),
            featured_image: dest.featured_image.clone(),
            images: dest.images.clone(),
            category: dest.category.clone(),
            location: LocationDraft::from(&dest.location),
            best_time_to_visit: dest.best_time_to_visit.clone(),
            activities: dest.activities.clone(),
            highlights: dest.highlights.clone(),
            difficulty_level: dest.difficulty_level,
            duration_recommended: dest.duration_recommended.clone(),
            entry_requirements: dest.entry_requirements.clone(),
            accommodation_options: dest.accommodation_options.clone(),
            transportation: dest.transportation.clone(),
            featured: dest.featured,
            active: dest.active,
        }
    }
}

impl DestinationDraft {
    /// Insert/update body, filling in a slug derived from the name if blank.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let mut draft = self.clone();
        if draft.slug.trim().is_empty() {
            draft.slug = slugify(&draft.name);
        }
        to_json(&draft)
    }
}
