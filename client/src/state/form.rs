//! Create/edit form state for tours, blog posts, travel guides and
//! destinations.
//!
//! DESIGN
//! ======
//! A form screen holds one draft from `records::forms`. Editing fetches the
//! whole collection and locates the row by id; a missing row or a failed
//! fetch sends the admin back to the list with an alert. Submitting runs the
//! draft's validation rules first and only then writes, creating or
//! updating depending on whether an id is being edited.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use records::forms::{BlogDraft, DestinationDraft, TourDraft, TravelInfoDraft};
use records::{BlogPost, DayItinerary, Destination, FieldErrors, Record, TourPackage, TravelInfo, check};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::net::{Backend, BackendError, create, fetch_all, update_row};

// =============================================================================
// REPEATED ENTRIES
// =============================================================================

/// Append a blank entry.
pub fn add_entry<T: Default>(list: &mut Vec<T>) {
    list.push(T::default());
}

/// Remove the entry at `index`. The last remaining entry is kept so the
/// form always shows one input.
pub fn remove_entry<T>(list: &mut Vec<T>, index: usize) {
    if list.len() > 1 && index < list.len() {
        list.remove(index);
    }
}

/// Replace the entry at `index`; out-of-range indexes are ignored.
pub fn update_entry<T>(list: &mut [T], index: usize, value: T) {
    if let Some(slot) = list.get_mut(index) {
        *slot = value;
    }
}

// =============================================================================
// ITINERARY
// =============================================================================

/// Append a blank day numbered after the last one.
pub fn add_day(days: &mut Vec<DayItinerary>) {
    let next = u32::try_from(days.len()).map_or(u32::MAX, |n| n.saturating_add(1));
    days.push(DayItinerary::blank(next));
}

/// Remove a day and renumber the rest 1..n.
pub fn remove_day(days: &mut Vec<DayItinerary>, index: usize) {
    if index < days.len() {
        days.remove(index);
    }
    for (day, n) in days.iter_mut().zip(1..) {
        day.day = n;
    }
}

/// Edit one day in place.
pub fn update_day(days: &mut [DayItinerary], index: usize, edit: impl FnOnce(&mut DayItinerary)) {
    if let Some(day) = days.get_mut(index) {
        edit(day);
    }
}

// =============================================================================
// DRAFTS
// =============================================================================

/// User-facing copy for one form screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormCopy {
    pub list_route: &'static str,
    pub not_found: &'static str,
    pub fetch_failed: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub save_failed: &'static str,
}

/// A validated draft that can be written as one row.
pub trait Draft: Validate + Clone + Default {
    type Row: Record;

    const COPY: FormCopy;

    /// Draft pre-populated from a stored row.
    fn from_row(row: &Self::Row) -> Self;

    /// Insert/update body. `now` is the current ISO timestamp.
    fn payload(&self, now: &str) -> Value;
}

impl Draft for TourDraft {
    type Row = TourPackage;

    const COPY: FormCopy = FormCopy {
        list_route: "/admin/tours",
        not_found: "Tour not found",
        fetch_failed: "Failed to fetch tour data",
        created: "Tour package created successfully!",
        updated: "Tour package updated successfully!",
        save_failed: "Failed to save tour package. Please try again.",
    };

    fn from_row(row: &TourPackage) -> Self {
        Self::from(row)
    }

    fn payload(&self, _now: &str) -> Value {
        self.to_payload()
    }
}

impl Draft for BlogDraft {
    type Row = BlogPost;

    const COPY: FormCopy = FormCopy {
        list_route: "/admin/blog",
        not_found: "Blog post not found",
        fetch_failed: "Failed to fetch blog post data",
        created: "Blog post created successfully!",
        updated: "Blog post updated successfully!",
        save_failed: "Failed to save blog post. Please try again.",
    };

    fn from_row(row: &BlogPost) -> Self {
        Self::from(row)
    }

    fn payload(&self, now: &str) -> Value {
        self.to_payload(now)
    }
}

impl Draft for TravelInfoDraft {
    type Row = TravelInfo;

    const COPY: FormCopy = FormCopy {
        list_route: "/admin/travel-info",
        not_found: "Travel information not found",
        fetch_failed: "Failed to fetch travel information data",
        created: "Travel information created successfully!",
        updated: "Travel information updated successfully!",
        save_failed: "Failed to save travel information. Please try again.",
    };

    fn from_row(row: &TravelInfo) -> Self {
        Self::from(row)
    }

    fn payload(&self, _now: &str) -> Value {
        self.to_payload()
    }
}

impl Draft for DestinationDraft {
    type Row = Destination;

    const COPY: FormCopy = FormCopy {
        list_route: "/admin/destinations",
        not_found: "Destination not found",
        fetch_failed: "Failed to fetch destination data",
        created: "Destination created successfully",
        updated: "Destination updated successfully",
        save_failed: "Failed to save destination. Please try again.",
    };

    fn from_row(row: &Destination) -> Self {
        Self::from(row)
    }

    fn payload(&self, _now: &str) -> Value {
        self.to_payload()
    }
}

// =============================================================================
// LOAD & SAVE
// =============================================================================

/// Linear scan for the row with `id`.
#[must_use]
pub fn find_by_id<T: Record>(rows: Vec<T>, id: Uuid) -> Option<T> {
    rows.into_iter().find(|row| row.id() == id)
}

/// Why an edit form could not be pre-populated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    NotFound,
    Fetch(BackendError),
}

impl LoadError {
    /// Alert text for the screen owning `D`.
    #[must_use]
    pub fn alert<D: Draft>(&self) -> &'static str {
        match self {
            Self::NotFound => D::COPY.not_found,
            Self::Fetch(_) => D::COPY.fetch_failed,
        }
    }
}

/// Fetch the collection and build a draft from the row with `id`.
///
/// # Errors
///
/// [`LoadError::Fetch`] when the read fails, [`LoadError::NotFound`] when no
/// row carries `id`.
pub async fn load_for_edit<D: Draft>(backend: &dyn Backend, id: Uuid) -> Result<D, LoadError> {
    let rows = fetch_all::<D::Row>(backend).await.map_err(LoadError::Fetch)?;
    find_by_id(rows, id).map(|row| D::from_row(&row)).ok_or(LoadError::NotFound)
}

/// Parse an `:id` route segment; a malformed id reads as "not found".
///
/// # Errors
///
/// [`LoadError::NotFound`] when the segment is not a UUID.
pub fn parse_id(segment: &str) -> Result<Uuid, LoadError> {
    segment.parse().map_err(|_| LoadError::NotFound)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveError {
    /// Rules failed; nothing was written.
    Invalid(FieldErrors),
    Remote(BackendError),
}

/// Which write a successful save performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saved {
    Created,
    Updated,
}

impl Saved {
    /// Success alert for the screen owning `D`.
    #[must_use]
    pub fn alert<D: Draft>(self) -> &'static str {
        match self {
            Self::Created => D::COPY.created,
            Self::Updated => D::COPY.updated,
        }
    }
}

/// Validate `draft` and write it: update when `editing` names a row,
/// create otherwise.
///
/// # Errors
///
/// [`SaveError::Invalid`] without any remote call when a rule fails;
/// [`SaveError::Remote`] when the write fails.
pub async fn save<D: Draft>(
    backend: &dyn Backend,
    draft: &D,
    editing: Option<Uuid>,
    now: &str,
) -> Result<Saved, SaveError> {
    check(draft).map_err(SaveError::Invalid)?;
    let payload = draft.payload(now);
    match editing {
        Some(id) => {
            update_row::<D::Row>(backend, id, payload).await.map_err(SaveError::Remote)?;
            Ok(Saved::Updated)
        }
        None => {
            create::<D::Row>(backend, payload).await.map_err(SaveError::Remote)?;
            Ok(Saved::Created)
        }
    }
}
