//! Per-screen search and filter predicates.
//!
//! Each screen searches a small fixed set of text fields and narrows by
//! equality on its enum columns. `None` in a filter slot means "all".

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use std::str::FromStr;

use records::{
    BlogPost, Booking, BookingStatus, ContactInquiry, Destination, Difficulty, InquiryStatus, Profile, Review,
    TourCategory, TourPackage, TravelInfo, TravelInfoCategory,
};

use super::listing::{RowFilter, matches_search};

/// Sentinel used by `<select>` elements and route segments for "no filter".
pub const ALL: &str = "all";

/// Parse a `<select>` value; blank, `all` and unknown values mean no filter.
#[must_use]
pub fn choice<E: FromStr>(value: &str) -> Option<E> {
    let value = value.trim();
    if value.is_empty() || value == ALL {
        None
    } else {
        value.parse().ok()
    }
}

/// Inverse of [`choice`] for binding the `<select>` value back.
pub fn choice_value<E: ToString>(selected: Option<&E>) -> String {
    selected.map_or_else(|| ALL.to_owned(), ToString::to_string)
}

fn slot<T: PartialEq>(selected: Option<&T>, actual: &T) -> bool {
    selected.is_none_or(|want| want == actual)
}

/// Admin tour table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TourFilter {
    pub search: String,
    pub category: Option<TourCategory>,
    pub difficulty: Option<Difficulty>,
    pub featured_only: bool,
}

impl RowFilter<TourPackage> for TourFilter {
    fn matches(&self, row: &TourPackage) -> bool {
        matches_search(&self.search, &[&row.title, &row.description])
            && slot(self.category.as_ref(), &row.category)
            && slot(self.difficulty.as_ref(), &row.difficulty)
            && (!self.featured_only || row.featured)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Admin blog table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogFilter {
    pub search: String,
    pub category: Option<String>,
    pub published_only: bool,
}

impl RowFilter<BlogPost> for BlogFilter {
    fn matches(&self, row: &BlogPost) -> bool {
        matches_search(&self.search, &[&row.title, &row.excerpt, &row.author])
            && slot(self.category.as_ref(), &row.category)
            && (!self.published_only || row.published)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Admin and public destination lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DestinationFilter {
    pub search: String,
    pub category: Option<String>,
}

impl RowFilter<Destination> for DestinationFilter {
    fn matches(&self, row: &Destination) -> bool {
        matches_search(&self.search, &[&row.name, &row.description, &row.category])
            && slot(self.category.as_ref(), &row.category)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Admin and public travel-info lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TravelInfoFilter {
    pub search: String,
    pub category: Option<TravelInfoCategory>,
    pub featured_only: bool,
}

impl RowFilter<TravelInfo> for TravelInfoFilter {
    fn matches(&self, row: &TravelInfo) -> bool {
        matches_search(&self.search, &[&row.title, &row.excerpt])
            && slot(self.category.as_ref(), &row.category)
            && (!self.featured_only || row.featured)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Admin bookings table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingFilter {
    pub search: String,
    pub status: Option<BookingStatus>,
}

impl RowFilter<Booking> for BookingFilter {
    fn matches(&self, row: &Booking) -> bool {
        matches_search(&self.search, &[row.customer_name(), row.tour_title(), &row.email])
            && slot(self.status.as_ref(), &row.status)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Admin reviews table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub search: String,
    pub unverified_only: bool,
}

impl RowFilter<Review> for ReviewFilter {
    fn matches(&self, row: &Review) -> bool {
        matches_search(
            &self.search,
            &[&row.title, &row.content, row.reviewer_name(), row.tour_title()],
        ) && (!self.unverified_only || !row.verified)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Admin inquiries table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryFilter {
    pub search: String,
    pub status: Option<InquiryStatus>,
}

impl RowFilter<ContactInquiry> for InquiryFilter {
    fn matches(&self, row: &ContactInquiry) -> bool {
        let phone = row.phone.as_deref().unwrap_or_default();
        matches_search(&self.search, &[&row.name, &row.email, phone, &row.subject])
            && slot(self.status.as_ref(), &row.status)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Admin users table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
}

impl RowFilter<Profile> for UserFilter {
    fn matches(&self, row: &Profile) -> bool {
        let phone = row.phone.as_deref().unwrap_or_default();
        matches_search(&self.search, &[&row.full_name, &row.email, phone])
    }

    fn clear(&mut self) {
        self.search.clear();
    }
}

/// Public tour listing: route category plus free-text search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicTourFilter {
    pub category: Option<TourCategory>,
    pub search: String,
}

impl PublicTourFilter {
    /// Filter for a `/tours/:category` segment; unknown or `all` shows everything.
    #[must_use]
    pub fn for_segment(segment: Option<&str>) -> Self {
        Self {
            category: segment.and_then(choice),
            search: String::new(),
        }
    }
}

impl RowFilter<TourPackage> for PublicTourFilter {
    fn matches(&self, row: &TourPackage) -> bool {
        slot(self.category.as_ref(), &row.category) && matches_search(&self.search, &[&row.title, &row.description])
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}
