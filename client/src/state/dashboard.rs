//! Admin dashboard aggregation.
//!
//! DESIGN
//! ======
//! Six collections are fetched concurrently and each outcome is kept
//! separately. A failed source contributes zero to every stat and one
//! warning line; the dashboard only gives up when every source failed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use records::{Booking, BookingStatus, ContactInquiry, InquiryStatus, Payment, PaymentStatus, Profile, Review, TourPackage};

use crate::net::{Backend, BackendError, fetch_all};
use crate::util::format;

/// Message shown instead of the dashboard when nothing loaded.
pub const FATAL_MESSAGE: &str = "Unable to load dashboard data. Please check your connection and try again.";

/// Heading above the per-source warning list.
pub const WARNING_HEADING: &str = "Some dashboard data couldn't be loaded:";

/// Collections feeding the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardSource {
    Tours,
    Users,
    Bookings,
    Reviews,
    Inquiries,
    Payments,
}

impl DashboardSource {
    pub const ALL: [Self; 6] = [
        Self::Tours,
        Self::Users,
        Self::Bookings,
        Self::Reviews,
        Self::Inquiries,
        Self::Payments,
    ];

    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Tours => "tours",
            Self::Users => "users",
            Self::Bookings => "bookings",
            Self::Reviews => "reviews",
            Self::Inquiries => "inquiries",
            Self::Payments => "payments",
        }
    }

    /// Warning line for a failed source.
    #[must_use]
    pub fn failure_message(self) -> String {
        format!("Failed to load {}", self.noun())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_tours: usize,
    pub total_users: usize,
    pub total_bookings: usize,
    pub total_reviews: usize,
    pub total_inquiries: usize,
    pub pending_bookings: usize,
    pub pending_reviews: usize,
    pub new_inquiries: usize,
    pub total_revenue: f64,
}

/// Raw per-source outcomes.
pub struct Sources {
    pub tours: Result<Vec<TourPackage>, BackendError>,
    pub users: Result<Vec<Profile>, BackendError>,
    pub bookings: Result<Vec<Booking>, BackendError>,
    pub reviews: Result<Vec<Review>, BackendError>,
    pub inquiries: Result<Vec<ContactInquiry>, BackendError>,
    pub payments: Result<Vec<Payment>, BackendError>,
}

/// A source that failed and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFailure {
    pub source: DashboardSource,
    pub error: BackendError,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardReport {
    pub stats: DashboardStats,
    pub failures: Vec<SourceFailure>,
}

impl DashboardReport {
    /// Fold source outcomes into stats plus one failure per failed source.
    #[must_use]
    pub fn from_sources(sources: Sources) -> Self {
        let mut failures = Vec::new();

        let tours = keep(&mut failures, DashboardSource::Tours, sources.tours.map(|r| r.len()));
        let users = keep(&mut failures, DashboardSource::Users, sources.users.map(|r| r.len()));
        let bookings = keep(
            &mut failures,
            DashboardSource::Bookings,
            sources
                .bookings
                .map(|r| (r.len(), r.iter().filter(|b| b.status == BookingStatus::Pending).count())),
        );
        let reviews = keep(
            &mut failures,
            DashboardSource::Reviews,
            sources.reviews.map(|r| (r.len(), r.iter().filter(|v| !v.verified).count())),
        );
        let inquiries = keep(
            &mut failures,
            DashboardSource::Inquiries,
            sources
                .inquiries
                .map(|r| (r.len(), r.iter().filter(|i| i.status == InquiryStatus::New).count())),
        );
        let revenue = keep(
            &mut failures,
            DashboardSource::Payments,
            sources.payments.map(|r| {
                r.iter()
                    .filter(|p| p.status == PaymentStatus::Completed)
                    .map(|p| p.amount)
                    .sum::<f64>()
            }),
        );

        let (total_bookings, pending_bookings) = bookings.unwrap_or_default();
        let (total_reviews, pending_reviews) = reviews.unwrap_or_default();
        let (total_inquiries, new_inquiries) = inquiries.unwrap_or_default();
        let stats = DashboardStats {
            total_tours: tours.unwrap_or_default(),
            total_users: users.unwrap_or_default(),
            total_bookings,
            total_reviews,
            total_inquiries,
            pending_bookings,
            pending_reviews,
            new_inquiries,
            total_revenue: revenue.unwrap_or_default(),
        };
        Self { stats, failures }
    }

    /// True only when every source failed.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.failures.len() == DashboardSource::ALL.len()
    }

    /// One warning line per failed source, in source order.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.source.failure_message()).collect()
    }
}

fn keep<T>(failures: &mut Vec<SourceFailure>, source: DashboardSource, result: Result<T, BackendError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            failures.push(SourceFailure { source, error });
            None
        }
    }
}

/// Fetch all six sources concurrently and aggregate them.
pub async fn load(backend: &dyn Backend) -> DashboardReport {
    let (tours, users, bookings, reviews, inquiries, payments) = futures::join!(
        fetch_all::<TourPackage>(backend),
        fetch_all::<Profile>(backend),
        fetch_all::<Booking>(backend),
        fetch_all::<Review>(backend),
        fetch_all::<ContactInquiry>(backend),
        fetch_all::<Payment>(backend),
    );
    let report = DashboardReport::from_sources(Sources {
        tours,
        users,
        bookings,
        reviews,
        inquiries,
        payments,
    });
    if !report.failures.is_empty() {
        leptos::logging::warn!("dashboard: {} of 6 sources failed: {:?}", report.failures.len(), report.warnings());
    }
    report
}

/// A linked stat tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub name: &'static str,
    pub value: String,
    pub href: &'static str,
}

fn card(name: &'static str, value: impl ToString, href: &'static str) -> StatCard {
    StatCard {
        name,
        value: value.to_string(),
        href,
    }
}

impl DashboardStats {
    /// Headline totals.
    #[must_use]
    pub fn totals(&self) -> Vec<StatCard> {
        vec![
            card("Total Tours", self.total_tours, "/admin/tours"),
            card("Total Users", self.total_users, "/admin/users"),
            card("Total Bookings", self.total_bookings, "/admin/bookings"),
            card("Total Reviews", self.total_reviews, "/admin/reviews"),
            card("Total Revenue", format::usd(self.total_revenue), "/admin/bookings"),
            card("Total Inquiries", self.total_inquiries, "/admin/inquiries"),
        ]
    }

    /// Items waiting on an admin.
    #[must_use]
    pub fn attention(&self) -> Vec<StatCard> {
        vec![
            card("Pending Bookings", self.pending_bookings, "/admin/bookings"),
            card("Pending Reviews", self.pending_reviews, "/admin/reviews"),
            card("New Inquiries", self.new_inquiries, "/admin/inquiries"),
        ]
    }
}

/// Shortcut links under the stats.
pub const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("Add New Tour", "/admin/tours/new"),
    ("Write Blog Post", "/admin/blog/new"),
    ("Add Destination", "/admin/destinations/new"),
    ("Add Travel Info", "/admin/travel-info/new"),
];
