//! Shared row records for the safari booking site.
//!
//! This crate owns the typed shape of every collection the site reads from
//! the hosted backend. Rows are decoded into these types at the API boundary
//! so the UI never handles loosely-typed JSON. Form drafts and their
//! declarative validation schemas live in [`forms`].

use serde::{Deserialize, Deserializer};
use uuid::Uuid;


/// Declares a string-backed enum whose wire names double as filter values.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($wire:literal, $label:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every variant in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire value as stored by the backend.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Human-readable label.
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(crate::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

pub mod blog;
pub mod booking;
pub mod destination;
pub mod forms;
pub mod inquiry;
pub mod profile;
pub mod review;
pub mod slug;
pub mod tour;
pub mod travel_info;

pub use blog::{BLOG_CATEGORIES, BlogPost};
pub use booking::{Booking, BookingStatus, CustomerSummary, Payment, PaymentStatus, TourSummary};
pub use destination::{Destination, DestinationCategory, Location};
pub use forms::{FieldErrors, check};
pub use inquiry::{ContactInquiry, InquiryStatus};
pub use profile::Profile;
pub use review::Review;
pub use slug::slugify;
pub use tour::{DayItinerary, Difficulty, TourCategory, TourPackage};
pub use travel_info::{QuickFact, TravelInfo, TravelInfoCategory};

/// Error returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Remote collections exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    TourPackages,
    BlogPosts,
    Destinations,
    TravelInfo,
    Bookings,
    Reviews,
    ContactInquiries,
    Profiles,
    Payments,
}

impl Table {
    /// Remote table name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TourPackages => "tour_packages",
            Self::BlogPosts => "blog_posts",
            Self::Destinations => "destinations",
            Self::TravelInfo => "travel_info",
            Self::Bookings => "bookings",
            Self::Reviews => "reviews",
            Self::ContactInquiries => "contact_inquiries",
            Self::Profiles => "profiles",
            Self::Payments => "payments",
        }
    }
}

/// A row type stored in one remote table.
pub trait Record: serde::de::DeserializeOwned + Clone + 'static {
    /// Table holding rows of this type.
    const TABLE: Table;

    /// Column list passed to the remote `select`, including embedded relations.
    const SELECT: &'static str = "*";

    /// Primary key.
    fn id(&self) -> Uuid;
}

/// Deserialize `null` as the type's default value.
///
/// The backend returns `null` for unset array and text columns; the UI
/// treats those the same as empty.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
