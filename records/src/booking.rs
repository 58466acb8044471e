//! Bookings and the payments recorded against them.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{Record, Table};

wire_enum! {
    /// Booking lifecycle status.
    pub enum BookingStatus {
        Pending => ("pending", "Pending"),
        Confirmed => ("confirmed", "Confirmed"),
        Cancelled => ("cancelled", "Cancelled"),
        Completed => ("completed", "Completed"),
    }
}

wire_enum! {
    /// Payment settlement status.
    pub enum PaymentStatus {
        Pending => ("pending", "Pending"),
        Completed => ("completed", "Completed"),
        Failed => ("failed", "Failed"),
        Refunded => ("refunded", "Refunded"),
    }
}

/// Embedded `profiles` relation on booking and review rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Embedded `tour_packages` relation on booking and review rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourSummary {
    #[serde(default, deserialize_with = "crate::nullable")]
    pub title: String,
}

/// Columns plus the customer and tour relations shown in admin tables.
pub(crate) const WITH_CUSTOMER_AND_TOUR: &str = "*,profiles(full_name,email),tour_packages(title)";

/// A booking. Mirrors the `bookings` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub tour_package_id: Option<Uuid>,
    #[serde(default)]
    pub profiles: Option<CustomerSummary>,
    #[serde(default)]
    pub tour_packages: Option<TourSummary>,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub email: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub participants: u32,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_amount: f64,
    #[serde(default = "default_currency", deserialize_with = "currency_or_usd")]
    pub currency: String,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Booking {
    /// Customer name from the embedded profile, empty when absent.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        self.profiles
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .unwrap_or_default()
    }

    /// Tour title from the embedded relation, empty when absent.
    #[must_use]
    pub fn tour_title(&self) -> &str {
        self.tour_packages.as_ref().map_or("", |t| t.title.as_str())
    }
}

impl Record for Booking {
    const TABLE: Table = Table::Bookings;
    const SELECT: &'static str = WITH_CUSTOMER_AND_TOUR;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// A payment. Mirrors the `payments` table; only the dashboard reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    #[serde(default)]
    pub booking_id: Option<Uuid>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default = "default_currency", deserialize_with = "currency_or_usd")]
    pub currency: String,
    pub status: PaymentStatus,
}

impl Record for Payment {
    const TABLE: Table = Table::Payments;

    fn id(&self) -> Uuid {
        self.id
    }
}

fn default_currency() -> String {
    "USD".to_owned()
}

fn currency_or_usd<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_currency))
}

/// Numeric columns come back as JSON numbers or, for `numeric`, as strings.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Option::<Amount>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Amount::Number(n)) => Ok(n),
        Some(Amount::Text(s)) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
