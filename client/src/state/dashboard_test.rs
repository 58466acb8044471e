use super::*;
use crate::net::mock::{MockBackend, fixture};
use futures::executor::block_on;
use records::Table;

const TABLES: [Table; 6] = [
    Table::TourPackages,
    Table::Profiles,
    Table::Bookings,
    Table::Reviews,
    Table::ContactInquiries,
    Table::Payments,
];

fn seeded() -> MockBackend {
    MockBackend::new()
        .with_rows(
            Table::TourPackages,
            vec![fixture::tour(1, "Machame", "mountain-climbing"), fixture::tour(2, "Tarangire", "safari")],
        )
        .with_rows(Table::Profiles, vec![fixture::profile(1, "Asha")])
        .with_rows(
            Table::Bookings,
            vec![
                fixture::booking(1, "Asha", "pending"),
                fixture::booking(2, "Omari", "confirmed"),
                fixture::booking(3, "Lea", "pending"),
            ],
        )
        .with_rows(
            Table::Reviews,
            vec![fixture::review(1, "Great", true), fixture::review(2, "Okay", false)],
        )
        .with_rows(
            Table::ContactInquiries,
            vec![fixture::inquiry(1, "Kim", "new"), fixture::inquiry(2, "Ben", "closed")],
        )
        .with_rows(
            Table::Payments,
            vec![
                fixture::payment(1, 1500.0, "completed"),
                fixture::payment(2, 900.0, "pending"),
                fixture::payment(3, 250.5, "completed"),
            ],
        )
}

// =============================================================
// Aggregation
// =============================================================

#[test]
fn load_computes_stats_from_every_source() {
    let report = block_on(load(&seeded()));
    assert!(report.failures.is_empty());
    assert_eq!(
        report.stats,
        DashboardStats {
            total_tours: 2,
            total_users: 1,
            total_bookings: 3,
            total_reviews: 2,
            total_inquiries: 2,
            pending_bookings: 2,
            pending_reviews: 1,
            new_inquiries: 1,
            total_revenue: 1750.5,
        }
    );
}

#[test]
fn k_failed_sources_give_k_warnings() {
    for k in 0..=TABLES.len() {
        let mock = TABLES[..k]
            .iter()
            .fold(seeded(), |mock, table| mock.failing(*table, BackendError::Unauthorized));
        let report = block_on(load(&mock));
        assert_eq!(report.warnings().len(), k, "k = {k}");
        assert_eq!(report.is_fatal(), k == TABLES.len(), "k = {k}");
    }
}

#[test]
fn failed_source_counts_as_zero_and_names_itself() {
    let mock = seeded().failing(Table::Payments, BackendError::Request("timeout".to_owned()));
    let report = block_on(load(&mock));
    assert_eq!(report.warnings(), vec!["Failed to load payments".to_owned()]);
    assert!(report.stats.total_revenue.abs() < f64::EPSILON);
    assert_eq!(report.stats.total_bookings, 3);
}

// =============================================================
// Cards
// =============================================================

#[test]
fn totals_format_revenue_and_link_to_screens() {
    let stats = DashboardStats {
        total_revenue: 12_500.0,
        ..DashboardStats::default()
    };
    let revenue = stats
        .totals()
        .into_iter()
        .find(|c| c.name == "Total Revenue")
        .expect("revenue card");
    assert_eq!(revenue.value, "$12,500");
    assert_eq!(revenue.href, "/admin/bookings");
    assert_eq!(stats.attention().len(), 3);
}
