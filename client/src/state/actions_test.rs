use super::*;
use crate::net::mock::{Call, MockBackend, fixture};
use crate::state::listing::ListState;
use futures::executor::block_on;
use records::{BookingStatus, InquiryStatus, Table};
use serde::de::DeserializeOwned;

fn row<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).expect("fixture row")
}

fn tour_list() -> ListState<TourPackage> {
    let mut list = ListState::default();
    list.replace(Ok(vec![
        row(fixture::tour(1, "Machame Route", "mountain-climbing")),
        row(fixture::tour(2, "Ngorongoro Day", "day-trips")),
    ]));
    list
}

// =============================================================
// Flags
// =============================================================

#[test]
fn toggle_twice_restores_row_with_two_writes() {
    let mock = MockBackend::new();
    let mut list = tour_list();
    let before = list.items.clone();
    let id = fixture::id(1);

    for _ in 0..2 {
        let current = list.items[0].clone();
        let value = block_on(toggle_flag(&mock, &current, &TOUR_FEATURED)).expect("toggle");
        assert!(list.patch(id, |t| (TOUR_FEATURED.set)(t, value)));
    }

    assert_eq!(list.items, before);
    assert_eq!(mock.write_count(), 2);
    assert_eq!(
        mock.calls(),
        vec![
            Call::Update(Table::TourPackages, id, json!({"featured": true})),
            Call::Update(Table::TourPackages, id, json!({"featured": false})),
        ]
    );
}

#[test]
fn admin_role_toggles_twice_with_two_profile_writes() {
    let mock = MockBackend::new();
    let mut list: ListState<Profile> = ListState::default();
    list.replace(Ok(vec![row(fixture::profile(3, "Amani Mushi"))]));
    let id = fixture::id(3);

    for expected in [true, false] {
        let current = list.items[0].clone();
        let value = block_on(toggle_flag(&mock, &current, &PROFILE_ADMIN)).expect("toggle");
        assert_eq!(value, expected);
        assert!(list.patch(id, |p| (PROFILE_ADMIN.set)(p, value)));
        assert_eq!(list.items[0].is_admin, expected);
    }

    assert_eq!(
        mock.calls(),
        vec![
            Call::Update(Table::Profiles, id, json!({"is_admin": true})),
            Call::Update(Table::Profiles, id, json!({"is_admin": false})),
        ]
    );
}

#[test]
fn failed_toggle_leaves_list_untouched() {
    let mock = MockBackend::new().failing_writes(BackendError::Request("offline".to_owned()));
    let list = tour_list();
    let err = block_on(toggle_flag(&mock, &list.items[1], &TOUR_ACTIVE)).expect_err("write fails");
    assert_eq!(
        failure_alert("update tour", &err),
        "Failed to update tour: request failed: offline"
    );
    assert!(list.items[1].active);
}

// =============================================================
// Status, publish and verify
// =============================================================

#[test]
fn set_status_writes_wire_value() {
    let mock = MockBackend::new();
    let id = fixture::id(4);
    let status = block_on(set_status::<records::Booking, _>(&mock, id, BookingStatus::Confirmed)).expect("status");
    assert_eq!(status, BookingStatus::Confirmed);
    assert_eq!(mock.calls(), vec![Call::Update(Table::Bookings, id, json!({"status": "confirmed"}))]);

    block_on(set_status::<records::ContactInquiry, _>(&mock, id, InquiryStatus::Replied)).expect("status");
    assert_eq!(mock.write_count(), 2);
}

#[test]
fn publishing_stamps_time_and_unpublishing_clears_it() {
    let mock = MockBackend::new();
    let mut post: BlogPost = row(fixture::blog(1, "Big Five", false));

    let published = block_on(set_published(&mock, &post, "2024-06-01T10:00:00Z")).expect("publish");
    assert_eq!(published.published_at.as_deref(), Some("2024-06-01T10:00:00Z"));
    published.apply(&mut post);
    assert!(post.published);

    let draft = block_on(set_published(&mock, &post, "2024-06-02T10:00:00Z")).expect("unpublish");
    assert_eq!(
        draft,
        Publication {
            published: false,
            published_at: None
        }
    );
    assert_eq!(
        mock.calls()[1],
        Call::Update(Table::BlogPosts, post.id, json!({"published": false, "published_at": null}))
    );
}

#[test]
fn set_verified_returns_written_value() {
    let mock = MockBackend::new();
    let review: Review = row(fixture::review(2, "Superb", false));
    assert_eq!(block_on(set_verified(&mock, &review, true)), Ok(true));
}

// =============================================================
// Delete
// =============================================================

#[test]
fn remove_deletes_remote_row() {
    let mock = MockBackend::new().with_rows(Table::TourPackages, vec![fixture::tour(1, "Machame", "safari")]);
    block_on(remove::<TourPackage>(&mock, fixture::id(1))).expect("delete");
    assert!(mock.rows(Table::TourPackages).is_empty());
    assert_eq!(delete_prompt("tour"), "Are you sure you want to delete this tour?");
}
