use super::*;
use crate::net::mock::{Call, MockBackend, fixture};
use futures::executor::block_on;
use records::{QuickFact, Table};

const NOW: &str = "2024-06-01T09:00:00.000Z";

fn destination_draft() -> DestinationDraft {
    DestinationDraft {
        name: "Lake Natron".to_owned(),
        description: "Soda lake, flamingos and the Ol Doinyo Lengai volcano.".to_owned(),
        ..DestinationDraft::default()
    }
}

// =============================================================
// Repeated entries
// =============================================================

#[test]
fn entries_add_update_remove() {
    let mut list = vec![String::new()];
    update_entry(&mut list, 0, "Park fees".to_owned());
    add_entry(&mut list);
    update_entry(&mut list, 1, "Meals".to_owned());
    update_entry(&mut list, 7, "ignored".to_owned());
    assert_eq!(list, ["Park fees", "Meals"]);
    remove_entry(&mut list, 0);
    assert_eq!(list, ["Meals"]);
}

#[test]
fn last_entry_is_never_removed() {
    let mut facts = vec![QuickFact::default()];
    remove_entry(&mut facts, 0);
    assert_eq!(facts.len(), 1);
}

// =============================================================
// Itinerary
// =============================================================

#[test]
fn added_days_are_numbered_after_last() {
    let mut days = Vec::new();
    add_day(&mut days);
    add_day(&mut days);
    assert_eq!(days.iter().map(|d| d.day).collect::<Vec<_>>(), [1, 2]);
    assert_eq!(days[1].activities, [""]);
}

#[test]
fn removing_a_day_renumbers() {
    let mut days = Vec::new();
    for _ in 0..4 {
        add_day(&mut days);
    }
    update_day(&mut days, 2, |d| d.title = "Crater rim".to_owned());
    remove_day(&mut days, 1);
    assert_eq!(days.iter().map(|d| d.day).collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(days[1].title, "Crater rim");
}

// =============================================================
// Load for edit
// =============================================================

#[test]
fn load_for_edit_finds_row_by_id() {
    let mock = MockBackend::new().with_rows(
        Table::TourPackages,
        vec![fixture::tour(1, "Machame", "mountain-climbing"), fixture::tour(2, "Tarangire", "safari")],
    );
    let draft: TourDraft = block_on(load_for_edit(&mock, fixture::id(2))).expect("draft");
    assert_eq!(draft.title, "Tarangire");
    assert_eq!(draft.category, records::TourCategory::Safari);
}

#[test]
fn missing_row_alerts_not_found() {
    let mock = MockBackend::new().with_rows(Table::BlogPosts, vec![fixture::blog(1, "Big Five", true)]);
    let err = block_on(load_for_edit::<BlogDraft>(&mock, fixture::id(9))).expect_err("missing");
    assert_eq!(err, LoadError::NotFound);
    assert_eq!(err.alert::<BlogDraft>(), "Blog post not found");
    assert_eq!(BlogDraft::COPY.list_route, "/admin/blog");
}

#[test]
fn fetch_failure_alerts_fetch_message() {
    let mock = MockBackend::new().failing(Table::TravelInfo, BackendError::Unauthorized);
    let err = block_on(load_for_edit::<TravelInfoDraft>(&mock, fixture::id(1))).expect_err("fetch");
    assert_eq!(err.alert::<TravelInfoDraft>(), "Failed to fetch travel information data");
}

#[test]
fn malformed_route_id_is_not_found() {
    assert_eq!(parse_id("abc"), Err(LoadError::NotFound));
    assert_eq!(parse_id(&fixture::id(3).to_string()), Ok(fixture::id(3)));
}

// =============================================================
// Save
// =============================================================

#[test]
fn invalid_draft_never_writes() {
    let mock = MockBackend::new();
    let err = block_on(save(&mock, &TourDraft::default(), None, NOW)).expect_err("invalid");
    let SaveError::Invalid(errors) = err else {
        panic!("expected field errors");
    };
    assert_eq!(errors.get("title"), Some("Title must be at least 5 characters"));
    assert_eq!(mock.write_count(), 0);
}

#[test]
fn new_draft_is_created_with_slug() {
    let mock = MockBackend::new();
    let saved = block_on(save(&mock, &destination_draft(), None, NOW)).expect("create");
    assert_eq!(saved, Saved::Created);
    assert_eq!(saved.alert::<DestinationDraft>(), "Destination created successfully");
    let rows = mock.rows(Table::Destinations);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["slug"], "lake-natron");
}

#[test]
fn editing_draft_updates_row() {
    let mock = MockBackend::new().with_rows(Table::Destinations, vec![fixture::destination(5, "Natron", "park")]);
    let saved = block_on(save(&mock, &destination_draft(), Some(fixture::id(5)), NOW)).expect("update");
    assert_eq!(saved.alert::<DestinationDraft>(), "Destination updated successfully");
    assert!(matches!(mock.calls().as_slice(), [Call::Update(Table::Destinations, id, _)] if *id == fixture::id(5)));
    assert_eq!(mock.rows(Table::Destinations)[0]["name"], "Lake Natron");
}

#[test]
fn failed_write_surfaces_remote_error() {
    let mock = MockBackend::new().failing_writes(BackendError::Request("offline".to_owned()));
    let err = block_on(save(&mock, &destination_draft(), None, NOW)).expect_err("write fails");
    assert_eq!(err, SaveError::Remote(BackendError::Request("offline".to_owned())));
    assert_eq!(DestinationDraft::COPY.save_failed, "Failed to save destination. Please try again.");
}

#[test]
fn blog_save_passes_clock_through() {
    let mock = MockBackend::new();
    let draft = BlogDraft {
        title: "Ten Days on the Northern Circuit".to_owned(),
        excerpt: "What we learned driving from Arusha to the Serengeti.".to_owned(),
        content: "a".repeat(120),
        featured_image: "https://img.example/circuit.jpg".to_owned(),
        author: "Baraka".to_owned(),
        category: "Safari".to_owned(),
        tags: vec!["safari".to_owned()],
        published: true,
        published_at: None,
    };
    block_on(save(&mock, &draft, None, NOW)).expect("create");
    assert_eq!(mock.rows(Table::BlogPosts)[0]["published_at"], NOW);
}
