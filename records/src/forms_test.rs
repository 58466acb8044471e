use super::*;

fn valid_tour() -> TourDraft {
    TourDraft {
        title: "Lemosho Route 8 Days".to_owned(),
        description: "A quiet western approach with excellent acclimatisation and views.".to_owned(),
        short_description: "Quiet western approach.".to_owned(),
        duration: 8,
        price_usd: 2600.0,
        price_tzs: 6_700_000.0,
        min_participants: 1,
        max_participants: 10,
        images: vec!["https://img.example/lemosho.jpg".to_owned()],
        includes: vec!["Park fees".to_owned()],
        excludes: vec!["Flights".to_owned()],
        requirements: vec!["Good fitness".to_owned()],
        best_time: "January to March".to_owned(),
        ..TourDraft::default()
    }
}

fn valid_blog() -> BlogDraft {
    BlogDraft {
        title: "Ten Days on the Northern Circuit".to_owned(),
        excerpt: "What we learned driving from Arusha to the Serengeti.".to_owned(),
        content: "a".repeat(120),
        featured_image: "https://img.example/circuit.jpg".to_owned(),
        author: "Baraka".to_owned(),
        category: "Safari".to_owned(),
        tags: vec!["safari".to_owned()],
        published: false,
        published_at: None,
    }
}

// =============================================================================
// FIELD ERRORS
// =============================================================================

#[test]
fn field_errors_keep_first_message() {
    let mut errors = FieldErrors::new();
    errors.insert("title", "first");
    errors.insert("title", "second");
    assert_eq!(errors.get("title"), Some("first"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.iter().collect::<Vec<_>>(), vec![("title", "first")]);
}

#[test]
fn lines_to_entries_drops_blank_lines() {
    assert_eq!(
        lines_to_entries("  Hiking \n\n Photography\n   \n"),
        vec!["Hiking".to_owned(), "Photography".to_owned()]
    );
}

// =============================================================================
// LOGIN AND PASSWORD
// =============================================================================

#[test]
fn login_form_reports_both_fields() {
    let errors = check(&LoginForm {
        email: "not-an-email".to_owned(),
        password: "123".to_owned(),
    })
    .expect_err("invalid login");
    assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
}

#[test]
fn login_form_accepts_valid_credentials() {
    let form = LoginForm {
        email: "admin@example.com".to_owned(),
        password: "secret1".to_owned(),
    };
    assert!(check(&form).is_ok());
}

#[test]
fn reset_form_flags_mismatched_confirmation() {
    let errors = check(&ResetPasswordForm {
        password: "new-secret".to_owned(),
        confirm: "new-secrets".to_owned(),
    })
    .expect_err("mismatch");
    assert_eq!(errors.get("confirm"), Some("Passwords do not match"));
    assert_eq!(errors.get("password"), None);
}

// =============================================================================
// TOUR
// =============================================================================

#[test]
fn tour_draft_valid_passes() {
    assert!(check(&valid_tour()).is_ok());
}

#[test]
fn default_tour_draft_fails_required_fields() {
    let errors = check(&TourDraft::default()).expect_err("empty draft");
    assert_eq!(errors.get("title"), Some("Title must be at least 5 characters"));
    assert_eq!(errors.get("images"), Some("At least one image is required"));
    assert_eq!(errors.get("includes"), Some("Entries cannot be empty"));
    assert_eq!(errors.get("price_usd"), Some("Price must be greater than 0"));
}

#[test]
fn tour_draft_rejects_non_url_image() {
    let mut draft = valid_tour();
    draft.images.push("lemosho.jpg".to_owned());
    let errors = check(&draft).expect_err("bad image");
    assert_eq!(errors.get("images"), Some("Every image must be a valid URL"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn tour_payload_has_slug_and_renumbered_itinerary() {
    let mut draft = valid_tour();
    draft.itinerary = vec![DayItinerary::blank(4), DayItinerary::blank(9)];
    let payload = draft.to_payload();
    assert_eq!(payload["slug"], "lemosho-route-8-days");
    assert_eq!(payload["category"], "mountain-climbing");
    assert_eq!(payload["itinerary"][0]["day"], 1);
    assert_eq!(payload["itinerary"][1]["day"], 2);
    assert_eq!(payload["active"], true);
}

#[test]
fn tour_draft_from_record_keeps_itinerary() {
    let tour: TourPackage = serde_json::from_value(serde_json::json!({
        "id": "6f1c2b9e-3a53-4b1e-9d1a-0c6f9d3f2a11",
        "title": "Tarangire Day Trip",
        "category": "day-trips",
        "itinerary": [{"day": 1, "title": "Game drive"}]
    }))
    .expect("tour row");
    let draft = TourDraft::from(&tour);
    assert_eq!(draft.category, TourCategory::DayTrips);
    assert_eq!(draft.itinerary.len(), 1);
    assert_eq!(draft.itinerary[0].title, "Game drive");
}

// =============================================================================
// BLOG
// =============================================================================

#[test]
fn blog_draft_requires_image_url() {
    let mut draft = valid_blog();
    draft.featured_image = "circuit.jpg".to_owned();
    let errors = check(&draft).expect_err("bad image");
    assert_eq!(errors.get("featured_image"), Some("Please enter a valid image URL"));
}

#[test]
fn unpublished_blog_payload_has_null_published_at() {
    let payload = valid_blog().to_payload("2024-06-01T00:00:00Z");
    assert_eq!(payload["slug"], "ten-days-on-the-northern-circuit");
    assert!(payload["published_at"].is_null());
}

#[test]
fn publishing_blog_stamps_now_once() {
    let mut draft = valid_blog();
    draft.published = true;
    assert_eq!(draft.to_payload("2024-06-01T00:00:00Z")["published_at"], "2024-06-01T00:00:00Z");

    draft.published_at = Some("2024-01-01T00:00:00Z".to_owned());
    assert_eq!(draft.to_payload("2024-06-01T00:00:00Z")["published_at"], "2024-01-01T00:00:00Z");
}

// =============================================================================
// TRAVEL INFO
// =============================================================================

#[test]
fn travel_info_requires_complete_quick_facts() {
    let draft = TravelInfoDraft {
        title: "Visa on Arrival".to_owned(),
        excerpt: "How to get your Tanzanian visa at the airport.".to_owned(),
        content: "b".repeat(100),
        featured_image: "https://img.example/visa.jpg".to_owned(),
        tags: vec!["visa".to_owned()],
        quick_facts: vec![QuickFact {
            label: "Cost".to_owned(),
            value: String::new(),
            icon: None,
        }],
        ..TravelInfoDraft::default()
    };
    let errors = check(&draft).expect_err("incomplete fact");
    assert_eq!(errors.get("quick_facts"), Some("Every quick fact needs a label and a value"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn travel_info_payload_drops_blank_checklist_entries() {
    let draft = TravelInfoDraft {
        title: "What to Pack".to_owned(),
        checklist_items: vec!["Headlamp".to_owned(), "  ".to_owned(), String::new(), "Gaiters".to_owned()],
        ..TravelInfoDraft::default()
    };
    let payload = draft.to_payload();
    assert_eq!(payload["checklist_items"], serde_json::json!(["Headlamp", "Gaiters"]));
    assert_eq!(payload["slug"], "what-to-pack");
    assert_eq!(payload["category"], "tips");
}

// =============================================================================
// DESTINATION
// =============================================================================

#[test]
fn destination_allows_empty_image_but_checks_coordinates() {
    let mut draft = DestinationDraft {
        name: "Mafia Island".to_owned(),
        description: "Marine park with whale sharks and quiet beaches.".to_owned(),
        ..DestinationDraft::default()
    };
    assert!(check(&draft).is_ok());

    draft.location.latitude = 120.0;
    let errors = check(&draft).expect_err("bad latitude");
    assert_eq!(errors.get("location"), Some("Latitude must be between -90 and 90"));
}

#[test]
fn destination_payload_derives_missing_slug() {
    let draft = DestinationDraft {
        name: "Lake Manyara".to_owned(),
        ..DestinationDraft::default()
    };
    let payload = draft.to_payload();
    assert_eq!(payload["slug"], "lake-manyara");
    assert_eq!(payload["category"], "mountain");
    assert_eq!(payload["location"]["latitude"], 0.0);
}
