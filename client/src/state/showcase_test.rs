use super::*;
use crate::net::mock::fixture;

fn tours(specs: &[(&str, &str)]) -> Vec<TourPackage> {
    specs
        .iter()
        .zip(1..)
        .map(|((title, category), n)| serde_json::from_value(fixture::tour(n, title, category)).expect("tour"))
        .collect()
}

fn ten_tours() -> Vec<TourPackage> {
    let titles: Vec<String> = (1..=10).map(|i| format!("Tour {i}")).collect();
    let specs: Vec<(&str, &str)> = titles.iter().map(|t| (t.as_str(), "safari")).collect();
    tours(&specs)
}

// =============================================================
// Popular locations
// =============================================================

#[test]
fn popular_locations_takes_first_four() {
    let destinations: Vec<Destination> = (1..=6)
        .map(|i| serde_json::from_value(fixture::destination(i, &format!("Place {i}"), "park")).expect("dest"))
        .collect();
    let cards = popular_locations(&Ok(destinations));
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0].category, "National Parks");
    assert_eq!(cards[3].href(), "/destinations/place-4");
}

#[test]
fn popular_locations_falls_back_to_static_set() {
    let cards = popular_locations(&Err(BackendError::Unavailable));
    let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Singapore", "Australia", "Thailand", "Japan"]);
    assert!(cards[0].image.contains("/2398220/"));
}

// =============================================================
// Testimonials
// =============================================================

fn review(n: u32, verified: bool, content: &str, reviewer: Option<&str>) -> Review {
    let mut row = fixture::review(n, &format!("Review {n}"), verified);
    row["content"] = serde_json::json!(content);
    row["rating"] = serde_json::json!(4);
    if let Some(name) = reviewer {
        row["profiles"] = serde_json::json!({ "full_name": name });
    }
    row["tour_packages"] = serde_json::json!({ "title": "Serengeti Migration" });
    serde_json::from_value(row).expect("review")
}

#[test]
fn testimonials_take_first_three_verified_reviews() {
    let reviews = vec![
        review(1, false, "Not yet checked.", Some("Ann")),
        review(2, true, "Loved every day.", Some("Ben")),
        review(3, true, "   ", Some("Cat")),
        review(4, true, "Great food.", None),
        review(5, true, "Superb guides.", Some("Dan")),
        review(6, true, "One too many.", Some("Eve")),
    ];
    let quotes = testimonials(&Ok(reviews));
    let authors: Vec<_> = quotes.iter().map(|q| q.author.as_str()).collect();
    assert_eq!(authors, ["Ben", "Happy Traveler", "Dan"]);
    assert_eq!(quotes[0].rating, 4);
    assert_eq!(quotes[0].tour, "Serengeti Migration");
}

#[test]
fn testimonials_fall_back_when_nothing_qualifies() {
    let quotes = testimonials(&Ok(vec![review(1, false, "Pending.", Some("Ann"))]));
    assert_eq!(quotes.len(), TESTIMONIALS_LIMIT);
    assert_eq!(quotes[0].author, "Sarah M.");
    assert_eq!(testimonials(&Err(BackendError::Unavailable)), quotes);
}

#[test]
fn trust_strip_and_headline_stats_have_four_entries() {
    assert_eq!(TRUST_BADGES.map(|b| b.title), ["Verified Tours", "Award Winning", "Secure Booking", "Expert Guides"]);
    assert_eq!(HEADLINE_STATS[0], HeadlineStat { value: "2,500+", label: "Happy Customers" });
}

// =============================================================
// Deals and trips
// =============================================================

#[test]
fn deals_mark_up_price_and_label_location() {
    let mut list = tours(&[("Machame", "mountain-climbing"), ("Tarangire", "safari"), ("Materuni", "day-trips")]);
    list[2].price_usd = 0.0;
    let cards = deals(&Ok(list));
    assert_eq!(cards.len(), 3);
    assert!((cards[0].original_price - 1560.0).abs() < f64::EPSILON);
    assert!((cards[2].original_price - 2600.0).abs() < f64::EPSILON);
    let locations: Vec<_> = cards.iter().map(|c| c.location).collect();
    assert_eq!(locations, ["Mount Kilimanjaro", "Serengeti", "Local"]);
    assert!(cards.iter().all(|c| c.discount == 25));
}

#[test]
fn deals_hide_on_failure() {
    assert!(deals(&Err(BackendError::Unauthorized)).is_empty());
}

#[test]
fn special_trips_size_and_subtitle() {
    let cards = special_trips(&Ok(ten_tours()));
    assert_eq!(cards.len(), 6);
    let sizes: Vec<_> = cards.iter().map(|c| c.size).collect();
    assert_eq!(
        sizes,
        [
            CardSize::Large,
            CardSize::Medium,
            CardSize::Small,
            CardSize::Small,
            CardSize::Small,
            CardSize::Small
        ]
    );
    assert_eq!(cards[0].subtitle, "Wildlife Safari");
}

// =============================================================
// Gallery
// =============================================================

#[test]
fn gallery_takes_two_per_tour_capped_at_nine() {
    let images = gallery(&Ok(ten_tours()));
    assert_eq!(images.len(), 9);
    assert_eq!(images[0].src, "https://img.example/1-a.jpg");
    assert_eq!(images[1].src, "https://img.example/1-b.jpg");
    assert_eq!(images[8].alt, "Tour 5");
    assert!(GalleryImage::is_large(5));
}

#[test]
fn gallery_fallback_has_nine_images() {
    let images = gallery(&Err(BackendError::Unavailable));
    assert_eq!(images.len(), 9);
    assert_eq!(images[8].alt, "Adventure");
}

// =============================================================
// Hero search
// =============================================================

#[test]
fn destination_options_are_distinct_in_first_seen_order() {
    let list = tours(&[("A", "safari"), ("B", "day-trips"), ("C", "safari")]);
    let options = destination_options(&Ok(list));
    let labels: Vec<_> = options.iter().map(|o| o.label).collect();
    assert_eq!(labels, ["Safari Parks", "Day Trips"]);
    assert_eq!(destination_options(&Err(BackendError::Unavailable)).len(), 3);
}

#[test]
fn search_href_with_destination() {
    let search = TripSearch {
        destination: Some(TourCategory::Safari),
        check_in: "2024-07-01".to_owned(),
        check_out: String::new(),
        guests: "2".to_owned(),
    };
    assert_eq!(search.href(), "/tours/safari?category=safari&from=2024-07-01&guests=2");
}

#[test]
fn search_href_without_destination() {
    assert_eq!(TripSearch::default().href(), "/tours?guests=1");
    let empty = TripSearch {
        guests: String::new(),
        ..TripSearch::default()
    };
    assert_eq!(empty.href(), "/tours");
}
