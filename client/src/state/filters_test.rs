use super::*;
use crate::net::mock::fixture;
use serde::de::DeserializeOwned;

fn row<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).expect("fixture row")
}

// =============================================================
// choice
// =============================================================

#[test]
fn choice_treats_blank_and_all_as_no_filter() {
    assert_eq!(choice::<TourCategory>(""), None);
    assert_eq!(choice::<TourCategory>("all"), None);
    assert_eq!(choice::<TourCategory>("hiking"), None);
    assert_eq!(choice::<TourCategory>("safari"), Some(TourCategory::Safari));
}

#[test]
fn choice_value_round_trips_selection() {
    assert_eq!(choice_value::<BookingStatus>(None), "all");
    assert_eq!(choice_value(Some(&BookingStatus::Confirmed)), "confirmed");
}

// =============================================================
// Screen filters
// =============================================================

#[test]
fn tour_filter_combines_search_and_featured() {
    let mut tour: TourPackage = row(fixture::tour(1, "Lemosho Route", "mountain-climbing"));
    let mut filter = TourFilter {
        search: "lemosho".to_owned(),
        featured_only: true,
        ..TourFilter::default()
    };
    assert!(!filter.matches(&tour));
    tour.featured = true;
    assert!(filter.matches(&tour));
    filter.difficulty = Some(Difficulty::Extreme);
    assert!(!filter.matches(&tour));
    filter.clear();
    assert_eq!(filter, TourFilter::default());
}

#[test]
fn booking_filter_searches_embedded_customer_name() {
    let booking: Booking = row(fixture::booking(1, "Amina Juma", "pending"));
    let mut filter = BookingFilter {
        search: "amina".to_owned(),
        status: Some(BookingStatus::Pending),
    };
    assert!(filter.matches(&booking));
    filter.status = Some(BookingStatus::Confirmed);
    assert!(!filter.matches(&booking));
}

#[test]
fn review_filter_hides_verified_when_asked() {
    let verified: Review = row(fixture::review(1, "Unforgettable", true));
    let pending: Review = row(fixture::review(2, "Dusty roads", false));
    let filter = ReviewFilter {
        unverified_only: true,
        ..ReviewFilter::default()
    };
    assert!(!filter.matches(&verified));
    assert!(filter.matches(&pending));
}

#[test]
fn inquiry_filter_matches_status() {
    let inquiry: ContactInquiry = row(fixture::inquiry(1, "Jonas", "new"));
    let filter = InquiryFilter {
        status: Some(InquiryStatus::Closed),
        ..InquiryFilter::default()
    };
    assert!(!filter.matches(&inquiry));
    assert!(InquiryFilter::default().matches(&inquiry));
}

#[test]
fn user_filter_searches_email() {
    let user: Profile = row(fixture::profile(3, "Neema"));
    let filter = UserFilter {
        search: "user3@".to_owned(),
    };
    assert!(filter.matches(&user));
}

#[test]
fn blog_and_destination_filters_compare_text_categories() {
    let post: BlogPost = row(fixture::blog(1, "Packing light", true));
    let blog = BlogFilter {
        category: Some("Culture".to_owned()),
        ..BlogFilter::default()
    };
    assert!(!blog.matches(&post));

    let place: Destination = row(fixture::destination(1, "Ngorongoro", "park"));
    let dest = DestinationFilter {
        category: Some("park".to_owned()),
        search: "ngoro".to_owned(),
    };
    assert!(dest.matches(&place));
}

#[test]
fn travel_info_filter_uses_category_enum() {
    let guide: TravelInfo = row(fixture::travel_info(1, "Visa on arrival", "visa"));
    let filter = TravelInfoFilter {
        category: Some(TravelInfoCategory::Visa),
        ..TravelInfoFilter::default()
    };
    assert!(filter.matches(&guide));
}

#[test]
fn public_filter_from_route_segment() {
    let safari: TourPackage = row(fixture::tour(1, "Tarangire", "safari"));
    let climb: TourPackage = row(fixture::tour(2, "Marangu", "mountain-climbing"));
    let filter = PublicTourFilter::for_segment(Some("safari"));
    assert!(filter.matches(&safari));
    assert!(!filter.matches(&climb));
    let everything = PublicTourFilter::for_segment(Some("all"));
    assert!(everything.matches(&climb));
    assert_eq!(PublicTourFilter::for_segment(None), PublicTourFilter::default());
}
