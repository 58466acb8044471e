use super::*;
use crate::net::mock::fixture;

fn tours(n: u32) -> Vec<TourPackage> {
    (1..=n)
        .map(|i| serde_json::from_value(fixture::tour(i, &format!("Tour {i}"), "safari")).expect("tour"))
        .collect()
}

fn slider(len: u32) -> HeroSlider {
    HeroSlider::new(slides_from_tours(&Ok(tours(len - 1))))
}

// =============================================================
// Slides
// =============================================================

#[test]
fn welcome_slide_leads_and_caps_at_five() {
    let slides = slides_from_tours(&Ok(tours(7)));
    assert_eq!(slides.len(), MAX_SLIDES);
    assert_eq!(slides[0], Slide::welcome());
    assert_eq!(slides[1].link.as_deref(), Some("/tours/safari/tour-1"));
    assert_eq!(slides[1].image, "https://img.example/1-a.jpg");
}

#[test]
fn failed_fetch_keeps_welcome_only() {
    let slides = slides_from_tours(&Err(BackendError::Unavailable));
    assert_eq!(slides, vec![Slide::welcome()]);
}

#[test]
fn tour_without_images_uses_fallback() {
    let mut tour = tours(1).remove(0);
    tour.images.clear();
    let slides = slides_from_tours(&Ok(vec![tour]));
    assert!(slides[1].image.starts_with("https://images.pexels.com/photos/1670732/"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn n_forward_advances_land_on_n_mod_len() {
    for n in 0..12 {
        let mut hero = slider(5);
        for _ in 0..n {
            assert!(hero.next());
            hero.finish_transition();
        }
        assert_eq!(hero.current, n % 5);
    }
}

#[test]
fn advance_during_transition_is_noop() {
    let mut hero = slider(3);
    assert!(hero.next());
    assert!(!hero.next());
    assert!(!hero.prev());
    assert!(!hero.go_to(0));
    assert_eq!(hero.current, 1);
    hero.finish_transition();
    assert!(hero.next());
    assert_eq!(hero.current, 2);
}

#[test]
fn prev_wraps_to_last() {
    let mut hero = slider(4);
    assert!(hero.prev());
    assert_eq!(hero.current, 3);
}

#[test]
fn go_to_ignores_current_and_out_of_range() {
    let mut hero = slider(3);
    assert!(!hero.go_to(0));
    assert!(!hero.go_to(9));
    assert!(hero.go_to(2));
    assert_eq!(hero.current_slide().map(|s| s.title.as_str()), Some("Tour 2"));
}

#[test]
fn empty_slider_never_moves() {
    let mut hero = HeroSlider::new(Vec::new());
    assert!(!hero.next());
    assert!(hero.current_slide().is_none());
}
