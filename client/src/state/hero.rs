//! Home-page hero slider.
//!
//! DESIGN
//! ======
//! The slider is a small state machine: `next`/`prev`/`go_to` start a
//! transition and move the index; further moves are ignored until
//! `finish_transition` runs [`TRANSITION_MS`] later. The auto-advance timer
//! calls `next` every [`AUTO_ADVANCE_MS`].

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use records::{TourCategory, TourPackage};

use crate::net::BackendError;

pub const AUTO_ADVANCE_MS: u32 = 6000;
pub const TRANSITION_MS: u32 = 500;
pub const MAX_SLIDES: usize = 5;

const WELCOME_TITLE: &str = "Welcome to Karibu Safariz";
const WELCOME_TEXT: &str = "Experience the magic of Tanzania with expertly guided tours through breathtaking landscapes and unforgettable adventures.";
const WELCOME_IMAGE: &str =
    "https://images.pexels.com/photos/1670732/pexels-photo-1670732.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop";
const TOUR_IMAGE_FALLBACK: &str = "https://images.pexels.com/photos/1670732/pexels-photo-1670732.jpeg";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Detail route for tour slides; `None` on the welcome slide.
    pub link: Option<String>,
    pub category: Option<TourCategory>,
}

impl Slide {
    #[must_use]
    pub fn welcome() -> Self {
        Self {
            title: WELCOME_TITLE.to_owned(),
            description: WELCOME_TEXT.to_owned(),
            image: WELCOME_IMAGE.to_owned(),
            link: None,
            category: None,
        }
    }

    fn from_tour(tour: &TourPackage) -> Self {
        Self {
            title: tour.title.clone(),
            description: tour.blurb(),
            image: tour.cover_image().unwrap_or(TOUR_IMAGE_FALLBACK).to_owned(),
            link: Some(tour.href()),
            category: Some(tour.category),
        }
    }
}

/// Welcome slide followed by up to four tours. A failed fetch leaves only
/// the welcome slide.
#[must_use]
pub fn slides_from_tours(result: &Result<Vec<TourPackage>, BackendError>) -> Vec<Slide> {
    let mut slides = vec![Slide::welcome()];
    match result {
        Ok(tours) => slides.extend(tours.iter().take(MAX_SLIDES - 1).map(Slide::from_tour)),
        Err(e) => leptos::logging::error!("hero slides: {e}"),
    }
    slides
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroSlider {
    pub slides: Vec<Slide>,
    pub current: usize,
    pub transitioning: bool,
}

impl HeroSlider {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            current: 0,
            transitioning: false,
        }
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Advance one slide, wrapping. Returns whether a transition started.
    pub fn next(&mut self) -> bool {
        let len = self.slides.len();
        self.start(|current| (current + 1) % len)
    }

    /// Step back one slide, wrapping. Returns whether a transition started.
    pub fn prev(&mut self) -> bool {
        let len = self.slides.len();
        self.start(|current| (current + len - 1) % len)
    }

    /// Jump to `index` (dot navigation). Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slides.len() || index == self.current {
            return false;
        }
        self.start(|_| index)
    }

    pub fn finish_transition(&mut self) {
        self.transitioning = false;
    }

    fn start(&mut self, step: impl FnOnce(usize) -> usize) -> bool {
        if self.transitioning || self.slides.is_empty() {
            return false;
        }
        self.current = step(self.current);
        self.transitioning = true;
        true
    }
}
