//! Reveal-on-scroll visibility for animated page sections.
//!
//! A section starts hidden in its [`Reveal`] pose and becomes visible once
//! enough of it has entered the viewport. One-shot sections stay visible
//! afterwards; repeating ones hide again when they leave.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Hidden pose a section animates in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Scale,
    None,
}

impl Reveal {
    /// Modifier class applied while the section is hidden.
    #[must_use]
    pub fn hidden_class(self) -> &'static str {
        match self {
            Self::Fade => "reveal--fade",
            Self::SlideUp => "reveal--slide-up",
            Self::SlideDown => "reveal--slide-down",
            Self::SlideLeft => "reveal--slide-left",
            Self::SlideRight => "reveal--slide-right",
            Self::Scale => "reveal--scale",
            Self::None => "",
        }
    }
}

/// Share of an element's height inside a viewport of `viewport_height`,
/// given its top edge relative to the viewport.
#[must_use]
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return if (0.0..=viewport_height).contains(&top) { 1.0 } else { 0.0 };
    }
    let shown = (top + height).min(viewport_height) - top.max(0.0);
    (shown / height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    pub visible: bool,
    pub once: bool,
    pub threshold: f64,
}

impl RevealState {
    #[must_use]
    pub fn new(threshold: f64, once: bool) -> Self {
        Self { visible: false, once, threshold }
    }

    /// Feed the latest visible fraction. Returns `true` when `visible` changed.
    pub fn observe(&mut self, fraction: f64) -> bool {
        let in_view = fraction > 0.0 && fraction >= self.threshold;
        let next = if in_view { true } else if self.once { self.visible } else { false };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    /// A one-shot section that has appeared needs no further observation.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.once && self.visible
    }

    /// Class list for the wrapper element.
    #[must_use]
    pub fn class(&self, reveal: Reveal) -> String {
        if self.visible || reveal == Reveal::None {
            "reveal reveal--shown".to_owned()
        } else {
            format!("reveal {}", reveal.hidden_class())
        }
    }

    /// Inline style; the delay only applies on the way in.
    #[must_use]
    pub fn style(&self, delay_ms: u32) -> String {
        let delay = if self.visible { delay_ms } else { 0 };
        format!("transition-delay: {delay}ms")
    }
}
