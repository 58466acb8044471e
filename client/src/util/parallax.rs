//! Scroll-linked parallax offsets.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

pub const DEFAULT_SPEED: f64 = 0.5;

/// Axis the layer drifts along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Layer translation in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    /// Offset for the given scroll position. Only the active axis moves.
    #[must_use]
    pub fn from_scroll(scroll_x: f64, scroll_y: f64, speed: f64, axis: Axis) -> Self {
        match axis {
            Axis::Vertical => Self { x: 0.0, y: scroll_y * speed },
            Axis::Horizontal => Self { x: scroll_x * speed, y: 0.0 },
        }
    }

    /// CSS `transform` value. A non-zero `depth` lifts the layer into 3D.
    #[must_use]
    pub fn transform(self, depth: f64) -> String {
        if depth.abs() < f64::EPSILON {
            format!("translate({}px, {}px)", self.x, self.y)
        } else {
            format!("translate3d({}px, {}px, {depth}px)", self.x, self.y)
        }
    }
}
