//! Pixel-space rectangle math.
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel space, x/y from top left.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Containment over the half-open intervals `[x, x+w)` and `[y, y+h)`,
    /// so adjacent rects never both claim their shared edge.
    #[must_use]
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// A zero or negative dimension, e.g. from an oversized gap setting.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_is_half_open() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains_point(10.0, 10.0));
        assert!(r.contains_point(109.9, 59.9));
        assert!(!r.contains_point(110.0, 30.0));
        assert!(!r.contains_point(50.0, 60.0));
    }

    #[test]
    fn degenerate_rects_are_detected() {
        assert!(Rect::ZERO.is_degenerate());
        assert!(Rect::new(0.0, 0.0, -5.0, 10.0).is_degenerate());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }
}
