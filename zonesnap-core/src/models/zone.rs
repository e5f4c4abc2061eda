//! A single zone definition within a layout.
use super::Rect;
use serde::{Deserialize, Serialize};

/// A named rectangular region of a monitor. Position and size are stored as
/// percentages of the monitor in `[0, 1]` with origin top left; `pixel` is
/// only valid after a pixel-rect pass for the owning monitor and must be
/// recomputed whenever monitor geometry, spacing or the zone set changes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Zone {
    pub name: String,
    /// Stable ordinal within the owning layout, `0..n-1` in declaration order.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub pixel: Rect,
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            name: String::new(),
            index: 0,
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            pixel: Rect::ZERO,
        }
    }
}

impl Zone {
    #[must_use]
    pub fn new(name: &str, index: usize, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.to_owned(),
            index,
            x,
            y,
            width,
            height,
            pixel: Rect::ZERO,
        }
    }

    #[must_use]
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        self.pixel.contains_point(px, py)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.pixel.area()
    }
}
