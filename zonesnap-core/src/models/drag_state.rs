//! The in-flight state of one pointer drag.
use super::{Handle, Rect, WindowHandle};
use serde::{Deserialize, Serialize};

/// Mutable state of the drag interaction. Created fresh on pointer-down,
/// updated on every pointer-move and reset unconditionally on pointer-up.
/// Never persisted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DragState<H: Handle> {
    pub is_dragging: bool,
    /// Whether the zone overlay is armed for this drag. Toggles mid-drag
    /// with the snap modifier when one is required.
    pub is_zone_snapping: bool,
    pub modifier_held: bool,
    pub multi_select_held: bool,
    #[serde(bound = "")]
    pub window: Option<WindowHandle<H>>,
    /// The dragged window's geometry at press time; fallback for the
    /// pre-snap geometry when the host cannot supply one at release.
    pub window_rect: Rect,
    pub start_x: f64,
    pub start_y: f64,
    pub current_x: f64,
    pub current_y: f64,
    /// Zone under the pointer at drag start; anchor for range selection.
    pub start_zone: Option<usize>,
    pub current_zone: Option<usize>,
    /// Contiguous ordinal range of selected zones, ascending, no duplicates.
    pub selected_zones: Vec<usize>,
}

impl<H: Handle> DragState<H> {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
