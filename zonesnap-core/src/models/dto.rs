//! Read models handed to the render and IPC collaborators. Building these
//! never mutates core state; in particular no pixel recomputation happens
//! here, so they are safe to call from inside a draw callback.
use super::Rect;
use serde::{Deserialize, Serialize};

/// One zone as the overlay renderer sees it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ZoneView {
    pub name: String,
    pub index: usize,
    pub rect: Rect,
    /// Part of the current drag selection, to be drawn highlighted.
    pub selected: bool,
}

/// Everything the overlay renderer needs for one frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OverlayState {
    pub visible: bool,
    pub layout: Option<String>,
    pub zones: Vec<ZoneView>,
}

/// One row of the layout listing served over IPC.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LayoutInfo {
    pub name: String,
    pub zone_count: usize,
    pub active: bool,
}
