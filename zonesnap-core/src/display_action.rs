//! Responses queued for the host. The host drains [`crate::State::actions`]
//! after each event and applies these through its own primitives;
//! move/resize is fire-and-forget and assumed eventually consistent.
use crate::models::{Handle, Rect, WindowHandle};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction<H: Handle> {
    /// Move and resize a window to an exact pixel rectangle.
    MoveAndResizeWindow {
        #[serde(bound = "")]
        window: WindowHandle<H>,
        rect: Rect,
    },

    /// Start drawing the zone overlay on the current monitor.
    ShowOverlay,

    /// Stop drawing the zone overlay.
    HideOverlay,
}
