//! Commands arriving from the host's IPC/dispatcher layer. Each maps onto
//! exactly one resolver, window-memory or overlay operation.
use crate::models::{Handle, WindowHandle};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command<H: Handle> {
    /// Move a window straight into one zone of the resolved layout.
    /// Rejected, with state unchanged, if the index is out of range.
    MoveToZone {
        #[serde(bound = "")]
        window: WindowHandle<H>,
        zone: usize,
    },
    /// Restore a snapped window's pre-snap geometry and forget it.
    Unsnap {
        #[serde(bound = "")]
        window: WindowHandle<H>,
    },
    /// Make the named layout active; unknown names are a no-op.
    SetLayout(String),
    /// Advance the active layout by a signed offset, wrapping circularly.
    CycleLayout(i32),
    ShowOverlay,
    HideOverlay,
    /// Write the layout set and mappings to a flat file.
    SaveLayouts(PathBuf),
    /// Replace the layout set and mappings from a flat file.
    LoadLayouts(PathBuf),
}
