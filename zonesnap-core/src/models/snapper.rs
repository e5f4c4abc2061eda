//! Window snap memory: which zones a window occupies and where it came from.
use std::collections::HashMap;

use super::{Handle, Layout, Rect, WindowHandle};
use serde::{Deserialize, Serialize};

/// What we remember about one snapped window. `original` is the window's
/// geometry from before its first snap and is only ever written through
/// [`WindowSnapper::remember_window`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WindowMemory {
    pub layout_name: String,
    pub zone_indices: Vec<usize>,
    pub original: Rect,
}

/// Owns the per-window memory map. One entry per window handle, created on
/// first snap, overwritten on re-snap, removed on unsnap or window destroy.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WindowSnapper<H: Handle> {
    #[serde(bound = "")]
    memory: HashMap<WindowHandle<H>, WindowMemory>,
}

impl<H: Handle> WindowSnapper<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            memory: HashMap::new(),
        }
    }

    /// Target rect for snapping a window to the given zones. Returns `None`
    /// for an empty or degenerate selection so a bad gap configuration can
    /// never corrupt window geometry. An existing memory entry is updated
    /// to the new layout/zones; original geometry is left untouched.
    pub fn snap_to_zones(
        &mut self,
        window: WindowHandle<H>,
        layout: &Layout,
        zone_indices: &[usize],
    ) -> Option<Rect> {
        if zone_indices.is_empty() {
            return None;
        }
        let target = layout.union_box(zone_indices);
        if target.is_degenerate() {
            return None;
        }
        if let Some(memory) = self.memory.get_mut(&window) {
            memory.layout_name = layout.name.clone();
            memory.zone_indices = zone_indices.to_vec();
        }
        Some(target)
    }

    /// Record a window's pre-snap geometry and zone assignment. This is the
    /// only path that sets `original`, and callers must pass the geometry
    /// captured before any move/resize was issued.
    pub fn remember_window(
        &mut self,
        window: WindowHandle<H>,
        layout_name: &str,
        zone_indices: Vec<usize>,
        original: Rect,
    ) {
        self.memory.insert(
            window,
            WindowMemory {
                layout_name: layout_name.to_owned(),
                zone_indices,
                original,
            },
        );
    }

    /// Take a window out of zone management, yielding the remembered
    /// original geometry for the caller to restore. `None` if the window
    /// was never snapped.
    pub fn unsnap(&mut self, window: &WindowHandle<H>) -> Option<Rect> {
        self.memory.remove(window).map(|memory| memory.original)
    }

    pub fn forget_window(&mut self, window: &WindowHandle<H>) {
        self.memory.remove(window);
    }

    #[must_use]
    pub fn memory(&self, window: &WindowHandle<H>) -> Option<&WindowMemory> {
        self.memory.get(window)
    }

    /// Re-snap every remembered window belonging to this layout, e.g. after
    /// a resolution change invalidated the pixel rects. Zone assignments are
    /// kept; the returned moves are for the caller to issue.
    pub fn restore_all(&mut self, layout: &Layout) -> Vec<(WindowHandle<H>, Rect)> {
        let windows: Vec<(WindowHandle<H>, Vec<usize>)> = self
            .memory
            .iter()
            .filter(|(_, memory)| memory.layout_name == layout.name)
            .map(|(window, memory)| (*window, memory.zone_indices.clone()))
            .collect();

        windows
            .into_iter()
            .filter_map(|(window, indices)| {
                self.snap_to_zones(window, layout, &indices)
                    .map(|rect| (window, rect))
            })
            .collect()
    }
}
