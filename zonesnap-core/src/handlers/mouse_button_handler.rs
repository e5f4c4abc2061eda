//! Pointer-down opens a drag, pointer-up commits or cancels it.
use crate::models::{Handle, Rect, WindowHandle};
use crate::state::State;
use crate::utils::modifiers::Modifiers;
use crate::DisplayAction;

impl<H: Handle> State<H> {
    /// Pointer-down on a snap-eligible window. Opens the drag and, when the
    /// activation policy is satisfied, arms zone snapping right away.
    pub fn button_press_handler(
        &mut self,
        window: WindowHandle<H>,
        window_rect: Rect,
        x: f64,
        y: f64,
        mods: Modifiers,
    ) -> bool {
        self.drag.reset();
        self.drag.is_dragging = true;
        self.drag.window = Some(window);
        self.drag.window_rect = window_rect;
        self.drag.start_x = x;
        self.drag.start_y = y;
        self.drag.current_x = x;
        self.drag.current_y = y;
        self.drag.modifier_held = self.snap_modifier.is_held(mods);
        self.drag.multi_select_held = mods.contains(Modifiers::Ctrl);

        if self.show_on_drag && (!self.require_modifier || self.drag.modifier_held) {
            self.arm_zone_snapping(x, y);
        }

        self.overlay_visible
    }

    /// Pointer-up. Commits the snap when zone snapping is armed with a
    /// non-empty selection, then resets to idle unconditionally.
    pub fn button_release_handler(&mut self, x: f64, y: f64, window_rect: Option<Rect>) -> bool {
        self.drag.current_x = x;
        self.drag.current_y = y;

        if self.drag.is_dragging && self.drag.is_zone_snapping {
            self.commit_snap(window_rect);
        }

        self.drag.reset();
        let was_visible = self.overlay_visible;
        if was_visible {
            self.overlay_visible = false;
            self.actions.push_back(DisplayAction::HideOverlay);
        }
        was_visible
    }

    /// Arm zone snapping for the drag in progress: resolve the layout for
    /// the current screen and anchor the range selection at the pointer.
    /// A resolution miss leaves the drag unarmed but alive.
    pub(crate) fn arm_zone_snapping(&mut self, x: f64, y: f64) {
        if !self.ensure_zone_pixels() {
            tracing::debug!(
                monitor = %self.screen.name,
                workspace = self.screen.workspace,
                "no layout resolves here, zone snapping unavailable for this drag"
            );
            return;
        }

        self.drag.is_zone_snapping = true;
        if let Some(layout) = self.resolved_layout() {
            self.drag.start_zone = layout.smallest_zone_at(x, y);
        }
        if !self.overlay_visible {
            self.overlay_visible = true;
            self.actions.push_back(DisplayAction::ShowOverlay);
        }
    }

    fn commit_snap(&mut self, window_rect: Option<Rect>) -> Option<()> {
        if self.drag.selected_zones.is_empty() {
            return None;
        }
        let window = self.drag.window?;
        // Pre-snap geometry, captured before the move below is issued.
        let original = window_rect.unwrap_or(self.drag.window_rect);

        if !self.ensure_zone_pixels() {
            return None;
        }
        let layout = self.resolved_layout()?;
        let target = layout.union_box(&self.drag.selected_zones);
        if target.is_degenerate() {
            return None;
        }
        let layout_name = layout.name.clone();

        self.snapper.remember_window(
            window,
            &layout_name,
            self.drag.selected_zones.clone(),
            original,
        );
        self.actions
            .push_back(DisplayAction::MoveAndResizeWindow {
                window,
                rect: target,
            });
        Some(())
    }
}
