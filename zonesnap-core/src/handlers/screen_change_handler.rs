//! Monitor or workspace context changed.
use crate::models::{Handle, Screen};
use crate::state::State;
use crate::DisplayAction;

impl<H: Handle> State<H> {
    /// Adopt the new screen context, invalidate the pixel cache and re-align
    /// every window remembered for the newly resolved layout so a
    /// resolution change keeps snapped windows on their zones.
    pub fn screen_change_handler(&mut self, screen: Screen) -> bool {
        if self.screen == screen {
            return false;
        }
        tracing::debug!(monitor = %screen.name, workspace = screen.workspace, "screen changed");
        self.screen = screen;
        self.computed_for = None;

        if !self.ensure_zone_pixels() {
            return false;
        }
        let Some(layout) = self
            .layout_manager
            .layout_for(&self.screen.name, self.screen.workspace)
        else {
            return false;
        };
        let moves = self.snapper.restore_all(layout);
        for (window, rect) in moves {
            self.actions
                .push_back(DisplayAction::MoveAndResizeWindow { window, rect });
        }
        true
    }
}
