//! A window vanished out from under us.
use crate::models::{Handle, WindowHandle};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Drop all state tied to a destroyed window. Losing the dragged
    /// window mid-drag is an implicit cancel; no snap is committed.
    pub fn window_destroyed_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        self.snapper.forget_window(handle);

        if self.drag.window == Some(*handle) {
            self.drag.reset();
            if self.overlay_visible {
                self.overlay_visible = false;
                self.actions.push_back(crate::DisplayAction::HideOverlay);
            }
            return true;
        }
        false
    }
}
