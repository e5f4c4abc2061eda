use crate::models::Handle;
use crate::state::State;
use crate::DisplayEvent;

impl<H: Handle> State<H> {
    /// Process one host event and apply its changes to the state.
    /// Returns true if the overlay needs to be redrawn.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::ButtonPress {
                window,
                window_rect,
                x,
                y,
                mods,
            } => self.button_press_handler(window, window_rect, x, y, mods),

            DisplayEvent::Movement { x, y, mods } => self.mouse_move_handler(x, y, mods),

            DisplayEvent::ButtonRelease { x, y, window_rect } => {
                self.button_release_handler(x, y, window_rect)
            }

            DisplayEvent::WindowDestroy(handle) => self.window_destroyed_handler(&handle),

            DisplayEvent::ScreenChange(screen) => self.screen_change_handler(screen),

            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}
