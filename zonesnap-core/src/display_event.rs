//! Events delivered by the host compositor. All handling is synchronous on
//! the delivering thread; nothing here blocks or suspends.
use crate::models::{Handle, Rect, Screen, WindowHandle};
use crate::utils::modifiers::Modifiers;
use crate::Command;

#[derive(Debug)]
pub enum DisplayEvent<H: Handle> {
    /// Pointer-down on a window the host considers eligible for snapping
    /// (e.g. floating only). `window_rect` is the window's geometry at
    /// press time.
    ButtonPress {
        window: WindowHandle<H>,
        window_rect: Rect,
        x: f64,
        y: f64,
        mods: Modifiers,
    },
    /// Pointer motion, with the current modifier state.
    Movement { x: f64, y: f64, mods: Modifiers },
    /// Pointer-up. `window_rect` is the dragged window's geometry at
    /// release time, before any snap move is issued; `None` when the host
    /// could not supply it.
    ButtonRelease {
        x: f64,
        y: f64,
        window_rect: Option<Rect>,
    },
    /// The window disappeared; treated as an implicit drag cancel.
    WindowDestroy(WindowHandle<H>),
    /// Cursor moved to another monitor, the workspace switched, or the
    /// monitor was reconfigured.
    ScreenChange(Screen),
    SendCommand(Command<H>),
}
