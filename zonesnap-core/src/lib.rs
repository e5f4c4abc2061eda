//! Zone-based window snapping for compositors that drive it by events.
//!
//! The host feeds [`DisplayEvent`]s into [`State`], then drains the queued
//! [`DisplayAction`]s and applies them with its own move/resize and overlay
//! primitives. The core never talks to a display server itself.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod errors;
mod handlers;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

pub use command::Command;
pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use layouts::LayoutManager;
pub use models::{
    DragState, Handle, Layout, LayoutMapping, Rect, Screen, SpacingPolicy, WindowHandle,
    WindowMemory, WindowSnapper, WorkspaceId, Zone,
};
pub use state::State;
