//! Objects used to implement zone-based tiling.
mod drag_state;
mod layout;
mod mapping;
mod rect;
mod screen;
mod snapper;
mod spacing;
mod window;
mod zone;

pub mod dto;

pub use drag_state::DragState;
pub use layout::Layout;
pub use mapping::workspace_matches;
pub use mapping::LayoutMapping;
pub use rect::Rect;
pub use screen::Screen;
pub use snapper::WindowMemory;
pub use snapper::WindowSnapper;
pub use spacing::SpacingPolicy;
pub use window::Handle;
pub use window::MockHandle;
pub use window::WindowHandle;
pub use zone::Zone;

pub type WorkspaceId = i32;
