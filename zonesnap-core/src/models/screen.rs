//! The monitor context a drag happens on.
use super::{Rect, WorkspaceId};
use serde::{Deserialize, Serialize};

/// The currently focused monitor as reported by the host: its name, its
/// usable pixel rectangle and the workspace shown on it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Screen {
    pub name: String,
    pub rect: Rect,
    pub workspace: WorkspaceId,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            name: String::new(),
            rect: Rect::ZERO,
            workspace: -1,
        }
    }
}

impl Screen {
    #[must_use]
    pub fn new(name: &str, rect: Rect, workspace: WorkspaceId) -> Self {
        Self {
            name: name.to_owned(),
            rect,
            workspace,
        }
    }
}
