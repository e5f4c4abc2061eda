//! Affinity rules binding (monitor, workspace) pairs to layout names.
use super::WorkspaceId;
use serde::{Deserialize, Serialize};

/// One mapping rule. Rules are kept in declaration order and resolution is
/// strictly first-match-wins, so a wildcard rule declared early shadows a
/// more specific one declared later. That ordering quirk is intentional and
/// relied upon: reorder the source list to change precedence.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutMapping {
    /// Monitor name, e.g. `"DP-1"`, or `"*"` for any.
    pub monitor: String,
    /// Workspace pattern: `"*"`, a single id, a comma list `"1,3,5"` or a
    /// range `"1-5"`.
    pub workspaces: String,
    /// Name of the layout to apply.
    pub layout: String,
}

impl LayoutMapping {
    #[must_use]
    pub fn matches(&self, monitor: &str, workspace: WorkspaceId) -> bool {
        (self.monitor == "*" || self.monitor == monitor)
            && workspace_matches(&self.workspaces, workspace)
    }
}

/// Whether a workspace id satisfies a pattern. Non-numeric tokens are
/// skipped rather than rejected, so a typo in one list entry never disables
/// the rest of the pattern.
#[must_use]
pub fn workspace_matches(pattern: &str, workspace: WorkspaceId) -> bool {
    let pattern = pattern.trim();
    if pattern.is_empty() || pattern == "*" {
        return true;
    }
    if pattern.contains(',') {
        return pattern
            .split(',')
            .filter_map(|token| token.trim().parse::<WorkspaceId>().ok())
            .any(|id| id == workspace);
    }
    if let Some((start, end)) = pattern.split_once('-') {
        // A leading '-' is a negative id, not a range.
        if let (Ok(start), Ok(end)) = (
            start.trim().parse::<WorkspaceId>(),
            end.trim().parse::<WorkspaceId>(),
        ) {
            return workspace >= start && workspace <= end;
        }
    }
    pattern.parse::<WorkspaceId>() == Ok(workspace)
}
