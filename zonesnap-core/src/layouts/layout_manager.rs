//! Holds the layout set and decides which layout applies where.
use crate::config::Config;
use crate::models::{Layout, LayoutMapping, WorkspaceId, Zone};
use serde::{Deserialize, Serialize};

use super::{COLUMNS, GRID, PRIORITY_GRID, ROWS};

/// The [`LayoutManager`] owns the available [`Layout`] definitions, the
/// mapping table and the active-layout pointer, and resolves which layout
/// applies to a (monitor, workspace) pair.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LayoutManager {
    layouts: Vec<Layout>,
    mappings: Vec<LayoutMapping>,
    active_layout: Option<String>,
}

impl LayoutManager {
    /// Create a new [`LayoutManager`] from the config.
    pub fn new(config: &impl Config) -> Self {
        let layouts = config.layouts();
        if layouts.is_empty() {
            tracing::warn!("no layout definitions configured, zone snapping will be unavailable");
        }
        tracing::debug!(
            "loaded {} layout definitions and {} mappings",
            layouts.len(),
            config.mappings().len()
        );
        Self {
            layouts,
            mappings: config.mappings(),
            active_layout: config.active_layout(),
        }
    }

    #[must_use]
    pub fn from_parts(
        layouts: Vec<Layout>,
        mappings: Vec<LayoutMapping>,
        active_layout: Option<String>,
    ) -> Self {
        Self {
            layouts,
            mappings,
            active_layout,
        }
    }

    #[must_use]
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    #[must_use]
    pub fn mappings(&self) -> &[LayoutMapping] {
        &self.mappings
    }

    #[must_use]
    pub fn active_layout(&self) -> Option<&str> {
        self.active_layout.as_deref()
    }

    /// Swap in a freshly loaded layout set. The first layout becomes active.
    pub fn replace(&mut self, layouts: Vec<Layout>, mappings: Vec<LayoutMapping>) {
        self.active_layout = layouts.first().map(|layout| layout.name.clone());
        self.layouts = layouts;
        self.mappings = mappings;
    }

    /// Build a layout from a generation template. Unknown template names
    /// yield a layout without zones rather than an error.
    #[must_use]
    pub fn generate_from_template(template: &str, cols: usize, rows: usize, name: &str) -> Layout {
        let mut layout = Layout::new(if name.is_empty() { template } else { name });
        layout.template = Some(template.to_owned());
        layout.columns = cols;
        layout.rows = rows;

        match template {
            COLUMNS => {
                let width = 1.0 / cols as f64;
                layout.zones = (0..cols)
                    .map(|c| {
                        Zone::new(
                            &format!("Column {}", c + 1),
                            c,
                            c as f64 * width,
                            0.0,
                            width,
                            1.0,
                        )
                    })
                    .collect();
            }
            ROWS => {
                let height = 1.0 / rows as f64;
                layout.zones = (0..rows)
                    .map(|r| {
                        Zone::new(
                            &format!("Row {}", r + 1),
                            r,
                            0.0,
                            r as f64 * height,
                            1.0,
                            height,
                        )
                    })
                    .collect();
            }
            GRID => {
                let width = 1.0 / cols as f64;
                let height = 1.0 / rows as f64;
                layout.zones = (0..rows)
                    .flat_map(|r| (0..cols).map(move |c| (r, c)))
                    .enumerate()
                    .map(|(i, (r, c))| {
                        Zone::new(
                            &format!("Cell {}x{}", r + 1, c + 1),
                            i,
                            c as f64 * width,
                            r as f64 * height,
                            width,
                            height,
                        )
                    })
                    .collect();
            }
            PRIORITY_GRID => {
                // Fixed three-zone layout; cols/rows are kept as metadata only.
                layout.zones = vec![
                    Zone::new("Main", 0, 0.0, 0.0, 0.6, 1.0),
                    Zone::new("Top Right", 1, 0.6, 0.0, 0.4, 0.5),
                    Zone::new("Bottom Right", 2, 0.6, 0.5, 0.4, 0.5),
                ];
            }
            other => {
                tracing::warn!("unknown layout template {other:?}, generating no zones");
            }
        }

        layout
    }

    /// Index of the layout for a (monitor, workspace) pair, or `None` when
    /// the layout set is empty. Mappings are scanned in declaration order
    /// and the first match wins, even when a later rule is more specific;
    /// a matching rule naming an unknown layout is skipped. Falls back to
    /// the active layout, then to the first layout.
    #[must_use]
    pub fn resolve_index(&self, monitor: &str, workspace: WorkspaceId) -> Option<usize> {
        for mapping in &self.mappings {
            if mapping.matches(monitor, workspace) {
                if let Some(index) = self.index_of(&mapping.layout) {
                    tracing::debug!(
                        monitor,
                        workspace,
                        layout = %mapping.layout,
                        "mapping matched"
                    );
                    return Some(index);
                }
            }
        }

        if let Some(active) = &self.active_layout {
            if let Some(index) = self.index_of(active) {
                tracing::debug!(monitor, workspace, layout = %active, "no mapping, using active layout");
                return Some(index);
            }
        }

        if self.layouts.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// The layout for a (monitor, workspace) pair, see [`Self::resolve_index`].
    #[must_use]
    pub fn layout_for(&self, monitor: &str, workspace: WorkspaceId) -> Option<&Layout> {
        self.resolve_index(monitor, workspace)
            .and_then(|index| self.layouts.get(index))
    }

    pub fn layout_for_mut(&mut self, monitor: &str, workspace: WorkspaceId) -> Option<&mut Layout> {
        let index = self.resolve_index(monitor, workspace)?;
        self.layouts.get_mut(index)
    }

    /// Make the named layout active; a name outside the layout set leaves
    /// the active layout unchanged.
    pub fn switch_layout(&mut self, name: &str) {
        if self.index_of(name).is_some() {
            self.active_layout = Some(name.to_owned());
        } else {
            tracing::warn!(name, "cannot switch to unknown layout");
        }
    }

    /// Advance the active layout by `direction` positions, wrapping
    /// circularly in either direction. No-op on an empty layout set.
    pub fn cycle_layout(&mut self, direction: i32) {
        let count = self.layouts.len() as i32;
        if count == 0 {
            return;
        }
        let current = self
            .active_layout
            .as_deref()
            .and_then(|name| self.index_of(name))
            .unwrap_or(0) as i32;
        let next = ((current + direction) % count + count) % count;
        self.active_layout = Some(self.layouts[next as usize].name.clone());
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.layouts.iter().position(|layout| layout.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;

    fn named(names: &[&str]) -> Vec<Layout> {
        names.iter().map(|name| Layout::new(name)).collect()
    }

    fn mapping(monitor: &str, workspaces: &str, layout: &str) -> LayoutMapping {
        LayoutMapping {
            monitor: monitor.into(),
            workspaces: workspaces.into(),
            layout: layout.into(),
        }
    }

    #[test]
    fn columns_template_produces_equal_full_height_zones() {
        let layout = LayoutManager::generate_from_template(COLUMNS, 3, 0, "");
        assert_eq!(layout.name, "columns");
        assert_eq!(layout.zones.len(), 3);
        for (i, zone) in layout.zones.iter().enumerate() {
            assert_eq!(zone.index, i);
            assert!((zone.width - 1.0 / 3.0).abs() < f64::EPSILON);
            assert!((zone.height - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn grid_template_names_cells_row_major() {
        let layout = LayoutManager::generate_from_template(GRID, 2, 2, "four");
        assert_eq!(layout.name, "four");
        let names: Vec<&str> = layout.zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["Cell 1x1", "Cell 1x2", "Cell 2x1", "Cell 2x2"]);
    }

    #[test]
    fn priority_grid_is_always_three_zones() {
        let layout = LayoutManager::generate_from_template(PRIORITY_GRID, 9, 9, "");
        assert_eq!(layout.zones.len(), 3);
        assert_eq!(layout.zones[0].name, "Main");
        assert!((layout.zones[0].width - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_template_yields_empty_zones_not_an_error() {
        let layout = LayoutManager::generate_from_template("spiral", 2, 2, "odd");
        assert_eq!(layout.name, "odd");
        assert_eq!(layout.template.as_deref(), Some("spiral"));
        assert!(layout.zones.is_empty());
    }

    #[test]
    fn first_matching_mapping_wins_over_a_more_specific_later_one() {
        let manager = LayoutManager::from_parts(
            named(&["A", "B"]),
            vec![mapping("*", "1-5", "A"), mapping("DP-1", "*", "B")],
            None,
        );
        assert_eq!(manager.layout_for("DP-1", 3).unwrap().name, "A");
        // Outside the range, the second rule applies.
        assert_eq!(manager.layout_for("DP-1", 9).unwrap().name, "B");
    }

    #[test]
    fn mapping_to_unknown_layout_is_skipped() {
        let manager = LayoutManager::from_parts(
            named(&["B"]),
            vec![mapping("*", "*", "missing"), mapping("*", "*", "B")],
            None,
        );
        assert_eq!(manager.layout_for("DP-1", 1).unwrap().name, "B");
    }

    #[test]
    fn resolution_falls_back_to_active_then_first() {
        let mut manager = LayoutManager::from_parts(named(&["A", "B"]), Vec::new(), None);
        assert_eq!(manager.layout_for("DP-1", 1).unwrap().name, "A");

        manager.switch_layout("B");
        assert_eq!(manager.layout_for("DP-1", 1).unwrap().name, "B");

        let empty = LayoutManager::from_parts(Vec::new(), Vec::new(), None);
        assert!(empty.layout_for("DP-1", 1).is_none());
    }

    #[test]
    fn switch_to_unknown_layout_is_a_noop() {
        let mut manager =
            LayoutManager::from_parts(named(&["A", "B"]), Vec::new(), Some("A".into()));
        manager.switch_layout("nope");
        assert_eq!(manager.active_layout(), Some("A"));
    }

    #[test]
    fn cycle_wraps_in_both_directions() {
        let mut manager =
            LayoutManager::from_parts(named(&["A", "B", "C"]), Vec::new(), Some("C".into()));
        manager.cycle_layout(1);
        assert_eq!(manager.active_layout(), Some("A"));
        manager.cycle_layout(-1);
        assert_eq!(manager.active_layout(), Some("C"));
        manager.cycle_layout(-4);
        assert_eq!(manager.active_layout(), Some("B"));
    }

    #[test]
    fn cycle_on_empty_set_is_a_noop() {
        let mut manager = LayoutManager::new(&TestConfig::default());
        manager.cycle_layout(1);
        assert_eq!(manager.active_layout(), None);
    }
}
