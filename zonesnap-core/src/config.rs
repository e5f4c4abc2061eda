//! The configuration surface the host supplies to the core.
use crate::models::{Layout, LayoutMapping};
use crate::utils::modifiers::ModKey;

pub trait Config {
    /// The layout set, in declaration order. Zone indices within each
    /// layout are expected to be contiguous `0..n-1`.
    fn layouts(&self) -> Vec<Layout>;

    /// Monitor/workspace affinity rules, in declaration order.
    /// Resolution is first-match-wins over this order.
    fn mappings(&self) -> Vec<LayoutMapping>;

    /// Name of the initially active layout, if any.
    fn active_layout(&self) -> Option<String>;

    /// Modifier that arms zone snapping while dragging.
    fn snap_modifier(&self) -> ModKey;

    /// Whether dragging a window may bring up the zone overlay at all.
    fn show_on_drag(&self) -> bool;

    /// Whether arming additionally requires the snap modifier to be held.
    fn require_modifier(&self) -> bool;

    /// Whether holding CTRL selects a contiguous range of zones.
    fn allow_multi_zone(&self) -> bool;

    /// Whether unsnapping moves the window back to its pre-snap geometry.
    fn restore_size_on_unsnap(&self) -> bool;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions, clippy::struct_excessive_bools)]
#[derive(Clone, Debug)]
pub struct TestConfig {
    pub layouts: Vec<Layout>,
    pub mappings: Vec<LayoutMapping>,
    pub active_layout: Option<String>,
    pub snap_modifier: ModKey,
    pub show_on_drag: bool,
    pub require_modifier: bool,
    pub allow_multi_zone: bool,
    pub restore_size_on_unsnap: bool,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            layouts: Vec::new(),
            mappings: Vec::new(),
            active_layout: None,
            snap_modifier: ModKey::Shift,
            show_on_drag: true,
            require_modifier: true,
            allow_multi_zone: true,
            restore_size_on_unsnap: true,
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn layouts(&self) -> Vec<Layout> {
        self.layouts.clone()
    }
    fn mappings(&self) -> Vec<LayoutMapping> {
        self.mappings.clone()
    }
    fn active_layout(&self) -> Option<String> {
        self.active_layout.clone()
    }
    fn snap_modifier(&self) -> ModKey {
        self.snap_modifier
    }
    fn show_on_drag(&self) -> bool {
        self.show_on_drag
    }
    fn require_modifier(&self) -> bool {
        self.require_modifier
    }
    fn allow_multi_zone(&self) -> bool {
        self.allow_multi_zone
    }
    fn restore_size_on_unsnap(&self) -> bool {
        self.restore_size_on_unsnap
    }
}
