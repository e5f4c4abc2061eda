//! Commands from the host's dispatcher, e.g. keybinds or IPC.
use std::path::Path;

use crate::layouts::persist;
use crate::models::{Handle, WindowHandle};
use crate::state::State;
use crate::{Command, DisplayAction};

impl<H: Handle> State<H> {
    /// Process a command. Returns true if the overlay needs to be redrawn.
    pub fn command_handler(&mut self, command: &Command<H>) -> bool {
        process_internal(self, command).unwrap_or(false)
    }
}

fn process_internal<H: Handle>(state: &mut State<H>, command: &Command<H>) -> Option<bool> {
    match command {
        Command::MoveToZone { window, zone } => move_to_zone(state, *window, *zone),
        Command::Unsnap { window } => unsnap(state, window),

        Command::SetLayout(name) => {
            state.layout_manager.switch_layout(name);
            state.computed_for = None;
            Some(state.overlay_visible)
        }
        Command::CycleLayout(direction) => {
            state.layout_manager.cycle_layout(*direction);
            state.computed_for = None;
            Some(state.overlay_visible)
        }

        Command::ShowOverlay => show_overlay(state),
        Command::HideOverlay => hide_overlay(state),

        Command::SaveLayouts(path) => save_layouts(state, path),
        Command::LoadLayouts(path) => load_layouts(state, path),
    }
}

fn move_to_zone<H: Handle>(
    state: &mut State<H>,
    window: WindowHandle<H>,
    zone: usize,
) -> Option<bool> {
    if !state.ensure_zone_pixels() {
        return Some(false);
    }
    let layout = state.resolved_layout()?;
    if zone >= layout.zones.len() {
        tracing::warn!(zone, layout = %layout.name, "zone index out of range, ignoring");
        return Some(false);
    }
    let layout = layout.clone();
    let rect = state.snapper.snap_to_zones(window, &layout, &[zone])?;
    if state.snapper.memory(&window).is_none() {
        // First snap via command, no drag captured a pre-snap geometry.
        // The zone rect stands in as the original so unsnap stays sane.
        state
            .snapper
            .remember_window(window, &layout.name, vec![zone], rect);
    }
    state
        .actions
        .push_back(DisplayAction::MoveAndResizeWindow { window, rect });
    Some(false)
}

fn unsnap<H: Handle>(state: &mut State<H>, window: &WindowHandle<H>) -> Option<bool> {
    let original = state.snapper.unsnap(window)?;
    if state.restore_size_on_unsnap {
        state.actions.push_back(DisplayAction::MoveAndResizeWindow {
            window: *window,
            rect: original,
        });
    }
    Some(false)
}

fn show_overlay<H: Handle>(state: &mut State<H>) -> Option<bool> {
    if !state.ensure_zone_pixels() {
        return Some(false);
    }
    if !state.overlay_visible {
        state.overlay_visible = true;
        state.actions.push_back(DisplayAction::ShowOverlay);
    }
    Some(true)
}

fn hide_overlay<H: Handle>(state: &mut State<H>) -> Option<bool> {
    if state.overlay_visible {
        state.overlay_visible = false;
        state.actions.push_back(DisplayAction::HideOverlay);
    }
    Some(true)
}

fn save_layouts<H: Handle>(state: &mut State<H>, path: &Path) -> Option<bool> {
    if let Err(err) = persist::save(
        path,
        state.layout_manager.layouts(),
        state.layout_manager.mappings(),
    ) {
        tracing::warn!(path = %path.display(), %err, "could not save layouts");
    }
    Some(false)
}

fn load_layouts<H: Handle>(state: &mut State<H>, path: &Path) -> Option<bool> {
    let (layouts, mappings) = persist::load(path);
    if layouts.is_empty() {
        tracing::warn!(path = %path.display(), "layout file had no usable layouts, keeping current set");
        return Some(false);
    }
    state.layout_manager.replace(layouts, mappings);
    state.computed_for = None;
    Some(state.overlay_visible)
}

#[cfg(test)]
mod tests {
    use crate::config::TestConfig;
    use crate::layouts::{LayoutManager, COLUMNS, GRID};
    use crate::models::{MockHandle, Rect, Screen, WindowHandle};
    use crate::state::State;
    use crate::{Command, DisplayAction};

    fn state() -> State<MockHandle> {
        let config = TestConfig {
            layouts: vec![
                LayoutManager::generate_from_template(COLUMNS, 2, 0, "Two"),
                LayoutManager::generate_from_template(GRID, 2, 2, "Four"),
            ],
            active_layout: Some("Two".into()),
            ..TestConfig::default()
        };
        let mut state = State::new(&config);
        state.screen = Screen::new("DP-1", Rect::new(0.0, 0.0, 1000.0, 500.0), 1);
        state
    }

    #[test]
    fn move_to_zone_issues_a_move_for_a_valid_index() {
        let mut state = state();
        state.command_handler(&Command::MoveToZone {
            window: WindowHandle(1),
            zone: 1,
        });
        assert_eq!(
            state.actions.pop_front(),
            Some(DisplayAction::MoveAndResizeWindow {
                window: WindowHandle(1),
                rect: Rect::new(500.0, 0.0, 500.0, 500.0),
            })
        );
        let memory = state.snapper.memory(&WindowHandle(1)).unwrap();
        assert_eq!(memory.zone_indices, vec![1]);
    }

    #[test]
    fn move_to_zone_rejects_an_out_of_range_index() {
        let mut state = state();
        state.command_handler(&Command::MoveToZone {
            window: WindowHandle(1),
            zone: 7,
        });
        assert!(state.actions.is_empty());
        assert!(state.snapper.memory(&WindowHandle(1)).is_none());
    }

    #[test]
    fn unsnap_restores_the_remembered_geometry() {
        let mut state = state();
        let original = Rect::new(12.0, 34.0, 400.0, 300.0);
        state
            .snapper
            .remember_window(WindowHandle(1), "Two", vec![0], original);

        state.command_handler(&Command::Unsnap {
            window: WindowHandle(1),
        });
        assert_eq!(
            state.actions.pop_front(),
            Some(DisplayAction::MoveAndResizeWindow {
                window: WindowHandle(1),
                rect: original,
            })
        );
        assert!(state.snapper.memory(&WindowHandle(1)).is_none());

        // A second unsnap has nothing to do.
        state.command_handler(&Command::Unsnap {
            window: WindowHandle(1),
        });
        assert!(state.actions.is_empty());
    }

    #[test]
    fn unsnap_without_restore_only_forgets() {
        let config = TestConfig {
            layouts: vec![LayoutManager::generate_from_template(COLUMNS, 2, 0, "Two")],
            restore_size_on_unsnap: false,
            ..TestConfig::default()
        };
        let mut state: State<MockHandle> = State::new(&config);
        state
            .snapper
            .remember_window(WindowHandle(1), "Two", vec![0], Rect::ZERO);

        state.command_handler(&Command::Unsnap {
            window: WindowHandle(1),
        });
        assert!(state.actions.is_empty());
        assert!(state.snapper.memory(&WindowHandle(1)).is_none());
    }

    #[test]
    fn set_layout_switches_and_invalidates_pixel_rects() {
        let mut state = state();
        assert!(state.ensure_zone_pixels());

        state.command_handler(&Command::SetLayout("Four".into()));
        assert_eq!(state.layout_manager.active_layout(), Some("Four"));
        assert_eq!(state.computed_for, None);

        assert!(state.ensure_zone_pixels());
        assert_eq!(state.computed_for.as_deref(), Some("Four"));
    }

    #[test]
    fn cycle_layout_wraps_through_the_set() {
        let mut state = state();
        state.command_handler(&Command::CycleLayout(1));
        assert_eq!(state.layout_manager.active_layout(), Some("Four"));
        state.command_handler(&Command::CycleLayout(1));
        assert_eq!(state.layout_manager.active_layout(), Some("Two"));
    }

    #[test]
    fn overlay_commands_toggle_and_are_idempotent() {
        let mut state = state();
        state.command_handler(&Command::ShowOverlay);
        state.command_handler(&Command::ShowOverlay);
        assert!(state.overlay_visible);
        assert_eq!(state.actions.pop_front(), Some(DisplayAction::ShowOverlay));
        assert!(state.actions.is_empty());

        state.command_handler(&Command::HideOverlay);
        assert!(!state.overlay_visible);
        assert_eq!(state.actions.pop_front(), Some(DisplayAction::HideOverlay));
    }

    #[test]
    fn save_then_load_round_trips_the_layout_set() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("layouts.conf");

        let mut state = state();
        state.command_handler(&Command::SaveLayouts(path.clone()));

        let mut other: State<MockHandle> = State::new(&TestConfig::default());
        other.command_handler(&Command::LoadLayouts(path));
        assert_eq!(other.layout_manager.layouts().len(), 2);
        assert_eq!(other.layout_manager.active_layout(), Some("Two"));
        assert_eq!(
            other.layout_manager.layouts()[1].zones,
            state.layout_manager.layouts()[1].zones,
        );
    }

    #[test]
    fn loading_a_missing_file_keeps_the_current_set() {
        let mut state = state();
        state.command_handler(&Command::LoadLayouts("/nonexistent/layouts.conf".into()));
        assert_eq!(state.layout_manager.layouts().len(), 2);
        assert_eq!(state.layout_manager.active_layout(), Some("Two"));
    }
}
