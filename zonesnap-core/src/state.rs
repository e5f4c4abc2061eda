//! The session object owning all mutable tiling state.
//!
//! Everything here is driven synchronously from the host's event-dispatch
//! thread; a host that can deliver events from several threads must wrap
//! the whole [`State`] in one mutex.
use std::collections::VecDeque;

use crate::config::Config;
use crate::layouts::LayoutManager;
use crate::models::dto::{LayoutInfo, OverlayState, ZoneView};
use crate::models::{DragState, Handle, Layout, Screen, WindowSnapper};
use crate::utils::modifiers::ModKey;
use crate::DisplayAction;

pub struct State<H: Handle> {
    pub layout_manager: LayoutManager,
    pub snapper: WindowSnapper<H>,
    pub drag: DragState<H>,
    /// Monitor context the next resolution runs against.
    pub screen: Screen,
    /// Actions for the host to drain and apply after each handled event.
    pub actions: VecDeque<DisplayAction<H>>,
    pub overlay_visible: bool,
    /// Name of the layout whose pixel rects are current; pixel rects are
    /// recomputed only when this no longer matches the resolved layout.
    pub(crate) computed_for: Option<String>,

    pub snap_modifier: ModKey,
    pub show_on_drag: bool,
    pub require_modifier: bool,
    pub allow_multi_zone: bool,
    pub restore_size_on_unsnap: bool,
}

impl<H: Handle> State<H> {
    pub fn new(config: &impl Config) -> Self {
        Self {
            layout_manager: LayoutManager::new(config),
            snapper: WindowSnapper::new(),
            drag: DragState::default(),
            screen: Screen::default(),
            actions: VecDeque::new(),
            overlay_visible: false,
            computed_for: None,
            snap_modifier: config.snap_modifier(),
            show_on_drag: config.show_on_drag(),
            require_modifier: config.require_modifier(),
            allow_multi_zone: config.allow_multi_zone(),
            restore_size_on_unsnap: config.restore_size_on_unsnap(),
        }
    }

    /// Re-read layouts, mappings and policy from the config, keeping window
    /// memory and any drag in progress. The pixel cache is invalidated so
    /// the next pass recomputes against the new definitions.
    pub fn reload_config(&mut self, config: &impl Config) {
        self.layout_manager = LayoutManager::new(config);
        self.computed_for = None;
        self.snap_modifier = config.snap_modifier();
        self.show_on_drag = config.show_on_drag();
        self.require_modifier = config.require_modifier();
        self.allow_multi_zone = config.allow_multi_zone();
        self.restore_size_on_unsnap = config.restore_size_on_unsnap();
    }

    /// Resolve the layout for the current screen and make sure its pixel
    /// rects are up to date. Returns false when no layout resolves.
    pub(crate) fn ensure_zone_pixels(&mut self) -> bool {
        let monitor = self.screen.rect;
        let Some(layout) = self
            .layout_manager
            .layout_for_mut(&self.screen.name, self.screen.workspace)
        else {
            return false;
        };
        if self.computed_for.as_deref() != Some(layout.name.as_str()) {
            layout.compute_pixel_rects(monitor);
            self.computed_for = Some(layout.name.clone());
        }
        true
    }

    /// The layout the current screen resolves to, read-only.
    #[must_use]
    pub fn resolved_layout(&self) -> Option<&Layout> {
        self.layout_manager
            .layout_for(&self.screen.name, self.screen.workspace)
    }

    /// Read model for the overlay renderer. Pure read: pixel rects are
    /// whatever the last event-side computation produced.
    #[must_use]
    pub fn overlay_state(&self) -> OverlayState {
        let layout = self.resolved_layout();
        OverlayState {
            visible: self.overlay_visible,
            layout: layout.map(|layout| layout.name.clone()),
            zones: layout
                .map(|layout| {
                    layout
                        .zones
                        .iter()
                        .map(|zone| ZoneView {
                            name: zone.name.clone(),
                            index: zone.index,
                            rect: zone.pixel,
                            selected: self.drag.selected_zones.contains(&zone.index),
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Read model for the IPC layout listing.
    #[must_use]
    pub fn layout_list(&self) -> Vec<LayoutInfo> {
        let active = self.layout_manager.active_layout();
        self.layout_manager
            .layouts()
            .iter()
            .map(|layout| LayoutInfo {
                name: layout.name.clone(),
                zone_count: layout.zones.len(),
                active: active == Some(layout.name.as_str()),
            })
            .collect()
    }

    /// The overlay read model as JSON, for hosts that ship it over IPC.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn overlay_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string(&self.overlay_state())?)
    }
}
