//! Pointer motion while a drag is in flight: candidate zone tracking,
//! range selection and mid-drag arm/disarm on modifier changes.
use crate::models::Handle;
use crate::state::State;
use crate::utils::modifiers::Modifiers;
use crate::DisplayAction;

impl<H: Handle> State<H> {
    pub fn mouse_move_handler(&mut self, x: f64, y: f64, mods: Modifiers) -> bool {
        if !self.drag.is_dragging {
            return false;
        }

        self.drag.current_x = x;
        self.drag.current_y = y;
        self.drag.multi_select_held = mods.contains(Modifiers::Ctrl);

        let modifier_held = self.snap_modifier.is_held(mods);
        if modifier_held != self.drag.modifier_held {
            self.drag.modifier_held = modifier_held;
            if self.require_modifier {
                if modifier_held {
                    // Re-armed mid-drag; the selection anchor moves to the
                    // pointer's current position.
                    if self.show_on_drag && !self.drag.is_zone_snapping {
                        self.arm_zone_snapping(x, y);
                    }
                } else if self.drag.is_zone_snapping {
                    self.disarm_zone_snapping();
                    return true;
                }
            }
        }

        if !self.drag.is_zone_snapping {
            return false;
        }

        if !self.ensure_zone_pixels() {
            // The layout set changed under us; snapping stays off until
            // something resolves again.
            self.drag.current_zone = None;
            self.drag.selected_zones.clear();
            return true;
        }

        let Some(layout) = self.resolved_layout() else {
            return false;
        };
        let current = layout.smallest_zone_at(x, y);

        let multi = self.allow_multi_zone && self.drag.multi_select_held;
        let selected = match (multi, self.drag.start_zone, current) {
            (true, Some(start), Some(end)) => layout.zone_range(start, end),
            (_, _, Some(current)) => vec![current],
            _ => Vec::new(),
        };
        self.drag.current_zone = current;
        self.drag.selected_zones = selected;

        true
    }

    pub(crate) fn disarm_zone_snapping(&mut self) {
        self.drag.is_zone_snapping = false;
        self.drag.start_zone = None;
        self.drag.current_zone = None;
        self.drag.selected_zones.clear();
        if self.overlay_visible {
            self.overlay_visible = false;
            self.actions.push_back(DisplayAction::HideOverlay);
        }
    }
}
