//! Modifier key state as delivered by the host with pointer events.
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const Shift = 1;
        const Ctrl = 1 << 1;
        const Alt = 1 << 2;
        const Super = 1 << 3;
    }
}

/// The modifier configured to arm zone snapping during a drag.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModKey {
    #[default]
    Shift,
    Ctrl,
    Alt,
    Super,
}

impl ModKey {
    /// Parse a configured modifier name; accepts the common aliases.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "SHIFT" => Some(Self::Shift),
            "CTRL" | "CONTROL" => Some(Self::Ctrl),
            "ALT" => Some(Self::Alt),
            "SUPER" | "META" => Some(Self::Super),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_held(self, mods: Modifiers) -> bool {
        match self {
            Self::Shift => mods.contains(Modifiers::Shift),
            Self::Ctrl => mods.contains(Modifiers::Ctrl),
            Self::Alt => mods.contains(Modifiers::Alt),
            Self::Super => mods.contains(Modifiers::Super),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively_with_aliases() {
        assert_eq!(ModKey::from_name("shift"), Some(ModKey::Shift));
        assert_eq!(ModKey::from_name("CONTROL"), Some(ModKey::Ctrl));
        assert_eq!(ModKey::from_name("Meta"), Some(ModKey::Super));
        assert_eq!(ModKey::from_name("Hyper"), None);
    }

    #[test]
    fn is_held_checks_only_its_own_bit() {
        let mods = Modifiers::Shift | Modifiers::Ctrl;
        assert!(ModKey::Shift.is_held(mods));
        assert!(ModKey::Ctrl.is_held(mods));
        assert!(!ModKey::Alt.is_held(mods));
    }
}
