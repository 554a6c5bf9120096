use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `TogglePlayback` → `"Space"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::TogglePlayback, "Space".into()),
            (KeyAction::Restart, "Home".into()),
            (KeyAction::StepForward, "ArrowRight".into()),
            (KeyAction::StepBack, "ArrowLeft".into()),
            (KeyAction::Cancel, "Escape".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string.
    ///
    /// Unambiguous once [`duplicate_key`](Self::duplicate_key) is `None`,
    /// which [`Options::validate`](super::Options::validate) enforces.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find_map(|(action, bound)| (bound == key).then_some(*action))
    }

    /// A key bound to more than one action, if any.
    #[must_use]
    pub fn duplicate_key(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.bindings
            .values()
            .find(|key| !seen.insert(key.as_str()))
            .map(String::as_str)
    }
}
