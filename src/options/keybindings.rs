use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::MoveAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping directional actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key code strings (e.g. `Forward` → `["ArrowUp",
    /// "KeyZ"]`). A key bound to several actions resolves to the first in
    /// action order.
    pub bindings: BTreeMap<MoveAction, Vec<String>>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let keys = |codes: &[&str]| -> Vec<String> {
            codes.iter().map(|&c| c.to_owned()).collect()
        };
        // Arrows, AZERTY ZQSD and QWERTY WASD.
        let bindings = BTreeMap::from([
            (MoveAction::Forward, keys(&["ArrowUp", "KeyZ", "KeyW"])),
            (MoveAction::Backward, keys(&["ArrowDown", "KeyS"])),
            (MoveAction::Left, keys(&["ArrowLeft", "KeyQ", "KeyA"])),
            (MoveAction::Right, keys(&["ArrowRight", "KeyD"])),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Arrow keys only.
    #[must_use]
    pub fn arrows() -> Self {
        let bindings = BTreeMap::from([
            (MoveAction::Forward, vec!["ArrowUp".to_owned()]),
            (MoveAction::Backward, vec!["ArrowDown".to_owned()]),
            (MoveAction::Left, vec!["ArrowLeft".to_owned()]),
            (MoveAction::Right, vec!["ArrowRight".to_owned()]),
        ]);
        Self { bindings }
    }

    /// Whether `code` is bound to any action.
    #[must_use]
    pub fn handles(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Look up the action for a key code.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<MoveAction> {
        self.bindings
            .iter()
            .find(|(_, codes)| codes.iter().any(|c| c == code))
            .map(|(action, _)| *action)
    }

    /// Bind `code` to `action` in addition to its existing keys.
    pub fn bind(&mut self, action: MoveAction, code: &str) {
        let codes = self.bindings.entry(action).or_default();
        if !codes.iter().any(|c| c == code) {
            codes.push(code.to_owned());
        }
    }
}
