use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Configurable keyboard bindings mapping key codes to actions.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Tab"`, `"Escape"`, etc. Several keys may share one action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Maps key string → action (e.g. `"KeyW"` → `MoveForward`).
    pub bindings: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = [
            ("KeyW", KeyAction::MoveForward),
            ("KeyS", KeyAction::MoveBackward),
            ("KeyA", KeyAction::MoveLeft),
            ("KeyD", KeyAction::MoveRight),
            ("Tab", KeyAction::CycleDemo),
            ("Escape", KeyAction::Exit),
        ]
        .into_iter()
        .map(|(key, action)| (key.to_owned(), action))
        .collect();
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, replacing whatever the key did before.
    pub fn bind(&mut self, key: impl Into<String>, action: KeyAction) {
        let _ = self.bindings.insert(key.into(), action);
    }

    /// Remove the binding for `key`, returning the action it triggered.
    pub fn unbind(&mut self, key: &str) -> Option<KeyAction> {
        self.bindings.remove(key)
    }
}
