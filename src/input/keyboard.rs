use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Movement;

/// Demo actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "move_forward"
/// Escape = "exit"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the view direction while held.
    MoveForward,
    /// Move against the view direction while held.
    MoveBackward,
    /// Strafe left while held.
    MoveLeft,
    /// Strafe right while held.
    MoveRight,
    /// Switch to the next demo scene.
    CycleDemo,
    /// Close the window.
    Exit,
}

impl KeyAction {
    /// The camera movement a held key drives, if any.
    #[must_use]
    pub fn movement(self) -> Option<Movement> {
        match self {
            Self::MoveForward => Some(Movement::Forward),
            Self::MoveBackward => Some(Movement::Backward),
            Self::MoveLeft => Some(Movement::Left),
            Self::MoveRight => Some(Movement::Right),
            Self::CycleDemo | Self::Exit => None,
        }
    }
}
