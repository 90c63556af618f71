//! Converts raw platform events into demo commands.
//!
//! The `InputProcessor` owns all transient input state (last cursor
//! position, held movement keys) and the key-binding map. It is the only
//! thing that sits between raw window events and
//! [`DemoEngine::execute`](crate::engine::DemoEngine::execute).

use rustc_hash::FxHashSet;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::camera::Movement;
use crate::engine::DemoCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`DemoCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     engine.execute(cmd);
/// }
/// for movement in input_processor.held_movements() {
///     camera.process_keyboard(movement, dt);
/// }
/// ```
pub struct InputProcessor {
    /// Last absolute cursor position; `None` until the first sample.
    last_cursor: Option<(f32, f32)>,
    /// Movement directions whose keys are currently down.
    held: FxHashSet<Movement>,
    /// Key → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            last_cursor: None,
            held: FxHashSet::default(),
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Forget the last cursor position so the next sample does not produce
    /// a jump (e.g. after the window regains focus).
    pub fn reset_cursor(&mut self) {
        self.last_cursor = None;
    }

    /// Release every held movement key.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Whether a movement key is currently held.
    #[must_use]
    pub fn is_held(&self, movement: Movement) -> bool {
        self.held.contains(&movement)
    }

    /// Held movement directions in application order.
    pub fn held_movements(&self) -> impl Iterator<Item = Movement> + '_ {
        Movement::ALL.into_iter().filter(|m| self.held.contains(m))
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<DemoCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(*x, *y)
            }
            InputEvent::MouseMotion { dx, dy } => Some(DemoCommand::Look {
                x_offset: *dx,
                y_offset: -*dy,
            }),
            InputEvent::Scroll { delta } => {
                Some(DemoCommand::Zoom { delta: *delta })
            }
            InputEvent::Key { key, pressed } => self.handle_key(key, *pressed),
        }
    }

    /// Cursor moved: offset from the last sample, y reversed since screen
    /// y grows downward.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<DemoCommand> {
        let last = self.last_cursor.replace((x, y));
        let (last_x, last_y) = last?;
        Some(DemoCommand::Look {
            x_offset: x - last_x,
            y_offset: last_y - y,
        })
    }

    fn handle_key(&mut self, key: &str, pressed: bool) -> Option<DemoCommand> {
        let action = self.key_bindings.lookup(key)?;

        if let Some(movement) = action.movement() {
            if pressed {
                let _ = self.held.insert(movement);
            } else {
                let _ = self.held.remove(&movement);
            }
            return None;
        }

        if !pressed {
            return None;
        }
        match action {
            KeyAction::CycleDemo => Some(DemoCommand::CycleDemo),
            KeyAction::Exit => Some(DemoCommand::Exit),
            KeyAction::MoveForward
            | KeyAction::MoveBackward
            | KeyAction::MoveLeft
            | KeyAction::MoveRight => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: name.to_owned(),
            pressed,
        }
    }

    #[test]
    fn first_cursor_sample_only_primes_position() {
        let mut processor = InputProcessor::new();
        let first = InputEvent::CursorMoved { x: 400.0, y: 300.0 };
        assert_eq!(processor.handle_event(&first), None);

        let next = InputEvent::CursorMoved { x: 410.0, y: 295.0 };
        let cmd = processor.handle_event(&next);
        assert_eq!(
            cmd,
            Some(DemoCommand::Look {
                x_offset: 10.0,
                y_offset: 5.0
            })
        );
    }

    #[test]
    fn reset_cursor_suppresses_jump() {
        let mut processor = InputProcessor::new();
        let origin = InputEvent::CursorMoved { x: 0.0, y: 0.0 };
        let _ = processor.handle_event(&origin);
        processor.reset_cursor();
        let far = InputEvent::CursorMoved { x: 900.0, y: 700.0 };
        let cmd = processor.handle_event(&far);
        assert_eq!(cmd, None);
    }

    #[test]
    fn raw_motion_flips_vertical_axis() {
        let mut processor = InputProcessor::new();
        let motion = InputEvent::MouseMotion { dx: -3.0, dy: 4.0 };
        let cmd = processor.handle_event(&motion);
        assert_eq!(
            cmd,
            Some(DemoCommand::Look {
                x_offset: -3.0,
                y_offset: -4.0
            })
        );
    }

    #[test]
    fn scroll_becomes_zoom() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(&InputEvent::Scroll { delta: 1.5 }),
            Some(DemoCommand::Zoom { delta: 1.5 })
        );
    }

    #[test]
    fn movement_keys_track_held_state() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.handle_event(&key("KeyD", true)), None);
        assert_eq!(processor.handle_event(&key("KeyW", true)), None);
        assert_eq!(
            processor.held_movements().collect::<Vec<_>>(),
            vec![Movement::Forward, Movement::Right]
        );

        let _ = processor.handle_event(&key("KeyW", false));
        assert!(!processor.is_held(Movement::Forward));
        assert!(processor.is_held(Movement::Right));

        processor.release_all();
        assert_eq!(processor.held_movements().count(), 0);
    }

    #[test]
    fn discrete_actions_fire_on_press_only() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(&key("Escape", true)),
            Some(DemoCommand::Exit)
        );
        assert_eq!(processor.handle_event(&key("Escape", false)), None);
        assert_eq!(
            processor.handle_event(&key("Tab", true)),
            Some(DemoCommand::CycleDemo)
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.handle_event(&key("KeyZ", true)), None);
        assert_eq!(processor.held_movements().count(), 0);
    }
}
