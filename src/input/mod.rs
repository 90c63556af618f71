//! Input handling: event types, key actions, and the input processor that
//! converts raw window events into demo commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into demo commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
