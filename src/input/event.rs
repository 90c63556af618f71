/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`DemoCommand`](crate::engine::DemoCommand) values.
///
/// # Example
///
/// ```
/// # use lumen::input::{InputEvent, InputProcessor};
/// let mut processor = InputProcessor::new();
/// let first = InputEvent::CursorMoved { x: 400.0, y: 300.0 };
/// let _ = processor.handle_event(&first);
/// let next = InputEvent::CursorMoved { x: 410.0, y: 300.0 };
/// let look = processor.handle_event(&next);
/// assert!(look.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (grows downward).
        y: f32,
    },
    /// Raw relative mouse motion, reported while the cursor is grabbed.
    MouseMotion {
        /// Horizontal motion in pixels.
        dx: f32,
        /// Vertical motion in pixels (positive = downward).
        dy: f32,
    },
    /// Scroll wheel (positive = scroll up = zoom in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Key pressed or released.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug format, e.g.
        /// `"KeyW"` or `"Escape"`.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit keyboard event. Keys without a physical code are
    /// dropped.
    #[must_use]
    pub fn from_key_event(event: &winit::event::KeyEvent) -> Option<Self> {
        use winit::keyboard::PhysicalKey;

        match event.physical_key {
            PhysicalKey::Code(code) => Some(Self::Key {
                key: format!("{code:?}"),
                pressed: event.state == winit::event::ElementState::Pressed,
            }),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Translate a winit scroll delta. Pixel deltas (touchpads) are scaled
    /// down to roughly one line per hundred pixels.
    #[must_use]
    pub fn from_scroll_delta(delta: winit::event::MouseScrollDelta) -> Self {
        let delta = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => y,
            winit::event::MouseScrollDelta::PixelDelta(pos) => {
                pos.y as f32 * 0.01
            }
        };
        Self::Scroll { delta }
    }
}
