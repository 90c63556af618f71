//! Standalone demo window backed by winit.
//!
//! ```no_run
//! # use lumen::viewer::Viewer;
//! # use lumen::scene::DemoKind;
//! Viewer::builder()
//!     .with_demo(DemoKind::Lighting)
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    engine::DemoEngine, error::LumenError, gpu::render_context::RenderContext,
    input::InputEvent, options::Options, renderer::SceneRenderer,
    scene::DemoKind,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Replace the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Start on the given demo.
    #[must_use]
    pub fn with_demo(mut self, demo: DemoKind) -> Self {
        self.options.demo.kind = demo;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.window.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window running one demo at a time.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the exit key is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Viewer`] if the event loop cannot be created
    /// or fails while running.
    pub fn run(self) -> Result<(), LumenError> {
        let event_loop =
            EventLoop::new().map_err(|e| LumenError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            gpu: None,
            cursor_grabbed: false,
            engine: DemoEngine::new(self.options),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| LumenError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct GpuState {
    context: RenderContext,
    renderer: SceneRenderer,
}

impl GpuState {
    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.context.resize(size.width, size.height);
        self.renderer.resize(&self.context);
    }
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    /// Mouse look comes from raw device motion while grabbed, from cursor
    /// positions otherwise.
    cursor_grabbed: bool,
    engine: DemoEngine,
}

impl ViewerApp {
    fn set_cursor_grab(&mut self, grab: bool) {
        let Some(window) = &self.window else {
            return;
        };
        if !grab {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
            self.cursor_grabbed = false;
            return;
        }
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.cursor_grabbed = true;
            }
            Err(e) => {
                log::warn!(
                    "cursor grab unavailable, using cursor positions: {e}"
                );
                self.cursor_grabbed = false;
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu)) = (&self.window, &mut self.gpu) else {
            return;
        };
        if !self.engine.should_render() {
            window.request_redraw();
            return;
        }

        let _ = self.engine.tick();
        if self.engine.exit_requested() {
            event_loop.exit();
            return;
        }

        let frame = self.engine.frame(gpu.context.aspect());
        match gpu.renderer.render(&gpu.context, &frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                gpu.resize(window.inner_size());
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
        window.request_redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_options = &self.engine.options().window;
        let attrs = Window::default_attributes()
            .with_title(&window_options.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_options.width,
                window_options.height,
            ));
        let grab = window_options.grab_cursor;

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let context = match pollster::block_on(RenderContext::new(
            Arc::clone(&window),
            (inner.width, inner.height),
        )) {
            Ok(context) => context,
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };
        let renderer = SceneRenderer::new(&context);
        log::info!(
            "{}x{} window, {} demo",
            inner.width,
            inner.height,
            self.engine.demo()
        );

        self.gpu = Some(GpuState { context, renderer });
        self.window = Some(window);
        self.set_cursor_grab(grab);
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::Focused(focused) => {
                // Stale cursor and key state would jump or drift the camera.
                let input = self.engine.input_mut();
                input.reset_cursor();
                input.release_all();
                if self.engine.options().window.grab_cursor {
                    self.set_cursor_grab(focused);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if !self.cursor_grabbed {
                    let _ = self.engine.handle_input(&InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let _ = self
                    .engine
                    .handle_input(&InputEvent::from_scroll_delta(delta));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let Some(input) = InputEvent::from_key_event(&event) {
                    let _ = self.engine.handle_input(&input);
                }
                if self.engine.exit_requested() {
                    event_loop.exit();
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if !self.cursor_grabbed {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            let _ = self.engine.handle_input(&InputEvent::MouseMotion {
                dx: dx as f32,
                dy: dy as f32,
            });
        }
    }
}
