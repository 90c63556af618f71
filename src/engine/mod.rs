//! Demo application state.
//!
//! [`DemoEngine`] owns the camera, input processor, frame timer and scene
//! for one window. The render-loop driver passes it input events, calls
//! [`DemoEngine::tick`] once per frame, and hands the resulting [`Frame`] to
//! the renderer. Nothing here touches the GPU, so the whole loop can be
//! exercised headless.

/// Command vocabulary.
pub mod command;

use glam::Vec3;

pub use command::DemoCommand;

use crate::camera::{Camera, CameraUniform};
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::scene::lights::LightingUniform;
use crate::scene::{DemoKind, Instance, InstanceRaw, Scene};
use crate::util::FrameTiming;

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Demo being drawn.
    pub demo: DemoKind,
    /// Camera matrices and eye data.
    pub camera: CameraUniform,
    /// Scene cubes.
    pub cubes: Vec<InstanceRaw>,
    /// Lamp markers (lighting demo only).
    pub lamps: Vec<InstanceRaw>,
    /// Light set; only read by the lighting demo.
    pub lighting: LightingUniform,
    /// Background clear color.
    pub clear_color: [f32; 3],
}

/// Owns all per-window demo state.
pub struct DemoEngine {
    camera: Camera,
    input: InputProcessor,
    timing: FrameTiming,
    scene: Scene,
    options: Options,
    /// Seconds of scene time accumulated through [`update`](Self::update).
    elapsed: f32,
    exit_requested: bool,
}

impl DemoEngine {
    /// Build the engine from options: camera at the configured start
    /// position, scene and key bindings from their sections.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let camera = Self::initial_camera(&options);
        Self {
            camera,
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            timing: FrameTiming::new(options.window.target_fps)
                .with_max_delta(options.window.max_frame_delta),
            scene: Scene::new(&options.demo),
            options,
            elapsed: 0.0,
            exit_requested: false,
        }
    }

    fn initial_camera(options: &Options) -> Camera {
        Camera::new(Vec3::from_array(options.camera.start_position))
            .with_tuning(
                options.camera.movement_speed,
                options.camera.mouse_sensitivity,
            )
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Mutable input processor, e.g. to reset cursor tracking on focus
    /// changes.
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }

    /// Current demo.
    #[must_use]
    pub fn demo(&self) -> DemoKind {
        self.scene.kind()
    }

    /// Scene time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Whether the frame limiter allows drawing now.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.timing.should_render()
    }

    /// Whether an [`DemoCommand::Exit`] has been executed.
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Process a platform-agnostic input event.
    ///
    /// Returns `true` if the event produced a command.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(cmd) => {
                self.execute(cmd);
                true
            }
            None => false,
        }
    }

    /// Apply one command to the demo state.
    pub fn execute(&mut self, cmd: DemoCommand) {
        match cmd {
            DemoCommand::Look { x_offset, y_offset } => {
                self.camera.process_mouse_movement(
                    x_offset,
                    y_offset,
                    self.options.camera.constrain_pitch,
                );
            }
            DemoCommand::Zoom { delta } => {
                self.camera.process_mouse_scroll(delta);
                log::trace!("zoom {:.1}°", self.camera.zoom());
            }
            DemoCommand::CycleDemo => {
                let next = self.scene.kind().next();
                self.scene.set_kind(next);
                log::info!("switched to {next} demo");
            }
            DemoCommand::Exit => {
                log::debug!("exit requested");
                self.exit_requested = true;
            }
        }
    }

    /// Advance by `dt` seconds: move the camera for every held key and
    /// run the scene clock.
    pub fn update(&mut self, dt: f32) {
        for movement in self.input.held_movements() {
            self.camera.process_keyboard(movement, dt);
        }
        self.elapsed += dt;
    }

    /// Measure the frame time, [`update`](Self::update) with it, and
    /// return it.
    pub fn tick(&mut self) -> f32 {
        let dt = self.timing.tick();
        self.update(dt);
        dt
    }

    /// Snapshot the state for drawing at the given viewport aspect ratio.
    #[must_use]
    pub fn frame(&self, aspect: f32) -> Frame {
        let mut camera = CameraUniform::new();
        camera.update_view_proj(
            &self.camera,
            aspect,
            self.options.camera.znear,
            self.options.camera.zfar,
        );

        let lighting = match self.scene.kind() {
            DemoKind::Lighting => {
                LightingUniform::build(&self.options.lighting, &self.camera)
            }
            DemoKind::Cubes => LightingUniform::default(),
        };

        Frame {
            demo: self.scene.kind(),
            camera,
            cubes: self
                .scene
                .cubes(self.elapsed)
                .iter()
                .map(Instance::to_raw)
                .collect(),
            lamps: self
                .scene
                .lamps(&self.options.lighting)
                .iter()
                .map(Instance::to_raw)
                .collect(),
            lighting,
            clear_color: self.scene.clear_color(),
        }
    }
}

impl Default for DemoEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
