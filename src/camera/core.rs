use glam::{Mat4, Vec3};

/// Default yaw in degrees (looking down -Z).
pub const YAW: f32 = -90.0;
/// Default pitch in degrees.
pub const PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const SPEED: f32 = 2.5;
/// Default mouse sensitivity in degrees per pixel.
pub const SENSITIVITY: f32 = 0.1;
/// Default (and widest) zoom angle in degrees.
pub const ZOOM: f32 = 45.0;

/// Pitch limit in degrees. Kept short of 90 so `cos(pitch)` never reaches
/// zero and the basis stays well defined.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest zoom angle in degrees.
pub const ZOOM_MIN: f32 = 1.0;
/// Widest zoom angle in degrees.
pub const ZOOM_MAX: f32 = 45.0;

/// Direction of a keyboard-driven camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
}

impl Movement {
    /// All directions, in the order held keys are applied.
    pub const ALL: [Self; 4] =
        [Self::Forward, Self::Backward, Self::Left, Self::Right];
}

/// Free-look perspective camera driven by yaw/pitch angles.
///
/// Input deltas are absorbed through [`process_keyboard`],
/// [`process_mouse_movement`] and [`process_mouse_scroll`]; the renderer
/// reads [`view_matrix`] and [`zoom`] back once per frame.
///
/// [`process_keyboard`]: Self::process_keyboard
/// [`process_mouse_movement`]: Self::process_mouse_movement
/// [`process_mouse_scroll`]: Self::process_mouse_scroll
/// [`view_matrix`]: Self::view_matrix
/// [`zoom`]: Self::zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
}

impl Camera {
    /// Camera at `position` with the default orientation (looking down -Z,
    /// world up = +Y).
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, YAW, PITCH)
    }

    /// Camera with an explicit world-up vector and orientation in degrees.
    #[must_use]
    pub fn with_orientation(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            zoom: ZOOM,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
        };
        camera.update_vectors();
        camera
    }

    /// Override movement speed and mouse sensitivity. Only available while
    /// building the camera.
    #[must_use]
    pub fn with_tuning(
        mut self,
        movement_speed: f32,
        mouse_sensitivity: f32,
    ) -> Self {
        self.movement_speed = movement_speed;
        self.mouse_sensitivity = mouse_sensitivity;
        self
    }

    /// Look-at view matrix (right-handed, column-major).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using [`zoom`](Self::zoom) as the vertical
    /// field of view. Depth maps to `[0, 1]`.
    #[must_use]
    pub fn projection_matrix(
        &self,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, znear, zfar)
    }

    /// Move along the basis. Displacement scales with `delta_time` so speed
    /// does not depend on frame rate.
    pub fn process_keyboard(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            Movement::Forward => self.position += self.front * velocity,
            Movement::Backward => self.position -= self.front * velocity,
            Movement::Left => self.position -= self.right * velocity,
            Movement::Right => self.position += self.right * velocity,
        }
    }

    /// Turn the camera by a cursor offset in pixels.
    ///
    /// With `constrain_pitch`, pitch is clamped to
    /// `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pub fn process_mouse_movement(
        &mut self,
        x_offset: f32,
        y_offset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Scroll up (positive offset) narrows the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front =
            Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos)
                .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Viewing direction (unit length).
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Camera up vector (unit length).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Camera right vector (unit length).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Fixed reference up vector.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field-of-view angle in degrees, within `[ZOOM_MIN, ZOOM_MAX]`.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Movement speed in units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Mouse sensitivity in degrees per pixel.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and eye data.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Field of view in degrees.
    pub zoom: f32,
    /// Camera forward direction.
    pub front: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity view-projection looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            zoom: ZOOM,
            front: [0.0, 0.0, -1.0],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the camera's current state.
    pub fn update_view_proj(
        &mut self,
        camera: &Camera,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) {
        let view_proj = camera.projection_matrix(aspect, znear, zfar)
            * camera.view_matrix();
        self.view_proj = view_proj.to_cols_array_2d();
        self.position = camera.position.to_array();
        self.zoom = camera.zoom;
        self.front = camera.front.to_array();
        self.aspect = aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < EPS, "front not unit: {f}");
        assert!((r.length() - 1.0).abs() < EPS, "right not unit: {r}");
        assert!((u.length() - 1.0).abs() < EPS, "up not unit: {u}");
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    fn spherical_front(yaw: f32, pitch: f32) -> Vec3 {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    #[test]
    fn explicit_orientation_builds_basis() {
        let position = Vec3::new(1.0, -2.0, 4.0);
        let camera = Camera::with_orientation(position, Vec3::Y, 0.0, 30.0);

        assert_eq!(camera.position(), position);
        assert_eq!(camera.yaw(), 0.0);
        assert_eq!(camera.pitch(), 30.0);
        assert_eq!(camera.world_up(), Vec3::Y);
        assert!(camera.front().abs_diff_eq(spherical_front(0.0, 30.0), EPS));
        assert!(camera
            .front()
            .abs_diff_eq(Vec3::new(3.0_f32.sqrt() / 2.0, 0.5, 0.0), EPS));
        assert!(camera.right().abs_diff_eq(Vec3::Z, EPS));
        assert_orthonormal(&camera);
    }

    #[test]
    fn explicit_world_up_drives_right_vector() {
        let camera =
            Camera::with_orientation(Vec3::ZERO, Vec3::Z, 0.0, 30.0);
        let front = spherical_front(0.0, 30.0);

        assert_eq!(camera.world_up(), Vec3::Z);
        assert!(camera.front().abs_diff_eq(front, EPS));
        assert!(camera
            .right()
            .abs_diff_eq(front.cross(Vec3::Z).normalize(), EPS));
        assert!(camera
            .up()
            .abs_diff_eq(camera.right().cross(front).normalize(), EPS));
        assert_orthonormal(&camera);
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(camera.zoom(), ZOOM);
        assert_eq!(camera.yaw(), YAW);
        assert_eq!(camera.pitch(), PITCH);
    }

    #[test]
    fn view_matrix_matches_look_at() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::Y,
        );
        assert!(camera.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn forward_then_backward_returns_home() {
        let start = Vec3::new(1.0, -2.0, 3.0);
        let mut camera = Camera::new(start);
        camera.process_mouse_movement(37.0, -12.0, true);
        camera.process_keyboard(Movement::Forward, 0.25);
        assert!(!camera.position().abs_diff_eq(start, EPS));
        camera.process_keyboard(Movement::Backward, 0.25);
        assert!(camera.position().abs_diff_eq(start, EPS));
    }

    #[test]
    fn strafing_moves_along_right() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(Movement::Right, 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(SPEED, 0.0, 0.0), EPS));
        camera.process_keyboard(Movement::Left, 2.0);
        assert!(camera
            .position()
            .abs_diff_eq(Vec3::new(-SPEED, 0.0, 0.0), EPS));
    }

    #[test]
    fn displacement_is_linear_in_delta_time() {
        let mut a = Camera::new(Vec3::ZERO);
        let mut b = Camera::new(Vec3::ZERO);
        a.process_keyboard(Movement::Forward, 0.016);
        b.process_keyboard(Movement::Forward, 0.032);
        let ratio = b.position().length() / a.position().length();
        assert!((ratio - 2.0).abs() < 1e-4);
    }

    #[test]
    fn zero_delta_time_does_not_move() {
        let mut camera = Camera::default();
        let before = camera.position();
        camera.process_keyboard(Movement::Left, 0.0);
        assert_eq!(camera.position(), before);
    }

    #[test]
    fn pitch_is_clamped_when_constrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        camera.process_mouse_movement(0.0, -50_000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);

        for step in [-300.0, 12.5, 999.0, -0.5, 640.0, -1280.0] {
            camera.process_mouse_movement(step * 0.3, step, true);
            assert!(camera.pitch().abs() <= PITCH_LIMIT);
        }
    }

    #[test]
    fn pitch_is_free_when_unconstrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 1000.0, false);
        assert!((camera.pitch() - 100.0).abs() < EPS);
    }

    #[test]
    fn basis_stays_orthonormal_after_mouse_moves() {
        let mut camera = Camera::default();
        let moves = [
            (10.0, 4.0),
            (-250.0, 35.0),
            (0.5, -899.0),
            (1234.0, 600.0),
            (-3.0, -3.0),
        ];
        for (x, y) in moves {
            camera.process_mouse_movement(x, y, true);
            assert_orthonormal(&camera);
        }
        assert!(camera.world_up().abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn yaw_turns_toward_positive_x() {
        let mut camera = Camera::default();
        // 900 px * 0.1 deg/px = 90 degrees: yaw -90 -> 0
        camera.process_mouse_movement(900.0, 0.0, true);
        assert!(camera.front().abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn zoom_saturates_at_bounds() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(-10.0);
        camera.process_mouse_scroll(-10.0);
        assert_eq!(camera.zoom(), ZOOM_MAX);

        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom(), ZOOM_MIN);

        for delta in [3.0, -7.5, 0.25, 44.0, -90.0, 12.0] {
            camera.process_mouse_scroll(delta);
            assert!((ZOOM_MIN..=ZOOM_MAX).contains(&camera.zoom()));
        }
    }

    #[test]
    fn scroll_up_narrows_field_of_view() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(5.0);
        assert_eq!(camera.zoom(), 40.0);
    }

    #[test]
    fn tuning_scales_motion() {
        let mut camera =
            Camera::new(Vec3::ZERO).with_tuning(10.0, SENSITIVITY);
        camera.process_keyboard(Movement::Forward, 0.5);
        assert!(camera
            .position()
            .abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-4));
        assert_eq!(camera.movement_speed(), 10.0);
    }

    #[test]
    fn uniform_tracks_camera() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(15.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera, 4.0 / 3.0, 0.1, 100.0);

        let projection =
            Mat4::perspective_rh(30.0_f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
        let expected = projection * camera.view_matrix();
        assert!(Mat4::from_cols_array_2d(&uniform.view_proj)
            .abs_diff_eq(expected, EPS));
        assert_eq!(uniform.position, [0.0, 0.0, 3.0]);
        assert_eq!(uniform.zoom, 30.0);
    }
}
