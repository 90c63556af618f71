//! Fixed demo scenes.
//!
//! Every demo draws the same ten cubes; the lighting demo shades them with
//! Phong lighting and adds lamp cubes at the point-light positions.

/// Phong light set and its GPU layout.
pub mod lights;
/// Procedural cube mesh.
pub mod mesh;

use std::fmt;
use std::str::FromStr;

use glam::{Mat3, Mat4, Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::{DemoOptions, LightingOptions};
use lights::POINT_LIGHT_POSITIONS;

/// World-space cube placements shared by every demo.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Rotation axis (before normalization) every cube turns around.
pub const CUBE_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);
/// Rest angle step between consecutive cubes, in degrees.
pub const CUBE_ANGLE_STEP: f32 = 20.0;
/// Edge length of the lamp markers.
pub const LAMP_SCALE: f32 = 0.2;

const CUBE_COLOR: Vec3 = Vec3::new(0.85, 0.62, 0.38);

/// Which demo scene is shown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DemoKind {
    /// Checker-shaded cubes without lighting.
    #[default]
    Cubes,
    /// Phong-lit cubes with directional, point and spot lights.
    Lighting,
}

impl DemoKind {
    /// Every demo, in cycling order.
    pub const ALL: [Self; 2] = [Self::Cubes, Self::Lighting];

    /// The demo after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Cubes => Self::Lighting,
            Self::Lighting => Self::Cubes,
        }
    }

    /// Lower-case name, as used on the command line and in TOML.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cubes => "cubes",
            Self::Lighting => "lighting",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown demo '{s}' (expected cubes or lighting)")
            })
    }
}

/// One drawn cube: model transform and base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    /// Object-to-world transform.
    pub model: Mat4,
    /// Base color (linear RGB).
    pub color: Vec3,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-instance vertex data. 112 bytes.
pub struct InstanceRaw {
    /// Model matrix columns.
    pub model: [[f32; 4]; 4],
    /// Normal matrix columns (inverse transpose of the model's 3×3 part).
    pub normal: [[f32; 3]; 3],
    /// Base color.
    pub color: [f32; 3],
}

impl Instance {
    /// Pack for upload. Non-invertible models (zero scale) get an identity
    /// normal matrix.
    #[must_use]
    pub fn to_raw(&self) -> InstanceRaw {
        let linear = Mat3::from_mat4(self.model);
        let normal = if linear.determinant().abs() > f32::EPSILON {
            linear.inverse().transpose()
        } else {
            Mat3::IDENTITY
        };
        InstanceRaw {
            model: self.model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
            color: self.color.to_array(),
        }
    }
}

/// Model matrix of cube `index` after `elapsed` seconds: translate to its
/// slot, then rotate `20°·index + spin·elapsed` about [`CUBE_AXIS`].
#[must_use]
pub fn cube_model(index: usize, elapsed: f32, spin: f32) -> Mat4 {
    let position = CUBE_POSITIONS[index % CUBE_POSITIONS.len()];
    let angle = CUBE_ANGLE_STEP * index as f32 + spin * elapsed;
    Mat4::from_translation(position)
        * Mat4::from_axis_angle(CUBE_AXIS.normalize(), angle.to_radians())
}

/// The active demo and its animation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    kind: DemoKind,
    cube_spin: f32,
    clear_color: [f32; 3],
}

impl Scene {
    /// Scene described by the demo options.
    #[must_use]
    pub fn new(options: &DemoOptions) -> Self {
        Self {
            kind: options.kind,
            cube_spin: options.cube_spin,
            clear_color: options.clear_color,
        }
    }

    /// Current demo.
    #[must_use]
    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    /// Switch demo.
    pub fn set_kind(&mut self, kind: DemoKind) {
        self.kind = kind;
    }

    /// Background clear color.
    #[must_use]
    pub fn clear_color(&self) -> [f32; 3] {
        self.clear_color
    }

    /// The ten cubes at time `elapsed`.
    #[must_use]
    pub fn cubes(&self, elapsed: f32) -> Vec<Instance> {
        (0..CUBE_POSITIONS.len())
            .map(|i| Instance {
                model: cube_model(i, elapsed, self.cube_spin),
                color: CUBE_COLOR,
            })
            .collect()
    }

    /// Lamp markers at the point lights. Empty unless the lighting demo is
    /// active.
    #[must_use]
    pub fn lamps(&self, lighting: &LightingOptions) -> Vec<Instance> {
        if self.kind != DemoKind::Lighting {
            return Vec::new();
        }
        let color = Vec3::from_array(lighting.lamp_color);
        POINT_LIGHT_POSITIONS
            .iter()
            .map(|&position| Instance {
                model: Mat4::from_scale_rotation_translation(
                    Vec3::splat(LAMP_SCALE),
                    Quat::IDENTITY,
                    position,
                ),
                color,
            })
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&DemoOptions::default())
    }
}
