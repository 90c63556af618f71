//! Phong light set for the lighting demo.
//!
//! The uniform structs mirror the WGSL declarations in
//! `shaders/scene.wgsl` field for field; a `vec3` followed by a scalar packs
//! into one 16-byte row.

use glam::Vec3;

use crate::camera::Camera;
use crate::options::LightingOptions;

/// Maximum number of point lights the shader loops over.
pub const MAX_POINT_LIGHTS: usize = 4;

/// World-space positions of the lamps in the lighting demo.
pub const POINT_LIGHT_POSITIONS: [Vec3; MAX_POINT_LIGHTS] = [
    Vec3::new(0.7, 0.2, 2.0),
    Vec3::new(2.3, -3.3, -4.0),
    Vec3::new(-4.0, 2.0, -12.0),
    Vec3::new(0.0, 0.0, -3.0),
];

/// Narrowest soft edge, in degrees, between the flashlight's inner and
/// outer cones. The shader divides by the cosine difference.
pub const MIN_SPOT_EDGE_DEG: f32 = 0.5;

/// Widest inner cone half-angle in degrees.
const MAX_SPOT_INNER_DEG: f32 = 89.0;

/// Distance attenuation `1 / (constant + linear·d + quadratic·d²)`.
///
/// The default covers roughly 50 world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    /// Constant term.
    pub constant: f32,
    /// Linear term.
    pub linear: f32,
    /// Quadratic term.
    pub quadratic: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

impl Attenuation {
    /// Light fraction that survives at `distance`.
    #[must_use]
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant
            + self.linear * distance
            + self.quadratic * distance * distance)
    }
}

#[repr(C)]
#[derive(
    Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable,
)]
/// Directional ("sun") light. 64 bytes.
pub struct DirectionalLightRaw {
    /// Direction the light travels (normalized).
    pub direction: [f32; 3],
    _pad0: f32,
    /// Ambient color.
    pub ambient: [f32; 3],
    _pad1: f32,
    /// Diffuse color.
    pub diffuse: [f32; 3],
    _pad2: f32,
    /// Specular color.
    pub specular: [f32; 3],
    _pad3: f32,
}

#[repr(C)]
#[derive(
    Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable,
)]
/// Attenuated point light. 64 bytes.
pub struct PointLightRaw {
    /// World-space position.
    pub position: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// Ambient color.
    pub ambient: [f32; 3],
    /// Linear attenuation term.
    pub linear: f32,
    /// Diffuse color.
    pub diffuse: [f32; 3],
    /// Quadratic attenuation term.
    pub quadratic: f32,
    /// Specular color.
    pub specular: [f32; 3],
    _pad: f32,
}

#[repr(C)]
#[derive(
    Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable,
)]
/// Attenuated spot light with a soft edge. 80 bytes.
pub struct SpotLightRaw {
    /// World-space position.
    pub position: [f32; 3],
    /// Cosine of the inner cone half-angle.
    pub cut_off: f32,
    /// Direction the cone points (normalized).
    pub direction: [f32; 3],
    /// Cosine of the outer cone half-angle.
    pub outer_cut_off: f32,
    /// Ambient color.
    pub ambient: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// Diffuse color.
    pub diffuse: [f32; 3],
    /// Linear attenuation term.
    pub linear: f32,
    /// Specular color.
    pub specular: [f32; 3],
    /// Quadratic attenuation term.
    pub quadratic: f32,
}

/// Lighting configuration for the Phong shader.
/// NOTE: Must match WGSL struct layout exactly (416 bytes)
#[repr(C)]
#[derive(
    Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct LightingUniform {
    /// Directional light.
    pub sun: DirectionalLightRaw,
    /// Point lights; only the first `point_count` are lit.
    pub points: [PointLightRaw; MAX_POINT_LIGHTS],
    /// Camera-attached spot light.
    pub spot: SpotLightRaw,
    /// Specular shininess exponent.
    pub shininess: f32,
    /// Number of active point lights.
    pub point_count: u32,
    /// Non-zero when the spot light is on.
    pub spot_enabled: u32,
    _pad: f32,
}

fn scaled(color: [f32; 3], factor: f32) -> [f32; 3] {
    color.map(|c| c * factor)
}

/// Inner and outer cone half-angles with the outer strictly wider.
fn spot_cone(inner_deg: f32, outer_deg: f32) -> (f32, f32) {
    let inner = inner_deg.clamp(0.0, MAX_SPOT_INNER_DEG);
    let outer = outer_deg
        .max(inner + MIN_SPOT_EDGE_DEG)
        .min(MAX_SPOT_INNER_DEG + MIN_SPOT_EDGE_DEG);
    (inner, outer)
}

impl LightingUniform {
    /// Build the full light set. The spot light sits at the camera eye and
    /// points along its view direction.
    #[must_use]
    pub fn build(options: &LightingOptions, camera: &Camera) -> Self {
        let attenuation = Attenuation::default();

        let sun_dir = Vec3::from_array(options.sun_direction)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Y);
        let sun = DirectionalLightRaw {
            direction: sun_dir.to_array(),
            ambient: scaled(options.sun_color, options.ambient),
            diffuse: options.sun_color,
            specular: scaled([1.0; 3], options.specular),
            ..Default::default()
        };

        let points = POINT_LIGHT_POSITIONS.map(|position| PointLightRaw {
            position: position.to_array(),
            constant: attenuation.constant,
            ambient: scaled(options.lamp_color, options.ambient),
            linear: attenuation.linear,
            diffuse: options.lamp_color,
            quadratic: attenuation.quadratic,
            specular: scaled([1.0; 3], options.specular),
            ..Default::default()
        });

        let (inner_deg, outer_deg) = spot_cone(
            options.flashlight_inner_deg,
            options.flashlight_outer_deg,
        );
        let spot = SpotLightRaw {
            position: camera.position().to_array(),
            cut_off: inner_deg.to_radians().cos(),
            direction: camera.front().to_array(),
            outer_cut_off: outer_deg.to_radians().cos(),
            ambient: [0.0; 3],
            constant: attenuation.constant,
            diffuse: [1.0; 3],
            linear: attenuation.linear,
            specular: [1.0; 3],
            quadratic: attenuation.quadratic,
        };

        Self {
            sun,
            points,
            spot,
            shininess: options.shininess,
            point_count: MAX_POINT_LIGHTS as u32,
            spot_enabled: u32::from(options.flashlight),
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_layout_matches_shader() {
        assert_eq!(size_of::<DirectionalLightRaw>(), 64);
        assert_eq!(size_of::<PointLightRaw>(), 64);
        assert_eq!(size_of::<SpotLightRaw>(), 80);
        assert_eq!(size_of::<LightingUniform>(), 416);
    }

    #[test]
    fn attenuation_falls_off_with_distance() {
        let att = Attenuation::default();
        assert_eq!(att.factor(0.0), 1.0);
        assert!(att.factor(7.0) < att.factor(3.0));
        assert!(att.factor(50.0) < 0.02);
    }

    #[test]
    fn flashlight_follows_camera() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(120.0, -40.0, true);
        let lighting =
            LightingUniform::build(&LightingOptions::default(), &camera);

        assert_eq!(lighting.spot.position, camera.position().to_array());
        assert_eq!(lighting.spot.direction, camera.front().to_array());
        assert_eq!(lighting.spot_enabled, 1);
        // Inner cone is narrower, so its cosine is larger
        assert!(lighting.spot.cut_off > lighting.spot.outer_cut_off);
    }

    #[test]
    fn flashlight_cone_never_collapses() {
        let camera = Camera::default();
        for (inner, outer) in [(15.0, 15.0), (20.0, 10.0), (95.0, 95.0)] {
            let options = LightingOptions {
                flashlight_inner_deg: inner,
                flashlight_outer_deg: outer,
                ..LightingOptions::default()
            };
            let spot = LightingUniform::build(&options, &camera).spot;
            assert!(
                spot.cut_off - spot.outer_cut_off > 1e-4,
                "inner {inner} outer {outer}"
            );
        }

        // Valid cones pass through unchanged
        let spot = LightingUniform::build(&LightingOptions::default(), &camera)
            .spot;
        assert!((spot.cut_off - 12.5_f32.to_radians().cos()).abs() < 1e-6);
        assert!(
            (spot.outer_cut_off - 15.0_f32.to_radians().cos()).abs() < 1e-6
        );
    }

    #[test]
    fn sun_direction_is_normalized() {
        let lighting = LightingUniform::build(
            &LightingOptions::default(),
            &Camera::default(),
        );
        let dir = Vec3::from_array(lighting.sun.direction);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert_eq!(lighting.point_count, 4);
    }

    #[test]
    fn flashlight_can_be_disabled() {
        let options = LightingOptions {
            flashlight: false,
            ..Default::default()
        };
        let lighting = LightingUniform::build(&options, &Camera::default());
        assert_eq!(lighting.spot_enabled, 0);
    }
}
