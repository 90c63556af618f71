//! Procedural cube mesh shared by every demo.

/// Vertex layout for scene geometry.
///
/// NOTE: Must match the vertex inputs in `shaders/scene.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space unit normal.
    pub normal: [f32; 3],
    /// Texture coordinate in `[0, 1]²`.
    pub tex_coords: [f32; 2],
}

/// Number of vertices in [`unit_cube`] (6 faces × 2 triangles × 3).
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Face normal, then the in-plane axes along which `s` and `t` grow.
/// `s × t == normal`, so both triangles wind counter-clockwise seen from
/// outside.
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

/// Texture-space corners of the two triangles of a face.
const FACE_CORNERS: [[f32; 2]; 6] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [1.0, 1.0],
    [0.0, 1.0],
    [0.0, 0.0],
];

/// Unit cube centered at the origin (edge length 1), non-indexed.
#[must_use]
pub fn unit_cube() -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT);
    for (normal, s_axis, t_axis) in FACES {
        for [s, t] in FACE_CORNERS {
            let position = std::array::from_fn(|i| {
                0.5 * normal[i] + (s - 0.5) * s_axis[i] + (t - 0.5) * t_axis[i]
            });
            vertices.push(Vertex {
                position,
                normal,
                tex_coords: [s, t],
            });
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn cube_has_expected_vertex_count() {
        assert_eq!(unit_cube().len(), CUBE_VERTEX_COUNT);
    }

    #[test]
    fn corners_lie_on_the_unit_cube() {
        for v in unit_cube() {
            for c in v.position {
                assert!((c.abs() - 0.5).abs() < 1e-6, "{:?}", v.position);
            }
            let n = Vec3::from_array(v.normal);
            // The vertex sits on the face its normal points out of
            assert!((Vec3::from_array(v.position).dot(n) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let cube = unit_cube();
        for tri in cube.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|v| Vec3::from_array(v.position));
            let geometric = (b - a).cross(c - a).normalize();
            let normal = Vec3::from_array(tri[0].normal);
            assert!(geometric.abs_diff_eq(normal, 1e-6));
        }
    }
}
