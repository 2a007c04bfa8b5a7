//! Hardcoded meshes used by the lessons.
use cgmath::{vec3, Vector3};

use crate::vertex::{PosVertex, TexturedVertex};

/// Background colour shared by every lesson.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// Left triangle of the two-triangle exercise, spanning the lower-left half.
pub const LEFT_TRIANGLE: [PosVertex; 3] = [
    PosVertex::new(-1.0, -1.0, 0.0),
    PosVertex::new(-0.5, 1.0, 0.0),
    PosVertex::new(0.0, -1.0, 0.0),
];

/// Right triangle of the two-triangle exercise, pointing down.
pub const RIGHT_TRIANGLE: [PosVertex; 3] = [
    PosVertex::new(0.0, 1.0, 0.0),
    PosVertex::new(0.5, -1.0, 0.0),
    PosVertex::new(1.0, 1.0, 0.0),
];

pub const QUAD: [TexturedVertex; 4] = [
    // top right
    TexturedVertex::new([0.5, 0.5, 0.0], [1.0, 1.0]),
    // bottom right
    TexturedVertex::new([0.5, -0.5, 0.0], [1.0, 0.0]),
    // bottom left
    TexturedVertex::new([-0.5, -0.5, 0.0], [0.0, 0.0]),
    // top left
    TexturedVertex::new([-0.5, 0.5, 0.0], [0.0, 1.0]),
];

pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

const fn tv(x: f32, y: f32, z: f32, u: f32, v: f32) -> TexturedVertex {
    TexturedVertex::new([x, y, z], [u, v])
}

/// A unit cube centred on the origin as 12 unindexed triangles.
pub const CUBE: [TexturedVertex; 36] = [
    // back
    tv(-0.5, -0.5, -0.5, 0.0, 0.0),
    tv(0.5, -0.5, -0.5, 1.0, 0.0),
    tv(0.5, 0.5, -0.5, 1.0, 1.0),
    tv(0.5, 0.5, -0.5, 1.0, 1.0),
    tv(-0.5, 0.5, -0.5, 0.0, 1.0),
    tv(-0.5, -0.5, -0.5, 0.0, 0.0),
    // front
    tv(-0.5, -0.5, 0.5, 0.0, 0.0),
    tv(0.5, -0.5, 0.5, 1.0, 0.0),
    tv(0.5, 0.5, 0.5, 1.0, 1.0),
    tv(0.5, 0.5, 0.5, 1.0, 1.0),
    tv(-0.5, 0.5, 0.5, 0.0, 1.0),
    tv(-0.5, -0.5, 0.5, 0.0, 0.0),
    // left
    tv(-0.5, 0.5, 0.5, 1.0, 0.0),
    tv(-0.5, 0.5, -0.5, 1.0, 1.0),
    tv(-0.5, -0.5, -0.5, 0.0, 1.0),
    tv(-0.5, -0.5, -0.5, 0.0, 1.0),
    tv(-0.5, -0.5, 0.5, 0.0, 0.0),
    tv(-0.5, 0.5, 0.5, 1.0, 0.0),
    // right
    tv(0.5, 0.5, 0.5, 1.0, 0.0),
    tv(0.5, 0.5, -0.5, 1.0, 1.0),
    tv(0.5, -0.5, -0.5, 0.0, 1.0),
    tv(0.5, -0.5, -0.5, 0.0, 1.0),
    tv(0.5, -0.5, 0.5, 0.0, 0.0),
    tv(0.5, 0.5, 0.5, 1.0, 0.0),
    // bottom
    tv(-0.5, -0.5, -0.5, 0.0, 1.0),
    tv(0.5, -0.5, -0.5, 1.0, 1.0),
    tv(0.5, -0.5, 0.5, 1.0, 0.0),
    tv(0.5, -0.5, 0.5, 1.0, 0.0),
    tv(-0.5, -0.5, 0.5, 0.0, 0.0),
    tv(-0.5, -0.5, -0.5, 0.0, 1.0),
    // top
    tv(-0.5, 0.5, -0.5, 0.0, 1.0),
    tv(0.5, 0.5, -0.5, 1.0, 1.0),
    tv(0.5, 0.5, 0.5, 1.0, 0.0),
    tv(0.5, 0.5, 0.5, 1.0, 0.0),
    tv(-0.5, 0.5, 0.5, 0.0, 0.0),
    tv(-0.5, 0.5, -0.5, 0.0, 1.0),
];

/// World positions of the ten cubes.
pub fn cube_positions() -> [Vector3<f32>; 10] {
    [
        vec3(0.0, 0.0, 0.0),
        vec3(2.0, 5.0, -15.0),
        vec3(-1.5, -2.2, -2.5),
        vec3(-3.8, -2.0, -12.3),
        vec3(2.4, -0.4, -3.5),
        vec3(-1.7, 3.0, -7.5),
        vec3(1.3, -2.0, -2.5),
        vec3(1.5, 2.0, -2.5),
        vec3(1.5, 0.2, -1.5),
        vec3(-1.3, 1.0, -1.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_indices_stay_in_range() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD.len()));
    }

    #[test]
    fn cube_faces_are_unit_sized() {
        for vertex in CUBE.iter() {
            assert!(vertex.position.iter().all(|c| c.abs() == 0.5));
            assert!(vertex.tex_coords.iter().all(|c| *c == 0.0 || *c == 1.0));
        }
    }

    #[test]
    fn each_cube_face_lies_on_one_plane() {
        for face in CUBE.chunks(6) {
            let shared_axis = (0..3).find(|&axis| {
                face.iter()
                    .all(|v| v.position[axis] == face[0].position[axis])
            });
            assert!(shared_axis.is_some(), "face {face:?} is not planar");
        }
    }

    #[test]
    fn first_cube_sits_at_origin() {
        let positions = cube_positions();
        assert_eq!(positions.len(), 10);
        assert_eq!(positions[0], vec3(0.0, 0.0, 0.0));
        assert!(positions[1..].iter().all(|p| p.z < 0.0));
    }

    #[test]
    fn triangles_do_not_overlap() {
        let left_max_x = LEFT_TRIANGLE
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        let right_min_x = RIGHT_TRIANGLE
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MAX, f32::min);
        assert!(left_max_x <= right_min_x);
    }
}
