//! Model, view and projection matrices for the 3D lessons.
use cgmath::{perspective, vec3, Deg, InnerSpace, Matrix4, Rad, Vector3};

use crate::{config::DEFAULT_ASPECT, input::CameraOffset};

pub const FIELD_OF_VIEW: Deg<f32> = Deg(45.0);
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Degrees per second each cube spins, multiplied by its index.
const DEGREES_PER_INDEX: f32 = 20.0;

fn spin_axis() -> Vector3<f32> {
    vec3(1.0, 0.3, 0.5).normalize()
}

/// Place cube `index` at `position`, spinning at a speed that grows with
/// `index`. Cube 0 never rotates.
pub fn cube_model(position: Vector3<f32>, index: usize, elapsed_secs: f32) -> Matrix4<f32> {
    let angle = Deg(DEGREES_PER_INDEX * index as f32 * elapsed_secs);
    Matrix4::from_translation(position) * Matrix4::from_axis_angle(spin_axis(), Rad::from(angle))
}

pub fn view(offset: &CameraOffset) -> Matrix4<f32> {
    Matrix4::from_translation(offset.0)
}

/// Width over height, or the startup aspect for a zero-sized (minimised) window.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        DEFAULT_ASPECT
    } else {
        width as f32 / height as f32
    }
}

pub fn projection(width: u32, height: u32) -> Matrix4<f32> {
    perspective(
        FIELD_OF_VIEW,
        aspect_ratio(width, height),
        NEAR_PLANE,
        FAR_PLANE,
    )
}

#[cfg(test)]
mod tests {
    use cgmath::{SquareMatrix, Vector4};

    use super::*;

    fn assert_close(a: Matrix4<f32>, b: Matrix4<f32>) {
        let a: &[f32; 16] = a.as_ref();
        let b: &[f32; 16] = b.as_ref();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn cubes_start_unrotated() {
        let position = vec3(2.0, 5.0, -15.0);
        assert_close(
            cube_model(position, 7, 0.0),
            Matrix4::from_translation(position),
        );
    }

    #[test]
    fn first_cube_never_spins() {
        let position = vec3(0.0, 0.0, 0.0);
        assert_close(cube_model(position, 0, 12.5), Matrix4::identity());
    }

    #[test]
    fn spinning_keeps_translation() {
        let position = vec3(-1.5, -2.2, -2.5);
        let model = cube_model(position, 3, 1.7);
        assert_eq!(model.w, Vector4::new(-1.5, -2.2, -2.5, 1.0));
    }

    #[test]
    fn view_translates_by_offset() {
        let view = view(&CameraOffset::default());
        assert_eq!(view.w, Vector4::new(0.0, 0.0, -3.0, 1.0));
    }

    #[test]
    fn aspect_falls_back_for_zero_height() {
        assert_eq!(aspect_ratio(800, 600), 800.0 / 600.0);
        assert_eq!(aspect_ratio(800, 0), DEFAULT_ASPECT);
        assert_close(projection(0, 0), projection(800, 600));
    }
}
