//! Per-frame keyboard state and the values it drives.
use cgmath::{vec3, Vector3};
use sdl2::keyboard::{KeyboardState, Scancode};

/// How much the mix factor changes per frame while Up or Down is held.
///
/// Frames are capped by vsync, so this is about 0.6 per second at 60 Hz.
pub const MIX_STEP: f32 = 0.01;
/// How far the camera offset moves per frame while a movement key is held.
pub const CAMERA_STEP: f32 = 0.01;

/// Keys held down at the start of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub w: bool,
    pub s: bool,
    pub a: bool,
    pub d: bool,
    pub q: bool,
    pub e: bool,
}

impl HeldKeys {
    pub fn from_keyboard(state: &KeyboardState<'_>) -> Self {
        Self {
            up: state.is_scancode_pressed(Scancode::Up),
            down: state.is_scancode_pressed(Scancode::Down),
            w: state.is_scancode_pressed(Scancode::W),
            s: state.is_scancode_pressed(Scancode::S),
            a: state.is_scancode_pressed(Scancode::A),
            d: state.is_scancode_pressed(Scancode::D),
            q: state.is_scancode_pressed(Scancode::Q),
            e: state.is_scancode_pressed(Scancode::E),
        }
    }
}

/// Blend between two textures, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MixFactor(f32);

impl MixFactor {
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }
    pub fn get(self) -> f32 {
        self.0
    }
    /// Up raises, Down lowers. Up wins if both are held.
    pub fn update(&mut self, keys: &HeldKeys) {
        if keys.up {
            self.0 = (self.0 + MIX_STEP).min(1.0);
        } else if keys.down {
            self.0 = (self.0 - MIX_STEP).max(0.0);
        }
    }
}

/// Translation applied by the view matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraOffset(pub Vector3<f32>);

impl Default for CameraOffset {
    /// Three units back from the origin.
    fn default() -> Self {
        Self(vec3(0.0, 0.0, -3.0))
    }
}

impl CameraOffset {
    /// Moves the scene, not the eye: W pushes it down, A pushes it right.
    /// The first key of each pair wins when both are held.
    pub fn update(&mut self, keys: &HeldKeys) {
        if keys.w {
            self.0.y -= CAMERA_STEP;
        } else if keys.s {
            self.0.y += CAMERA_STEP;
        }

        if keys.a {
            self.0.x += CAMERA_STEP;
        } else if keys.d {
            self.0.x -= CAMERA_STEP;
        }

        if keys.q {
            self.0.z += CAMERA_STEP;
        } else if keys.e {
            self.0.z -= CAMERA_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn mix_factor_clamps_at_both_ends() {
        let up = HeldKeys {
            up: true,
            ..Default::default()
        };
        let down = HeldKeys {
            down: true,
            ..Default::default()
        };

        let mut mix = MixFactor::new(0.995);
        mix.update(&up);
        assert_eq!(mix.get(), 1.0);
        mix.update(&up);
        assert_eq!(mix.get(), 1.0);

        let mut mix = MixFactor::new(0.005);
        mix.update(&down);
        assert_eq!(mix.get(), 0.0);
    }

    #[test]
    fn mix_factor_new_clamps() {
        assert_eq!(MixFactor::new(3.0).get(), 1.0);
        assert_eq!(MixFactor::new(-1.0).get(), 0.0);
    }

    #[test]
    fn up_wins_over_down() {
        let both = HeldKeys {
            up: true,
            down: true,
            ..Default::default()
        };
        let mut mix = MixFactor::new(0.5);
        mix.update(&both);
        assert!(close(mix.get(), 0.5 + MIX_STEP));
    }

    #[test]
    fn no_keys_no_change() {
        let mut mix = MixFactor::new(0.3);
        let mut offset = CameraOffset::default();
        mix.update(&HeldKeys::default());
        offset.update(&HeldKeys::default());
        assert_eq!(mix.get(), 0.3);
        assert_eq!(offset, CameraOffset::default());
    }

    #[test]
    fn camera_moves_on_each_axis() {
        let mut offset = CameraOffset::default();
        offset.update(&HeldKeys {
            w: true,
            a: true,
            e: true,
            ..Default::default()
        });
        assert!(close(offset.0.x, CAMERA_STEP));
        assert!(close(offset.0.y, -CAMERA_STEP));
        assert!(close(offset.0.z, -3.0 - CAMERA_STEP));

        offset.update(&HeldKeys {
            s: true,
            d: true,
            q: true,
            ..Default::default()
        });
        assert!(close(offset.0.x, 0.0));
        assert!(close(offset.0.y, 0.0));
        assert!(close(offset.0.z, -3.0));
    }

    #[test]
    fn first_key_of_pair_wins() {
        let mut offset = CameraOffset::default();
        offset.update(&HeldKeys {
            w: true,
            s: true,
            a: true,
            d: true,
            q: true,
            e: true,
            ..Default::default()
        });
        assert!(close(offset.0.x, CAMERA_STEP));
        assert!(close(offset.0.y, -CAMERA_STEP));
        assert!(close(offset.0.z, -3.0 + CAMERA_STEP));
    }
}
