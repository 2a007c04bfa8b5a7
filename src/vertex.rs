use crate::render_vec::{GlAttribute, GlLayout};

/// A bare position, `layout (location = 0) in vec3 aPos`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PosVertex {
    pub position: [f32; 3],
}

impl PosVertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }
}

impl GlLayout for PosVertex {
    const ATTRIBUTES: &'static [GlAttribute] = &[GlAttribute::floats(3)];
}

/// Position plus texture coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl TexturedVertex {
    pub const fn new(position: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            tex_coords,
        }
    }
}

impl GlLayout for TexturedVertex {
    const ATTRIBUTES: &'static [GlAttribute] = &[GlAttribute::floats(3), GlAttribute::floats(2)];
}
