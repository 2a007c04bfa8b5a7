use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlType {
    Float, // f32
}

impl GlType {
    pub const fn get_size(&self) -> usize {
        match *self {
            GlType::Float => std::mem::size_of::<f32>(),
        }
    }
    pub const fn gl_enum(&self) -> gl::types::GLenum {
        match *self {
            GlType::Float => gl::FLOAT,
        }
    }
}

/// One vertex attribute, e.g. a `vec3` position is 3 [`GlType::Float`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlAttribute {
    pub components: u8,
    pub gl_type: GlType,
}

impl GlAttribute {
    pub const fn floats(components: u8) -> Self {
        Self {
            components,
            gl_type: GlType::Float,
        }
    }
    pub const fn byte_size(&self) -> usize {
        self.components as usize * self.gl_type.get_size()
    }
}

/// Everything `glVertexAttribPointer` needs for one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttribPointer {
    pub index: u32,
    pub components: u8,
    pub gl_type: GlType,
    pub stride: usize,
    pub offset: usize,
}

/// A vertex type whose bytes go to the GPU unchanged.
///
/// `ATTRIBUTES` lists the shader inputs in `layout (location = N)` order
/// and must describe the struct's fields exactly, without padding.
pub trait GlLayout: bytemuck::Pod {
    const ATTRIBUTES: &'static [GlAttribute];

    /// Byte distance between two consecutive vertices.
    fn stride() -> usize {
        Self::ATTRIBUTES.iter().map(GlAttribute::byte_size).sum()
    }

    fn attrib_pointers() -> Vec<AttribPointer> {
        let stride = Self::stride();
        let mut offset = 0;
        let mut pointers = Vec::with_capacity(Self::ATTRIBUTES.len());
        for (index, attribute) in Self::ATTRIBUTES.iter().enumerate() {
            pointers.push(AttribPointer {
                index: index as u32,
                components: attribute.components,
                gl_type: attribute.gl_type,
                stride,
                offset,
            });
            offset += attribute.byte_size();
        }
        pointers
    }
}

/// Vertices of one layout packed back to back, ready for `glBufferData`.
#[derive(Clone, Debug)]
pub struct RenderVec<LayoutT: GlLayout> {
    inner: Vec<u8>,
    stride: usize,
    _phantom: PhantomData<LayoutT>,
}

impl<LayoutT: GlLayout> Default for RenderVec<LayoutT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<LayoutT: GlLayout> RenderVec<LayoutT> {
    pub fn new() -> Self {
        Self {
            inner: vec![],
            stride: LayoutT::stride(),
            _phantom: PhantomData,
        }
    }
    pub fn from_slice(slice: &[LayoutT]) -> Self {
        let mut ret = Self::new();
        ret.extend_from_slice(slice);
        ret
    }
    pub fn push(&mut self, value: LayoutT) {
        self.inner.extend_from_slice(bytemuck::bytes_of(&value));
    }
    pub fn extend_from_slice(&mut self, slice: &[LayoutT]) {
        self.inner.extend_from_slice(bytemuck::cast_slice(slice));
    }
    pub fn clear(&mut self) {
        self.inner.clear();
    }
    pub fn stride(&self) -> usize {
        self.stride
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
    pub fn gl_byte_size(&self) -> isize {
        isize::try_from(self.inner.len()).unwrap_or(isize::MAX)
    }
    /// Number of vertices, as `glDrawArrays` wants it.
    pub fn gl_len(&self) -> i32 {
        i32::try_from(self.inner.len() / self.stride).unwrap_or(i32::MAX)
    }
}
