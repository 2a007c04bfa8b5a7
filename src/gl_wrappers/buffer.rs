//! Exports [`Buffer`], the owner of a VBO or EBO.
use std::ffi::c_void;

use crate::render_vec::{GlLayout, RenderVec};

/// Where a [`Buffer`] gets bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferTarget {
    /// Vertex data (`GL_ARRAY_BUFFER`).
    Array,
    /// Index data (`GL_ELEMENT_ARRAY_BUFFER`).
    ElementArray,
}

impl BufferTarget {
    fn gl_enum(self) -> gl::types::GLenum {
        match self {
            BufferTarget::Array => gl::ARRAY_BUFFER,
            BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// Hint for how often the data gets replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times.
    Static,
}

impl BufferUsage {
    fn gl_enum(self) -> gl::types::GLenum {
        match self {
            BufferUsage::Static => gl::STATIC_DRAW,
        }
    }
}

/// An OpenGL buffer object.
pub struct Buffer {
    id: gl::types::GLuint,
    target: BufferTarget,
}

impl Buffer {
    pub fn new(target: BufferTarget) -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        log::debug!("Generated {target:?} buffer {id}");
        Self { id, target }
    }
    pub fn array() -> Self {
        Self::new(BufferTarget::Array)
    }
    pub fn element_array() -> Self {
        Self::new(BufferTarget::ElementArray)
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(self.target.gl_enum(), self.id);
        }
    }

    /// Unbind whatever buffer is bound to `target`.
    pub fn unbind(target: BufferTarget) {
        unsafe {
            gl::BindBuffer(target.gl_enum(), 0);
        }
    }

    /// Bind and fill with raw bytes.
    ///
    /// An element array buffer binding is recorded in the currently bound
    /// VAO, so bind that first.
    pub fn upload_bytes(&self, bytes: &[u8], usage: BufferUsage) {
        let size = isize::try_from(bytes.len()).unwrap_or(isize::MAX);
        self.bind();
        unsafe {
            gl::BufferData(
                self.target.gl_enum(),
                size,
                bytes.as_ptr().cast::<c_void>(),
                usage.gl_enum(),
            );
        }
    }

    /// Bind and fill with any plain-old-data slice, e.g. `&[u32]` indices.
    pub fn upload<T: bytemuck::Pod>(&self, data: &[T], usage: BufferUsage) {
        self.upload_bytes(bytemuck::cast_slice(data), usage);
    }

    pub fn upload_vertices<T: GlLayout>(&self, vertices: &RenderVec<T>, usage: BufferUsage) {
        self.upload_bytes(vertices.as_bytes(), usage);
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
