//! Exports [`VertexArray`].
use crate::render_vec::GlLayout;

/// An OpenGL vertex array object.
///
/// Records the attribute layout and the element buffer binding made while
/// it is bound.
pub struct VertexArray {
    id: gl::types::GLuint,
}

impl VertexArray {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }
        log::debug!("Generated vertex array {id}");
        Self { id }
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }

    pub fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Describe the currently bound array buffer as a sequence of `T`.
    ///
    /// Binds this VAO; the vertex buffer must already be bound.
    pub fn set_layout<T: GlLayout>(&self) {
        self.bind();
        for pointer in T::attrib_pointers() {
            unsafe {
                gl::VertexAttribPointer(
                    pointer.index,
                    pointer.components.into(),
                    pointer.gl_type.gl_enum(),
                    gl::FALSE,
                    pointer.stride as gl::types::GLsizei,
                    pointer.offset as *const _,
                );
                gl::EnableVertexAttribArray(pointer.index);
            }
        }
    }

    /// `glDrawArrays(GL_TRIANGLES, 0, count)` with this VAO bound.
    pub fn draw_triangles(&self, count: i32) {
        self.bind();
        unsafe {
            gl::DrawArrays(gl::TRIANGLES, 0, count);
        }
    }

    /// `glDrawElements` over `count` `u32` indices of the recorded EBO.
    pub fn draw_indexed_triangles(&self, count: i32) {
        self.bind();
        unsafe {
            gl::DrawElements(gl::TRIANGLES, count, gl::UNSIGNED_INT, std::ptr::null());
        }
    }
}

impl Default for VertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
