//! Exports [`Shader`] and [`CompiledShader`].
use std::{
    ffi::CString,
    fmt, fs,
    path::Path,
    ptr::null,
};

use crate::{error::ShaderError, gl_wrappers::decode_info_log};

/// An uncompiled OpenGL shader.
/// Contains the source code necessary to compile it.
pub struct Shader {
    /// GL ID for this shader.
    inner: gl::types::GLuint,
    /// The source code for this shader.
    source: CString,
    shader_type: ShaderType,
    /// Set once the GL object has been handed to a [`CompiledShader`].
    was_compiled: bool,
}

/// Represents the type of a shader object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderType {
    /// This shader is a Fragment shader.
    Fragment,
    /// This shader is a Vertex shader.
    Vertex,
}

impl ShaderType {
    fn gl_enum(self) -> gl::types::GLenum {
        match self {
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
            ShaderType::Vertex => gl::VERTEX_SHADER,
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderType::Fragment => f.write_str("Fragment"),
            ShaderType::Vertex => f.write_str("Vertex"),
        }
    }
}

/// Read a shader source file into a [`CString`] ready for `glShaderSource`.
///
/// # Errors
/// Errors if the file can't be read or holds a NUL byte.
pub fn read_source(path: impl AsRef<Path>) -> Result<CString, ShaderError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    CString::new(bytes).map_err(|_| ShaderError::InteriorNul {
        path: path.to_path_buf(),
    })
}

impl Shader {
    /// Wrap shader source code into a type-safe Rust struct.
    pub fn new(shader_type: ShaderType, source: impl Into<CString>) -> Self {
        let shader = unsafe { gl::CreateShader(shader_type.gl_enum()) };
        Self {
            inner: shader,
            source: source.into(),
            shader_type,
            was_compiled: false,
        }
    }
    /// Helper function for `Shader::new()` with vertex shaders.
    pub fn vertex(source: CString) -> Self {
        Self::new(ShaderType::Vertex, source)
    }
    /// Helper function for `Shader::new()` with fragment shaders.
    pub fn fragment(source: CString) -> Self {
        Self::new(ShaderType::Fragment, source)
    }
    /// Read the source from `path` and wrap it.
    ///
    /// # Errors
    /// See [`read_source`].
    pub fn from_file(shader_type: ShaderType, path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let source = read_source(&path)?;
        log::debug!(
            "Read {shader_type} shader source from {}",
            path.as_ref().display()
        );
        Ok(Self::new(shader_type, source))
    }

    /// Compile this shader.
    ///
    /// Returns a [`CompiledShader`], for use in [`Program`](super::Program)s.
    ///
    /// # Errors
    /// Errors if compilation was unsuccessful, with the response from OpenGL.
    pub fn compile(mut self) -> Result<CompiledShader, ShaderError> {
        // SAFETY: `inner` came from glCreateShader and `source` is NUL terminated.
        let success = unsafe {
            gl::ShaderSource(self.inner, 1, &self.source.as_ptr(), null());
            gl::CompileShader(self.inner);

            let mut success = 0;
            gl::GetShaderiv(self.inner, gl::COMPILE_STATUS, &mut success);
            success
        };

        if success != gl::TRUE.into() {
            let mut infolog: Vec<u8> = vec![0; super::INFO_LOG_CAPACITY];
            let mut length = 0;
            unsafe {
                gl::GetShaderInfoLog(
                    self.inner,
                    super::INFO_LOG_CAPACITY as gl::types::GLsizei,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
            }
            // `self` drops here and deletes the failed shader object.
            return Err(ShaderError::Compile {
                stage: self.shader_type,
                log: decode_info_log(infolog, length),
            });
        }

        self.was_compiled = true;
        // SAFETY: we checked COMPILE_STATUS above.
        unsafe { Ok(CompiledShader::new_unchecked(self.inner)) }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            if !self.was_compiled {
                gl::DeleteShader(self.inner);
            }
        }
    }
}

/// A compiled shader object.
/// This can be linked and used in [`Program`](super::Program)s.
pub struct CompiledShader {
    /// GL ID for this compiled shader.
    id: gl::types::GLuint,
}

impl CompiledShader {
    /// Create a new CompiledShader from the GL ID of a compiled shader.
    ///
    /// # Safety
    /// The uint passed into this function MUST name a shader that compiled successfully.
    /// Otherwise, linking against this struct is undefined behaviour!
    pub unsafe fn new_unchecked(shader: gl::types::GLuint) -> Self {
        Self { id: shader }
    }
    /// Get the internal GL ID of this shader.
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for CompiledShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        };
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join("learn_gl_shader_tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_source_as_cstring() {
        let src = b"#version 330 core\nvoid main() {}\n";
        let path = scratch_file("ok.vert", src);
        let source = read_source(&path).unwrap();
        assert_eq!(source.as_bytes(), src);
    }

    #[test]
    fn missing_file_is_read_error() {
        let path = std::env::temp_dir().join("learn_gl_definitely_missing.frag");
        match read_source(&path) {
            Err(ShaderError::Read { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn interior_nul_is_rejected() {
        let path = scratch_file("nul.frag", b"void main()\0{}");
        assert!(matches!(
            read_source(&path),
            Err(ShaderError::InteriorNul { .. })
        ));
    }

    #[test]
    fn shader_type_display() {
        assert_eq!(ShaderType::Vertex.to_string(), "Vertex");
        assert_eq!(ShaderType::Fragment.to_string(), "Fragment");
    }
}
