//! Exports [`Program`].
use std::{ffi::CString, path::Path};

use cgmath::{Matrix, Matrix4, Vector3};

use super::{CompiledShader, Shader, ShaderType};
use crate::error::ShaderError;

/// Wrapper for an OpenGL program.
///
/// <https://www.khronos.org/opengl/wiki/GLSL_Object#Program_objects>
pub struct Program {
    /// The internal OpenGL id for this object.
    id: gl::types::GLuint,
    /// False for the placeholder handed out by [`Program::load`] on failure.
    linked: bool,
}

/// Make a new [`Program`].
///
/// # Usage
/// ```no_run
/// use learn_gl::{construct_program, gl_wrappers::Shader};
/// # let vertex_source_code = std::ffi::CString::default();
/// # let frag_source_code = std::ffi::CString::default();
/// let vert_shader = Shader::vertex(vertex_source_code).compile().unwrap();
/// let frag_shader = Shader::fragment(frag_source_code).compile().unwrap();
/// let program = construct_program!(vert_shader, frag_shader;);
/// ```
#[macro_export]
macro_rules! construct_program {
    ($vert_sh:expr, $frag_shader:expr; $($any_extra_shader:expr),*) => {{
        let args = $crate::gl_wrappers::program::ProgramArgs {
            vert_shader: &$vert_sh,
            frag_shader: &$frag_shader,
            extra_shaders: &[
                $(&$any_extra_shader),*
            ]
        };
        $crate::gl_wrappers::program::Program::from_args(args)
    }};
}

/// Necessary shaders to create a [`Program`].
/// Use [`construct_program!`] to easily create one of these.
pub struct ProgramArgs<'a> {
    /// A vertex shader.
    pub vert_shader: &'a CompiledShader,
    /// A fragment shader.
    pub frag_shader: &'a CompiledShader,
    /// Any extra shaders that may be used by other shaders in this program.
    pub extra_shaders: &'a [&'a CompiledShader],
}

/// Pair up the vertex and fragment results, keeping every error.
///
/// Both stages are expected to have been attempted already, so a failing
/// vertex shader does not hide a failing fragment shader.
pub fn collect_stages<V, F>(
    vert: Result<V, ShaderError>,
    frag: Result<F, ShaderError>,
) -> Result<(V, F), ShaderError> {
    match (vert, frag) {
        (Ok(vert), Ok(frag)) => Ok((vert, frag)),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err),
        (Err(vert_err), Err(frag_err)) => Err(ShaderError::Stages(vec![vert_err, frag_err])),
    }
}

/// Turn a uniform name into something `glGetUniformLocation` accepts.
pub(crate) fn gl_name(name: &str) -> Result<CString, ShaderError> {
    CString::new(name).map_err(|_| ShaderError::InvalidName {
        name: name.escape_debug().to_string(),
    })
}

impl Program {
    /// Create a new program directly.
    pub fn new(
        vert_shader: &CompiledShader,
        frag_shader: &CompiledShader,
    ) -> Result<Self, ShaderError> {
        Self::from_args(ProgramArgs {
            frag_shader,
            vert_shader,
            extra_shaders: &[],
        })
    }
    /// Create a new program from a [`ProgramArgs`] struct.
    ///
    /// The shaders stay alive after linking; dropping them afterwards
    /// only flags them for deletion.
    pub fn from_args(args: ProgramArgs<'_>) -> Result<Self, ShaderError> {
        let (program, success) = unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, args.vert_shader.id());
            gl::AttachShader(program, args.frag_shader.id());
            for shader in args.extra_shaders.iter() {
                gl::AttachShader(program, shader.id());
            }
            gl::LinkProgram(program);
            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            (program, success)
        };

        if success != gl::TRUE.into() {
            let mut infolog: Vec<u8> = vec![0; super::INFO_LOG_CAPACITY];
            let mut length = 0;
            unsafe {
                gl::GetProgramInfoLog(
                    program,
                    super::INFO_LOG_CAPACITY as gl::types::GLsizei,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
                gl::DeleteProgram(program);
            }
            return Err(ShaderError::Link {
                log: super::decode_info_log(infolog, length),
            });
        }

        log::debug!("Linked program {program}");
        Ok(Self {
            id: program,
            linked: true,
        })
    }

    /// Read, compile and link a vertex/fragment pair from disk.
    ///
    /// # Errors
    /// Both stages are read and compiled before anything is reported. If
    /// both fail, the error is [`ShaderError::Stages`] holding each of them.
    /// Linking is only attempted once both stages compiled.
    pub fn from_files(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vert = Shader::from_file(ShaderType::Vertex, vertex_path).and_then(Shader::compile);
        let frag = Shader::from_file(ShaderType::Fragment, fragment_path).and_then(Shader::compile);
        let (vert_shader, frag_shader) = collect_stages(vert, frag)?;
        crate::construct_program!(vert_shader, frag_shader;)
    }

    /// Like [`Program::from_files`], but never fails.
    ///
    /// Errors are logged and an unlinked program is returned instead, so
    /// callers keep running with nothing drawn by this program.
    pub fn load(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Self {
        let (vertex_path, fragment_path) = (vertex_path.as_ref(), fragment_path.as_ref());
        match Self::from_files(vertex_path, fragment_path) {
            Ok(program) => {
                log::info!(
                    "Loaded shader program from {} and {}",
                    vertex_path.display(),
                    fragment_path.display()
                );
                program
            }
            Err(err) => {
                log::error!("{err}");
                Self::unlinked()
            }
        }
    }

    /// An empty program object. Using it draws nothing.
    pub fn unlinked() -> Self {
        let id = unsafe { gl::CreateProgram() };
        Self { id, linked: false }
    }

    /// Get the internal id of this program.
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
    /// False when loading failed. Lessons skip their draws for such programs.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Make this the active program for subsequent draws and uniform calls.
    ///
    /// Does nothing for an unlinked program.
    pub fn use_program(&self) {
        if !self.linked {
            return;
        }
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Get the location of a uniform in this program.
    ///
    /// Returns `None` for unknown uniforms, for names with interior nuls and
    /// for every name on an unlinked program.
    pub fn get_uniform_location(&self, name: &str) -> Option<gl::types::GLint> {
        if !self.linked {
            return None;
        }
        let c_name = match gl_name(name) {
            Ok(c_name) => c_name,
            Err(err) => {
                log::warn!("{err}");
                return None;
            }
        };
        let uniform_location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };
        if uniform_location < 0 {
            log::debug!("Program {} has no active uniform '{name}'", self.id);
            None
        } else {
            Some(uniform_location)
        }
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_int(name, value.into());
    }
    pub fn set_int(&self, name: &str, value: i32) {
        if let Some(location) = self.get_uniform_location(name) {
            unsafe { gl::Uniform1i(location, value) }
        }
    }
    pub fn set_float(&self, name: &str, value: f32) {
        if let Some(location) = self.get_uniform_location(name) {
            unsafe { gl::Uniform1f(location, value) }
        }
    }
    pub fn set_vec3(&self, name: &str, value: Vector3<f32>) {
        if let Some(location) = self.get_uniform_location(name) {
            unsafe { gl::Uniform3f(location, value.x, value.y, value.z) }
        }
    }
    /// Upload a column-major 4x4 matrix.
    pub fn set_mat4(&self, name: &str, value: &Matrix4<f32>) {
        if let Some(location) = self.get_uniform_location(name) {
            unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ptr()) }
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        // 0 is never a real program
        if self.id == 0 {
            return;
        }
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_convert() {
        let name = gl_name("texture1").unwrap();
        assert_eq!(name.as_bytes(), b"texture1");
    }

    fn compile_error(stage: ShaderType) -> ShaderError {
        ShaderError::Compile {
            stage,
            log: format!("{stage} syntax error"),
        }
    }

    #[test]
    fn both_stage_errors_are_kept() {
        let result = collect_stages::<(), ()>(
            Err(compile_error(ShaderType::Vertex)),
            Err(compile_error(ShaderType::Fragment)),
        );
        match result {
            Err(ShaderError::Stages(errors)) => {
                let stages: Vec<_> = errors
                    .iter()
                    .map(|err| match err {
                        ShaderError::Compile { stage, .. } => *stage,
                        other => panic!("unexpected error: {other:?}"),
                    })
                    .collect();
                assert_eq!(stages, vec![ShaderType::Vertex, ShaderType::Fragment]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn single_stage_error_is_passed_through() {
        let result = collect_stages::<_, ()>(Ok("vertex"), Err(compile_error(ShaderType::Fragment)));
        assert!(matches!(
            result,
            Err(ShaderError::Compile {
                stage: ShaderType::Fragment,
                ..
            })
        ));

        let result = collect_stages::<(), _>(Err(compile_error(ShaderType::Vertex)), Ok("fragment"));
        assert!(matches!(
            result,
            Err(ShaderError::Compile {
                stage: ShaderType::Vertex,
                ..
            })
        ));
    }

    #[test]
    fn compiled_stages_are_paired() {
        let result = collect_stages(Ok(1), Ok("two"));
        assert!(matches!(result, Ok((1, "two"))));
    }

    // With no GL context loaded any GL call panics, so these pass only if
    // the unlinked program stays away from GL.
    #[test]
    fn unlinked_program_skips_gl() {
        let program = Program {
            id: 0,
            linked: false,
        };
        assert!(!program.is_linked());
        program.use_program();
        assert_eq!(program.get_uniform_location("percentage"), None);
        program.set_float("percentage", 0.5);
        program.set_mat4("model", &Matrix4::from_scale(1.0));
    }

    #[test]
    fn nul_in_name_is_rejected() {
        match gl_name("mo\0del") {
            Err(ShaderError::InvalidName { name }) => assert_eq!(name, "mo\\0del"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
