//! Error types shared by the lessons.
use std::path::PathBuf;

use crate::gl_wrappers::shader::ShaderType;

/// Everything that can go wrong between a shader file on disk and a linked program.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("Failed to read shader source '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Shader source '{}' contains an interior NUL byte", path.display())]
    InteriorNul { path: PathBuf },
    #[error("{stage} shader compilation failed: {log}")]
    Compile { stage: ShaderType, log: String },
    #[error("Error linking program. OpenGL reply: '{log}'")]
    Link { log: String },
    #[error("Name '{name}' contains an interior NUL byte")]
    InvalidName { name: String },
    /// More than one stage failed before linking was attempted.
    #[error("{}", joined(.0))]
    Stages(Vec<ShaderError>),
}

fn joined(errors: &[ShaderError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("Failed to load texture '{}'", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Texture dimensions {width}x{height} do not fit an OpenGL size")]
    Dimensions { width: u32, height: u32 },
}

/// SDL reports its errors as plain strings, so most variants just carry them.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to initialize SDL: {0}")]
    Sdl(String),
    #[error("Failed to create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),
    #[error("Failed to create OpenGL context: {0}")]
    Context(String),
    #[error("Failed to create event pump: {0}")]
    EventPump(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_stage() {
        let err = ShaderError::Compile {
            stage: ShaderType::Fragment,
            log: "0:3(1): error: syntax error".into(),
        };
        assert_eq!(
            err.to_string(),
            "Fragment shader compilation failed: 0:3(1): error: syntax error"
        );
    }

    #[test]
    fn stage_errors_are_listed_in_order() {
        let err = ShaderError::Stages(vec![
            ShaderError::Compile {
                stage: ShaderType::Vertex,
                log: "bad vertex".into(),
            },
            ShaderError::Compile {
                stage: ShaderType::Fragment,
                log: "bad fragment".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Vertex shader compilation failed: bad vertex\n\
             Fragment shader compilation failed: bad fragment"
        );
    }

    #[test]
    fn read_error_keeps_io_source() {
        use std::error::Error;

        let err = ShaderError::Read {
            path: PathBuf::from("glsl/missing.vert"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read shader source 'glsl/missing.vert'"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn texture_dimension_error_text() {
        let err = TextureError::Dimensions {
            width: u32::MAX,
            height: 1,
        };
        assert_eq!(
            err.to_string(),
            format!("Texture dimensions {}x1 do not fit an OpenGL size", u32::MAX)
        );
    }
}
