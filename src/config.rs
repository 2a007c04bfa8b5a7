//! Window settings and where lessons find their files.
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

pub const START_WIDTH: u32 = 800;
pub const START_HEIGHT: u32 = 600;
pub const DEFAULT_ASPECT: f32 = START_WIDTH as f32 / START_HEIGHT as f32;

pub const OPENGL_MAJOR_VER: u8 = 3;
pub const OPENGL_MINOR_VER: u8 = 3;

/// Overrides the directory `glsl/` and `assets/` are looked up in.
pub const ROOT_ENV_VAR: &str = "LEARN_GL_ROOT";
/// When set, lessons that support it draw polygon outlines only.
pub const WIREFRAME_ENV_VAR: &str = "LEARN_GL_WIREFRAME";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub gl_major: u8,
    pub gl_minor: u8,
    pub resizable: bool,
    /// Block in swap until the next vertical blank.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("LearnOpenGL"),
            width: START_WIDTH,
            height: START_HEIGHT,
            gl_major: OPENGL_MAJOR_VER,
            gl_minor: OPENGL_MINOR_VER,
            resizable: true,
            vsync: true,
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

fn root_from(value: Option<OsString>) -> PathBuf {
    match value {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => PathBuf::from("."),
    }
}

/// The directory lesson files are relative to.
pub fn asset_root() -> PathBuf {
    root_from(std::env::var_os(ROOT_ENV_VAR))
}

/// `relative` resolved against [`asset_root`].
pub fn asset_path(relative: impl AsRef<Path>) -> PathBuf {
    asset_root().join(relative)
}

/// Set, non-empty and not `0` turns wireframe on.
fn wireframe_from(value: Option<OsString>) -> bool {
    value.is_some_and(|value| !value.is_empty() && value != "0")
}

pub fn wireframe_requested() -> bool {
    wireframe_from(std::env::var_os(WIREFRAME_ENV_VAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_window() {
        let config = WindowConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!((config.gl_major, config.gl_minor), (3, 3));
        assert!(config.vsync);
    }

    #[test]
    fn title_builder() {
        let config = WindowConfig::default().with_title("Hello triangle");
        assert_eq!(config.title, "Hello triangle");
        assert_eq!(config.width, START_WIDTH);
    }

    #[test]
    fn root_defaults_to_working_dir() {
        assert_eq!(root_from(None), PathBuf::from("."));
        assert_eq!(root_from(Some(OsString::new())), PathBuf::from("."));
    }

    #[test]
    fn root_from_env_value() {
        let root = root_from(Some(OsString::from("/opt/lessons")));
        assert_eq!(root.join("glsl/a.vert"), PathBuf::from("/opt/lessons/glsl/a.vert"));
    }

    #[test]
    fn wireframe_flag_values() {
        assert!(!wireframe_from(None));
        assert!(!wireframe_from(Some(OsString::new())));
        assert!(!wireframe_from(Some(OsString::from("0"))));
        assert!(wireframe_from(Some(OsString::from("1"))));
        assert!(wireframe_from(Some(OsString::from("yes"))));
    }
}
