//! Shared plumbing for the OpenGL lesson binaries in `src/bin`.
//!
//! Every lesson follows the same shape: open a [`window::GlWindow`], build
//! buffers and a [`gl_wrappers::Program`], then loop over input, uniforms,
//! draw calls and a buffer swap until the window closes.
use std::process::ExitCode;

pub mod config;
pub mod error;
pub mod frame_stats;
pub mod geometry;
#[macro_use]
pub mod gl_wrappers;
pub mod image_data;
pub mod input;
pub mod logging;
pub mod render_vec;
pub mod transform;
pub mod vertex;
pub mod window;

pub use cgmath;
pub use gl;

/// Entry point for a lesson binary.
///
/// Starts logging and runs `lesson`. A returned error is fatal: it is
/// logged and turned into a failing exit code.
pub fn run_lesson(lesson: impl FnOnce() -> anyhow::Result<()>) -> ExitCode {
    logging::init();
    match lesson() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
