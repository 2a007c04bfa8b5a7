//! An empty window cleared to a solid colour every frame.
use std::process::ExitCode;

use anyhow::Context;
use learn_gl::{config::WindowConfig, geometry::CLEAR_COLOR, gl_wrappers, window::GlWindow};

fn run() -> anyhow::Result<()> {
    let window_config = WindowConfig::default().with_title("LearnOpenGL: hello window");
    let mut window = GlWindow::open(&window_config).context("Failed to create window")?;

    while window.poll_events() {
        gl_wrappers::clear(CLEAR_COLOR, false);
        window.swap();
    }
    Ok(())
}

fn main() -> ExitCode {
    learn_gl::run_lesson(run)
}
