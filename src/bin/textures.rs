//! A quad drawn through an index buffer, blending two textures.
//!
//! Hold Up/Down to shift the blend towards the second/first texture.
use std::{process::ExitCode, time::Instant};

use anyhow::Context;
use learn_gl::{
    config::{self, WindowConfig},
    frame_stats::FrameStats,
    geometry::{CLEAR_COLOR, QUAD, QUAD_INDICES},
    gl_wrappers::{self, Buffer, BufferTarget, BufferUsage, Program, Texture2D, VertexArray},
    input::MixFactor,
    render_vec::RenderVec,
    vertex::TexturedVertex,
    window::GlWindow,
};

fn run() -> anyhow::Result<()> {
    let window_config = WindowConfig::default().with_title("LearnOpenGL: textures");
    let mut window = GlWindow::open(&window_config).context("Failed to create window")?;

    let program = Program::load(
        config::asset_path("glsl/textures.vert"),
        config::asset_path("glsl/textures.frag"),
    );

    let vertices = RenderVec::from_slice(&QUAD);
    let vao = VertexArray::new();
    let vbo = Buffer::array();
    let ebo = Buffer::element_array();

    vao.bind();
    vbo.upload_vertices(&vertices, BufferUsage::Static);
    // recorded in the VAO, so it must stay bound until the VAO is unbound
    ebo.upload(&QUAD_INDICES, BufferUsage::Static);
    vao.set_layout::<TexturedVertex>();
    VertexArray::unbind();
    Buffer::unbind(BufferTarget::Array);

    let container = Texture2D::load(config::asset_path("assets/textures/container.jpg"), true);
    let face = Texture2D::load(config::asset_path("assets/textures/awesomeface.png"), true);

    program.use_program();
    program.set_int("texture1", 0);
    program.set_int("texture2", 1);

    let mut mix = MixFactor::default();
    let index_count = QUAD_INDICES.len() as i32;
    let mut stats = FrameStats::new(Instant::now());

    while window.poll_events() {
        let frame_start = Instant::now();
        mix.update(&window.held_keys());

        gl_wrappers::clear(CLEAR_COLOR, false);
        container.bind_to_unit(0);
        face.bind_to_unit(1);

        if program.is_linked() {
            program.use_program();
            program.set_float("percentage", mix.get());
            vao.draw_indexed_triangles(index_count);
        }

        window.swap();
        stats.record_and_log(frame_start.elapsed(), Instant::now());
    }
    Ok(())
}

fn main() -> ExitCode {
    learn_gl::run_lesson(run)
}
