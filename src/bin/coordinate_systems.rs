//! Ten spinning textured cubes seen through a perspective camera.
//!
//! Up/Down blend the textures, W/S/A/D/Q/E move the camera offset.
use std::{process::ExitCode, time::Instant};

use anyhow::Context;
use learn_gl::{
    config::{self, WindowConfig},
    frame_stats::FrameStats,
    geometry::{cube_positions, CLEAR_COLOR, CUBE},
    gl_wrappers::{self, Buffer, BufferTarget, BufferUsage, Program, Texture2D, VertexArray},
    input::{CameraOffset, MixFactor},
    render_vec::RenderVec,
    transform,
    vertex::TexturedVertex,
    window::GlWindow,
};

fn run() -> anyhow::Result<()> {
    let window_config = WindowConfig::default().with_title("LearnOpenGL: coordinate systems");
    let mut window = GlWindow::open(&window_config).context("Failed to create window")?;

    let program = Program::load(
        config::asset_path("glsl/coordinate_systems.vert"),
        config::asset_path("glsl/coordinate_systems.frag"),
    );

    let vertices = RenderVec::from_slice(&CUBE);
    let vao = VertexArray::new();
    let vbo = Buffer::array();

    vao.bind();
    vbo.upload_vertices(&vertices, BufferUsage::Static);
    vao.set_layout::<TexturedVertex>();
    VertexArray::unbind();
    Buffer::unbind(BufferTarget::Array);

    let container = Texture2D::load(config::asset_path("assets/textures/container.jpg"), true);
    let face = Texture2D::load(config::asset_path("assets/textures/awesomeface.png"), true);

    program.use_program();
    program.set_int("texture1", 0);
    program.set_int("texture2", 1);

    gl_wrappers::enable_depth_test();

    let positions = cube_positions();
    let vertex_count = vertices.gl_len();
    let mut mix = MixFactor::default();
    let mut camera = CameraOffset::default();
    let mut stats = FrameStats::new(Instant::now());

    while window.poll_events() {
        let frame_start = Instant::now();
        let keys = window.held_keys();
        mix.update(&keys);
        camera.update(&keys);

        gl_wrappers::clear(CLEAR_COLOR, true);
        container.bind_to_unit(0);
        face.bind_to_unit(1);

        if program.is_linked() {
            program.use_program();
            program.set_float("percentage", mix.get());

            let (width, height) = window.size();
            program.set_mat4("view", &transform::view(&camera));
            program.set_mat4("projection", &transform::projection(width, height));

            let elapsed = window.elapsed_secs();
            for (index, position) in positions.iter().enumerate() {
                let model = transform::cube_model(*position, index, elapsed);
                program.set_mat4("model", &model);
                vao.draw_triangles(vertex_count);
            }
        }

        window.swap();
        stats.record_and_log(frame_start.elapsed(), Instant::now());
    }
    Ok(())
}

fn main() -> ExitCode {
    learn_gl::run_lesson(run)
}
