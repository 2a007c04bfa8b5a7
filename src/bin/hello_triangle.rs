//! Two triangles, each with its own VAO, VBO and program.
use std::{ffi::CStr, process::ExitCode, time::Instant};

use anyhow::Context;
use learn_gl::{
    config::{self, WindowConfig},
    construct_program,
    error::ShaderError,
    frame_stats::FrameStats,
    geometry::{CLEAR_COLOR, LEFT_TRIANGLE, RIGHT_TRIANGLE},
    gl_wrappers::{
        self, collect_stages, Buffer, BufferTarget, BufferUsage, Program, Shader, VertexArray,
    },
    include_cstr,
    render_vec::RenderVec,
    vertex::PosVertex,
    window::GlWindow,
};

const VERT_SHADER_SOURCE: &CStr = include_cstr!("../../glsl/hello_triangle.vert");
const ORANGE_FRAG_SOURCE: &CStr = include_cstr!("../../glsl/hello_triangle_orange.frag");
const YELLOW_FRAG_SOURCE: &CStr = include_cstr!("../../glsl/hello_triangle_yellow.frag");

fn link(frag_source: &CStr) -> Result<Program, ShaderError> {
    let vert = Shader::vertex(VERT_SHADER_SOURCE.into()).compile();
    let frag = Shader::fragment(frag_source.into()).compile();
    let (vert_shader, frag_shader) = collect_stages(vert, frag)?;
    construct_program!(vert_shader, frag_shader;)
}

/// Compile the shared vertex shader against `frag_source`.
///
/// Failures are logged and leave an unlinked program behind.
fn build_program(frag_source: &CStr) -> Program {
    link(frag_source).unwrap_or_else(|err| {
        log::error!("{err}");
        Program::unlinked()
    })
}

/// Upload one triangle into a fresh VAO/VBO pair.
fn upload_triangle(triangle: &[PosVertex]) -> (VertexArray, Buffer, i32) {
    let vertices = RenderVec::from_slice(triangle);
    let vao = VertexArray::new();
    let vbo = Buffer::array();

    vao.bind();
    vbo.upload_vertices(&vertices, BufferUsage::Static);
    vao.set_layout::<PosVertex>();

    VertexArray::unbind();
    Buffer::unbind(BufferTarget::Array);
    (vao, vbo, vertices.gl_len())
}

fn run() -> anyhow::Result<()> {
    let window_config = WindowConfig::default().with_title("LearnOpenGL: hello triangle");
    let mut window = GlWindow::open(&window_config).context("Failed to create window")?;

    let orange = build_program(ORANGE_FRAG_SOURCE);
    let yellow = build_program(YELLOW_FRAG_SOURCE);

    let (left_vao, _left_vbo, left_count) = upload_triangle(&LEFT_TRIANGLE);
    let (right_vao, _right_vbo, right_count) = upload_triangle(&RIGHT_TRIANGLE);

    if config::wireframe_requested() {
        gl_wrappers::set_wireframe(true);
    }

    let mut stats = FrameStats::new(Instant::now());
    while window.poll_events() {
        let frame_start = Instant::now();
        gl_wrappers::clear(CLEAR_COLOR, false);

        if orange.is_linked() {
            orange.use_program();
            left_vao.draw_triangles(left_count);
        }
        if yellow.is_linked() {
            yellow.use_program();
            right_vao.draw_triangles(right_count);
        }

        window.swap();
        stats.record_and_log(frame_start.elapsed(), Instant::now());
    }
    Ok(())
}

fn main() -> ExitCode {
    learn_gl::run_lesson(run)
}
