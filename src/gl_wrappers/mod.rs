//! Standalone functions and modules to wrap the nitty-gritty of
//! OpenGL objects with Rust structs.
use std::{
    ffi::{c_char, c_void, CStr},
    ptr::null,
};

use log::Level;

#[macro_use]
pub mod program;
pub mod buffer;
pub mod shader;
pub mod texture;
pub mod vertex_array;

pub use buffer::*;
pub use program::*;
pub use shader::*;
pub use texture::*;
pub use vertex_array::*;

/// Size of the buffer handed to `glGet*InfoLog`.
pub(crate) const INFO_LOG_CAPACITY: usize = 512;

/// Embed a file as a `&'static CStr`, checked at compile time.
#[macro_export]
macro_rules! include_cstr {
    ( $path:literal $(,)? ) => {{
        // Use a constant to force the verification to run at compile time.
        const VALUE: &'static ::core::ffi::CStr = match ::core::ffi::CStr::from_bytes_with_nul(
            concat!(include_str!($path), "\0").as_bytes(),
        ) {
            Ok(value) => value,
            Err(_) => panic!(concat!("interior NUL byte(s) in `", $path, "`")),
        };
        VALUE
    }};
}

/// Turn the raw buffer filled by `glGet*InfoLog` into a printable string.
///
/// `length` is the count the driver reported, which excludes the terminator.
pub(crate) fn decode_info_log(mut infolog: Vec<u8>, length: gl::types::GLsizei) -> String {
    let length = usize::try_from(length).unwrap_or(0).min(infolog.len());
    infolog.truncate(length);
    let text = String::from_utf8_lossy(&infolog);
    text.trim_end_matches(['\0', '\n', '\r', ' ']).to_owned()
}

/// Safely update the OpenGL viewport.
pub fn gl_upd_viewport(width: u32, height: u32) {
    let real_width = i32::try_from(width).unwrap_or(i32::MAX);
    let real_height = i32::try_from(height).unwrap_or(i32::MAX);
    // SAFETY:
    // gl::Viewport does not fail with non-negative values.
    unsafe {
        gl::Viewport(0, 0, real_width, real_height);
    }
}

/// Clear the colour buffer, and the depth buffer too when `depth` is set.
pub fn clear(color: [f32; 4], depth: bool) {
    let mut mask = gl::COLOR_BUFFER_BIT;
    if depth {
        mask |= gl::DEPTH_BUFFER_BIT;
    }
    unsafe {
        gl::ClearColor(color[0], color[1], color[2], color[3]);
        gl::Clear(mask);
    }
}

pub fn enable_depth_test() {
    unsafe {
        gl::Enable(gl::DEPTH_TEST);
    }
}

/// Draw polygons as outlines instead of filled.
pub fn set_wireframe(enabled: bool) {
    let mode = if enabled { gl::LINE } else { gl::FILL };
    unsafe {
        gl::PolygonMode(gl::FRONT_AND_BACK, mode);
    }
}

/// Log level for a `GL_DEBUG_SEVERITY_*` value.
pub fn debug_severity_level(severity: gl::types::GLenum) -> Level {
    match severity {
        gl::DEBUG_SEVERITY_HIGH => Level::Error,
        gl::DEBUG_SEVERITY_MEDIUM => Level::Warn,
        gl::DEBUG_SEVERITY_LOW => Level::Info,
        _ => Level::Debug,
    }
}

extern "system" fn gl_debug_output(
    source: gl::types::GLenum,
    output_type: gl::types::GLenum,
    id: gl::types::GLuint,
    severity: gl::types::GLenum,
    _length: gl::types::GLsizei,
    message: *const c_char,
    _user_param: *mut c_void,
) {
    if message.is_null() {
        return;
    }
    // SAFETY: the driver hands us a NUL terminated string valid for this call.
    let message = unsafe { CStr::from_ptr(message) };
    log::log!(
        debug_severity_level(severity),
        "GL debug (source {source:#x}, type {output_type:#x}, id {id}): {}",
        message.to_string_lossy()
    );
}

/// Route driver debug messages into the logger.
///
/// Returns false when the context has no `glDebugMessageCallback`
/// (it is core only from 4.3, and 3.3 drivers may lack `KHR_debug`).
pub fn enable_debug_output() -> bool {
    if !gl::DebugMessageCallback::is_loaded() {
        return false;
    }
    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(gl_debug_output), null());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_is_cut_at_reported_length() {
        let mut raw = vec![0u8; INFO_LOG_CAPACITY];
        let msg = b"ERROR: 0:1: 'foo' : undeclared identifier\n";
        raw[..msg.len()].copy_from_slice(msg);
        let log = decode_info_log(raw, msg.len() as i32);
        assert_eq!(log, "ERROR: 0:1: 'foo' : undeclared identifier");
    }

    #[test]
    fn info_log_tolerates_bogus_lengths() {
        assert_eq!(decode_info_log(b"abc\0".to_vec(), -4), "");
        assert_eq!(decode_info_log(b"abc\0".to_vec(), 400), "abc");
    }

    #[test]
    fn severity_maps_to_log_level() {
        assert_eq!(debug_severity_level(gl::DEBUG_SEVERITY_HIGH), Level::Error);
        assert_eq!(debug_severity_level(gl::DEBUG_SEVERITY_MEDIUM), Level::Warn);
        assert_eq!(debug_severity_level(gl::DEBUG_SEVERITY_LOW), Level::Info);
        assert_eq!(
            debug_severity_level(gl::DEBUG_SEVERITY_NOTIFICATION),
            Level::Debug
        );
    }
}
