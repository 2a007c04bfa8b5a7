//! SDL2 window with a current OpenGL context.
use std::{ffi::CStr, time::Instant};

use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    video::{self, GLContext, SwapInterval},
    EventPump, Sdl, VideoSubsystem,
};

use crate::{
    config::WindowConfig,
    error::WindowError,
    gl_wrappers::{enable_debug_output, gl_upd_viewport},
    input::HeldKeys,
};

/// Owns everything SDL hands out for one window.
///
/// Field order is drop order: the GL context goes before its window.
pub struct GlWindow {
    event_pump: EventPump,
    _gl_ctx: GLContext,
    window: video::Window,
    _video_ctx: VideoSubsystem,
    _sdl_ctx: Sdl,
    main_id: u32,
    frame_width: u32,
    frame_height: u32,
    started: Instant,
}

fn gl_string(name: gl::types::GLenum) -> Option<String> {
    // SAFETY: glGetString returns null or a static NUL terminated string.
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            None
        } else {
            Some(CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned())
        }
    }
}

impl GlWindow {
    /// Create the window, make a core profile context current and load GL.
    pub fn open(config: &WindowConfig) -> Result<Self, WindowError> {
        let sdl_ctx = sdl2::init().map_err(WindowError::Sdl)?;
        let video_ctx = sdl_ctx.video().map_err(WindowError::Sdl)?;
        video_ctx
            .gl_load_library_default()
            .map_err(WindowError::Sdl)?;

        let gl_attr = video_ctx.gl_attr();
        gl_attr.set_context_flags().forward_compatible().debug().set();
        gl_attr.set_context_major_version(config.gl_major);
        gl_attr.set_context_minor_version(config.gl_minor);
        gl_attr.set_context_profile(video::GLProfile::Core);
        gl_attr.set_depth_size(24);

        let mut builder = video_ctx.window(&config.title, config.width, config.height);
        builder.position_centered().opengl();
        if config.resizable {
            builder.resizable();
        }
        let window = builder.build()?;
        let main_id = window.id();

        let gl_ctx = window.gl_create_context().map_err(WindowError::Context)?;
        gl::load_with(|s| video_ctx.gl_get_proc_address(s).cast());

        if let Some(version) = gl_string(gl::VERSION) {
            log::info!("OpenGL {version}");
        }
        if !enable_debug_output() {
            log::info!("glDebugMessageCallback unavailable, GL debug output disabled");
        }

        if config.vsync {
            if let Err(err) = video_ctx.gl_set_swap_interval(SwapInterval::VSync) {
                log::warn!("Could not enable vsync: {err}");
            }
        }

        let (frame_width, frame_height) = window.drawable_size();
        gl_upd_viewport(frame_width, frame_height);

        let event_pump = sdl_ctx.event_pump().map_err(WindowError::EventPump)?;

        log::info!(
            "Opened window '{}' ({frame_width}x{frame_height})",
            config.title
        );
        Ok(Self {
            event_pump,
            _gl_ctx: gl_ctx,
            window,
            _video_ctx: video_ctx,
            _sdl_ctx: sdl_ctx,
            main_id,
            frame_width,
            frame_height,
            started: Instant::now(),
        })
    }

    /// Drain pending events. Returns false once the window should close.
    ///
    /// Resizes update the viewport right away.
    pub fn poll_events(&mut self) -> bool {
        let mut resized = false;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::ESCAPE),
                    ..
                } => {
                    return false;
                }
                Event::Window {
                    window_id,
                    win_event: WindowEvent::Resized(..) | WindowEvent::SizeChanged(..),
                    ..
                } if window_id == self.main_id => {
                    resized = true;
                }
                _ => {}
            }
        }
        if resized {
            let (width, height) = self.window.drawable_size();
            self.frame_width = width;
            self.frame_height = height;
            gl_upd_viewport(width, height);
            log::debug!("Viewport resized to {width}x{height}");
        }
        true
    }

    pub fn held_keys(&self) -> HeldKeys {
        HeldKeys::from_keyboard(&self.event_pump.keyboard_state())
    }

    /// Present the frame. Blocks for vsync when it is enabled.
    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    /// Drawable size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    /// Seconds since the window opened.
    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}
