//! Decoded images, laid out the way `glTexImage2D` reads them.
use std::path::Path;

use image::DynamicImage;

use crate::error::TextureError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn gl_enum(self) -> gl::types::GLenum {
        match self {
            PixelFormat::Rgb => gl::RGB,
            PixelFormat::Rgba => gl::RGBA,
        }
    }
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// Tightly packed 8-bit pixels, first row first.
#[derive(Clone, Debug)]
pub struct TextureImage {
    pub width: i32,
    pub height: i32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

/// Check that an image size fits `GLsizei`.
pub fn gl_dimensions(width: u32, height: u32) -> Result<(i32, i32), TextureError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(TextureError::Dimensions { width, height }),
    }
}

impl TextureImage {
    /// Decode the file at `path`.
    ///
    /// With `flip_vertically` the last image row comes first, matching
    /// OpenGL's bottom-left texture origin.
    pub fn open(path: impl AsRef<Path>, flip_vertically: bool) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| TextureError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_dynamic(img, flip_vertically)
    }

    /// Images with an alpha channel become RGBA, everything else RGB.
    pub fn from_dynamic(img: DynamicImage, flip_vertically: bool) -> Result<Self, TextureError> {
        let img = if flip_vertically { img.flipv() } else { img };
        let (width, height) = gl_dimensions(img.width(), img.height())?;
        let (format, pixels) = if img.color().has_alpha() {
            (PixelFormat::Rgba, img.into_rgba8().into_raw())
        } else {
            (PixelFormat::Rgb, img.into_rgb8().into_raw())
        };
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// Byte alignment of each row, for `GL_UNPACK_ALIGNMENT`.
    pub fn row_alignment(&self) -> i32 {
        let row_bytes = self.width as usize * self.format.channels();
        if row_bytes % 4 == 0 {
            4
        } else {
            1
        }
    }
}
