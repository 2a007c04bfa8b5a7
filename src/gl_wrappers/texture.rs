//! Exports [`Texture2D`].
use std::path::Path;

use crate::image_data::TextureImage;

/// A `GL_TEXTURE_2D` object with repeat wrapping and linear filtering.
pub struct Texture2D {
    id: gl::types::GLuint,
}

impl Texture2D {
    /// Create the texture object and set its sampling parameters.
    /// It holds no image until [`Texture2D::upload`] is called.
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32);
        }
        log::debug!("Generated texture {id}");
        Self { id }
    }

    /// Create a texture from an image file.
    ///
    /// A file that can't be decoded is logged and leaves the texture empty,
    /// so sampling it yields black.
    pub fn load(path: impl AsRef<Path>, flip_vertically: bool) -> Self {
        let path = path.as_ref();
        let texture = Self::new();
        match TextureImage::open(path, flip_vertically) {
            Ok(image) => {
                texture.upload(&image);
                log::info!(
                    "Loaded texture {} ({}x{}, {:?})",
                    path.display(),
                    image.width,
                    image.height,
                    image.format
                );
            }
            Err(err) => log::error!("{err}"),
        }
        texture
    }

    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }

    /// Replace the image and regenerate mipmaps.
    pub fn upload(&self, image: &TextureImage) {
        let format = image.format.gl_enum();
        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, self.id);
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, image.row_alignment());
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                format as i32,
                image.width,
                image.height,
                0,
                format,
                gl::UNSIGNED_BYTE,
                image.pixels.as_ptr().cast(),
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }
    }

    /// Bind to texture unit `unit` (`GL_TEXTURE0 + unit`).
    pub fn bind_to_unit(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
    }
}

impl Default for Texture2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}
