use crate::error::{Error, Result};
use gl::{self, types as gl_t};
use std::path::Path;

/// Decoded 8-bit RGB pixels, top row first
#[derive(Clone, Debug, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from(image))
    }
}

impl From<image::DynamicImage> for TextureImage {
    fn from(image: image::DynamicImage) -> Self {
        let rgb = image.into_rgb8();
        Self {
            width: rgb.width(),
            height: rgb.height(),
            pixels: rgb.into_raw(),
        }
    }
}

/// A mipmapped, repeating 2D texture
pub struct Texture {
    id: u32,
    width: u32,
    height: u32,
}

impl Texture {
    /// Loads the image at `path` and uploads it
    pub unsafe fn from_file(path: &Path) -> Result<Self> {
        let image = TextureImage::open(path)?;
        log::debug!(
            "loaded texture {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        Ok(Self::new(&image))
    }

    /// NOTE: after this call there will be no texture binded
    pub unsafe fn new(image: &TextureImage) -> Self {
        let mut id: gl_t::GLuint = 0;
        // Genereate a new texture
        gl::GenTextures(1, &mut id);
        gl::BindTexture(gl::TEXTURE_2D, id);

        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as i32);
        gl::TexParameteri(
            gl::TEXTURE_2D,
            gl::TEXTURE_MIN_FILTER,
            gl::LINEAR_MIPMAP_LINEAR as i32,
        );
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32);

        // RGB rows aren't necessarily four byte aligned
        gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            gl::RGB as i32,
            image.width as i32,
            image.height as i32,
            0,
            gl::RGB,
            gl::UNSIGNED_BYTE,
            image.pixels.as_ptr() as *const _,
        );
        gl::GenerateMipmap(gl::TEXTURE_2D);
        Self::unbind();
        Self {
            id,
            width: image.width,
            height: image.height,
        }
    }

    pub unsafe fn bind(tex: &Self) {
        gl::BindTexture(gl::TEXTURE_2D, tex.id);
    }

    /// Activates texture unit `unit` and binds the texture to it
    pub unsafe fn bind_to_unit(tex: &Self, unit: u32) {
        Self::set_active_unit(unit);
        Self::bind(tex);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub unsafe fn set_active_unit(unit: u32) {
        gl::ActiveTexture(gl::TEXTURE0 + unit);
    }

    pub unsafe fn unbind() {
        gl::BindTexture(gl::TEXTURE_2D, 0);
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    #[test]
    fn alpha_is_dropped_when_decoding() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([10, 20, 30, 40]));
        rgba.put_pixel(1, 0, Rgba([50, 60, 70, 80]));
        let image = TextureImage::from(DynamicImage::ImageRgba8(rgba));
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.pixels, vec![10, 20, 30, 50, 60, 70]);
    }

    #[test]
    fn rows_keep_their_order() {
        let mut rgba = RgbaImage::new(1, 2);
        rgba.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        rgba.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        let image = TextureImage::from(DynamicImage::ImageRgba8(rgba));
        assert_eq!(&image.pixels[..3], &[255, 0, 0]);
        assert_eq!(&image.pixels[3..], &[0, 0, 255]);
    }

    #[test]
    fn missing_image_reports_the_path() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/nothing.png");
        match TextureImage::open(&path) {
            Err(Error::Image { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other.map(|i| i.width)),
        }
    }

    #[test]
    fn shipped_textures_decode() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        for name in &["brick.png", "tree.png"] {
            let image = TextureImage::open(&root.join(name)).unwrap();
            assert!(image.width > 0 && image.height > 0);
            assert_eq!(
                image.pixels.len(),
                image.width as usize * image.height as usize * 3
            );
        }
    }
}
