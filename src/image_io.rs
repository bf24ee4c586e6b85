// Loads the density map and writes finished pictures.
// The core never parses file formats: the `image` crate decodes to RGBA8
// and the sampler only ever sees that flat byte buffer.

use crate::error::Error;
use crate::sampler::PixelBuffer;
use crate::types::FrameBuffer;
use image::{ImageBuffer, ImageFormat, Rgb, RgbaImage};
use std::path::Path;

/// A decoded image, resident in memory before any sampling starts.
pub struct DensityImage {
    pixels: RgbaImage,
}

impl DensityImage {
    /// Decode any format `image` understands. Grayscale, RGB, 16-bit etc.
    /// are all converted so there are always 4 bytes per pixel.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let decoded = image::open(path)
            .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())))?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        let (w, h) = self.pixels.dimensions();
        (w as usize, h as usize)
    }

    /// Borrow the raw RGBA bytes for one sampling pass.
    pub fn buffer(&self) -> Result<PixelBuffer<'_>, Error> {
        let (w, h) = self.dimensions();
        PixelBuffer::new(self.pixels.as_raw(), w, h)
    }
}

/// Write a 0x00RRGGBB framebuffer as an RGB PNG.
pub fn save_png(frame: &FrameBuffer, path: &Path) -> Result<(), Error> {
    let img = ImageBuffer::from_fn(frame.width as u32, frame.height as u32, |x, y| {
        let p = frame.pixels[y as usize * frame.width + x as usize];
        Rgb([((p >> 16) & 0xFF) as u8, ((p >> 8) & 0xFF) as u8, (p & 0xFF) as u8])
    });
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::ImageSave(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use test_log::test;

    fn temp_png(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("grass-and-trees-{}-{name}.png", std::process::id()))
    }

    #[test]
    fn density_image_exposes_rgba_bytes() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([200, 1, 2, 3]));
        let density = DensityImage::from_rgba(img);

        let buf = density.buffer().unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.red(2, 1).unwrap(), 200);
        assert_eq!(buf.red(0, 0).unwrap(), 0);
    }

    #[test]
    fn saved_png_decodes_back_as_density_map() {
        let path = temp_png("roundtrip");
        let mut frame = FrameBuffer::filled(4, 3, 0x00_10_20_30);
        frame.pixels[2 * 4 + 3] = 0x00_FF_00_00;

        save_png(&frame, &path).unwrap();
        let density = DensityImage::open(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(density.dimensions(), (4, 3));
        let buf = density.buffer().unwrap();
        assert_eq!(buf.sample(3, 2).unwrap(), crate::types::Rgba::new(255, 0, 0, 255));
        assert_eq!(buf.sample(0, 0).unwrap(), crate::types::Rgba::new(0x10, 0x20, 0x30, 255));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = DensityImage::open(Path::new("/definitely/not/here.png")).err().unwrap();
        assert!(matches!(err, Error::ImageLoad(_)));
    }
}
