//! A rectangular grid of colors.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use lumen_math::Color;

use crate::error::{CanvasError, Result};
use crate::ppm;

/// A `width x height` image, stored row-major with `(0, 0)` at the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// A canvas with every pixel black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when `(x, y)` names a pixel.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Set one pixel.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        if !self.contains(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels[y * self.width + x] = color;
        Ok(())
    }

    /// Read one pixel, or `None` outside the canvas.
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<Color> {
        if self.contains(x, y) {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Paint every pixel.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1))
    }

    /// Encode as plain-text PPM.
    pub fn to_ppm(&self) -> String {
        ppm::encode(self)
    }

    /// Convert to an 8-bit RGB image, clamping each channel.
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        if self.pixels.is_empty() {
            return Err(CanvasError::EmptyCanvas);
        }
        Ok(ImageBuffer::from_fn(
            self.width as u32,
            self.height as u32,
            |x, y| Rgb(self.pixels[y as usize * self.width + x as usize].to_rgb8()),
        ))
    }

    /// Write plain-text PPM to `path`.
    pub fn write_ppm(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_ppm())?;
        log::info!("wrote {}x{} PPM to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Write an 8-bit PNG to `path`.
    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_rgb_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!("wrote {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Write to `path` in the format named by its extension (`.ppm` or `.png`).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "ppm" => self.write_ppm(path),
            "png" => self.write_png(path),
            _ => Err(CanvasError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lumen-canvas-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_new_canvas_is_black() {
        let c = Canvas::new(10, 20);
        assert_eq!(c.width(), 10);
        assert_eq!(c.height(), 20);
        assert!(c.rows().flatten().all(|p| *p == Color::BLACK));
        assert_eq!(c.rows().count(), 20);
    }

    #[test]
    fn test_write_and_read_pixel() {
        let mut c = Canvas::new(10, 20);
        c.write_pixel(2, 3, Color::RED).unwrap();
        assert_eq!(c.pixel_at(2, 3), Some(Color::RED));
        assert_eq!(c.pixel_at(3, 2), Some(Color::BLACK));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut c = Canvas::new(4, 2);
        assert!(matches!(
            c.write_pixel(4, 0, Color::WHITE),
            Err(CanvasError::OutOfBounds { x: 4, y: 0, width: 4, height: 2 })
        ));
        assert!(c.write_pixel(0, 2, Color::WHITE).is_err());
        assert_eq!(c.pixel_at(4, 0), None);
    }

    #[test]
    fn test_rgb_image_matches_pixels() {
        let mut c = Canvas::new(3, 2);
        c.write_pixel(2, 1, Color::new(0.0, 0.5, 2.0)).unwrap();
        let img = c.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [0, 128, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_empty_canvas_has_no_image() {
        assert!(matches!(
            Canvas::new(0, 5).to_rgb_image(),
            Err(CanvasError::EmptyCanvas)
        ));
    }

    #[test]
    fn test_save_ppm() {
        let path = scratch("save.ppm");
        let mut c = Canvas::new(2, 1);
        c.write_pixel(0, 0, Color::WHITE).unwrap();
        c.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 255 255 0 0 0\n");
    }

    #[test]
    fn test_save_png() {
        let path = scratch("save.png");
        let mut c = Canvas::new(4, 3);
        c.write_pixel(1, 2, Color::RED).unwrap();
        c.save(&path).unwrap();
        let img = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(1, 2).0, [255, 0, 0]);
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let c = Canvas::new(1, 1);
        assert!(matches!(
            c.save(scratch("out.bmp")),
            Err(CanvasError::UnsupportedFormat(ext)) if ext == "bmp"
        ));
    }
}
