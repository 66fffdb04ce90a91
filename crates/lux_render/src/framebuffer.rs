//! Pixel buffer for render output.

use std::path::Path;

use lux_core::Color;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to packed 8-bit RGBA.
pub fn color_to_rgba8(color: Color) -> [u8; 4] {
    let r = (255.0 * linear_to_gamma(color.x).clamp(0.0, 1.0)) as u8;
    let g = (255.0 * linear_to_gamma(color.y).clamp(0.0, 1.0)) as u8;
    let b = (255.0 * linear_to_gamma(color.z).clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Image buffer holding one linear RGB color per pixel.
///
/// Rows run bottom-up: row 0 is the bottom scanline, matching the
/// camera's vertical axis. `save_png` flips rows on the way out.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to packed RGBA bytes in buffer (bottom-up) row order.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let rgba: Vec<[u8; 4]> = self.pixels.iter().map(|c| color_to_rgba8(*c)).collect();
        bytemuck::cast_slice(&rgba).to_vec()
    }

    /// Save the buffer as a PNG, flipping rows so the top scanline comes
    /// first as image formats expect.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let mut rgba: Vec<[u8; 4]> =
            Vec::with_capacity((self.width * self.height) as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                rgba.push(color_to_rgba8(self.get(x, y)));
            }
        }

        image::save_buffer(
            path,
            bytemuck::cast_slice(&rgba),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_starts_black() {
        let image = ImageBuffer::new(4, 2);
        assert_eq!(image.pixels.len(), 8);
        assert_eq!(image.get(3, 1), Color::ZERO);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut image = ImageBuffer::new(4, 4);
        let color = Color::new(0.25, 0.5, 1.0);
        image.set(2, 3, color);

        assert_eq!(image.get(2, 3), color);
        assert_eq!(image.get(2, 2), Color::ZERO);
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_to_rgba8() {
        assert_eq!(color_to_rgba8(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba8(Color::ONE), [255, 255, 255, 255]);
        // Out-of-range values clamp rather than wrap
        assert_eq!(color_to_rgba8(Color::splat(4.0)), [255, 255, 255, 255]);
        assert_eq!(color_to_rgba8(Color::new(0.25, 0.0, 0.0))[0], 127);
    }

    #[test]
    fn test_to_rgba8_layout() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(1, 0, Color::ONE);

        let bytes = image.to_rgba8();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[4..8], &[255, 255, 255, 255]);
    }
}
