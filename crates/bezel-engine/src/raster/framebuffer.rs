use anyhow::{ensure, Result};

use crate::coords::BoxEdges;
use crate::paint::Color;

/// CPU color target in straight-alpha RGBA.
///
/// Addressed in screen space (+Y up): pixel `(0, 0)` is the bottom-left
/// corner. Storage is row-major with the top row first, which is what image
/// encoders expect.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Creates a transparent framebuffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        ensure!(width > 0 && height > 0, "framebuffer has zero size ({width}x{height})");
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| anyhow::anyhow!("framebuffer {width}x{height} is too large"))?;
        Ok(Self { width, height, pixels: vec![Color::transparent(); len] })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Box spanning every pixel position in the framebuffer.
    #[inline]
    pub fn bounds(&self) -> BoxEdges {
        BoxEdges::new(0.0, (self.width - 1) as f32, (self.height - 1) as f32, 0.0)
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Color at `(x, y)` in screen space, or `None` out of range.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.storage_row(y) * self.width as usize + x as usize])
    }

    /// All pixels, top row first.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Raw `f32` RGBA bytes in native endianness, top row first.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Quantized straight RGBA8, top row first.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let quantized: Vec<[u8; 4]> = self.pixels.iter().map(|c| c.to_rgba8()).collect();
        bytemuck::cast_slice(&quantized).to_vec()
    }

    /// Storage row holding screen row `y`.
    #[inline]
    pub(crate) fn storage_row(&self, y: u32) -> usize {
        (self.height - 1 - y) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_an_error() {
        assert!(Framebuffer::new(0, 4).is_err());
        assert!(Framebuffer::new(4, 0).is_err());
    }

    #[test]
    fn starts_transparent() {
        let fb = Framebuffer::new(3, 2).unwrap();
        assert!(fb.pixels().iter().all(|&c| c == Color::transparent()));
        assert_eq!(fb.pixels().len(), 6);
    }

    #[test]
    fn bottom_left_origin_maps_to_last_storage_row() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.pixels_mut()[3] = Color::white();
        assert_eq!(fb.pixel(0, 0), Some(Color::white()));
        assert_eq!(fb.pixel(0, 1), Some(Color::transparent()));
        assert_eq!(fb.pixel(3, 0), None);
    }

    #[test]
    fn bounds_cover_pixel_positions() {
        let fb = Framebuffer::new(640, 480).unwrap();
        assert_eq!(fb.bounds(), BoxEdges::new(0.0, 639.0, 479.0, 0.0));
    }

    #[test]
    fn byte_views() {
        let mut fb = Framebuffer::new(2, 1).unwrap();
        fb.clear(Color::new(1.0, 0.0, 0.5, 1.0));
        assert_eq!(fb.as_bytes().len(), 2 * 16);
        assert_eq!(fb.to_rgba8(), vec![255, 0, 128, 255, 255, 0, 128, 255]);
    }
}
