//! PixelGrid struct: a row-major 2D array of colors.

use super::error::GridError;
use crate::color::Color;

/// A width x height raster of [`Color`], row-major, origin at the top-left.
///
/// Both dimensions are always at least 1.
///
/// # Example
///
/// ```
/// use db32_pixel::{Color, PixelGrid};
///
/// let mut grid = PixelGrid::filled(3, 2, Color::BLACK);
/// grid.set(2, 1, Color::WHITE);
///
/// assert_eq!(grid.dimensions(), (3, 2));
/// assert_eq!(grid.get(2, 1), Color::WHITE);
/// assert_eq!(grid.pixels()[5], Color::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Create a grid where every pixel is `color`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {}x{}",
            width,
            height
        );
        Self {
            pixels: vec![color; width * height],
            width,
            height,
        }
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyDimensions`] if either dimension is zero
    /// - [`GridError::LengthMismatch`] if `pixels.len() != width * height`
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a grid from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Same as [`PixelGrid::from_pixels`]; the expected length is
    /// `width * height * 3` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, rgb: &[u8]) -> Result<Self, GridError> {
        if rgb.len() % 3 != 0 || rgb.len() / 3 != width * height {
            return Err(GridError::LengthMismatch {
                expected: width * height * 3,
                actual: rgb.len(),
            });
        }
        let pixels = rgb
            .chunks_exact(3)
            .map(|p| Color::new(p[0], p[1], p[2]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Color at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// Overwrite the color at column `x`, row `y`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = color;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable access to the row-major buffer.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Row `y` as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[Color] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Fill the axis-aligned rectangle `[x0, x1) x [y0, y1)`, clipped to the grid.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: Color) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            let start = y * self.width;
            for px in &mut self.pixels[start + x0.min(x1)..start + x1] {
                *px = color;
            }
        }
    }

    /// Copy `src` into this grid with its top-left corner at `(x, y)`.
    ///
    /// Parts of `src` that fall outside the grid are dropped.
    pub fn blit(&mut self, src: &PixelGrid, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        let copy_w = src.width.min(self.width - x);
        let copy_h = src.height.min(self.height - y);
        for row in 0..copy_h {
            let dst_start = (y + row) * self.width + x;
            self.pixels[dst_start..dst_start + copy_w].copy_from_slice(&src.row(row)[..copy_w]);
        }
    }

    /// Flatten to `[R, G, B, ...]` bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for c in &self.pixels {
            rgb.extend_from_slice(&c.to_bytes());
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_validates_length() {
        let result = PixelGrid::from_pixels(2, 2, vec![Color::BLACK; 3]);
        assert_eq!(
            result,
            Err(GridError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_pixels_rejects_zero_dimensions() {
        let result = PixelGrid::from_pixels(0, 5, Vec::new());
        assert!(matches!(result, Err(GridError::EmptyDimensions { .. })));
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be positive")]
    fn test_filled_panics_on_zero() {
        let _ = PixelGrid::filled(4, 0, Color::BLACK);
    }

    #[test]
    fn test_row_major_layout() {
        let pixels: Vec<Color> = (0..6).map(|i| Color::new(i, 0, 0)).collect();
        let grid = PixelGrid::from_pixels(3, 2, pixels).unwrap();
        assert_eq!(grid.get(0, 1), Color::new(3, 0, 0));
        assert_eq!(grid.row(1)[2], Color::new(5, 0, 0));
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    fn test_rgb_bytes_round_trip() {
        let rgb = [1, 2, 3, 4, 5, 6];
        let grid = PixelGrid::from_rgb_bytes(2, 1, &rgb).unwrap();
        assert_eq!(grid.get(1, 0), Color::new(4, 5, 6));
        assert_eq!(grid.to_rgb_bytes(), rgb.to_vec());
    }

    #[test]
    fn test_from_rgb_bytes_rejects_partial_pixel() {
        let result = PixelGrid::from_rgb_bytes(1, 1, &[1, 2]);
        assert!(matches!(result, Err(GridError::LengthMismatch { .. })));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut grid = PixelGrid::filled(4, 4, Color::BLACK);
        grid.fill_rect(2, 2, 10, 10, Color::WHITE);
        assert_eq!(grid.get(1, 1), Color::BLACK);
        assert_eq!(grid.get(3, 3), Color::WHITE);
        assert_eq!(grid.pixels().iter().filter(|&&c| c == Color::WHITE).count(), 4);
    }

    #[test]
    fn test_blit_clips_to_destination() {
        let mut dst = PixelGrid::filled(3, 3, Color::BLACK);
        let src = PixelGrid::filled(2, 2, Color::WHITE);
        dst.blit(&src, 2, 2);
        assert_eq!(dst.get(2, 2), Color::WHITE);
        assert_eq!(dst.pixels().iter().filter(|&&c| c == Color::WHITE).count(), 1);
    }
}
