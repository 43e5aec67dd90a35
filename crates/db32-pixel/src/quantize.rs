//! Per-pixel palette quantization.
//!
//! Each output pixel is the nearest palette entry to the corresponding input
//! pixel. There is no error diffusion, so pixels are independent and rows are
//! mapped in parallel with rayon; the result is identical to a sequential
//! scan.

use rayon::prelude::*;

use crate::grid::PixelGrid;
use crate::palette::Palette;

/// Snap every pixel of `grid` to its nearest `palette` entry.
///
/// # Example
///
/// ```
/// use db32_pixel::{quantize, Color, Palette, PixelGrid};
///
/// let palette = Palette::db32();
/// let grid = PixelGrid::filled(4, 4, Color::new(255, 0, 0));
/// let out = quantize(&grid, &palette);
///
/// assert!(out.pixels().iter().all(|&c| c == Color::new(172, 50, 50)));
/// ```
pub fn quantize(grid: &PixelGrid, palette: &Palette) -> PixelGrid {
    let mut out = grid.clone();
    let width = out.width();
    out.pixels_mut()
        .par_chunks_mut(width)
        .for_each(|row| {
            for px in row.iter_mut() {
                *px = palette.nearest(*px);
            }
        });
    out
}

/// Palette index of every pixel, row-major.
///
/// For a grid that only holds palette entries these are exact indices,
/// ready for an indexed PNG's pixel data.
pub fn quantize_indices(grid: &PixelGrid, palette: &Palette) -> Vec<u8> {
    grid.pixels()
        .par_iter()
        .map(|&c| palette.nearest_index(c) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn gradient(width: usize, height: usize) -> PixelGrid {
        let pixels = (0..width * height)
            .map(|i| {
                let x = (i % width) as u32;
                let y = (i / width) as u32;
                Color::new(
                    (x * 255 / width as u32) as u8,
                    (y * 255 / height as u32) as u8,
                    ((x + y) * 7 % 256) as u8,
                )
            })
            .collect();
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_quantize_preserves_dimensions() {
        let grid = gradient(13, 7);
        let out = quantize(&grid, &Palette::db32());
        assert_eq!(out.dimensions(), (13, 7));
    }

    #[test]
    fn test_quantize_matches_per_pixel_lookup() {
        let palette = Palette::db32();
        let grid = gradient(16, 16);
        let out = quantize(&grid, &palette);
        for (src, dst) in grid.pixels().iter().zip(out.pixels()) {
            assert_eq!(*dst, palette.nearest(*src));
        }
    }

    #[test]
    fn test_quantize_does_not_touch_input() {
        let grid = gradient(4, 4);
        let before = grid.clone();
        let _ = quantize(&grid, &Palette::db32());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_indices_agree_with_colors() {
        let palette = Palette::db32();
        let grid = gradient(9, 5);
        let colors = quantize(&grid, &palette);
        let indices = quantize_indices(&grid, &palette);
        for (idx, c) in indices.iter().zip(colors.pixels()) {
            assert_eq!(palette.color(*idx as usize), *c);
        }
    }
}
