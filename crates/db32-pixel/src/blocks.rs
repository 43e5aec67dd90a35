//! Block-mosaic stylization.
//!
//! A cheaper look than the full pixel-art pipeline: the image keeps its
//! original size, but is painted with solid `block x block` tiles whose color
//! is the palette match of a smoothly averaged sample.

use crate::color::Color;
use crate::grid::PixelGrid;
use crate::palette::Palette;
use crate::resample::{resize, Interpolation};

/// Repaint `grid` as palette-colored blocks of `block_size` pixels.
///
/// The sample grid is `max(1, w / block) x max(1, h / block)`, resized with
/// bilinear interpolation. Blocks are clipped at the right and bottom edges;
/// any strip not covered by a whole number of blocks keeps the palette's
/// nearest black.
///
/// # Panics
///
/// Panics if `block_size` is zero. Callers validate it through
/// [`BlockOptions`](crate::BlockOptions).
pub fn stylize_blocks(grid: &PixelGrid, block_size: usize, palette: &Palette) -> PixelGrid {
    assert!(block_size >= 1, "block size must be at least 1");
    let (width, height) = grid.dimensions();
    let cols = (width / block_size).max(1);
    let rows = (height / block_size).max(1);

    let samples = resize(grid, cols, rows, Interpolation::Bilinear);
    let mut out = PixelGrid::filled(width, height, palette.nearest(Color::BLACK));

    for by in 0..rows {
        for bx in 0..cols {
            let color = palette.nearest(samples.get(bx, by));
            let x0 = bx * block_size;
            let y0 = by * block_size;
            out.fill_rect(x0, y0, x0 + block_size, y0 + block_size, color);
        }
    }
    out
}
