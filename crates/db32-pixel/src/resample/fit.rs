//! Aspect-preserving sizing rules built on [`resize`].

use super::interpolation::{resize, Interpolation};
use crate::color::Color;
use crate::grid::PixelGrid;

/// Height correction for glyph grids: character cells are taller than wide.
pub const GLYPH_ASPECT: f64 = 0.55;

/// Dimensions after fitting `width x height` inside a `max_size` square.
///
/// If both edges already fit, the size is unchanged (this stage never
/// upscales). Otherwise the longer edge becomes `max_size` and the shorter
/// edge is `floor(short * max_size / long)`, with a floor of 1 pixel so that
/// extreme aspect ratios still produce a non-empty grid.
///
/// ```
/// use db32_pixel::resample::fit_dimensions;
///
/// assert_eq!(fit_dimensions(256, 128, 64), (64, 32));
/// assert_eq!(fit_dimensions(100, 300, 128), (42, 128));
/// assert_eq!(fit_dimensions(50, 20, 128), (50, 20));
/// ```
pub fn fit_dimensions(width: usize, height: usize, max_size: usize) -> (usize, usize) {
    if width <= max_size && height <= max_size {
        return (width, height);
    }
    if width >= height {
        let h = (height * max_size / width).max(1);
        (max_size, h)
    } else {
        let w = (width * max_size / height).max(1);
        (w, max_size)
    }
}

/// Downscale so the longer edge is at most `max_size`, nearest-neighbor.
pub fn downscale_to_fit(grid: &PixelGrid, max_size: usize) -> PixelGrid {
    let (w, h) = fit_dimensions(grid.width(), grid.height(), max_size);
    resize(grid, w, h, Interpolation::Nearest)
}

/// Enlarge by an integer factor, each source pixel becoming a solid
/// `factor x factor` block. `factor == 1` returns an identical grid.
///
/// # Panics
///
/// Panics if `factor` is zero or the enlarged size overflows `usize`.
pub fn upscale(grid: &PixelGrid, factor: usize) -> PixelGrid {
    assert!(factor >= 1, "upscale factor must be at least 1");
    if factor == 1 {
        return grid.clone();
    }
    let (w, h) = grid.dimensions();
    let out_w = w * factor;
    let mut out = PixelGrid::filled(out_w, h * factor, Color::BLACK);

    let mut wide_row = Vec::with_capacity(out_w);
    for (y, row) in grid.rows().enumerate() {
        wide_row.clear();
        for &c in row {
            wide_row.extend(std::iter::repeat(c).take(factor));
        }
        for dy in 0..factor {
            let start = (y * factor + dy) * out_w;
            out.pixels_mut()[start..start + out_w].copy_from_slice(&wide_row);
        }
    }
    out
}

/// Glyph grid dimensions: `columns` wide, `floor(h / w * columns * 0.55)` tall.
///
/// The height never drops below one row.
pub fn glyph_dimensions(width: usize, height: usize, columns: usize) -> (usize, usize) {
    let aspect = height as f64 / width as f64;
    let rows = (aspect * columns as f64 * GLYPH_ASPECT) as usize;
    (columns, rows.max(1))
}
