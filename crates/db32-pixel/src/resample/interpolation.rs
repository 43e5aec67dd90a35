//! Interpolation policies and the generic resize kernel.

use crate::color::Color;
use crate::grid::PixelGrid;

/// How source pixels are combined when the grid changes size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest-neighbor sampling. Never produces a color that is not
    /// already present in the source.
    #[default]
    Nearest,
    /// Triangle filter. When shrinking, its support widens by the shrink
    /// ratio so every destination pixel averages its whole source footprint.
    Bilinear,
}

/// Resize `grid` to `width x height` using the given policy.
///
/// Both samplers map destination pixel centres onto source pixel centres,
/// so an unchanged size returns an identical grid.
///
/// # Panics
///
/// Panics if `width` or `height` is zero.
pub fn resize(grid: &PixelGrid, width: usize, height: usize, policy: Interpolation) -> PixelGrid {
    if grid.dimensions() == (width, height) {
        return grid.clone();
    }
    match policy {
        Interpolation::Nearest => resize_nearest(grid, width, height),
        Interpolation::Bilinear => resize_bilinear(grid, width, height),
    }
}

/// Source index whose centre is closest to destination index `dst`.
///
/// `floor((dst + 0.5) * src_len / dst_len)` in integer arithmetic.
#[inline]
fn nearest_source(dst: usize, src_len: usize, dst_len: usize) -> usize {
    ((2 * dst + 1) * src_len / (2 * dst_len)).min(src_len - 1)
}

fn resize_nearest(grid: &PixelGrid, width: usize, height: usize) -> PixelGrid {
    let (src_w, src_h) = grid.dimensions();
    let columns: Vec<usize> = (0..width)
        .map(|x| nearest_source(x, src_w, width))
        .collect();

    let mut out = PixelGrid::filled(width, height, Color::BLACK);
    for y in 0..height {
        let src_row = grid.row(nearest_source(y, src_h, height));
        let start = y * width;
        for (px, &sx) in out.pixels_mut()[start..start + width]
            .iter_mut()
            .zip(&columns)
        {
            *px = src_row[sx];
        }
    }
    out
}

/// Source window and normalised weights for one destination index.
struct Taps {
    start: usize,
    weights: Vec<f64>,
}

#[inline]
fn triangle(x: f64) -> f64 {
    let x = x.abs();
    if x < 1.0 {
        1.0 - x
    } else {
        0.0
    }
}

/// Filter taps for one axis.
///
/// The triangle kernel has radius 1 in destination pixels, i.e.
/// `max(1, src_len / dst_len)` source pixels. Windows are clipped at the
/// edges and the remaining weights renormalised to sum to 1.
fn taps(src_len: usize, dst_len: usize) -> Vec<Taps> {
    let scale = src_len as f64 / dst_len as f64;
    let support = scale.max(1.0);
    (0..dst_len)
        .map(|d| {
            let centre = (d as f64 + 0.5) * scale;
            let start = (centre - support + 0.5).floor().max(0.0) as usize;
            let end = ((centre + support + 0.5).floor() as usize).min(src_len);
            let mut weights: Vec<f64> = (start..end)
                .map(|s| triangle((s as f64 + 0.5 - centre) / support))
                .collect();
            let total: f64 = weights.iter().sum();
            for w in &mut weights {
                *w /= total;
            }
            Taps { start, weights }
        })
        .collect()
}

#[inline]
fn channels(c: Color) -> [f64; 3] {
    [c.r as f64, c.g as f64, c.b as f64]
}

#[inline]
fn accumulate(acc: &mut [f64; 3], weight: f64, c: [f64; 3]) {
    for (a, v) in acc.iter_mut().zip(c) {
        *a += weight * v;
    }
}

#[inline]
fn round_channels(acc: [f64; 3]) -> [f64; 3] {
    acc.map(|v| v.round().clamp(0.0, 255.0))
}

/// Separable resize: rows first, then columns, rounding to 8-bit levels
/// after each pass.
fn resize_bilinear(grid: &PixelGrid, width: usize, height: usize) -> PixelGrid {
    let (src_w, src_h) = grid.dimensions();
    let xs = taps(src_w, width);
    let ys = taps(src_h, height);

    let mut rows = vec![[0.0f64; 3]; src_h * width];
    for (y, src_row) in grid.rows().enumerate() {
        for (x, tap) in xs.iter().enumerate() {
            let mut acc = [0.0; 3];
            for (&w, &c) in tap.weights.iter().zip(&src_row[tap.start..]) {
                accumulate(&mut acc, w, channels(c));
            }
            rows[y * width + x] = round_channels(acc);
        }
    }

    let mut out = PixelGrid::filled(width, height, Color::BLACK);
    for (y, tap) in ys.iter().enumerate() {
        for x in 0..width {
            let mut acc = [0.0; 3];
            for (k, &w) in tap.weights.iter().enumerate() {
                accumulate(&mut acc, w, rows[(tap.start + k) * width + x]);
            }
            let [r, g, b] = round_channels(acc);
            out.set(x, y, Color::new(r as u8, g as u8, b as u8));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripes(width: usize, height: usize) -> PixelGrid {
        let pixels = (0..width * height)
            .map(|i| {
                if (i % width) % 2 == 0 {
                    Color::BLACK
                } else {
                    Color::WHITE
                }
            })
            .collect();
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_same_size_is_identity() {
        let grid = stripes(5, 3);
        assert_eq!(resize(&grid, 5, 3, Interpolation::Nearest), grid);
        assert_eq!(resize(&grid, 5, 3, Interpolation::Bilinear), grid);
    }

    #[test]
    fn test_nearest_source_centres() {
        // 4 -> 2 picks source columns 1 and 3
        assert_eq!(nearest_source(0, 4, 2), 1);
        assert_eq!(nearest_source(1, 4, 2), 3);
        // 2 -> 4 duplicates each source column
        let picks: Vec<usize> = (0..4).map(|d| nearest_source(d, 2, 4)).collect();
        assert_eq!(picks, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_nearest_never_invents_colors() {
        let grid = stripes(7, 5);
        let out = resize(&grid, 3, 2, Interpolation::Nearest);
        assert_eq!(out.dimensions(), (3, 2));
        assert!(out
            .pixels()
            .iter()
            .all(|&c| c == Color::BLACK || c == Color::WHITE));
    }

    #[test]
    fn test_bilinear_blends_neighbours() {
        // 2x1 black|white -> 1x1 samples the midpoint
        let grid = stripes(2, 1);
        let out = resize(&grid, 1, 1, Interpolation::Bilinear);
        // 127.5 rounds away from zero
        assert_eq!(out.get(0, 0), Color::new(128, 128, 128));
    }

    #[test]
    fn test_bilinear_downscale_weights_whole_footprint() {
        // black|black|white|white -> 2 samples, each seeing three sources
        let pixels = vec![Color::BLACK, Color::BLACK, Color::WHITE, Color::WHITE];
        let grid = PixelGrid::from_pixels(4, 1, pixels).unwrap();
        let out = resize(&grid, 2, 1, Interpolation::Bilinear);
        // 255 * 0.25 / 1.75 and 255 * 1.5 / 1.75
        assert_eq!(out.get(0, 0), Color::new(36, 36, 36));
        assert_eq!(out.get(1, 0), Color::new(219, 219, 219));
    }

    #[test]
    fn test_bilinear_small_dark_centre_stays_light() {
        // 8x8 white with a 2x2 black centre -> one sample
        let mut grid = PixelGrid::filled(8, 8, Color::WHITE);
        grid.fill_rect(3, 3, 5, 5, Color::BLACK);
        let out = resize(&grid, 1, 1, Interpolation::Bilinear);
        // row pass: 255 * (1 - 0.3125) = 175.3 -> 175
        // column pass: 0.6875 * 255 + 0.3125 * 175 = 230
        assert_eq!(out.get(0, 0), Color::new(230, 230, 230));
    }

    #[test]
    fn test_bilinear_solid_stays_solid() {
        let color = Color::new(10, 200, 30);
        let grid = PixelGrid::filled(9, 4, color);
        let out = resize(&grid, 4, 7, Interpolation::Bilinear);
        assert!(out.pixels().iter().all(|&c| c == color));
    }

    #[test]
    fn test_bilinear_edges_clamp() {
        let grid = stripes(2, 1);
        let out = resize(&grid, 8, 1, Interpolation::Bilinear);
        assert_eq!(out.get(0, 0), Color::BLACK);
        assert_eq!(out.get(7, 0), Color::WHITE);
    }
}
