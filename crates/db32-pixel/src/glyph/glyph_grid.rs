//! Character grid produced from a pixel grid.

use super::ramp::GlyphRamp;
use crate::color::Color;
use crate::grid::PixelGrid;
use crate::resample::{glyph_dimensions, resize, Interpolation};

/// One character cell: the glyph and the color to draw it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    pub glyph: char,
    pub color: Color,
}

/// A row-major grid of [`GlyphCell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    cells: Vec<GlyphCell>,
    columns: usize,
    rows: usize,
}

impl GlyphGrid {
    /// Map `grid` to `columns` glyphs per row.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    pub fn from_grid(grid: &PixelGrid, columns: usize) -> Self {
        let ramp = GlyphRamp::default();
        let (w, h) = glyph_dimensions(grid.width(), grid.height(), columns);
        let cells_grid = resize(grid, w, h, Interpolation::Bilinear);
        let cells = cells_grid
            .pixels()
            .iter()
            .map(|&color| GlyphCell {
                glyph: ramp.glyph_for(color),
                color,
            })
            .collect();
        Self {
            cells,
            columns: w,
            rows: h,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, column: usize, row: usize) -> GlyphCell {
        self.cells[row * self.columns + column]
    }

    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    /// Overwrite the rightmost cells of the last row with `signature` in white.
    ///
    /// A signature longer than a row keeps only its last `columns` characters.
    pub fn sign(&mut self, signature: &str) {
        let chars: Vec<char> = signature.chars().collect();
        let skip = chars.len().saturating_sub(self.columns);
        let chars = &chars[skip..];

        let row_start = (self.rows - 1) * self.columns;
        let start = row_start + self.columns - chars.len();
        for (cell, &glyph) in self.cells[start..].iter_mut().zip(chars) {
            *cell = GlyphCell {
                glyph,
                color: Color::WHITE,
            };
        }
    }

    /// Plain-text rendering, one line per row, each line newline-terminated.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.columns + 1) * self.rows);
        for row in self.cells.chunks_exact(self.columns) {
            text.extend(row.iter().map(|c| c.glyph));
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_use_aspect_correction() {
        let grid = PixelGrid::filled(200, 100, Color::BLACK);
        let glyphs = GlyphGrid::from_grid(&grid, 100);
        assert_eq!((glyphs.columns(), glyphs.rows()), (100, 27));
        assert_eq!(glyphs.cells().len(), 2700);
    }

    #[test]
    fn test_cells_keep_color() {
        let color = Color::new(95, 205, 228);
        let grid = PixelGrid::filled(30, 30, color);
        let glyphs = GlyphGrid::from_grid(&grid, 6);
        assert_eq!(glyphs.cell(3, 1).color, color);
    }

    #[test]
    fn test_sign_overwrites_last_row() {
        let grid = PixelGrid::filled(40, 40, Color::BLACK);
        let mut glyphs = GlyphGrid::from_grid(&grid, 8);
        glyphs.sign("abc");

        let last = glyphs.rows() - 1;
        assert_eq!(glyphs.cell(5, last).glyph, 'a');
        assert_eq!(glyphs.cell(7, last).glyph, 'c');
        assert_eq!(glyphs.cell(7, last).color, Color::WHITE);
        assert_eq!(glyphs.cell(4, last).glyph, ' ');
        assert_eq!(glyphs.cell(7, 0).glyph, ' ');
    }

    #[test]
    fn test_sign_truncates_to_row() {
        let grid = PixelGrid::filled(10, 10, Color::BLACK);
        let mut glyphs = GlyphGrid::from_grid(&grid, 3);
        glyphs.sign("signature");
        let text = glyphs.to_text();
        assert!(text.ends_with("ure\n"), "got {:?}", text);
    }
}
