//! Brightness-to-glyph mapping.
//!
//! The glyph pipeline resizes the source smoothly to a character grid,
//! compensating for cells that are taller than wide, then picks one
//! character per cell from a brightness ramp. Each cell keeps its source
//! color so a text rasterizer can draw it in that color.
//!
//! ```
//! use db32_pixel::{Color, GlyphGrid, PixelGrid};
//!
//! let image = PixelGrid::filled(40, 20, Color::WHITE);
//! let glyphs = GlyphGrid::from_grid(&image, 10);
//!
//! assert_eq!(glyphs.columns(), 10);
//! assert_eq!(glyphs.rows(), 2);
//! assert_eq!(glyphs.to_text(), "@@@@@@@@@@\n@@@@@@@@@@\n");
//! ```

mod glyph_grid;
mod ramp;

pub use glyph_grid::{GlyphCell, GlyphGrid};
pub use ramp::{GlyphRamp, DEFAULT_RAMP};
