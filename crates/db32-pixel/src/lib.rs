#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! db32-pixel: palette-constrained pixel art
//!
//! This library turns an arbitrary RGB raster into pixel art restricted to
//! the 32-color DawnBringer palette (DB32), and provides the brightness
//! lookup used to render images as colored glyphs.
//!
//! # Quick Start
//!
//! The [`PixelArtPipeline`] is the primary entry point:
//!
//! ```
//! use db32_pixel::{Color, PixelArtOptions, PixelArtPipeline, PixelGrid};
//!
//! let pipeline = PixelArtPipeline::new(&PixelArtOptions::default()).unwrap();
//! let source = PixelGrid::filled(640, 480, Color::new(120, 180, 90));
//! let art = pipeline.run(&source).unwrap();
//!
//! // 128x96 body, 4x upscale, 20px margin on each side
//! assert_eq!(art.dimensions(), (552, 424));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source RGB grid
//!     |
//!     v
//! downscale_to_fit        longer edge <= max_size, nearest-neighbor
//!     |
//!     v
//! quantize                each pixel -> nearest DB32 entry
//!     |
//!     v
//! upscale                 each pixel -> solid k x k block
//!     |
//!     v
//! compose_border          margin, concentric outlines, body centred
//! ```
//!
//! ## Nearest-color matching
//!
//! Distance is the squared Euclidean distance between RGB byte triples,
//! computed in integers. Matching is a linear scan over the palette in its
//! declared order, replacing the current best only on a strictly smaller
//! distance, so equidistant entries resolve to the lowest index. Output is
//! therefore reproducible bit-for-bit across runs and platforms.
//!
//! ## Why nearest-neighbor on both ends
//!
//! Downscaling with a smoothing filter would synthesize blended colors that
//! then quantize differently from the source pixels. Upscaling by an integer
//! factor with nearest sampling turns each quantized pixel into a uniform
//! block, so the final image still contains only palette colors.
//!
//! # Other renderers
//!
//! - [`stylize_blocks`]: keep the original size, paint palette-colored tiles
//! - [`GlyphGrid`]: smooth resize to a character grid and pick one glyph per
//!   cell by brightness

pub mod api;
pub mod blocks;
pub mod color;
pub mod compose;
pub mod glyph;
pub mod grid;
pub mod palette;
pub mod quantize;
pub mod resample;


pub use api::{
    BlockOptions, ConfigError, GlyphOptions, PipelineStages, PixelArtOptions, PixelArtPipeline,
    MAX_OUTPUT_EDGE,
};
pub use blocks::stylize_blocks;
pub use color::{Color, ParseColorError};
pub use compose::{compose_border, BorderLayer, BorderSpec};
pub use glyph::{GlyphCell, GlyphGrid, GlyphRamp};
pub use grid::{GridError, PixelGrid};
pub use palette::{Palette, PaletteError, DB32};
pub use quantize::{quantize, quantize_indices};
pub use resample::{downscale_to_fit, resize, upscale, Interpolation};
