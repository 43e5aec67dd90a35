//! User-facing options and their validation.
//!
//! Option fields are signed so that out-of-range input (a negative
//! `max_size` read from a config file, say) reaches [`ConfigError`] instead
//! of being silently wrapped or clamped.

use super::error::ConfigError;
use crate::blocks::stylize_blocks;
use crate::color::Color;
use crate::compose::{FRAME_INNER, FRAME_OUTER};
use crate::glyph::GlyphGrid;
use crate::grid::PixelGrid;
use crate::palette::Palette;
use crate::resample::glyph_dimensions;

/// Longest edge, in pixels or glyph cells, that a renderer will allocate.
pub const MAX_OUTPUT_EDGE: usize = 32_768;

/// Configuration for the pixel-art pipeline.
///
/// # Defaults
///
/// - `max_size`: 128 (longer edge of the downscaled grid)
/// - `scale_factor`: 4 (block size of the upscale)
/// - `add_border`: true
/// - `border_size`: 20 (margin in output pixels)
/// - `frame_colors`: white, then (91, 110, 225), outermost first
///
/// # Example
///
/// ```
/// use db32_pixel::PixelArtOptions;
///
/// let options = PixelArtOptions::new()
///     .max_size(64)
///     .scale_factor(8)
///     .add_border(false);
/// assert!(options.validate().is_ok());
///
/// assert!(PixelArtOptions::new().max_size(-1).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelArtOptions {
    /// Longest edge after downscaling; must be > 0.
    pub max_size: i64,

    /// Integer upscale factor; must be >= 1.
    pub scale_factor: i64,

    /// Whether to frame the output.
    pub add_border: bool,

    /// Margin added on each side when framing; must be >= 0.
    pub border_size: i64,

    /// One outline per color inside the margin, outermost first.
    pub frame_colors: Vec<Color>,
}

impl Default for PixelArtOptions {
    fn default() -> Self {
        Self {
            max_size: 128,
            scale_factor: 4,
            add_border: true,
            border_size: 20,
            frame_colors: vec![FRAME_OUTER, FRAME_INNER],
        }
    }
}

impl PixelArtOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn max_size(mut self, max_size: i64) -> Self {
        self.max_size = max_size;
        self
    }

    #[inline]
    pub fn scale_factor(mut self, factor: i64) -> Self {
        self.scale_factor = factor;
        self
    }

    #[inline]
    pub fn add_border(mut self, enabled: bool) -> Self {
        self.add_border = enabled;
        self
    }

    #[inline]
    pub fn border_size(mut self, size: i64) -> Self {
        self.border_size = size;
        self
    }

    #[inline]
    pub fn frame_colors(mut self, colors: Vec<Color>) -> Self {
        self.frame_colors = colors;
        self
    }

    /// Check every field, reporting the first one out of range.
    ///
    /// `border_size` is checked even when `add_border` is false.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_size <= 0 {
            return Err(ConfigError::InvalidMaxSize(self.max_size));
        }
        if self.scale_factor < 1 {
            return Err(ConfigError::InvalidScaleFactor(self.scale_factor));
        }
        if self.border_size < 0 {
            return Err(ConfigError::InvalidBorderSize(self.border_size));
        }
        Ok(())
    }
}

/// Configuration for block-mosaic stylization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOptions {
    /// Edge of each solid block in pixels; must be >= 1. Default 4.
    pub block_size: i64,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self { block_size: 4 }
    }
}

impl BlockOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn block_size(mut self, size: i64) -> Self {
        self.block_size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size < 1 {
            return Err(ConfigError::InvalidBlockSize(self.block_size));
        }
        Ok(())
    }

    /// Validate, then repaint `grid` as palette blocks.
    pub fn render(&self, grid: &PixelGrid, palette: &Palette) -> Result<PixelGrid, ConfigError> {
        self.validate()?;
        Ok(stylize_blocks(grid, self.block_size as usize, palette))
    }
}

/// Configuration for glyph mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphOptions {
    /// Glyphs per row; must be >= 1. Default 100.
    pub columns: i64,

    /// Text written over the end of the last row, if any.
    pub signature: Option<String>,
}

impl Default for GlyphOptions {
    fn default() -> Self {
        Self {
            columns: 100,
            signature: None,
        }
    }
}

impl GlyphOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn columns(mut self, columns: i64) -> Self {
        self.columns = columns;
        self
    }

    #[inline]
    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < 1 {
            return Err(ConfigError::InvalidColumns(self.columns));
        }
        if self.columns as u64 > MAX_OUTPUT_EDGE as u64 {
            return Err(ConfigError::OutputTooLarge {
                limit: MAX_OUTPUT_EDGE,
            });
        }
        Ok(())
    }

    /// Validate, then map `grid` to glyphs and apply the signature.
    ///
    /// A very tall source can push the row count past [`MAX_OUTPUT_EDGE`],
    /// which is reported as [`ConfigError::OutputTooLarge`].
    pub fn render(&self, grid: &PixelGrid) -> Result<GlyphGrid, ConfigError> {
        self.validate()?;
        let (_, rows) = glyph_dimensions(grid.width(), grid.height(), self.columns as usize);
        if rows > MAX_OUTPUT_EDGE {
            return Err(ConfigError::OutputTooLarge {
                limit: MAX_OUTPUT_EDGE,
            });
        }
        let mut glyphs = GlyphGrid::from_grid(grid, self.columns as usize);
        if let Some(signature) = self.signature.as_deref() {
            glyphs.sign(signature);
        }
        Ok(glyphs)
    }
}
