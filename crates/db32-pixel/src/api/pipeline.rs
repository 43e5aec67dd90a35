//! PixelArtPipeline -- the primary entry point for the crate.
//!
//! [`PixelArtPipeline`] wires the four stages together:
//!
//! ```text
//! source ──> downscale_to_fit(max_size)   nearest-neighbor, no new colors
//!        ──> quantize(palette)            every pixel snapped to the palette
//!        ──> upscale(scale_factor)        solid k x k blocks
//!        ──> compose_border(border)       framed margin, identity if empty
//! ```
//!
//! Each stage reads only the previous stage's grid and returns a new one.
//! The output size is checked before the first stage allocates anything.

use super::error::ConfigError;
use super::options::{PixelArtOptions, MAX_OUTPUT_EDGE};
use crate::compose::{compose_border, BorderSpec};
use crate::grid::PixelGrid;
use crate::palette::Palette;
use crate::quantize::quantize;
use crate::resample::{downscale_to_fit, upscale};

/// Intermediate grids of one pipeline run, in stage order.
#[derive(Debug, Clone)]
pub struct PipelineStages {
    pub downscaled: PixelGrid,
    pub quantized: PixelGrid,
    pub upscaled: PixelGrid,
    pub output: PixelGrid,
}

/// Validated pixel-art pipeline.
///
/// # Design
///
/// - Constructor validates [`PixelArtOptions`], so a pipeline value can
///   never hold an out-of-range setting
/// - [`run()`](Self::run) still fails with [`ConfigError::OutputTooLarge`]
///   when a source would be framed into an edge beyond [`MAX_OUTPUT_EDGE`]
/// - [`run()`](Self::run) takes `&self`; the pipeline is reusable and holds
///   no state between runs
/// - The palette defaults to DB32 and the border to [`BorderSpec::frame`]
///
/// # Example
///
/// ```
/// use db32_pixel::{Color, PixelArtOptions, PixelArtPipeline, PixelGrid};
///
/// let options = PixelArtOptions::new()
///     .max_size(64)
///     .scale_factor(2)
///     .add_border(false);
/// let pipeline = PixelArtPipeline::new(&options).unwrap();
///
/// let source = PixelGrid::filled(256, 128, Color::new(255, 0, 0));
/// let out = pipeline.run(&source).unwrap();
///
/// assert_eq!(out.dimensions(), (128, 64));
/// assert!(out.pixels().iter().all(|&c| c == Color::new(172, 50, 50)));
/// ```
#[derive(Debug, Clone)]
pub struct PixelArtPipeline {
    palette: Palette,
    max_size: usize,
    scale_factor: usize,
    border: BorderSpec,
}

impl PixelArtPipeline {
    /// Validate `options` and build a pipeline over the DB32 palette.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] reported by
    /// [`PixelArtOptions::validate`].
    pub fn new(options: &PixelArtOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let border = if options.add_border {
            BorderSpec::frame_with(options.border_size as usize, &options.frame_colors)
        } else {
            BorderSpec::none()
        };
        Ok(Self {
            palette: Palette::db32(),
            max_size: options.max_size as usize,
            scale_factor: options.scale_factor as usize,
            border,
        })
    }

    /// Quantize against a different palette.
    #[inline]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the default frame with custom border layers.
    #[inline]
    pub fn with_border(mut self, border: BorderSpec) -> Self {
        self.border = border;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn border(&self) -> &BorderSpec {
        &self.border
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    #[inline]
    pub fn scale_factor(&self) -> usize {
        self.scale_factor
    }

    /// Output dimensions for a source of `width x height`, without running.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutputTooLarge`] if either edge would exceed
    /// [`MAX_OUTPUT_EDGE`] or overflow.
    pub fn output_dimensions(
        &self,
        width: usize,
        height: usize,
    ) -> Result<(usize, usize), ConfigError> {
        let (w, h) = crate::resample::fit_dimensions(width, height, self.max_size);
        let margin = if self.border.is_empty() {
            0
        } else {
            self.border.margin
        };
        let edge = |body: usize| {
            body.checked_mul(self.scale_factor)
                .zip(margin.checked_mul(2))
                .and_then(|(body, margins)| body.checked_add(margins))
                .filter(|&len| len <= MAX_OUTPUT_EDGE)
                .ok_or(ConfigError::OutputTooLarge {
                    limit: MAX_OUTPUT_EDGE,
                })
        };
        Ok((edge(w)?, edge(h)?))
    }

    /// Run all four stages and return the final grid.
    ///
    /// # Errors
    ///
    /// Same as [`output_dimensions`](Self::output_dimensions); no stage runs
    /// when the size check fails.
    pub fn run(&self, source: &PixelGrid) -> Result<PixelGrid, ConfigError> {
        Ok(self.run_staged(source)?.output)
    }

    /// Run all four stages, keeping every intermediate grid.
    pub fn run_staged(&self, source: &PixelGrid) -> Result<PipelineStages, ConfigError> {
        self.output_dimensions(source.width(), source.height())?;

        let downscaled = downscale_to_fit(source, self.max_size);
        let quantized = quantize(&downscaled, &self.palette);
        let upscaled = upscale(&quantized, self.scale_factor);
        let output = compose_border(&upscaled, &self.border, &self.palette);
        Ok(PipelineStages {
            downscaled,
            quantized,
            upscaled,
            output,
        })
    }
}
