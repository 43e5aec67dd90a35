use std::collections::HashSet;
use std::path::Path;

use db32_pixel::{Palette, PixelArtPipeline, PixelGrid};

use crate::error::RenderError;
use crate::models::AppConfig;
use crate::rendering::{encode_png, load_grid};

/// What a finished job produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    /// Decoded input size
    pub input_dimensions: (usize, usize),
    /// Output size: pixels for images, columns x rows for glyphs
    pub output_dimensions: (usize, usize),
    /// Bytes written to the output file
    pub bytes_written: usize,
}

/// Runs one conversion job: decode -> render -> encode -> write.
///
/// Options are validated before the input is read. The output file is only
/// written once encoding has succeeded.
pub struct Converter {
    config: AppConfig,
    palette: Palette,
}

impl Converter {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            palette: Palette::db32(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Downscale, quantize, upscale and frame `input`, writing a PNG.
    pub fn pixel_art(&self, input: &Path, output: &Path) -> Result<JobSummary, RenderError> {
        let pipeline = PixelArtPipeline::new(&self.config.pixel_art.to_options()?)?
            .with_palette(self.palette.clone());
        let source = self.load(input)?;

        let stages = pipeline.run_staged(&source)?;
        tracing::debug!(
            width = stages.downscaled.width(),
            height = stages.downscaled.height(),
            "Downscaled"
        );
        tracing::debug!(colors = count_colors(&stages.quantized), "Quantized");
        tracing::debug!(
            width = stages.upscaled.width(),
            height = stages.upscaled.height(),
            scale = pipeline.scale_factor(),
            "Upscaled"
        );
        tracing::debug!(margin = pipeline.border().margin, "Composed border");

        self.write_png(&source, &stages.output, output)
    }

    /// Repaint `input` as palette blocks at its original size, writing a PNG.
    pub fn blocks(&self, input: &Path, output: &Path) -> Result<JobSummary, RenderError> {
        let options = self.config.blocks.to_options();
        options.validate()?;
        let source = self.load(input)?;

        let styled = options.render(&source, &self.palette)?;
        tracing::debug!(block_size = options.block_size, "Stylized blocks");

        self.write_png(&source, &styled, output)
    }

    /// Map `input` to a glyph grid, writing it as UTF-8 text.
    pub fn glyphs(&self, input: &Path, output: &Path) -> Result<JobSummary, RenderError> {
        let options = self.config.glyphs.to_options();
        options.validate()?;
        let source = self.load(input)?;

        let glyphs = options.render(&source)?;
        let text = glyphs.to_text();
        std::fs::write(output, &text)?;

        tracing::info!(
            output = %output.display(),
            columns = glyphs.columns(),
            rows = glyphs.rows(),
            "Wrote glyph text"
        );
        Ok(JobSummary {
            input_dimensions: source.dimensions(),
            output_dimensions: (glyphs.columns(), glyphs.rows()),
            bytes_written: text.len(),
        })
    }

    fn load(&self, input: &Path) -> Result<PixelGrid, RenderError> {
        let source = load_grid(input)?;
        tracing::info!(
            input = %input.display(),
            width = source.width(),
            height = source.height(),
            "Decoded input"
        );
        Ok(source)
    }

    fn write_png(
        &self,
        source: &PixelGrid,
        rendered: &PixelGrid,
        output: &Path,
    ) -> Result<JobSummary, RenderError> {
        let bytes = encode_png(rendered, &self.palette)?;
        std::fs::write(output, &bytes)?;

        tracing::info!(
            output = %output.display(),
            width = rendered.width(),
            height = rendered.height(),
            bytes = bytes.len(),
            "Wrote PNG"
        );
        Ok(JobSummary {
            input_dimensions: source.dimensions(),
            output_dimensions: rendered.dimensions(),
            bytes_written: bytes.len(),
        })
    }
}

fn count_colors(grid: &PixelGrid) -> usize {
    grid.pixels().iter().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use db32_pixel::Color;

    #[test]
    fn test_count_colors() {
        let mut grid = PixelGrid::filled(3, 3, Color::BLACK);
        grid.set(1, 1, Color::WHITE);
        grid.set(2, 2, Color::WHITE);
        assert_eq!(count_colors(&grid), 2);
    }

    #[test]
    fn test_invalid_config_fails_before_reading_input() {
        let mut config = AppConfig::default();
        config.pixel_art.scale_factor = 0;
        let converter = Converter::new(config);

        // the input does not exist; a decode error here would mean the
        // options were checked too late
        let err = converter
            .pixel_art(Path::new("/nonexistent/in.png"), Path::new("/nonexistent/out.png"))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig(_)));
    }

    #[test]
    fn test_bad_frame_color_fails_before_reading_input() {
        let mut config = AppConfig::default();
        config.pixel_art.frame_colors = vec!["white".to_string()];
        let err = Converter::new(config)
            .pixel_art(Path::new("/nonexistent/in.png"), Path::new("/nonexistent/out.png"))
            .unwrap_err();
        assert!(matches!(err, RenderError::Color(_)));
    }

    #[test]
    fn test_invalid_block_size_fails_before_reading_input() {
        let mut config = AppConfig::default();
        config.blocks.block_size = -1;
        let err = Converter::new(config)
            .blocks(Path::new("/nonexistent/in.png"), Path::new("/nonexistent/out.png"))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig(_)));
    }
}
