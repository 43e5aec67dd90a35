use std::io::Cursor;

use db32_pixel::{quantize_indices, Palette, PixelGrid};

use crate::error::RenderError;

/// Encode a grid as PNG, then re-compress with oxipng.
///
/// When every pixel is a palette entry the image is written as 8-bit indexed
/// color with the palette as PLTE. Otherwise it falls back to 8-bit RGB.
pub fn encode_png(grid: &PixelGrid, palette: &Palette) -> Result<Vec<u8>, RenderError> {
    let png_bytes = match palette_indices(grid, palette) {
        Some(indices) => {
            let plte: Vec<u8> = palette.colors().iter().flat_map(|c| c.to_bytes()).collect();
            write_png(grid, png::ColorType::Indexed, Some(&plte), &indices)?
        }
        None => {
            tracing::debug!("Image has non-palette colors, writing RGB");
            write_png(grid, png::ColorType::Rgb, None, &grid.to_rgb_bytes())?
        }
    };

    // Fast settings above; oxipng picks filters and compression
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);
    Ok(optimized)
}

/// Exact palette index of every pixel, or `None` if any pixel is off-palette.
fn palette_indices(grid: &PixelGrid, palette: &Palette) -> Option<Vec<u8>> {
    if !grid.pixels().iter().all(|&c| palette.contains(c)) {
        return None;
    }
    Some(quantize_indices(grid, palette))
}

fn write_png(
    grid: &PixelGrid,
    color_type: png::ColorType,
    plte: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, grid.width() as u32, grid.height() as u32);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
