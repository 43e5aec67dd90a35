use std::path::Path;

use db32_pixel::PixelGrid;
use image::DynamicImage;

use crate::error::RenderError;

/// Decode an image file into an RGB grid. Alpha is discarded.
pub fn load_grid(path: &Path) -> Result<PixelGrid, RenderError> {
    let image = image::open(path).map_err(|source| RenderError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    grid_from_image(&image)
}

/// Convert an already decoded image into an RGB grid.
pub fn grid_from_image(image: &DynamicImage) -> Result<PixelGrid, RenderError> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PixelGrid::from_rgb_bytes(
        width as usize,
        height as usize,
        rgb.as_raw(),
    )?)
}
