//! Test fixtures: input images and config files written to a scratch dir.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Pure red, the reference input for the end-to-end checks.
pub const RED: [u8; 3] = [255, 0, 0];

/// DB32 entry that pure red quantizes to.
pub const DB32_RED: [u8; 3] = [172, 50, 50];

/// Scratch directory for one test.
pub fn scratch() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write a single-color PNG and return its path.
pub fn solid_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(&path)
        .expect("write fixture");
    path
}

/// Write a horizontal grayscale ramp, black on the left, white on the right.
pub fn ramp_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgb([v, v, v])
    })
    .save(&path)
    .expect("write fixture");
    path
}

/// Write a colorful image that exercises most of the palette.
pub fn rainbow_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            ((x + y) * 127 / (width + height)) as u8,
        ])
    })
    .save(&path)
    .expect("write fixture");
    path
}

/// Write a YAML config file and return its path.
pub fn config_file(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("db32art.yaml");
    std::fs::write(&path, yaml).expect("write config");
    path
}
