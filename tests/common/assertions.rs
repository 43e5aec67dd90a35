//! Assertion helpers for tests.

use std::path::Path;

use db32_pixel::{Color, Palette};
use image::RgbImage;
use pretty_assertions::assert_eq;

/// Decode an output PNG, asserting it is one.
pub fn read_png(path: &Path) -> RgbImage {
    let bytes = std::fs::read(path).expect("read output");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(&bytes)
        .expect("decode output")
        .to_rgb8()
}

/// Assert an output PNG has the expected size
pub fn assert_dimensions(path: &Path, expected: (u32, u32)) {
    let img = read_png(path);
    assert_eq!(img.dimensions(), expected, "Unexpected size for {}", path.display());
}

/// Assert every pixel of an output PNG is a DB32 entry
pub fn assert_db32_only(path: &Path) {
    let palette = Palette::db32();
    let img = read_png(path);
    for (x, y, px) in img.enumerate_pixels() {
        let color = Color::from_bytes(px.0);
        assert!(
            palette.contains(color),
            "Pixel ({x}, {y}) is {color}, which is not in DB32"
        );
    }
}

/// Assert every pixel of an output PNG has the given color
pub fn assert_uniform(path: &Path, expected: [u8; 3]) {
    let img = read_png(path);
    let off = img.pixels().filter(|px| px.0 != expected).count();
    assert_eq!(off, 0, "{off} pixels differ from {expected:?}");
}
