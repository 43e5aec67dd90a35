//! db32art - DB32 pixel art from photos
//!
//! Command-line front end for the `db32-pixel` library: decodes images,
//! runs the pixel-art, block or glyph renderer, and writes PNG or text.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
