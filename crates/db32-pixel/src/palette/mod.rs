//! The DB32 reference palette and nearest-color matching.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, DB32};
