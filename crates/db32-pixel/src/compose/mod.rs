//! Decorative framing around a quantized image.
//!
//! The compositor grows the canvas by a margin on every side, fills the
//! margin with the palette's nearest black, strokes concentric rectangle
//! outlines from the outside in, then places the image body in the centre.

mod border;

pub use border::{compose_border, BorderLayer, BorderSpec, FRAME_INNER, FRAME_OUTER};
