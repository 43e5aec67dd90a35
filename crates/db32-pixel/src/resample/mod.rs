//! Resampling with a pluggable interpolation policy.
//!
//! One [`resize`] function serves both pipelines:
//!
//! - **Pixel art** uses [`Interpolation::Nearest`] in both directions.
//!   Downscaling with a smoothing filter would blend colors before
//!   quantization and change palette assignment; upscaling by integer
//!   factors with nearest sampling replicates each pixel into a solid block.
//! - **Glyphs and blocks** use [`Interpolation::Bilinear`]. Its triangle
//!   kernel widens with the shrink ratio, so each sampled cell averages
//!   every source pixel it covers rather than the four nearest ones.
//!
//! # Sizing helpers
//!
//! | Function | Rule |
//! |----------|------|
//! | [`fit_dimensions`] | longer edge becomes `max_size`, shorter edge `floor(short * max / long)` |
//! | [`upscale`] | `(w * k, h * k)`, solid `k x k` blocks |
//! | [`glyph_dimensions`] | `columns` wide, height scaled by 0.55 for tall glyph cells |

mod fit;
mod interpolation;

pub use fit::{downscale_to_fit, fit_dimensions, glyph_dimensions, upscale, GLYPH_ASPECT};
pub use interpolation::{resize, Interpolation};
