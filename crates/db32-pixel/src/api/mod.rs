//! Public API for the db32-pixel crate.
//!
//! This module provides the high-level API: the [`PixelArtPipeline`]
//! orchestrator, the option types that validate user configuration, and
//! [`ConfigError`].

mod error;
mod options;
mod pipeline;

pub use error::ConfigError;
pub use options::{BlockOptions, GlyphOptions, PixelArtOptions, MAX_OUTPUT_EDGE};
pub use pipeline::{PipelineStages, PixelArtPipeline};
