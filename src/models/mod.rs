pub mod config;

pub use config::{AppConfig, BlocksConfig, GlyphsConfig, PixelArtConfig, CONFIG_ENV_VAR};
