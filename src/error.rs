use std::path::PathBuf;

use db32_pixel::{ConfigError, GridError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid color: {0}")]
    Color(#[from] ParseColorError),

    #[error("Invalid pixel grid: {0}")]
    Grid(#[from] GridError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Config file error: {0}")]
    ConfigFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
