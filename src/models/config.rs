use db32_pixel::{BlockOptions, Color, GlyphOptions, ParseColorError, PixelArtOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "DB32ART_CONFIG";

/// Application configuration loaded from a YAML file.
///
/// Every section and field is optional; anything left out keeps its default.
/// Range checks are left to the library so that a bad value in the file and
/// a bad value on the command line are reported the same way.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Settings for `db32art pixel`
    #[serde(default)]
    pub pixel_art: PixelArtConfig,

    /// Settings for `db32art blocks`
    #[serde(default)]
    pub blocks: BlocksConfig,

    /// Settings for `db32art glyphs`
    #[serde(default)]
    pub glyphs: GlyphsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PixelArtConfig {
    #[serde(default = "default_max_size")]
    pub max_size: i64,

    #[serde(default = "default_scale_factor")]
    pub scale_factor: i64,

    #[serde(default = "default_add_border")]
    pub add_border: bool,

    #[serde(default = "default_border_size")]
    pub border_size: i64,

    /// Frame strokes from the outside in, as `#RRGGBB` strings
    #[serde(default = "default_frame_colors")]
    pub frame_colors: Vec<String>,
}

fn default_max_size() -> i64 {
    128
}

fn default_scale_factor() -> i64 {
    4
}

fn default_add_border() -> bool {
    true
}

fn default_border_size() -> i64 {
    20
}

fn default_frame_colors() -> Vec<String> {
    vec!["#FFFFFF".to_string(), "#5B6EE1".to_string()]
}

impl Default for PixelArtConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            scale_factor: default_scale_factor(),
            add_border: default_add_border(),
            border_size: default_border_size(),
            frame_colors: default_frame_colors(),
        }
    }
}

impl PixelArtConfig {
    pub fn to_options(&self) -> Result<PixelArtOptions, ParseColorError> {
        let frame_colors = self
            .frame_colors
            .iter()
            .map(|hex| hex.parse::<Color>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PixelArtOptions::new()
            .max_size(self.max_size)
            .scale_factor(self.scale_factor)
            .add_border(self.add_border)
            .border_size(self.border_size)
            .frame_colors(frame_colors))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BlocksConfig {
    #[serde(default = "default_block_size")]
    pub block_size: i64,
}

fn default_block_size() -> i64 {
    4
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
        }
    }
}

impl BlocksConfig {
    pub fn to_options(&self) -> BlockOptions {
        BlockOptions::new().block_size(self.block_size)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GlyphsConfig {
    /// Glyphs per output row
    #[serde(default = "default_columns")]
    pub columns: i64,

    /// Text stamped at the end of the last row
    #[serde(default)]
    pub signature: Option<String>,
}

fn default_columns() -> i64 {
    100
}

impl Default for GlyphsConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            signature: None,
        }
    }
}

impl GlyphsConfig {
    pub fn to_options(&self) -> GlyphOptions {
        let options = GlyphOptions::new().columns(self.columns);
        match self.signature.as_deref() {
            Some(signature) => options.signature(signature),
            None => options,
        }
    }
}

impl AppConfig {
    /// Pick the config file: an explicit path wins over `DB32ART_CONFIG`.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// A path that cannot be read or parsed is a [`RenderError::ConfigFile`].
    pub fn load(path: Option<&Path>) -> Result<Self, RenderError> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::warn!(path = %path.display(), %e, "Failed to read config");
            RenderError::ConfigFile(format!("{}: {e}", path.display()))
        })?;
        let config = Self::from_yaml(&content).map_err(|e| {
            tracing::warn!(path = %path.display(), %e, "Failed to parse config");
            RenderError::ConfigFile(format!("{}: {e}", path.display()))
        })?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply `db32art pixel` command-line flags on top of the file values.
    pub fn override_pixel_art(
        &mut self,
        max_size: Option<i64>,
        scale_factor: Option<i64>,
        border_size: Option<i64>,
        no_border: bool,
    ) {
        if let Some(v) = max_size {
            self.pixel_art.max_size = v;
        }
        if let Some(v) = scale_factor {
            self.pixel_art.scale_factor = v;
        }
        if let Some(v) = border_size {
            self.pixel_art.border_size = v;
        }
        if no_border {
            self.pixel_art.add_border = false;
        }
    }

    /// Apply `db32art blocks` command-line flags on top of the file values.
    pub fn override_blocks(&mut self, block_size: Option<i64>) {
        if let Some(v) = block_size {
            self.blocks.block_size = v;
        }
    }

    /// Apply `db32art glyphs` command-line flags on top of the file values.
    pub fn override_glyphs(&mut self, columns: Option<i64>, signature: Option<String>) {
        if let Some(v) = columns {
            self.glyphs.columns = v;
        }
        if signature.is_some() {
            self.glyphs.signature = signature;
        }
    }
}
