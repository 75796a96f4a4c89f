//! Configuration system
//!
//! Font atlas settings can be kept in a TOML or RON file next to the assets
//! they describe and loaded through the [`Config`] trait.

use std::path::{Path, PathBuf};

pub use serde::{Serialize, Deserialize};

/// Default number of average-width glyphs spanning the normalized screen width
pub const DEFAULT_CHARS_PER_SCREEN_WIDTH: f32 = 50.0;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        log::debug!("Loading configuration from {:?}", path);

        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Settings for loading a [`FontAtlas`](crate::text::FontAtlas)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontAtlasConfig {
    /// JSON file with the per-character font metrics
    pub font_info_path: PathBuf,
    /// JSON file describing the sub-texture rectangles of the atlas
    pub texture_atlas_path: PathBuf,
    /// Atlas image; only the renderer reads it
    pub texture_path: Option<PathBuf>,
    /// How many average-width glyphs fit across the normalized screen width
    pub chars_per_screen_width: f32,
    /// The atlas image is uploaded upside down
    pub flip_texture: bool,
    /// Sub-texture rectangles are measured from the top-left corner
    pub top_left_coords: bool,
}

impl Default for FontAtlasConfig {
    fn default() -> Self {
        Self {
            font_info_path: PathBuf::from("assets/font_info.json"),
            texture_atlas_path: PathBuf::from("assets/font_atlas.json"),
            texture_path: None,
            chars_per_screen_width: DEFAULT_CHARS_PER_SCREEN_WIDTH,
            flip_texture: false,
            top_left_coords: false,
        }
    }
}

impl Config for FontAtlasConfig {}

impl FontAtlasConfig {
    /// Create a configuration for the given metrics and atlas descriptions
    pub fn new(font_info_path: impl Into<PathBuf>, texture_atlas_path: impl Into<PathBuf>) -> Self {
        Self {
            font_info_path: font_info_path.into(),
            texture_atlas_path: texture_atlas_path.into(),
            ..Default::default()
        }
    }

    /// Set the atlas image path handed on to the renderer
    #[must_use]
    pub fn with_texture_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.texture_path = Some(path.into());
        self
    }

    /// Set the target glyph density
    #[must_use]
    pub fn with_chars_per_screen_width(mut self, chars: f32) -> Self {
        self.chars_per_screen_width = chars;
        self
    }

    /// Set the texture orientation flags
    #[must_use]
    pub fn with_orientation(mut self, flip_texture: bool, top_left_coords: bool) -> Self {
        self.flip_texture = flip_texture;
        self.top_left_coords = top_left_coords;
        self
    }
}
