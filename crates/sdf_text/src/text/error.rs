//! Font loading errors

use std::path::PathBuf;

use crate::atlas::AtlasError;
use crate::config::ConfigError;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while building a font atlas
///
/// All of these are construction-time failures. Mesh generation itself never
/// fails; characters without a glyph are skipped and reported on the mesh.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// The font metrics file could not be read
    #[error("Failed to open font metrics {path:?}: {source}")]
    Io {
        /// File that failed to open
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The font metrics file is not valid JSON or is missing fields
    #[error("Failed to parse font metrics {path:?}: {source}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A glyph entry has an unusable key or metric
    #[error("Malformed glyph '{key}': {reason}")]
    MalformedGlyph {
        /// Character key as written in the metrics file
        key: String,
        /// What is wrong with it
        reason: String,
    },

    /// No glyph could be loaded, so no scale can be derived
    #[error("Font atlas contains no usable glyphs")]
    EmptyGlyphTable,

    /// Every loaded glyph has zero width
    #[error("Average glyph width is zero; cannot derive a scale")]
    DegenerateAverageWidth,

    /// The configured glyph density is not a positive finite number
    #[error("Invalid characters per screen width: {0}")]
    InvalidTargetDensity(f32),

    /// Reload was requested on an atlas that was not loaded from files
    #[error("Font atlas was not loaded from files and cannot be reloaded")]
    NotFileBacked,

    /// The texture atlas description failed to load
    #[error(transparent)]
    Atlas(#[from] AtlasError),

    /// The font atlas configuration failed to load
    #[error(transparent)]
    Config(#[from] ConfigError),
}
