//! Texture atlas lookups
//!
//! The glyph table only needs one thing from a texture atlas: the UV
//! rectangle of a named sprite. [`SubTextureLookup`] is that seam, and
//! [`TextureAtlas`] is the JSON-backed implementation used by
//! [`FontAtlas::load`](crate::text::FontAtlas::load).

pub mod texture_atlas;

pub use texture_atlas::{TextureAtlas, SubTexture, TextureAtlasDescription};

use std::path::PathBuf;

use crate::foundation::math::Vec2;

/// UV coordinates of one quad, ordered lower-left, lower-right,
/// upper-right, upper-left
pub type UvRegion = [Vec2; 4];

/// Anything that can resolve a sprite name to its texture coordinates
pub trait SubTextureLookup {
    /// UV rectangle of the named sprite, or `None` if the atlas has no such sprite
    fn texture_coordinates_of_sub_texture(&self, sprite_name: &str) -> Option<UvRegion>;
}

impl<T: SubTextureLookup + ?Sized> SubTextureLookup for &T {
    fn texture_coordinates_of_sub_texture(&self, sprite_name: &str) -> Option<UvRegion> {
        (**self).texture_coordinates_of_sub_texture(sprite_name)
    }
}

/// Errors raised while loading a texture atlas description
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    /// The description file could not be read
    #[error("Failed to read texture atlas {path:?}: {source}")]
    Io {
        /// File that failed to open
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The description is not valid JSON or is missing fields
    #[error("Failed to parse texture atlas {path:?}: {source}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Atlas width or height is zero
    #[error("Texture atlas has invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Atlas width in pixels
        width: u32,
        /// Atlas height in pixels
        height: u32,
    },

    /// A sub-texture rectangle does not lie inside the atlas
    #[error("Sub-texture '{0}' lies outside the atlas bounds")]
    OutOfBounds(String),
}
