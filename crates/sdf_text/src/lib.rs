//! # SDF Text
//!
//! Lays out text as quads over a pre-baked signed distance field glyph
//! atlas.
//!
//! ## Features
//!
//! - **Glyph Table**: per-character pixel metrics and atlas UVs, loaded once
//! - **Default Scale**: pixel metrics normalized so a configurable number of
//!   average-width glyphs spans the normalized screen width
//! - **Mesh Generation**: flat vertex, UV and index buffers ready for upload
//!
//! Window setup, shaders and GPU upload belong to the renderer consuming the
//! [`TextMesh`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sdf_text::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     sdf_text::foundation::logging::init();
//!
//!     let config = FontAtlasConfig::load_from_file("assets/font.toml")?;
//!     let atlas = FontAtlas::load(&config)?;
//!
//!     let mesh = atlas.generate_text_mesh("text rendering with SDFs!", -1.0, 0.0, 1.0);
//!     println!("{} triangles", mesh.triangle_count());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod atlas;
pub mod text;

pub use atlas::{AtlasError, SubTextureLookup, TextureAtlas, UvRegion};
pub use config::{Config, ConfigError, FontAtlasConfig};
pub use text::{
    FontAtlas, FontError, FontMetrics, FontResult, GlyphKey, GlyphRecord, GlyphTable, ScaleResolver,
    TextBounds, TextLayout, TextMesh, TextVertex, DEFAULT_SCALE_MULTIPLIER,
};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        Config, FontAtlas, FontAtlasConfig, FontError, FontResult, SubTextureLookup, TextMesh,
        TextVertex, TextureAtlas, DEFAULT_SCALE_MULTIPLIER,
        foundation::math::{Vec2, Vec3},
    };
}
