//! Text rendering system
//!
//! Glyph table loading, scale resolution and text mesh generation against
//! a pre-baked SDF atlas.

pub mod error;
pub mod font_metrics;
pub mod glyph_table;
pub mod scale;
pub mod text_mesh;
pub mod text_layout;
pub mod font_atlas;

pub use error::*;
pub use font_metrics::*;
pub use glyph_table::*;
pub use scale::*;
pub use text_mesh::*;
pub use text_layout::*;
pub use font_atlas::*;

#[cfg(test)]
mod tests;
