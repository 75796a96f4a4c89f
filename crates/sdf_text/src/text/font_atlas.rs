//! Font atlas
//!
//! Ties a pre-baked SDF atlas to its font metrics. Construction loads both
//! descriptions, builds the glyph table and resolves the default scale; the
//! result is immutable and can be shared between threads. Reloading builds
//! a new instance instead of touching the live one.

use std::path::Path;

use super::{
    FontError, FontMetadata, FontMetrics, FontResult, GlyphKey, GlyphRecord, GlyphTable, ScaleResolver,
    TextBounds, TextLayout, TextMesh,
};
use crate::atlas::{SubTextureLookup, TextureAtlas};
use crate::config::{Config, FontAtlasConfig};

/// Font atlas that owns the glyph table and default scale for one SDF font
#[derive(Debug, Clone)]
pub struct FontAtlas {
    glyphs: GlyphTable,
    scale: ScaleResolver,
    metadata: FontMetadata,
    source: Option<FontAtlasConfig>,
}

impl FontAtlas {
    /// Load a font atlas from the files named in `config`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sdf_text::{FontAtlas, FontAtlasConfig};
    ///
    /// let config = FontAtlasConfig::new(
    ///     "assets/times_64_sdf_atlas_font_info.json",
    ///     "assets/times_64_sdf_atlas.json",
    /// )
    /// .with_orientation(false, true);
    /// let atlas = FontAtlas::load(&config)?;
    /// let mesh = atlas.generate_text_mesh("text rendering with SDFs!", -1.0, 0.0, 1.0);
    /// # Ok::<(), sdf_text::FontError>(())
    /// ```
    pub fn load(config: &FontAtlasConfig) -> FontResult<Self> {
        let texture_atlas = TextureAtlas::from_file(
            &config.texture_atlas_path,
            config.flip_texture,
            config.top_left_coords,
        )?;
        let metrics = FontMetrics::from_file(&config.font_info_path)?;

        let mut atlas = Self::from_parts(&metrics, &texture_atlas, config.chars_per_screen_width)?;
        atlas.source = Some(config.clone());
        Ok(atlas)
    }

    /// Load the configuration file at `path`, then the atlas it describes
    pub fn load_from_config_file(path: impl AsRef<Path>) -> FontResult<Self> {
        let config = FontAtlasConfig::load_from_file(path)?;
        Self::load(&config)
    }

    /// Build a font atlas from parsed metrics and any sprite lookup
    ///
    /// # Errors
    ///
    /// Fails if a glyph is malformed, if no glyph could be loaded, or if the
    /// default scale cannot be derived.
    pub fn from_parts(
        metrics: &FontMetrics,
        texture_atlas: &impl SubTextureLookup,
        chars_per_screen_width: f32,
    ) -> FontResult<Self> {
        let glyphs = GlyphTable::build(metrics, texture_atlas)?;
        let scale = ScaleResolver::resolve(&glyphs, chars_per_screen_width)?;

        log::info!(
            "Font atlas '{}' ready: {} glyphs, default scale {}",
            metrics.metadata.name.as_deref().unwrap_or("unnamed"),
            glyphs.len(),
            scale.default_scale()
        );
        if !glyphs.missing_sprites().is_empty() {
            log::warn!(
                "{} characters have no sprite in the texture atlas and were not loaded",
                glyphs.missing_sprites().len()
            );
        }

        Ok(Self {
            glyphs,
            scale,
            metadata: metrics.metadata.clone(),
            source: None,
        })
    }

    /// Load a fresh atlas from the same files as this one
    ///
    /// # Errors
    ///
    /// [`FontError::NotFileBacked`] if this atlas was built with
    /// [`from_parts`](Self::from_parts), otherwise any load error.
    pub fn reload(&self) -> FontResult<Self> {
        let config = self.source.as_ref().ok_or(FontError::NotFileBacked)?;
        log::info!("Reloading font atlas from {:?}", config.font_info_path);
        Self::load(config)
    }

    /// Layout engine over this atlas
    pub fn layout(&self) -> TextLayout<'_> {
        TextLayout::new(&self.glyphs, self.scale.default_scale())
    }

    /// Convert a text string into a mesh of glyph quads
    ///
    /// See [`TextLayout::generate_text_mesh`].
    pub fn generate_text_mesh(&self, text: &str, x: f32, y: f32, scale_multiplier: f32) -> TextMesh {
        self.layout().generate_text_mesh(text, x, y, scale_multiplier)
    }

    /// Convert a text string into a mesh no wider than `max_width`
    ///
    /// See [`TextLayout::generate_text_mesh_with_width`].
    pub fn generate_text_mesh_with_width(
        &self,
        text: &str,
        x: f32,
        y: f32,
        scale_multiplier: f32,
        max_width: f32,
    ) -> TextMesh {
        self.layout()
            .generate_text_mesh_with_width(text, x, y, scale_multiplier, max_width)
    }

    /// Total pen advance of a string in normalized units
    pub fn measure_text(&self, text: &str, scale_multiplier: f32) -> f32 {
        self.layout().measure_text(text, scale_multiplier)
    }

    /// Bounding box of the laid-out quads
    pub fn calculate_bounds(&self, text: &str, x: f32, y: f32, scale_multiplier: f32) -> Option<TextBounds> {
        self.layout().calculate_bounds(text, x, y, scale_multiplier)
    }

    /// Get glyph information for a character
    pub fn glyph(&self, ch: char) -> Option<&GlyphRecord> {
        self.glyphs.get(ch)
    }

    /// Number of loaded glyphs
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Normalized units per source pixel at a scale multiplier of 1
    pub fn default_scale(&self) -> f32 {
        self.scale.default_scale()
    }

    /// Scale derivation details
    pub fn scale(&self) -> &ScaleResolver {
        &self.scale
    }

    /// Font header from the metrics file
    pub fn metadata(&self) -> &FontMetadata {
        &self.metadata
    }

    /// Characters whose sprite was missing from the texture atlas
    pub fn missing_sprites(&self) -> &[GlyphKey] {
        self.glyphs.missing_sprites()
    }

    /// Files this atlas was loaded from, if any
    pub fn source(&self) -> Option<&FontAtlasConfig> {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::glyph_table::tests::{metrics, FixedAtlas};
    use approx::assert_relative_eq;

    #[test]
    fn test_font_atlas_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FontAtlas>();
    }

    #[test]
    fn test_from_parts() {
        let font = FontMetrics::default().with_character("A", metrics(10.0, 20.0, 0.0, 0.0, 12.0));
        let atlas = FontAtlas::from_parts(&font, &FixedAtlas(&["A"]), 50.0).unwrap();

        assert_eq!(atlas.glyph_count(), 1);
        assert_relative_eq!(atlas.default_scale(), 0.004);
        assert!(atlas.glyph('A').is_some());
        assert!(atlas.source().is_none());
    }

    #[test]
    fn test_all_sprites_missing_fails_construction() {
        let font = FontMetrics::default().with_character("A", metrics(10.0, 20.0, 0.0, 0.0, 12.0));
        let err = FontAtlas::from_parts(&font, &FixedAtlas(&[]), 50.0).unwrap_err();
        assert!(matches!(err, FontError::EmptyGlyphTable));
    }

    #[test]
    fn test_reload_requires_files() {
        let font = FontMetrics::default().with_character("A", metrics(10.0, 20.0, 0.0, 0.0, 12.0));
        let atlas = FontAtlas::from_parts(&font, &FixedAtlas(&["A"]), 50.0).unwrap();
        assert!(matches!(atlas.reload(), Err(FontError::NotFileBacked)));
    }
}
