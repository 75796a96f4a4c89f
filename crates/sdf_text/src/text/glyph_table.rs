//! Glyph table
//!
//! Maps characters to their pixel metrics and atlas UV region. Built once
//! from a [`FontMetrics`] description and a texture atlas, then read-only.

use std::collections::HashMap;
use std::fmt;

use super::{CharacterMetrics, FontError, FontMetrics, FontResult};
use crate::atlas::{SubTextureLookup, UvRegion};
use crate::foundation::math::{is_finite_non_negative, Vec2};

/// Key of a glyph in the table
///
/// The table only covers the characters the metrics file defines; in
/// practice that is a fixed single-byte alphabet. Any `char` can be looked
/// up, but wider character sets need a wider metrics file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphKey(char);

impl GlyphKey {
    /// Parse a metrics-file key, which must be exactly one character
    pub fn parse(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(Self(ch)),
            _ => None,
        }
    }

    /// The character this key stands for
    pub fn as_char(self) -> char {
        self.0
    }

    /// Name of the atlas sprite holding this glyph
    pub fn sprite_name(self) -> String {
        self.0.to_string()
    }
}

impl From<char> for GlyphKey {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

impl fmt::Display for GlyphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metrics and texture region of one glyph
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRecord {
    /// Bitmap width in source pixels
    pub width_px: f32,
    /// Bitmap height in source pixels
    pub height_px: f32,
    /// Pen anchor offset from the bitmap's left edge
    pub origin_x: f32,
    /// Pen anchor offset from the bitmap's top edge
    pub origin_y: f32,
    /// Horizontal pen advance in pixels
    pub advance_px: f32,
    /// Atlas UVs in quad corner order (lower-left, lower-right, upper-right, upper-left)
    pub uv_region: UvRegion,
}

impl GlyphRecord {
    /// Validate raw metrics; the UV region is attached once the sprite is found
    fn from_metrics(key: &str, metrics: &CharacterMetrics) -> FontResult<Self> {
        let malformed = |reason: &str| FontError::MalformedGlyph {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        if !is_finite_non_negative(metrics.width) {
            return Err(malformed("width must be a finite non-negative number"));
        }
        if !is_finite_non_negative(metrics.height) {
            return Err(malformed("height must be a finite non-negative number"));
        }
        if !(metrics.origin_x.is_finite() && metrics.origin_y.is_finite()) {
            return Err(malformed("origin must be finite"));
        }
        if !metrics.advance.is_finite() {
            return Err(malformed("advance must be finite"));
        }

        Ok(Self {
            width_px: metrics.width,
            height_px: metrics.height,
            origin_x: metrics.origin_x,
            origin_y: metrics.origin_y,
            advance_px: metrics.advance,
            uv_region: [Vec2::zeros(); 4],
        })
    }
}

/// Immutable character to glyph mapping
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    glyphs: HashMap<GlyphKey, GlyphRecord>,
    missing_sprites: Vec<GlyphKey>,
}

impl GlyphTable {
    /// Build the table from a metrics description and a texture atlas
    ///
    /// The atlas is queried once per character for the sprite named by that
    /// character, and the UVs are copied into the record. A character whose
    /// sprite is absent is left out of the table, logged, and listed in
    /// [`missing_sprites`](Self::missing_sprites).
    ///
    /// # Errors
    ///
    /// [`FontError::MalformedGlyph`] if a key is not a single character or a
    /// metric is negative or non-finite.
    pub fn build(metrics: &FontMetrics, atlas: &impl SubTextureLookup) -> FontResult<Self> {
        let mut glyphs = HashMap::with_capacity(metrics.characters.len());
        let mut missing_sprites = Vec::new();

        for (key, character) in &metrics.characters {
            let glyph_key = GlyphKey::parse(key).ok_or_else(|| FontError::MalformedGlyph {
                key: key.clone(),
                reason: "key must be exactly one character".to_string(),
            })?;

            let mut record = GlyphRecord::from_metrics(key, character)?;

            let Some(uv_region) = atlas.texture_coordinates_of_sub_texture(&glyph_key.sprite_name()) else {
                log::error!("Character '{}' has metrics but no sprite in the texture atlas", glyph_key);
                missing_sprites.push(glyph_key);
                continue;
            };

            record.uv_region = uv_region;
            glyphs.insert(glyph_key, record);
        }

        log::debug!(
            "Glyph table built: {} glyphs, {} missing sprites",
            glyphs.len(),
            missing_sprites.len()
        );

        Ok(Self { glyphs, missing_sprites })
    }

    /// Look up the glyph for a character
    pub fn get(&self, ch: char) -> Option<&GlyphRecord> {
        self.glyphs.get(&GlyphKey::from(ch))
    }

    /// Number of glyphs in the table
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True if no glyph was loaded
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Characters that had metrics but no atlas sprite, in key order
    pub fn missing_sprites(&self) -> &[GlyphKey] {
        &self.missing_sprites
    }

    /// Iterate over all glyphs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (GlyphKey, &GlyphRecord)> {
        self.glyphs.iter().map(|(key, glyph)| (*key, glyph))
    }
}
