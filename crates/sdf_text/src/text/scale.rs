//! Scale resolution
//!
//! Glyph metrics are in source pixels while the renderer works in
//! normalized device coordinates, where the visible width spans 2 units.
//! The default scale divides that span by the average glyph width and by
//! how many glyphs should fit across it.

use super::{FontError, FontResult, GlyphTable};

/// Width of the normalized device coordinate range `[-1, 1]`
pub const NDC_WIDTH: f32 = 2.0;

/// Pixel to normalized-space conversion derived from the loaded glyphs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleResolver {
    target_density: f32,
    average_width_px: f32,
    default_scale: f32,
}

impl ScaleResolver {
    /// Derive the default scale for a glyph table
    ///
    /// `default_scale = (2 / mean_width_px) / target_density`
    ///
    /// # Errors
    ///
    /// - [`FontError::InvalidTargetDensity`] unless `target_density` is positive and finite
    /// - [`FontError::EmptyGlyphTable`] if the table has no glyphs
    /// - [`FontError::DegenerateAverageWidth`] if every glyph has zero width
    pub fn resolve(glyphs: &GlyphTable, target_density: f32) -> FontResult<Self> {
        if !(target_density.is_finite() && target_density > 0.0) {
            return Err(FontError::InvalidTargetDensity(target_density));
        }
        if glyphs.is_empty() {
            return Err(FontError::EmptyGlyphTable);
        }

        let total_width_px: f32 = glyphs.iter().map(|(_, glyph)| glyph.width_px).sum();
        let average_width_px = total_width_px / glyphs.len() as f32;
        if average_width_px <= 0.0 {
            return Err(FontError::DegenerateAverageWidth);
        }

        let default_scale = (NDC_WIDTH / average_width_px) / target_density;
        if !(default_scale.is_finite() && default_scale > 0.0) {
            return Err(FontError::DegenerateAverageWidth);
        }

        Ok(Self {
            target_density,
            average_width_px,
            default_scale,
        })
    }

    /// Normalized units per source pixel at a scale multiplier of 1
    pub fn default_scale(&self) -> f32 {
        self.default_scale
    }

    /// Mean glyph width in source pixels
    pub fn average_width_px(&self) -> f32 {
        self.average_width_px
    }

    /// Average-width glyphs that fit across the normalized width
    pub fn target_density(&self) -> f32 {
        self.target_density
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::glyph_table::tests::{metrics, FixedAtlas};
    use crate::text::FontMetrics;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_glyph_scale() {
        let font = FontMetrics::default().with_character("A", metrics(10.0, 20.0, 0.0, 0.0, 12.0));
        let table = GlyphTable::build(&font, &FixedAtlas(&["A"])).unwrap();

        let scale = ScaleResolver::resolve(&table, 50.0).unwrap();
        assert_relative_eq!(scale.default_scale(), 0.004);
        assert_relative_eq!(scale.average_width_px(), 10.0);
    }

    #[test]
    fn test_scale_uses_mean_width() {
        let font = FontMetrics::default()
            .with_character("a", metrics(10.0, 20.0, 0.0, 0.0, 12.0))
            .with_character("b", metrics(30.0, 20.0, 0.0, 0.0, 32.0));
        let table = GlyphTable::build(&font, &FixedAtlas(&["a", "b"])).unwrap();

        let scale = ScaleResolver::resolve(&table, 10.0).unwrap();
        assert_relative_eq!(scale.average_width_px(), 20.0);
        assert_relative_eq!(scale.default_scale(), 0.01);
        assert!(scale.default_scale() > 0.0);
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let err = ScaleResolver::resolve(&GlyphTable::default(), 50.0).unwrap_err();
        assert!(matches!(err, FontError::EmptyGlyphTable));
    }

    #[test]
    fn test_zero_width_glyphs_are_an_error() {
        let font = FontMetrics::default().with_character(" ", metrics(0.0, 0.0, 0.0, 0.0, 12.0));
        let table = GlyphTable::build(&font, &FixedAtlas(&[" "])).unwrap();

        let err = ScaleResolver::resolve(&table, 50.0).unwrap_err();
        assert!(matches!(err, FontError::DegenerateAverageWidth));
    }

    #[test]
    fn test_invalid_density() {
        let font = FontMetrics::default().with_character("A", metrics(10.0, 20.0, 0.0, 0.0, 12.0));
        let table = GlyphTable::build(&font, &FixedAtlas(&["A"])).unwrap();

        assert!(matches!(
            ScaleResolver::resolve(&table, 0.0),
            Err(FontError::InvalidTargetDensity(_))
        ));
        assert!(ScaleResolver::resolve(&table, f32::NAN).is_err());
    }
}
