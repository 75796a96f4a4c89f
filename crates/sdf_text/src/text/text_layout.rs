//! Text layout engine
//!
//! Converts text strings into positioned quads for rendering. Single line
//! only: the pen moves right by each glyph's advance and never changes
//! line.
//!
//! # Layout Coordinate System
//!
//! - The pen starts at the caller's origin in normalized device space
//! - Each glyph's origin anchor is placed on the pen
//! - +X axis points right, +Y axis points up

use super::{GlyphRecord, GlyphTable, TextMesh};
use crate::foundation::math::Vec3;

/// Scale multiplier that renders at the atlas default scale
pub const DEFAULT_SCALE_MULTIPLIER: f32 = 1.0;

/// Most quads one mesh can index with `u32` indices
pub const MAX_GLYPHS_PER_MESH: u32 = u32::MAX / 4;

/// Base vertex of the quad after one starting at `base_vertex`, or `None`
/// if that quad's indices would not fit in `u32`
fn reserve_quad(base_vertex: u32) -> Option<u32> {
    base_vertex.checked_add(4)
}

/// Bounding box of laid-out text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    /// Minimum X coordinate
    pub min_x: f32,
    /// Minimum Y coordinate
    pub min_y: f32,
    /// Maximum X coordinate
    pub max_x: f32,
    /// Maximum Y coordinate
    pub max_y: f32,
}

impl TextBounds {
    /// Calculate width of bounding box
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Calculate height of bounding box
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    fn include(&mut self, other: &Self) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }
}

/// Placed rectangle of one glyph
#[derive(Debug, Clone, Copy)]
struct GlyphQuad {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl GlyphQuad {
    /// Anchor the glyph's origin on the pen position
    fn place(pen_x: f32, pen_y: f32, glyph: &GlyphRecord, scale: f32) -> Self {
        Self {
            x: pen_x - glyph.origin_x * scale,
            y: pen_y - (glyph.height_px - glyph.origin_y) * scale,
            w: glyph.width_px * scale,
            h: glyph.height_px * scale,
        }
    }

    /// Corners around the quad center, lower-left first, counter-clockwise
    fn corners(&self) -> [Vec3; 4] {
        let center_x = self.x + self.w / 2.0;
        let center_y = self.y + self.h / 2.0;
        let half_w = self.w / 2.0;
        let half_h = self.h / 2.0;

        [
            Vec3::new(center_x - half_w, center_y - half_h, 0.0),
            Vec3::new(center_x + half_w, center_y - half_h, 0.0),
            Vec3::new(center_x + half_w, center_y + half_h, 0.0),
            Vec3::new(center_x - half_w, center_y + half_h, 0.0),
        ]
    }

    fn bounds(&self) -> TextBounds {
        TextBounds {
            min_x: self.x,
            min_y: self.y,
            max_x: self.x + self.w,
            max_y: self.y + self.h,
        }
    }
}

/// Text layout engine over a glyph table
///
/// Borrowed view; cheap to create per call. Holds no mutable state, so any
/// number of layouts may run concurrently against the same table.
#[derive(Debug, Clone, Copy)]
pub struct TextLayout<'a> {
    glyphs: &'a GlyphTable,
    default_scale: f32,
}

impl<'a> TextLayout<'a> {
    /// Create a layout engine for a glyph table and its default scale
    pub fn new(glyphs: &'a GlyphTable, default_scale: f32) -> Self {
        Self { glyphs, default_scale }
    }

    /// Convert a text string into a mesh of glyph quads
    ///
    /// Each resolved character generates 4 vertices, 4 UVs and 6 indices.
    /// Characters without a glyph are skipped without advancing the pen and
    /// are listed in [`TextMesh::skipped`].
    ///
    /// Indices are `u32`, so at most [`MAX_GLYPHS_PER_MESH`] quads are
    /// emitted; layout stops with an error log once that limit is reached.
    ///
    /// # Arguments
    ///
    /// * `text` - Characters to lay out, each looked up independently
    /// * `x`, `y` - Pen start in normalized device space
    /// * `scale_multiplier` - Multiplies the default scale
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn demo(atlas: &sdf_text::FontAtlas) {
    /// let mesh = atlas.layout().generate_text_mesh("Hello", -1.0, 0.0, 1.0);
    /// assert_eq!(mesh.vertex_positions.len(), 20); // 5 chars × 4 vertices
    /// assert_eq!(mesh.indices.len(), 30);          // 5 chars × 6 indices
    /// # }
    /// ```
    pub fn generate_text_mesh(&self, text: &str, x: f32, y: f32, scale_multiplier: f32) -> TextMesh {
        let scale = self.default_scale * scale_multiplier;
        let mut mesh = TextMesh::with_capacity(text.len());
        let mut base_vertex = 0u32;
        let mut pen_x = x;

        for ch in text.chars() {
            let Some(glyph) = self.glyphs.get(ch) else {
                log::warn!("Character '{}' not found in the font atlas", ch.escape_debug());
                mesh.skipped.push(ch);
                continue;
            };

            let Some(next_base_vertex) = reserve_quad(base_vertex) else {
                log::error!("Text exceeds {} glyphs per mesh; truncating", MAX_GLYPHS_PER_MESH);
                break;
            };

            let quad = GlyphQuad::place(pen_x, y, glyph, scale);
            mesh.push_quad(base_vertex, quad.corners(), &glyph.uv_region);
            base_vertex = next_base_vertex;

            pen_x += glyph.advance_px * scale;
        }

        mesh
    }

    /// Lay out text, shrinking it if needed to fit a maximum width
    ///
    /// If the line's total advance at `scale_multiplier` exceeds `max_width`,
    /// the multiplier is reduced so the advance equals `max_width`. Text is
    /// never enlarged, wrapped or clipped. A non-positive or non-finite
    /// `max_width` leaves the multiplier unchanged.
    pub fn generate_text_mesh_with_width(
        &self,
        text: &str,
        x: f32,
        y: f32,
        scale_multiplier: f32,
        max_width: f32,
    ) -> TextMesh {
        let multiplier = self.fit_multiplier(text, scale_multiplier, max_width);
        self.generate_text_mesh(text, x, y, multiplier)
    }

    fn fit_multiplier(&self, text: &str, scale_multiplier: f32, max_width: f32) -> f32 {
        if !(max_width.is_finite() && max_width > 0.0) {
            return scale_multiplier;
        }

        let width = self.measure_text(text, scale_multiplier).abs();
        if width <= max_width {
            return scale_multiplier;
        }

        let fitted = scale_multiplier * (max_width / width);
        log::debug!(
            "Shrinking text scale from {} to {} to fit width {}",
            scale_multiplier,
            fitted,
            max_width
        );
        fitted
    }

    /// Total pen advance of a string in normalized units
    ///
    /// Characters without a glyph contribute nothing.
    pub fn measure_text(&self, text: &str, scale_multiplier: f32) -> f32 {
        let scale = self.default_scale * scale_multiplier;
        text.chars()
            .filter_map(|ch| self.glyphs.get(ch))
            .map(|glyph| glyph.advance_px * scale)
            .sum()
    }

    /// Bounding box of the quads [`generate_text_mesh`](Self::generate_text_mesh)
    /// would emit, or `None` if no character resolves
    pub fn calculate_bounds(&self, text: &str, x: f32, y: f32, scale_multiplier: f32) -> Option<TextBounds> {
        let scale = self.default_scale * scale_multiplier;
        let mut bounds: Option<TextBounds> = None;
        let mut pen_x = x;

        for glyph in text.chars().filter_map(|ch| self.glyphs.get(ch)) {
            let quad = GlyphQuad::place(pen_x, y, glyph, scale).bounds();
            bounds = Some(match bounds {
                Some(mut total) => {
                    total.include(&quad);
                    total
                }
                None => quad,
            });
            pen_x += glyph.advance_px * scale;
        }

        bounds
    }

    /// Default scale this layout was created with
    pub fn default_scale(&self) -> f32 {
        self.default_scale
    }
}
