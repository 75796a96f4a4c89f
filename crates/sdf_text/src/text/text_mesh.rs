//! Text mesh buffers
//!
//! The output of layout: separate position, UV and index buffers, ready to
//! be uploaded by whatever renderer consumes them.

use bytemuck::{Pod, Zeroable};

use crate::atlas::UvRegion;
use crate::foundation::math::{Vec2, Vec3};

/// Vertices emitted per glyph quad
pub const VERTICES_PER_GLYPH: usize = 4;

/// Indices emitted per glyph quad
pub const INDICES_PER_GLYPH: usize = 6;

/// Two triangles covering a quad wound lower-left, lower-right, upper-right, upper-left
pub const QUAD_INDICES: [u32; INDICES_PER_GLYPH] = [0, 1, 2, 2, 3, 0];

/// Interleaved vertex for renderers that want a single vertex buffer
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TextVertex {
    /// Position in normalized device space
    pub position: [f32; 3],
    /// Atlas texture coordinates
    pub uv: [f32; 2],
}

/// Geometry for one line of text
///
/// Owned by the caller; layout keeps no reference to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextMesh {
    /// Quad corners, four per glyph in layout order
    pub vertex_positions: Vec<Vec3>,
    /// UVs index-aligned with `vertex_positions`
    pub texture_coordinates: Vec<Vec2>,
    /// Six indices per glyph into the vertex buffers
    pub indices: Vec<u32>,
    /// Characters that had no glyph and were skipped, in input order
    pub skipped: Vec<char>,
}

impl TextMesh {
    /// Create an empty mesh with room for `glyphs` quads
    pub fn with_capacity(glyphs: usize) -> Self {
        Self {
            vertex_positions: Vec::with_capacity(glyphs * VERTICES_PER_GLYPH),
            texture_coordinates: Vec::with_capacity(glyphs * VERTICES_PER_GLYPH),
            indices: Vec::with_capacity(glyphs * INDICES_PER_GLYPH),
            skipped: Vec::new(),
        }
    }

    /// Append one glyph quad
    ///
    /// `base_vertex` is the running vertex count before this quad; the
    /// quad's indices are offset by it.
    pub(crate) fn push_quad(&mut self, base_vertex: u32, corners: [Vec3; 4], uv_region: &UvRegion) {
        self.vertex_positions.extend_from_slice(&corners);
        self.texture_coordinates.extend_from_slice(uv_region);
        self.indices.extend(QUAD_INDICES.iter().map(|index| base_vertex + index));
    }

    /// Number of glyph quads in the mesh
    pub fn glyph_count(&self) -> usize {
        self.vertex_positions.len() / VERTICES_PER_GLYPH
    }

    /// Number of triangles a draw call should render
    pub fn triangle_count(&self) -> usize {
        self.glyph_count() * 2
    }

    /// True if no glyph was emitted
    pub fn is_empty(&self) -> bool {
        self.vertex_positions.is_empty()
    }

    /// Positions and UVs zipped into one buffer
    pub fn interleaved_vertices(&self) -> Vec<TextVertex> {
        self.vertex_positions
            .iter()
            .zip(&self.texture_coordinates)
            .map(|(position, uv)| TextVertex {
                position: [position.x, position.y, position.z],
                uv: [uv.x, uv.y],
            })
            .collect()
    }

    /// Interleaved vertex buffer as raw bytes for upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice::<TextVertex, u8>(&self.interleaved_vertices()).to_vec()
    }

    /// Index buffer as raw bytes for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.indices.as_slice())
    }
}
