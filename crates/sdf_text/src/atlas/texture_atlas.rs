//! JSON-backed texture atlas
//!
//! Reads a description of where each named sprite lives inside a shared
//! atlas image and converts those pixel rectangles into UV regions.
//!
//! ```json
//! {
//!     "width": 512,
//!     "height": 512,
//!     "sub_textures": {
//!         "A": { "x": 0, "y": 0, "width": 32, "height": 48 }
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AtlasError, SubTextureLookup, UvRegion};
use crate::foundation::math::Vec2;

/// Pixel rectangle of one sprite inside the atlas image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTexture {
    /// Left edge in pixels
    pub x: u32,
    /// Bottom edge in pixels, or top edge when the atlas uses top-left coordinates
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// On-disk layout of a texture atlas description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureAtlasDescription {
    /// Atlas image width in pixels
    pub width: u32,
    /// Atlas image height in pixels
    pub height: u32,
    /// Sprite name to pixel rectangle
    pub sub_textures: HashMap<String, SubTexture>,
}

/// Texture atlas with sprite rectangles resolved to UV coordinates
#[derive(Debug, Clone)]
pub struct TextureAtlas {
    width: u32,
    height: u32,
    regions: HashMap<String, UvRegion>,
}

impl TextureAtlas {
    /// Load an atlas description from a JSON file
    ///
    /// # Arguments
    ///
    /// * `path` - JSON description of the atlas
    /// * `flip_texture` - The atlas image is uploaded upside down, so every `v` is mirrored
    /// * `top_left_coords` - Sub-texture `y` values are measured from the top edge
    pub fn from_file(
        path: impl AsRef<Path>,
        flip_texture: bool,
        top_left_coords: bool,
    ) -> Result<Self, AtlasError> {
        let path = path.as_ref();
        log::debug!("Loading texture atlas from {:?}", path);

        let contents = std::fs::read_to_string(path).map_err(|source| AtlasError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let description: TextureAtlasDescription =
            serde_json::from_str(&contents).map_err(|source| AtlasError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let atlas = Self::from_description(&description, flip_texture, top_left_coords)?;
        log::info!(
            "Loaded texture atlas {}x{} with {} sub-textures from {:?}",
            atlas.width,
            atlas.height,
            atlas.len(),
            path
        );
        Ok(atlas)
    }

    /// Build an atlas from an already parsed description
    pub fn from_description(
        description: &TextureAtlasDescription,
        flip_texture: bool,
        top_left_coords: bool,
    ) -> Result<Self, AtlasError> {
        let (width, height) = (description.width, description.height);
        if width == 0 || height == 0 {
            return Err(AtlasError::InvalidDimensions { width, height });
        }

        let mut regions = HashMap::with_capacity(description.sub_textures.len());
        for (name, rect) in &description.sub_textures {
            let fits_x = rect.x.checked_add(rect.width).is_some_and(|right| right <= width);
            let fits_y = rect.y.checked_add(rect.height).is_some_and(|top| top <= height);
            if !fits_x || !fits_y {
                return Err(AtlasError::OutOfBounds(name.clone()));
            }

            let region = uv_region(rect, width, height, flip_texture, top_left_coords);
            regions.insert(name.clone(), region);
        }

        Ok(Self { width, height, regions })
    }

    /// Atlas image dimensions in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of sprites in the atlas
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True if the atlas holds no sprites
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl SubTextureLookup for TextureAtlas {
    fn texture_coordinates_of_sub_texture(&self, sprite_name: &str) -> Option<UvRegion> {
        self.regions.get(sprite_name).copied()
    }
}

fn uv_region(
    rect: &SubTexture,
    atlas_width: u32,
    atlas_height: u32,
    flip_texture: bool,
    top_left_coords: bool,
) -> UvRegion {
    let (w, h) = (atlas_width as f32, atlas_height as f32);

    let bottom_px = if top_left_coords {
        atlas_height - rect.y - rect.height
    } else {
        rect.y
    };

    let u_left = rect.x as f32 / w;
    let u_right = (rect.x + rect.width) as f32 / w;
    let mut v_bottom = bottom_px as f32 / h;
    let mut v_top = (bottom_px + rect.height) as f32 / h;

    if flip_texture {
        v_bottom = 1.0 - v_bottom;
        v_top = 1.0 - v_top;
    }

    [
        Vec2::new(u_left, v_bottom),
        Vec2::new(u_right, v_bottom),
        Vec2::new(u_right, v_top),
        Vec2::new(u_left, v_top),
    ]
}
