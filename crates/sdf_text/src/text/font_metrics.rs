//! Font metrics description
//!
//! Parses the JSON file produced alongside a pre-baked SDF atlas. Only the
//! `characters` table is required; the header fields are informational.
//!
//! ```json
//! {
//!     "name": "Times New Roman",
//!     "size": 64,
//!     "bold": false,
//!     "italic": false,
//!     "width": 512,
//!     "height": 512,
//!     "characters": {
//!         "A": { "x": 0, "y": 0, "width": 40, "height": 48, "originX": 2, "originY": 44, "advance": 38 }
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FontError, FontResult};

/// Raw pixel metrics of one character as stored in the metrics file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMetrics {
    /// Bitmap width in pixels
    pub width: f32,
    /// Bitmap height in pixels
    pub height: f32,
    /// Horizontal offset from the bitmap's left edge to the pen anchor
    pub origin_x: f32,
    /// Vertical offset from the bitmap's top edge to the pen anchor
    pub origin_y: f32,
    /// Pen advance after this character
    pub advance: f32,
}

/// Header information about the font the atlas was baked from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontMetadata {
    /// Font family name
    #[serde(default)]
    pub name: Option<String>,
    /// Size the font was rasterized at
    #[serde(default)]
    pub size: Option<f32>,
    /// Bold face
    #[serde(default)]
    pub bold: Option<bool>,
    /// Italic face
    #[serde(default)]
    pub italic: Option<bool>,
    /// Atlas image width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Atlas image height in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

/// Complete font metrics description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Font header
    #[serde(flatten)]
    pub metadata: FontMetadata,
    /// Character key to pixel metrics, ordered by key
    pub characters: BTreeMap<String, CharacterMetrics>,
}

impl FontMetrics {
    /// Read and parse a metrics file
    pub fn from_file(path: impl AsRef<Path>) -> FontResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading font metrics from {:?}", path);

        let contents = std::fs::read_to_string(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&contents).map_err(|source| FontError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse metrics from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Add or replace one character's metrics
    #[must_use]
    pub fn with_character(mut self, key: impl Into<String>, metrics: CharacterMetrics) -> Self {
        self.characters.insert(key.into(), metrics);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMES: &str = r#"{
        "name": "Times",
        "size": 64,
        "bold": false,
        "italic": true,
        "width": 512,
        "height": 256,
        "characters": {
            "A": { "x": 3, "y": 4, "width": 40, "height": 48, "originX": 2, "originY": 44, "advance": 38 },
            "b": { "width": 30, "height": 50, "originX": 1, "originY": 46, "advance": 31.5 }
        }
    }"#;

    #[test]
    fn test_parse_header_and_characters() {
        let metrics = FontMetrics::from_json_str(TIMES).unwrap();

        assert_eq!(metrics.metadata.name.as_deref(), Some("Times"));
        assert_eq!(metrics.metadata.size, Some(64.0));
        assert_eq!(metrics.metadata.italic, Some(true));
        assert_eq!(metrics.metadata.width, Some(512));
        assert_eq!(metrics.characters.len(), 2);

        let b = metrics.characters["b"];
        assert_eq!(b.origin_y, 46.0);
        assert_eq!(b.advance, 31.5);
    }

    #[test]
    fn test_header_is_optional() {
        let metrics = FontMetrics::from_json_str(
            r#"{"characters": {"A": {"width": 10, "height": 20, "originX": 0, "originY": 0, "advance": 12}}}"#,
        )
        .unwrap();
        assert_eq!(metrics.metadata, FontMetadata::default());
        assert_eq!(metrics.characters.len(), 1);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let result = FontMetrics::from_json_str(
            r#"{"characters": {"A": {"width": 10, "height": 20, "originX": 0, "advance": 12}}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_characters_table_is_an_error() {
        assert!(FontMetrics::from_json_str(r#"{"name": "Times"}"#).is_err());
    }

    #[test]
    fn test_unreadable_file() {
        let err = FontMetrics::from_file("/nonexistent/font_info.json").unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
    }

    #[test]
    fn test_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font_info.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FontMetrics::from_file(&path).unwrap_err();
        assert!(matches!(err, FontError::Parse { .. }));
    }
}
