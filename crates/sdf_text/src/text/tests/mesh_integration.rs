//! End-to-end tests: metrics and atlas files on disk through to mesh buffers

use std::path::Path;

use approx::assert_relative_eq;
use tempfile::TempDir;

use crate::config::{Config, FontAtlasConfig};
use crate::foundation::logging;
use crate::foundation::math::Vec2;
use crate::text::{FontAtlas, FontError, GlyphKey};

const FONT_INFO: &str = r#"{
    "name": "Test Sans",
    "size": 64,
    "bold": false,
    "italic": false,
    "width": 100,
    "height": 100,
    "characters": {
        "A": { "width": 10, "height": 20, "originX": 0, "originY": 0, "advance": 12 },
        "b": { "width": 10, "height": 20, "originX": 1, "originY": 16, "advance": 11 },
        " ": { "width": 10, "height": 0, "originX": 0, "originY": 0, "advance": 8 }
    }
}"#;

const ATLAS: &str = r#"{
    "width": 100,
    "height": 100,
    "sub_textures": {
        "A": { "x": 0, "y": 0, "width": 10, "height": 20 },
        "b": { "x": 10, "y": 0, "width": 10, "height": 20 },
        " ": { "x": 20, "y": 0, "width": 10, "height": 0 }
    }
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn fixture(font_info: &str, atlas: &str) -> (TempDir, FontAtlasConfig) {
    logging::init_for_tests();

    let dir = tempfile::tempdir().unwrap();
    let info_path = write(dir.path(), "font_info.json", font_info);
    let atlas_path = write(dir.path(), "atlas.json", atlas);
    let config = FontAtlasConfig::new(info_path, atlas_path).with_texture_path(dir.path().join("atlas.png"));
    (dir, config)
}

fn single_glyph_font() -> &'static str {
    r#"{"characters": {"A": {"width": 10, "height": 20, "originX": 0, "originY": 0, "advance": 12}}}"#
}

#[test]
fn test_single_glyph_scenario() {
    let (_dir, config) = fixture(single_glyph_font(), ATLAS);
    let atlas = FontAtlas::load(&config).unwrap();

    assert_relative_eq!(atlas.default_scale(), 0.004);

    let mesh = atlas.generate_text_mesh("A", 0.0, 0.0, 1.0);
    assert_eq!(mesh.vertex_positions.len(), 4);
    assert_eq!(mesh.texture_coordinates.len(), 4);
    assert_eq!(mesh.indices, vec![0, 1, 2, 2, 3, 0]);

    let width = mesh.vertex_positions[1].x - mesh.vertex_positions[0].x;
    let height = mesh.vertex_positions[3].y - mesh.vertex_positions[0].y;
    assert_relative_eq!(width, 0.04, epsilon = 1e-6);
    assert_relative_eq!(height, 0.08, epsilon = 1e-6);

    assert_relative_eq!(mesh.texture_coordinates[0], Vec2::new(0.0, 0.0));
    assert_relative_eq!(mesh.texture_coordinates[2], Vec2::new(0.1, 0.2));
}

#[test]
fn test_unknown_character_scenario() {
    let (_dir, config) = fixture(single_glyph_font(), ATLAS);
    let atlas = FontAtlas::load(&config).unwrap();

    let mesh = atlas.generate_text_mesh("AB", 0.0, 0.0, 1.0);
    assert_eq!(mesh.vertex_positions.len(), 4);
    assert_eq!(mesh.indices.len(), 6);
    assert_eq!(mesh.skipped, vec!['B']);
}

#[test]
fn test_buffer_lengths_match_resolved_glyphs() {
    let (_dir, config) = fixture(FONT_INFO, ATLAS);
    let atlas = FontAtlas::load(&config).unwrap();

    for text in ["", "A", "Ab b", "xyz", "AxbyA", "b b b b b"] {
        let resolved = text.chars().filter(|ch| atlas.glyph(*ch).is_some()).count();
        let mesh = atlas.generate_text_mesh(text, -1.0, 0.0, 1.5);

        assert_eq!(mesh.indices.len(), 6 * resolved, "indices for {text:?}");
        assert_eq!(mesh.vertex_positions.len(), 4 * resolved, "vertices for {text:?}");
        assert_eq!(mesh.texture_coordinates.len(), 4 * resolved, "uvs for {text:?}");
        assert_eq!(mesh.skipped.len(), text.chars().count() - resolved);
        assert_eq!(mesh.triangle_count(), 2 * resolved);
        assert!(mesh.indices.iter().all(|index| (*index as usize) < mesh.vertex_positions.len()));
    }
}

#[test]
fn test_generation_is_deterministic() {
    let (_dir, config) = fixture(FONT_INFO, ATLAS);
    let atlas = FontAtlas::load(&config).unwrap();

    let first = atlas.generate_text_mesh("Ab Ab?", -0.5, 0.25, 2.0);
    let second = atlas.generate_text_mesh("Ab Ab?", -0.5, 0.25, 2.0);
    assert_eq!(first, second);
    assert_eq!(first.vertex_bytes(), second.vertex_bytes());
}

#[test]
fn test_quads_advance_left_to_right() {
    let (_dir, config) = fixture(FONT_INFO, ATLAS);
    let atlas = FontAtlas::load(&config).unwrap();

    let mesh = atlas.generate_text_mesh("AbAbbA", -1.0, 0.0, 1.0);
    let quad_left_edges: Vec<f32> = mesh
        .vertex_positions
        .chunks(4)
        .map(|quad| quad[0].x)
        .collect();

    assert_eq!(quad_left_edges.len(), 6);
    assert!(quad_left_edges.windows(2).all(|pair| pair[1] > pair[0]));
}

#[test]
fn test_metadata_and_shared_use() {
    let (_dir, config) = fixture(FONT_INFO, ATLAS);
    let atlas = FontAtlas::load(&config).unwrap();

    assert_eq!(atlas.metadata().name.as_deref(), Some("Test Sans"));
    assert_eq!(atlas.glyph_count(), 3);
    assert!(atlas.missing_sprites().is_empty());

    let expected = atlas.generate_text_mesh("Ab", 0.0, 0.0, 1.0);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| atlas.generate_text_mesh("Ab", 0.0, 0.0, 1.0)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_missing_sprite_reported_at_load() {
    let atlas_without_b = r#"{
        "width": 100,
        "height": 100,
        "sub_textures": {
            "A": { "x": 0, "y": 0, "width": 10, "height": 20 },
            " ": { "x": 20, "y": 0, "width": 10, "height": 0 }
        }
    }"#;
    let (_dir, config) = fixture(FONT_INFO, atlas_without_b);
    let atlas = FontAtlas::load(&config).unwrap();

    assert_eq!(atlas.missing_sprites(), &[GlyphKey::from('b')]);
    assert!(atlas.glyph('b').is_none());

    let mesh = atlas.generate_text_mesh("Ab", 0.0, 0.0, 1.0);
    assert_eq!(mesh.glyph_count(), 1);
    assert_eq!(mesh.skipped, vec!['b']);
}

#[test]
fn test_top_left_atlas_coordinates() {
    let (_dir, config) = fixture(single_glyph_font(), ATLAS);
    let config = config.with_orientation(false, true);
    let atlas = FontAtlas::load(&config).unwrap();

    let uv = atlas.glyph('A').unwrap().uv_region;
    assert_relative_eq!(uv[0], Vec2::new(0.0, 0.8));
    assert_relative_eq!(uv[2], Vec2::new(0.1, 1.0));
}

#[test]
fn test_empty_metrics_fail_construction() {
    let (_dir, config) = fixture(r#"{"characters": {}}"#, ATLAS);
    let err = FontAtlas::load(&config).unwrap_err();
    assert!(matches!(err, FontError::EmptyGlyphTable));
}

#[test]
fn test_malformed_metrics_fail_construction() {
    let (_dir, config) = fixture(r#"{"characters": {"A": {"width": 10}}}"#, ATLAS);
    let err = FontAtlas::load(&config).unwrap_err();
    assert!(matches!(err, FontError::Parse { .. }));
}

#[test]
fn test_missing_files_fail_construction() {
    let (dir, mut config) = fixture(FONT_INFO, ATLAS);

    config.font_info_path = dir.path().join("nope.json");
    assert!(matches!(FontAtlas::load(&config), Err(FontError::Io { .. })));

    config.texture_atlas_path = dir.path().join("nope_atlas.json");
    assert!(matches!(FontAtlas::load(&config), Err(FontError::Atlas(_))));
}

#[test]
fn test_reload_builds_new_instance() {
    let (dir, config) = fixture(single_glyph_font(), ATLAS);
    let atlas = FontAtlas::load(&config).unwrap();
    assert_eq!(atlas.glyph_count(), 1);

    write(dir.path(), "font_info.json", FONT_INFO);
    let reloaded = atlas.reload().unwrap();

    assert_eq!(reloaded.glyph_count(), 3);
    assert_eq!(atlas.glyph_count(), 1);
}

#[test]
fn test_load_from_config_file() {
    let (dir, config) = fixture(FONT_INFO, ATLAS);
    let config = config.with_chars_per_screen_width(25.0);
    let config_path = dir.path().join("font.toml");
    config.save_to_file(&config_path).unwrap();

    let atlas = FontAtlas::load_from_config_file(&config_path).unwrap();
    assert_relative_eq!(atlas.scale().target_density(), 25.0);
    assert_relative_eq!(atlas.default_scale(), (2.0 / 10.0) / 25.0);
    assert_eq!(atlas.source(), Some(&config));
}

#[test]
fn test_width_limited_mesh() {
    let (_dir, config) = fixture(FONT_INFO, ATLAS);
    let atlas = FontAtlas::load(&config).unwrap();

    let text = "AbAbAbAbAb";
    let natural = atlas.measure_text(text, 1.0);
    let max_width = natural / 4.0;

    let mesh = atlas.generate_text_mesh_with_width(text, -1.0, 0.0, 1.0, max_width);
    let bounds = atlas.calculate_bounds(text, -1.0, 0.0, 0.25).unwrap();
    let min_x = mesh.vertex_positions.iter().map(|v| v.x).fold(f32::INFINITY, f32::min);
    let max_x = mesh.vertex_positions.iter().map(|v| v.x).fold(f32::NEG_INFINITY, f32::max);

    assert_eq!(mesh.glyph_count(), 10);
    assert_relative_eq!(min_x, bounds.min_x, epsilon = 1e-5);
    assert_relative_eq!(max_x, bounds.max_x, epsilon = 1e-5);
}
