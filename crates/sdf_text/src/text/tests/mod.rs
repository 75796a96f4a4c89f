//! Integration tests for loading atlases from disk and generating meshes

mod mesh_integration;
