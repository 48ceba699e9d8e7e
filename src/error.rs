//! Error types for asset loading and engine setup.
//!
//! The rasterization core never fails: degenerate primitives are skipped.
//! Only the boundary (files, configuration, the window) reports errors.

use thiserror::Error;

/// Result type for fallible renderer operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to load mesh: {0}")]
    MeshLoad(#[from] tobj::LoadError),

    #[error("failed to load texture: {0}")]
    TextureLoad(#[from] image::ImageError),

    #[error("face {face} references vertex {index} (mesh has {vertex_count} vertices)")]
    InvalidFaceIndex {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("texture data holds {len} pixels, expected {width}x{height}")]
    TextureSize { width: u32, height: u32, len: usize },

    #[error("invalid clip distances: near {z_near}, far {z_far} (need 0 < near < far)")]
    InvalidProjection { z_near: f32, z_far: f32 },

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("window error: {0}")]
    Window(String),
}
