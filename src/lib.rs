//! A CPU-based software 3D rasterizer.
//!
//! Meshes are transformed, culled, lit, clipped against the view frustum and
//! projected, then drawn into a 32-bit ARGB color buffer as wireframes, flat
//! fills or perspective-correct textured fills. SDL2 is only used by the
//! optional `window` feature to put the buffer on screen.
//!
//! # Quick Start
//!
//! ```no_run
//! use softraster::prelude::*;
//!
//! # fn main() -> softraster::Result<()> {
//! let config = EngineConfig::default().with_camera_position(Vec3::new(0.0, 0.0, -5.0));
//! let mut engine = Engine::new(config)?;
//! engine.settings_mut().mode = RenderMode::Filled;
//! engine.update();
//! engine.render();
//! let pixels: &[u8] = engine.frame_buffer();
//! # let _ = pixels;
//! # Ok(())
//! # }
//! ```

pub mod camera;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod texture;
pub mod transform;
#[cfg(feature = "window")]
pub mod window;

pub use config::EngineConfig;
pub use engine::{Engine, FrameStats, RenderMode, RenderSettings};
pub use error::{RenderError, Result};
pub use mesh::{Face, Mesh};
pub use texture::Texture;
pub use transform::Transform;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::config::EngineConfig;
    pub use crate::engine::{Engine, FrameStats, RenderMode, RenderSettings};
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::{Face, Mesh};
    pub use crate::projection::{Projection, Viewport};
    pub use crate::render::LineAlgorithm;
    pub use crate::texture::Texture;
    pub use crate::transform::Transform;

    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
}
