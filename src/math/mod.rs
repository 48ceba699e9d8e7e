//! Vector and matrix types used throughout the pipeline.

pub mod barycentric;
pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

/// Tolerance for near-zero comparisons, shared by the clipper, the back-face
/// test and the scanline degenerate-edge checks.
pub const EPSILON: f32 = 10.0 * f32::EPSILON;
