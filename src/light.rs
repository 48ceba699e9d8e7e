//! Directional lighting.

use crate::math::vec3::Vec3;

/// A light whose rays are all parallel, like a distant sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Normalized direction the light travels (not where it comes from).
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    /// Shines along +Z, straight away from a camera at the origin.
    fn default() -> Self {
        Self::new(Vec3::FORWARD)
    }
}

impl DirectionalLight {
    /// The direction is normalized on construction.
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
        }
    }

    /// Lambertian intensity for a unit surface normal.
    ///
    /// Not clamped: surfaces facing away return a negative value, which
    /// [`crate::colors::apply_intensity`] turns into black.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        -normal.dot(self.direction)
    }
}
