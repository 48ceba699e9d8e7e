//! Model transform for the mesh instance.
//!
//! Rotation is kept in degrees, the way the mesh is animated by callers,
//! and converted to radians only when the matrix is built.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// Translation, Euler rotation (degrees) and scale applied uniformly to every
/// vertex of a mesh.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_translation(Vec3::new(0.0, 0.0, 5.0))
///     .rotate(Vec3::new(0.0, 1.0, 0.0))
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Vec3,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vec3) -> &mut Self {
        self.translation = translation;
        self
    }

    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.translation = self.translation + delta;
        self
    }

    /// Euler angles in degrees: x = pitch, y = yaw, z = roll.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: Vec3) -> &mut Self {
        self.rotation = degrees;
        self
    }

    /// Adds a delta rotation in degrees.
    pub fn rotate(&mut self, degrees: Vec3) -> &mut Self {
        self.rotation = self.rotation + degrees;
        self
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    /// Builds the model matrix.
    ///
    /// Order: Translation * RotationX * RotationY * RotationZ * Scale
    /// (scale applied first, then rotations, then translation).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.translation.x, self.translation.y, self.translation.z)
            * Mat4::rotation_x(self.rotation.x.to_radians())
            * Mat4::rotation_y(self.rotation.y.to_radians())
            * Mat4::rotation_z(self.rotation.z.to_radians())
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.scale(), Vec3::ONE);
        assert_eq!(t.to_matrix(), Mat4::identity());
    }

    #[test]
    fn chained_setters() {
        let mut t = Transform::new();
        t.set_translation(Vec3::new(1.0, 2.0, 3.0))
            .rotate(Vec3::new(0.0, 45.0, 0.0))
            .rotate(Vec3::new(0.0, 45.0, 0.0))
            .set_scale_uniform(2.0);

        assert_eq!(t.translation(), Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(t.rotation().y, 90.0);
        assert_eq!(t.scale(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn rotation_is_in_degrees() {
        let mut t = Transform::new();
        t.set_rotation(Vec3::new(0.0, 90.0, 0.0));
        let p = t.to_matrix().transform_point(Vec3::RIGHT);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn scale_applies_before_translation() {
        let mut t = Transform::new();
        t.set_translation(Vec3::new(0.0, 0.0, 5.0)).set_scale_uniform(2.0);
        let p = t.to_matrix().transform_point(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec3::new(2.0, 2.0, 7.0));
    }
}
