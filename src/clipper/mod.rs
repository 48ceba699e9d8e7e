//! View-space frustum clipping.
//!
//! Triangles are clipped as polygons against six planes using the
//! Sutherland-Hodgman algorithm, then fanned back into triangles. Clipping
//! happens before projection so nothing behind the camera reaches the
//! perspective divide.

mod polygon;

pub use polygon::{ClippedTriangle, Polygon, MAX_POLYGON_VERTICES};

use crate::math::vec3::Vec3;

/// A plane defined by a point on the plane and its normal vector.
/// The normal points toward the inside (visible) half-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Positive = inside (same side as the normal), negative = outside.
    pub fn signed_distance(&self, position: Vec3) -> f32 {
        (position - self.point).dot(self.normal)
    }
}

/// The six clipping planes of a perspective view volume.
///
/// Built once from the projection parameters and reused every frame.
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Creates the view-space frustum.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect` - Width divided by height, used to derive the horizontal FOV
    /// * `z_near`, `z_far` - Clip distances along +Z
    pub fn new(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        // tan(fov_x / 2) = aspect * tan(fov_y / 2)
        let fov_x = 2.0 * (aspect * (fov_y / 2.0).tan()).atan();
        let (sin_x, cos_x) = (fov_x / 2.0).sin_cos();
        let (sin_y, cos_y) = (fov_y / 2.0).sin_cos();
        let origin = Vec3::ZERO;

        Self {
            planes: [
                // left
                Plane::new(origin, Vec3::new(cos_x, 0.0, sin_x)),
                // right
                Plane::new(origin, Vec3::new(-cos_x, 0.0, sin_x)),
                // top
                Plane::new(origin, Vec3::new(0.0, -cos_y, sin_y)),
                // bottom
                Plane::new(origin, Vec3::new(0.0, cos_y, sin_y)),
                Plane::new(Vec3::new(0.0, 0.0, z_near), Vec3::FORWARD),
                Plane::new(Vec3::new(0.0, 0.0, z_far), Vec3::BACK),
            ],
        }
    }

    /// Planes in clipping order: left, right, top, bottom, near, far.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Clips a polygon against every plane in order.
    ///
    /// Returns an empty polygon when the input lies entirely outside.
    pub fn clip(&self, polygon: &Polygon) -> Polygon {
        let mut result = *polygon;
        for plane in &self.planes {
            if result.is_empty() {
                break;
            }
            result = result.clip_against_plane(plane);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::math::EPSILON;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn frustum() -> Frustum {
        Frustum::new(FRAC_PI_2, 1.0, 1.0, 100.0)
    }

    const UVS: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];

    #[test]
    fn inside_triangle_is_unchanged() {
        let vertices = [
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(1.0, -1.0, 6.0),
        ];
        let clipped = frustum().clip(&Polygon::from_triangle(vertices, UVS));

        assert_eq!(clipped.len(), 3);
        for (got, expected) in clipped.vertices().iter().zip(vertices) {
            assert_relative_eq!(got.x, expected.x, epsilon = 1e-5);
            assert_relative_eq!(got.y, expected.y, epsilon = 1e-5);
            assert_relative_eq!(got.z, expected.z, epsilon = 1e-5);
        }
        assert_eq!(clipped.texcoords(), &UVS);
    }

    #[test]
    fn triangle_behind_near_plane_is_rejected() {
        let vertices = [
            Vec3::new(-0.1, 0.0, 0.5),
            Vec3::new(0.0, 0.1, 0.5),
            Vec3::new(0.1, 0.0, 0.9),
        ];
        let clipped = frustum().clip(&Polygon::from_triangle(vertices, UVS));
        assert!(clipped.is_empty());
        assert_eq!(clipped.triangles().count(), 0);
    }

    #[test]
    fn triangle_behind_camera_is_rejected() {
        let vertices = [
            Vec3::new(-1.0, 0.0, -5.0),
            Vec3::new(0.0, 1.0, -5.0),
            Vec3::new(1.0, 0.0, -5.0),
        ];
        assert!(frustum().clip(&Polygon::from_triangle(vertices, UVS)).is_empty());
    }

    #[test]
    fn near_plane_crossing_produces_quad() {
        let vertices = [
            Vec3::new(0.0, 0.0, 0.5),
            Vec3::new(-0.5, 0.0, 2.0),
            Vec3::new(0.5, 0.0, 2.0),
        ];
        let clipped = frustum().clip(&Polygon::from_triangle(vertices, UVS));

        assert_eq!(clipped.len(), 4);
        assert_eq!(clipped.triangles().count(), 2);
        for v in clipped.vertices() {
            assert!(v.z >= 1.0 - 1e-5);
        }

        // Edge C->A crosses the near plane two thirds of the way along.
        let first = clipped.vertices()[0];
        assert_relative_eq!(first.z, 1.0, epsilon = 1e-5);
        assert_relative_eq!(first.x, 0.5 / 3.0, epsilon = 1e-5);
        assert_relative_eq!(clipped.texcoords()[0].y, 1.0 / 3.0, epsilon = 1e-5);
    }

    #[test]
    fn vertex_just_behind_near_plane_counts_as_inside() {
        let near_vertex = Vec3::new(0.0, 0.0, 1.0 - 0.5 * EPSILON);
        let vertices = [
            near_vertex,
            Vec3::new(-1.0, 1.0, 5.0),
            Vec3::new(1.0, 1.0, 5.0),
        ];
        let clipped = frustum().clip(&Polygon::from_triangle(vertices, UVS));

        assert_eq!(clipped.len(), 3);
        assert!(clipped.vertices().contains(&near_vertex));
    }

    #[test]
    fn side_planes_follow_horizontal_fov() {
        // With aspect 2 the horizontal half-angle is wider than 45 degrees.
        let wide = Frustum::new(FRAC_PI_2, 2.0, 1.0, 100.0);
        let left = wide.planes()[0];
        assert!(left.signed_distance(Vec3::new(-1.5, 0.0, 1.0)) > 0.0);
        let top = wide.planes()[2];
        assert!(top.signed_distance(Vec3::new(0.0, 1.5, 1.0)) < 0.0);
    }
}
