//! Barycentric weights of a point relative to a 2D triangle.

use super::vec2::Vec2;
use super::vec3::Vec3;

/// Computes the barycentric weights `(alpha, beta, gamma)` of `p` with
/// respect to triangle `abc`, returned as `Vec3 { x: alpha, y: beta, z: gamma }`.
///
/// Weights satisfy `alpha * a + beta * b + gamma * c == p` for any `p`,
/// inside or outside the triangle. `gamma` is derived as `1 - alpha - beta`
/// so the three always sum to one.
///
/// A zero-area triangle has no valid weights and yields `Vec3::ZERO`.
/// Callers must treat that as "no coverage" rather than an even split.
pub fn barycentric_weights(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> Vec3 {
    let area = (b - a).cross(c - a);
    if area == 0.0 {
        return Vec3::ZERO;
    }

    let alpha = (b - p).cross(c - p) / area;
    let beta = (p - a).cross(c - a) / area;
    let gamma = 1.0 - alpha - beta;

    Vec3::new(alpha, beta, gamma)
}
