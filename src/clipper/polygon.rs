//! Fixed-capacity polygon produced by clipping one triangle.

use super::Plane;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::EPSILON;

/// Upper bound on the vertices a clipped triangle can carry.
///
/// A triangle clipped by six planes gains at most one vertex per plane,
/// so nine is enough; the extra slot is headroom.
pub const MAX_POLYGON_VERTICES: usize = 10;

/// A triangle cut out of a clipped polygon, still in view space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClippedTriangle {
    pub vertices: [Vec3; 3],
    pub texcoords: [Vec2; 3],
}

/// A convex polygon with parallel position and UV arrays.
///
/// Storage is inline so the per-triangle clipping loop never allocates.
#[derive(Clone, Copy, Debug)]
pub struct Polygon {
    vertices: [Vec3; MAX_POLYGON_VERTICES],
    texcoords: [Vec2; MAX_POLYGON_VERTICES],
    len: usize,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            vertices: [Vec3::ZERO; MAX_POLYGON_VERTICES],
            texcoords: [Vec2::ZERO; MAX_POLYGON_VERTICES],
            len: 0,
        }
    }
}

impl Polygon {
    pub fn from_triangle(vertices: [Vec3; 3], texcoords: [Vec2; 3]) -> Self {
        let mut polygon = Self::default();
        for (v, uv) in vertices.into_iter().zip(texcoords) {
            polygon.push(v, uv);
        }
        polygon
    }

    /// Appends a vertex. Returns `false` and drops the vertex when full.
    pub fn push(&mut self, vertex: Vec3, texcoord: Vec2) -> bool {
        if self.len == MAX_POLYGON_VERTICES {
            return false;
        }
        self.vertices[self.len] = vertex;
        self.texcoords[self.len] = texcoord;
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// True once the polygon has been clipped away completely.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices[..self.len]
    }

    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords[..self.len]
    }

    /// Clips against a single plane (one Sutherland-Hodgman pass).
    ///
    /// Each edge is walked from its previous vertex to the current one. A
    /// crossing emits the interpolated vertex first, then the current vertex
    /// if it is inside, so the winding is preserved. Vertices within
    /// `EPSILON` behind the plane count as inside. Crossings whose distance
    /// delta is within `EPSILON` are skipped to avoid dividing by ~0.
    pub fn clip_against_plane(&self, plane: &Plane) -> Self {
        let mut output = Self::default();
        if self.is_empty() {
            return output;
        }

        let mut prev = self.len - 1;
        let mut prev_dist = plane.signed_distance(self.vertices[prev]);

        for current in 0..self.len {
            let current_dist = plane.signed_distance(self.vertices[current]);
            let prev_inside = prev_dist >= -EPSILON;
            let current_inside = current_dist >= -EPSILON;

            if prev_inside != current_inside {
                let denom = prev_dist - current_dist;
                if denom.abs() > EPSILON {
                    let t = prev_dist / denom;
                    let vertex = self.vertices[prev].lerp(self.vertices[current], t);
                    let texcoord = self.texcoords[prev].lerp(self.texcoords[current], t);
                    output.push(vertex, texcoord);
                }
            }

            if current_inside {
                output.push(self.vertices[current], self.texcoords[current]);
            }

            prev = current;
            prev_dist = current_dist;
        }

        output
    }

    /// Fans the polygon into triangles around vertex 0.
    ///
    /// Yields `len - 2` triangles, or none when fewer than three vertices remain.
    pub fn triangles(&self) -> impl Iterator<Item = ClippedTriangle> + '_ {
        (1..self.len.saturating_sub(1)).map(move |i| ClippedTriangle {
            vertices: [self.vertices[0], self.vertices[i], self.vertices[i + 1]],
            texcoords: [self.texcoords[0], self.texcoords[i], self.texcoords[i + 1]],
        })
    }
}
