//! Triangle rasterization.
//!
//! Both fills share the same scanline traversal (see [`scanline`]):
//! - [`ScanlineRasterizer::fill_triangle`]: solid color, no depth test
//! - [`ScanlineRasterizer::fill_textured_triangle`]: perspective-correct
//!   texture mapping with a per-pixel depth test

mod scanline;
mod textured;

pub use scanline::ScanlineRasterizer;

use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// Screen-space points: x, y in pixels, z the NDC depth in `[0, 1]`,
    /// w the view-space depth kept for perspective correction.
    pub points: [Vec4; 3],
    pub texcoords: [Vec2; 3],
    /// Flat color, already lit.
    pub color: u32,
    /// Light intensity, applied to texels in textured modes.
    pub intensity: f32,
    /// Mean view-space depth of the three vertices, for painter's ordering.
    pub avg_depth: f32,
}

impl Triangle {
    pub fn new(points: [Vec4; 3], texcoords: [Vec2; 3], color: u32) -> Self {
        let avg_depth = (points[0].w + points[1].w + points[2].w) / 3.0;
        Self {
            points,
            texcoords,
            color,
            intensity: 1.0,
            avg_depth,
        }
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// The x, y screen positions.
    pub fn screen_points(&self) -> [Vec2; 3] {
        self.points.map(|p| Vec2::new(p.x, p.y))
    }
}
