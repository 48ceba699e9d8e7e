//! Scanline traversal with flat-top/flat-bottom decomposition.
//!
//! # Triangle Decomposition
//!
//! Any triangle can be decomposed into at most two simpler triangles:
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//!
//!   General triangle      Flat-bottom (top) + Flat-top (bottom)
//! ```
//!
//! Special cases (already flat-top or flat-bottom) require no splitting.
//!
//! # Coverage
//!
//! Rows `ceil(y_top)..ceil(y_bottom)` are scanned, and each row covers the
//! span `ceil(x_start)..ceil(x_end)`. The half-open ranges keep the two halves
//! of a split triangle, and triangles sharing an edge, from drawing a pixel
//! twice.

use log::trace;

use super::Triangle;
use crate::math::vec2::Vec2;
use crate::math::EPSILON;
use crate::render::framebuffer::FrameBuffer;

/// Scanline-based triangle rasterizer.
///
/// Vertices are sorted internally, so input triangles can use any order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Fills a triangle with its flat color. No depth test.
    pub fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let color = triangle.color;
        for_each_span(triangle.screen_points(), |y, x_start, x_end| {
            for x in x_start..x_end {
                buffer.set_pixel(x, y, color);
            }
        });
    }
}

/// Sorts three points by Y (ascending: top to bottom in screen space).
fn sort_by_y(mut p: [Vec2; 3]) -> [Vec2; 3] {
    if p[1].y < p[0].y {
        p.swap(0, 1);
    }
    if p[2].y < p[1].y {
        p.swap(1, 2);
    }
    if p[1].y < p[0].y {
        p.swap(0, 1);
    }
    p
}

/// Walks every covered pixel row of a triangle, calling
/// `span(y, x_start, x_end)` with an exclusive `x_end`.
pub(super) fn for_each_span(points: [Vec2; 3], mut span: impl FnMut(i32, i32, i32)) {
    let [p0, p1, p2] = sort_by_y(points);

    if (p1.y - p2.y).abs() < EPSILON {
        flat_bottom(p0, p1, p2, &mut span);
    } else if (p0.y - p1.y).abs() < EPSILON {
        flat_top(p0, p1, p2, &mut span);
    } else {
        // Split on the long edge p0 -> p2 at the height of p1.
        let split_x = p0.x + (p2.x - p0.x) * (p1.y - p0.y) / (p2.y - p0.y);
        let split = Vec2::new(split_x, p1.y);
        flat_bottom(p0, p1, split, &mut span);
        flat_top(p1, split, p2, &mut span);
    }
}

/// `v0` on top, `v1` and `v2` share the bottom row.
fn flat_bottom(v0: Vec2, v1: Vec2, v2: Vec2, span: &mut impl FnMut(i32, i32, i32)) {
    let dy1 = v1.y - v0.y;
    let dy2 = v2.y - v0.y;
    if dy1.abs() < EPSILON || dy2.abs() < EPSILON {
        trace!("skipping zero-height flat-bottom triangle at y={}", v0.y);
        return;
    }

    let inv_slope_1 = (v1.x - v0.x) / dy1;
    let inv_slope_2 = (v2.x - v0.x) / dy2;

    for y in v0.y.ceil() as i32..v1.y.ceil() as i32 {
        let dy = y as f32 - v0.y;
        emit_span(y, v0.x + inv_slope_1 * dy, v0.x + inv_slope_2 * dy, span);
    }
}

/// `v0` and `v1` share the top row, `v2` at the bottom.
fn flat_top(v0: Vec2, v1: Vec2, v2: Vec2, span: &mut impl FnMut(i32, i32, i32)) {
    let dy0 = v2.y - v0.y;
    let dy1 = v2.y - v1.y;
    if dy0.abs() < EPSILON || dy1.abs() < EPSILON {
        trace!("skipping zero-height flat-top triangle at y={}", v2.y);
        return;
    }

    let inv_slope_0 = (v2.x - v0.x) / dy0;
    let inv_slope_1 = (v2.x - v1.x) / dy1;

    for y in v0.y.ceil() as i32..v2.y.ceil() as i32 {
        let x_start = v0.x + inv_slope_0 * (y as f32 - v0.y);
        let x_end = v1.x + inv_slope_1 * (y as f32 - v1.y);
        emit_span(y, x_start, x_end, span);
    }
}

#[inline]
fn emit_span(y: i32, x_start: f32, x_end: f32, span: &mut impl FnMut(i32, i32, i32)) {
    let (mut start, mut end) = (x_start.ceil() as i32, x_end.ceil() as i32);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    span(y, start, end);
}
