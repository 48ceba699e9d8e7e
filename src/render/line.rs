//! Line drawing.
//!
//! Two interchangeable algorithms, both integer-endpoint:
//!
//! - [`dda`]: steps along the longer axis with floating-point increments and
//!   rounds each sample. Plots `max(|dx|, |dy|)` pixels starting at the
//!   start point; the end point itself is not plotted.
//! - [`bresenham`]: integer error accumulation. Plots both endpoints, one
//!   pixel per step along the major axis.
//!
//! The algorithms take a `plot` callback so they can be checked without a
//! frame buffer; [`draw_line`] wires them to one.

use std::fmt;

use super::framebuffer::FrameBuffer;
use super::rasterizer::Triangle;

/// Selects the line algorithm used for wireframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlgorithm {
    Dda,
    #[default]
    Bresenham,
}

impl LineAlgorithm {
    /// The other algorithm, for runtime switching.
    pub fn toggled(self) -> Self {
        match self {
            LineAlgorithm::Dda => LineAlgorithm::Bresenham,
            LineAlgorithm::Bresenham => LineAlgorithm::Dda,
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineAlgorithm::Dda => write!(f, "DDA"),
            LineAlgorithm::Bresenham => write!(f, "Bresenham"),
        }
    }
}

/// Digital differential analyzer.
pub fn dda(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return;
    }

    let x_increment = dx as f32 / steps as f32;
    let y_increment = dy as f32 / steps as f32;
    let mut x = x0 as f32;
    let mut y = y0 as f32;

    for _ in 0..steps {
        plot(x.round() as i32, y.round() as i32);
        x += x_increment;
        y += y_increment;
    }
}

/// Bresenham's line algorithm.
///
/// Deltas are doubled so the half-step initial error stays integral. The
/// minor axis steps when the error is positive, or when it is exactly zero
/// and the major axis runs in the positive direction. That tie-break makes
/// the output deterministic for a given endpoint order.
pub fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let ix = (x1 - x0).signum();
    let iy = (y1 - y0).signum();
    let delta_x = (x1 - x0).abs() << 1;
    let delta_y = (y1 - y0).abs() << 1;

    let (mut x, mut y) = (x0, y0);
    plot(x, y);

    if delta_x >= delta_y {
        let mut error = delta_y - (delta_x >> 1);
        while x != x1 {
            if error > 0 || (error == 0 && ix > 0) {
                error -= delta_x;
                y += iy;
            }
            error += delta_y;
            x += ix;
            plot(x, y);
        }
    } else {
        let mut error = delta_x - (delta_y >> 1);
        while y != y1 {
            if error > 0 || (error == 0 && iy > 0) {
                error -= delta_y;
                x += ix;
            }
            error += delta_x;
            y += iy;
            plot(x, y);
        }
    }
}

/// Draws a line into the frame buffer with the chosen algorithm.
pub fn draw_line(
    buffer: &mut FrameBuffer,
    algorithm: LineAlgorithm,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    color: u32,
) {
    let plot = |x, y| buffer.set_pixel(x, y, color);
    match algorithm {
        LineAlgorithm::Dda => dda(x0, y0, x1, y1, plot),
        LineAlgorithm::Bresenham => bresenham(x0, y0, x1, y1, plot),
    }
}

/// Outlines a screen-space triangle.
pub fn draw_triangle_wireframe(
    buffer: &mut FrameBuffer,
    algorithm: LineAlgorithm,
    triangle: &Triangle,
    color: u32,
) {
    let [p0, p1, p2] = triangle.points.map(|p| (p.x as i32, p.y as i32));
    draw_line(buffer, algorithm, p0, p1, color);
    draw_line(buffer, algorithm, p1, p2, color);
    draw_line(buffer, algorithm, p2, p0, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bresenham_points(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        bresenham(from.0, from.1, to.0, to.1, |x, y| points.push((x, y)));
        points
    }

    fn dda_points(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        dda(from.0, from.1, to.0, to.1, |x, y| points.push((x, y)));
        points
    }

    fn steps_monotonically(points: &[(i32, i32)]) -> bool {
        points.windows(2).all(|w| {
            let (dx, dy) = (w[1].0 - w[0].0, w[1].1 - w[0].1);
            dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0)
        })
    }

    #[test]
    fn bresenham_x_major_includes_both_endpoints() {
        let points = bresenham_points((10, 10), (20, 15));
        assert_eq!(points.len(), 11);
        assert_eq!(points.first(), Some(&(10, 10)));
        assert_eq!(points.last(), Some(&(20, 15)));
        assert!(steps_monotonically(&points));
        assert!(points.windows(2).all(|w| w[1].0 == w[0].0 + 1 && w[1].1 >= w[0].1));
    }

    #[test]
    fn bresenham_y_major_reaches_end_point() {
        let points = bresenham_points((10, 10), (15, 20));
        assert_eq!(points.len(), 11);
        assert_eq!(points.last(), Some(&(15, 20)));
        assert!(steps_monotonically(&points));
    }

    #[test]
    fn bresenham_negative_directions() {
        let points = bresenham_points((20, 15), (10, 10));
        assert_eq!(points.len(), 11);
        assert_eq!(points.last(), Some(&(10, 10)));

        let points = bresenham_points((5, 30), (8, 12));
        assert_eq!(points.len(), 19);
        assert_eq!(points.last(), Some(&(8, 12)));
        assert!(steps_monotonically(&points));
    }

    #[test]
    fn bresenham_tie_breaks_toward_positive_step() {
        // Error starts at zero on a 2:1 slope, so the first step is diagonal.
        let points = bresenham_points((0, 0), (2, 1));
        assert_eq!(points, vec![(0, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn bresenham_single_point() {
        assert_eq!(bresenham_points((3, 3), (3, 3)), vec![(3, 3)]);
    }

    #[test]
    fn dda_excludes_end_point() {
        let points = dda_points((10, 10), (20, 15));
        assert_eq!(points.len(), 10);
        assert_eq!(points.first(), Some(&(10, 10)));
        assert!(!points.contains(&(20, 15)));
    }

    #[test]
    fn dda_zero_length_plots_nothing() {
        assert!(dda_points((4, 4), (4, 4)).is_empty());
    }

    #[test]
    fn toggling_switches_algorithm() {
        assert_eq!(LineAlgorithm::Dda.toggled(), LineAlgorithm::Bresenham);
        assert_eq!(LineAlgorithm::default().toggled(), LineAlgorithm::Dda);
    }
}
