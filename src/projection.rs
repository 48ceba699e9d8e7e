//! Perspective projection parameters and the viewport mapping.
//!
//! The [`Projection`] struct is the single source of truth for the
//! perspective parameters (FOV, aspect ratio, near/far planes). It builds both
//! the projection matrix and the matching view-space [`Frustum`], so the two
//! can never disagree. [`Viewport`] takes projected points from NDC to pixels.

use crate::clipper::Frustum;
use crate::error::{RenderError, Result};
use crate::math::mat4::Mat4;
use crate::math::vec4::Vec4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Width divided by height.
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
}

impl Projection {
    /// Creates a new projection, rejecting clip distances outside `0 < near < far`.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Result<Self> {
        if !(z_near > 0.0 && z_far > z_near) {
            return Err(RenderError::InvalidProjection { z_near, z_far });
        }
        Ok(Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        })
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(
        fov_y_degrees: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self> {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Horizontal field of view in radians, derived from the vertical FOV and aspect ratio.
    pub fn fov_x(&self) -> f32 {
        2.0 * (self.aspect_ratio * (self.fov_y / 2.0).tan()).atan()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }

    pub fn frustum(&self) -> Frustum {
        Frustum::new(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }
}

/// Maps normalized device coordinates onto the pixel grid.
///
/// NDC x in `[-1, 1]` spans the width left to right. NDC y is flipped so
/// that +1 lands on the top row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Converts a projected point to screen space.
    ///
    /// x and y become pixel coordinates. z (NDC depth) and w (view depth)
    /// pass through unchanged for depth testing and perspective correction.
    pub fn to_screen(&self, ndc: Vec4) -> Vec4 {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        Vec4::new(
            ndc.x * half_width + half_width,
            -ndc.y * half_height + half_height,
            ndc.z,
            ndc.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn fov_x_matches_fov_y_for_square_aspect() {
        let proj = Projection::new(FRAC_PI_4, 1.0, 0.1, 100.0).unwrap();
        assert_relative_eq!(proj.fov_x(), proj.fov_y(), epsilon = 1e-6);
    }

    #[test]
    fn fov_x_wider_with_higher_aspect() {
        let proj = Projection::new(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0).unwrap();
        assert!(proj.fov_x() > proj.fov_y());
    }

    #[test]
    fn from_degrees_converts() {
        let proj = Projection::from_degrees(45.0, 1.0, 0.1, 100.0).unwrap();
        assert_relative_eq!(proj.fov_y(), FRAC_PI_4, epsilon = 1e-6);
    }

    #[test]
    fn invalid_clip_distances_are_rejected() {
        assert!(Projection::new(FRAC_PI_4, 1.0, 0.0, 100.0).is_err());
        assert!(Projection::new(FRAC_PI_4, 1.0, 5.0, 5.0).is_err());
        assert!(Projection::new(FRAC_PI_4, 1.0, -1.0, 10.0).is_err());
    }

    #[test]
    fn viewport_flips_y() {
        let viewport = Viewport::new(800, 600);
        let top_left = viewport.to_screen(Vec4::new(-1.0, 1.0, 0.5, 3.0));
        assert_eq!(top_left, Vec4::new(0.0, 0.0, 0.5, 3.0));

        let bottom_right = viewport.to_screen(Vec4::new(1.0, -1.0, 0.0, 1.0));
        assert_eq!((bottom_right.x, bottom_right.y), (800.0, 600.0));

        let center = viewport.to_screen(Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!((center.x, center.y), (400.0, 300.0));
    }
}
