//! Engine configuration.

use crate::colors;
use crate::error::{RenderError, Result};
use crate::math::vec3::Vec3;

/// Fixed parameters the engine is built from: buffer resolution, projection
/// and initial camera placement. Everything here is read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Color the buffer is cleared to each frame.
    pub clear_color: u32,
    pub camera_position: Vec3,
    /// Spacing of the background grid in pixels.
    pub grid_spacing: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov_y_degrees: 60.0,
            z_near: 0.1,
            z_far: 100.0,
            clear_color: colors::BACKGROUND,
            camera_position: Vec3::ZERO,
            grid_spacing: 50,
        }
    }
}

impl EngineConfig {
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fov(mut self, fov_y_degrees: f32) -> Self {
        self.fov_y_degrees = fov_y_degrees;
        self
    }

    pub fn with_clip_distances(mut self, z_near: f32, z_far: f32) -> Self {
        self.z_near = z_near;
        self.z_far = z_far;
        self
    }

    pub fn with_clear_color(mut self, color: u32) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_camera_position(mut self, position: Vec3) -> Self {
        self.camera_position = position;
        self
    }

    pub fn with_grid_spacing(mut self, spacing: u32) -> Self {
        self.grid_spacing = spacing;
        self
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Checks that the buffers can be allocated and the projection is well formed.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.z_near > 0.0 && self.z_far > self.z_near) {
            return Err(RenderError::InvalidProjection {
                z_near: self.z_near,
                z_far: self.z_far,
            });
        }
        Ok(())
    }
}
