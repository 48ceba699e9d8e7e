//! Look-at camera.
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! # Orientation
//!
//! - **Yaw**: rotation around Y (positive = look right)
//! - **Pitch**: rotation around X (positive = look down)

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// Camera with a world position and yaw/pitch orientation.
///
/// The view matrix is rebuilt each frame with [`Mat4::look_at`], targeting
/// `position + forward`.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    yaw: f32,   // radians
    pitch: f32, // radians
    pitch_limit: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at `position`, looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            // Keeps forward away from the up vector so look_at stays well defined.
            pitch_limit: 89.0_f32.to_radians(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotates by yaw and pitch deltas (radians). Pitch is clamped to ±89°.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw = (self.yaw + yaw_delta).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + pitch_delta).clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, -sin_pitch, cos_yaw * cos_pitch)
    }

    /// Horizontal unit vector to the camera's right.
    pub fn right(&self) -> Vec3 {
        Vec3::UP.cross(self.forward()).normalize()
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.position = self.position + self.forward() * distance;
    }

    pub fn move_right(&mut self, distance: f32) {
        self.position = self.position + self.right() * distance;
    }

    /// Moves along world +Y.
    pub fn move_up(&mut self, distance: f32) {
        self.position.y += distance;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.forward(), Vec3::UP)
    }
}
