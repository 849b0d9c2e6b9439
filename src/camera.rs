//! Scene camera.
//!
//! # Coordinate System
//!
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into the screen)
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch angles and converted to a rotation
//! matrix when needed, using the same combined yaw/pitch formula as
//! instances.

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// Camera with a world position and yaw/pitch orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    position: Vec3,
    yaw: f32,   // Rotation around Y-axis (radians)
    pitch: f32, // Rotation around X-axis (radians)
}

impl Camera {
    /// Creates a camera at the given position, looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Builder-style orientation.
    pub fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Teleports the camera to a new position without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Rotates the camera by yaw and pitch deltas.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch += pitch_delta;
    }

    /// Returns the world-to-camera matrix.
    ///
    /// Order: Rotation(yaw, pitch) * Translation(-position), so the world is
    /// first shifted so the camera sits at the origin, then rotated.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::rotation_yaw_pitch(self.yaw, self.pitch) * Mat4::translation_vec(-self.position)
    }
}
