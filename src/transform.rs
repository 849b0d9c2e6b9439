//! Object placement: position, yaw/pitch orientation and uniform scale.
//!
//! Provides a [`Transform`] struct with a fluent API. It builds the
//! object-to-world matrix for one instance.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// A 3D placement with position, yaw, pitch, and uniform scale.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xyz(-1.5, 0.0, 7.0)
///     .rotate_yaw(0.5)
///     .set_scale(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    yaw: f32,   // Rotation around Y-axis (radians)
    pitch: f32, // Rotation around X-axis (radians)
    scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, rotation=0, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Position ============

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    // ============ Rotation ============

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set yaw and pitch (radians).
    pub fn set_rotation(&mut self, yaw: f32, pitch: f32) -> &mut Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// Rotate around the Y axis.
    pub fn rotate_yaw(&mut self, angle: f32) -> &mut Self {
        self.yaw += angle;
        self
    }

    /// Rotate around the X axis.
    pub fn rotate_pitch(&mut self, angle: f32) -> &mut Self {
        self.pitch += angle;
        self
    }

    // ============ Scale ============

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) -> &mut Self {
        self.scale = scale;
        self
    }

    // ============ Matrix Generation ============

    /// Generate the object-to-world matrix.
    ///
    /// Order: Translation * Rotation(yaw, pitch) * Scale
    /// (Scale applied first, then rotation, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation_vec(self.position)
            * Mat4::rotation_yaw_pitch(self.yaw, self.pitch)
            * Mat4::uniform_scaling(self.scale)
    }
}
