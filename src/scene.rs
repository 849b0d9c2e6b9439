//! Scene state: one camera plus placed instances of shared models.
//!
//! A frame is two separate phases. [`Scene::advance`] mutates instance poses
//! (simulation); rendering only reads the scene. Both take the scene by
//! reference with the matching mutability, so they cannot overlap.

use crate::camera::Camera;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::model::Model;
use crate::transform::Transform;

/// Per-frame orientation change applied by [`Scene::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spin {
    pub yaw: f32,
    pub pitch: f32,
}

/// One placed occurrence of a model.
///
/// Owns no geometry: the model is borrowed and may be shared with any number
/// of other instances.
#[derive(Debug, Clone)]
pub struct Instance<'a> {
    model: &'a Model,
    transform: Transform,
    spin: Option<Spin>,
}

impl<'a> Instance<'a> {
    /// Places `model` at the origin with no rotation and unit scale.
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            transform: Transform::default(),
            spin: None,
        }
    }

    /// Builder: full pose in one call.
    pub fn with_pose(mut self, position: Vec3, yaw: f32, pitch: f32, scale: f32) -> Self {
        self.transform
            .set_position(position)
            .set_rotation(yaw, pitch)
            .set_scale(scale);
        self
    }

    /// Builder: rotate by `yaw`/`pitch` on every [`Scene::advance`].
    pub fn with_spin(mut self, yaw: f32, pitch: f32) -> Self {
        self.spin = Some(Spin { yaw, pitch });
        self
    }

    pub fn model(&self) -> &'a Model {
        self.model
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn spin(&self) -> Option<Spin> {
        self.spin
    }

    /// Object-to-world matrix for the current pose.
    pub fn model_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    fn advance(&mut self) {
        if let Some(spin) = self.spin {
            self.transform.rotate_yaw(spin.yaw).rotate_pitch(spin.pitch);
        }
    }
}

/// Everything one frame renders: a camera and instances in draw order.
#[derive(Debug, Clone, Default)]
pub struct Scene<'a> {
    pub camera: Camera,
    instances: Vec<Instance<'a>>,
}

impl<'a> Scene<'a> {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            instances: Vec::new(),
        }
    }

    /// Appends an instance; later instances draw over earlier ones.
    pub fn add_instance(&mut self, instance: Instance<'a>) -> &mut Self {
        self.instances.push(instance);
        self
    }

    pub fn instances(&self) -> &[Instance<'a>] {
        &self.instances
    }

    pub fn instances_mut(&mut self) -> &mut [Instance<'a>] {
        &mut self.instances
    }

    /// Steps the simulation by one frame: applies every instance's spin.
    pub fn advance(&mut self) {
        for instance in &mut self.instances {
            instance.advance();
        }
    }
}
