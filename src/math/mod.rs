//! Math primitives for the transform and projection pipeline.

pub mod mat4;
pub mod point;
pub mod vec3;
pub mod vec4;
