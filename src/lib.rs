//! A CPU-based software 3D rasterizer.
//!
//! Scenes of camera plus model instances are transformed, projected with a
//! perspective divide and rasterized into any [`PixelSink`]. No GPU, no depth
//! buffer, no clipping: triangles are drawn in order as wireframes, flat
//! fills, or fills shaded by per-vertex intensity.
//!
//! # Quick Start
//!
//! ```ignore
//! use scanline3d::prelude::*;
//!
//! let config = RenderConfig::default();
//! let cube = Model::cube();
//! let mut scene = Scene::new(Camera::default());
//! scene.add_instance(Instance::new(&cube).with_pose(Vec3::new(0.0, 0.0, 5.0), 0.5, 0.5, 1.0));
//!
//! let mut canvas = Canvas::new(config.canvas_width, config.canvas_height, config.background);
//! SceneRenderer::new(config.projection(), RenderMode::Filled).render(&scene, &mut canvas);
//! canvas.save_png("frame.png")?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod math;
pub mod model;
pub mod projection;
pub mod render;
pub mod scene;
pub mod transform;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use config::{ConfigError, RenderConfig};
pub use model::{LoadError, Model};
pub use projection::Projection;
pub use render::{Canvas, PixelSink, RenderMode, SceneRenderer};
pub use scene::{Instance, Scene};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use scanline3d::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::model::{Model, Triangle};
    pub use crate::scene::{Instance, Scene};
    pub use crate::transform::Transform;

    // Configuration & projection
    pub use crate::config::RenderConfig;
    pub use crate::projection::Projection;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::point::Point;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::colors::Color;
    pub use crate::render::{
        Canvas, PixelRecorder, PixelSink, RenderMode, ScanlineRasterizer, SceneRenderer,
        ScreenTriangle,
    };
}
