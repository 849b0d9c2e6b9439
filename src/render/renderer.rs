//! Scene rendering.
//!
//! Provides the [`SceneRenderer`], which runs every instance of a scene
//! through the transform pipeline and rasterizes its triangles.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::canvas::PixelSink;
use super::rasterizer::{ScanlineRasterizer, ScreenTriangle};
use crate::camera::Camera;
use crate::math::mat4::Mat4;
use crate::math::point::Point;
use crate::projection::Projection;
use crate::scene::{Instance, Scene};

/// How triangles are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Triangle outlines only (key: 1)
    #[default]
    Wireframe,
    /// Solid fill with each triangle's color (key: 2)
    Filled,
    /// Fill scaled by per-vertex intensities; models without intensities
    /// are filled flat (key: 3)
    Shaded,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::Filled => write!(f, "Filled"),
            RenderMode::Shaded => write!(f, "Shaded"),
        }
    }
}

/// Draws scenes through a fixed projection.
///
/// Matrices are rebuilt on every call: poses change between frames, so
/// nothing is cached.
pub struct SceneRenderer {
    projection: Projection,
    rasterizer: ScanlineRasterizer,
    mode: RenderMode,
}

impl SceneRenderer {
    pub fn new(projection: Projection, mode: RenderMode) -> Self {
        Self {
            projection,
            rasterizer: ScanlineRasterizer::new(),
            mode,
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    /// Combined matrix for one instance: Projection * Camera * Model.
    pub fn instance_transform(&self, camera: &Camera, instance: &Instance) -> Mat4 {
        self.projection.matrix() * camera.view_matrix() * instance.model_matrix()
    }

    /// Maps every vertex of the instance's model to canvas pixels.
    ///
    /// The result is indexed like the model's vertex list.
    pub fn project_instance(&self, camera: &Camera, instance: &Instance) -> Vec<Point> {
        let transform = self.instance_transform(camera, instance);
        instance
            .model()
            .vertices()
            .iter()
            .map(|&v| self.projection.to_canvas(transform * v))
            .collect()
    }

    /// Renders one frame: every instance, then every triangle, in order.
    ///
    /// There is no depth test; later draws overwrite earlier ones.
    pub fn render(&self, scene: &Scene, sink: &mut impl PixelSink) {
        let mut triangle_count = 0;

        for (index, instance) in scene.instances().iter().enumerate() {
            let model = instance.model();
            let projected = self.project_instance(&scene.camera, instance);
            trace!(
                "instance {index} ({}): {} vertices, {} triangles",
                model.name(),
                projected.len(),
                model.triangles().len()
            );

            for triangle in model.triangles() {
                let screen = ScreenTriangle {
                    points: triangle.indices().map(|i| projected[i]),
                    color: triangle.color,
                    intensities: model.triangle_intensities(triangle),
                };

                match self.mode {
                    RenderMode::Wireframe => self.rasterizer.draw_wireframe(sink, &screen),
                    RenderMode::Filled => self.rasterizer.fill_flat(sink, &screen),
                    RenderMode::Shaded => self.rasterizer.fill_shaded(sink, &screen),
                }
            }
            triangle_count += model.triangles().len();
        }

        debug!(
            "frame rendered: {} instances, {triangle_count} triangles, mode {}",
            scene.instances().len(),
            self.mode
        );
    }
}
