//! Models: immutable vertex and triangle lists shared by instances.
//!
//! A [`Model`] owns its geometry. Instances borrow it, so one model can be
//! placed any number of times without copying.

use std::fmt;
use std::path::Path;

use log::{info, warn};

use crate::colors::{self, Color};
use crate::math::vec4::Vec4;

/// A triangle of a model: three indices into its vertex list and a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub color: Color,
}

impl Triangle {
    pub const fn new(a: usize, b: usize, c: usize, color: Color) -> Self {
        Self { a, b, c, color }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// Error type for model loading operations.
#[derive(Debug)]
pub enum LoadError {
    /// The OBJ file could not be read or parsed.
    Obj(tobj::LoadError),
    /// The file parsed but contained no triangles.
    Empty(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to load OBJ: {e}"),
            LoadError::Empty(path) => write!(f, "no triangles found in {path}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::Empty(_) => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

/// A named, immutable mesh in model space.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    name: String,
    vertices: Vec<Vec4>,
    triangles: Vec<Triangle>,
    /// Optional per-vertex intensities used for gradient shading.
    intensities: Option<Vec<f32>>,
}

impl Model {
    /// Creates a model from vertices (`w = 1`) and triangles indexing them.
    ///
    /// Every triangle index must be a valid vertex position.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec4>, triangles: Vec<Triangle>) -> Self {
        debug_assert!(
            triangles
                .iter()
                .flat_map(|t| t.indices())
                .all(|i| i < vertices.len()),
            "triangle index out of range"
        );
        Self {
            name: name.into(),
            vertices,
            triangles,
            intensities: None,
        }
    }

    /// Attaches one shading intensity per vertex.
    pub fn with_intensities(mut self, intensities: Vec<f32>) -> Self {
        debug_assert_eq!(
            intensities.len(),
            self.vertices.len(),
            "one intensity per vertex"
        );
        self.intensities = Some(intensities);
        self
    }

    /// The unit cube: corners at ±1, two triangles per face, one color per face.
    pub fn cube() -> Self {
        let vertices = vec![
            Vec4::point(1.0, 1.0, 1.0),
            Vec4::point(-1.0, 1.0, 1.0),
            Vec4::point(-1.0, -1.0, 1.0),
            Vec4::point(1.0, -1.0, 1.0),
            Vec4::point(1.0, 1.0, -1.0),
            Vec4::point(-1.0, 1.0, -1.0),
            Vec4::point(-1.0, -1.0, -1.0),
            Vec4::point(1.0, -1.0, -1.0),
        ];
        let triangles = vec![
            Triangle::new(0, 1, 2, colors::RED),
            Triangle::new(0, 2, 3, colors::RED),
            Triangle::new(4, 0, 3, colors::GREEN),
            Triangle::new(4, 3, 7, colors::GREEN),
            Triangle::new(5, 4, 7, colors::BLUE),
            Triangle::new(5, 7, 6, colors::BLUE),
            Triangle::new(1, 5, 6, colors::YELLOW),
            Triangle::new(1, 6, 2, colors::YELLOW),
            Triangle::new(4, 5, 1, colors::PURPLE),
            Triangle::new(4, 1, 0, colors::PURPLE),
            Triangle::new(2, 6, 7, colors::CYAN),
            Triangle::new(2, 7, 3, colors::CYAN),
        ];
        Self::new("cube", vertices, triangles)
    }

    /// Load a model from an OBJ file, giving every triangle `color`.
    ///
    /// All objects/groups in the file are merged into one vertex list.
    pub fn from_obj<P: AsRef<Path>>(
        name: impl Into<String>,
        path: P,
        color: Color,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (obj_models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        for obj in &obj_models {
            let base = vertices.len();
            let mesh = &obj.mesh;
            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec4::point(p[0], p[1], p[2])),
            );
            triangles.extend(mesh.indices.chunks_exact(3).map(|f| {
                Triangle::new(
                    base + f[0] as usize,
                    base + f[1] as usize,
                    base + f[2] as usize,
                    color,
                )
            }));
        }

        if triangles.is_empty() {
            warn!("{} contained no triangles", path.display());
            return Err(LoadError::Empty(path.display().to_string()));
        }

        info!(
            "loaded {} ({} vertices, {} triangles, {} objects)",
            path.display(),
            vertices.len(),
            triangles.len(),
            obj_models.len()
        );
        Ok(Self::new(name, vertices, triangles))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn intensities(&self) -> Option<&[f32]> {
        self.intensities.as_deref()
    }

    /// Intensities of the three corners of `triangle`, if the model has any.
    pub fn triangle_intensities(&self, triangle: &Triangle) -> Option<[f32; 3]> {
        self.intensities
            .as_deref()
            .map(|h| triangle.indices().map(|i| h[i]))
    }
}
