//! Triangle rasterization.
//!
//! Triangles arrive already projected to canvas pixel coordinates. The
//! [`ScanlineRasterizer`] draws them as outlines, solid fills, or fills shaded
//! by a per-vertex intensity.

mod scanline;

pub use scanline::ScanlineRasterizer;

use crate::colors::Color;
use crate::math::point::Point;

/// A triangle ready for rasterization in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Point; 3],
    pub color: Color,
    /// Per-vertex intensities, in the same order as `points`.
    /// `None` requests a flat fill.
    pub intensities: Option<[f32; 3]>,
}

impl ScreenTriangle {
    pub fn new(points: [Point; 3], color: Color) -> Self {
        Self {
            points,
            color,
            intensities: None,
        }
    }

    pub fn with_intensities(mut self, intensities: [f32; 3]) -> Self {
        self.intensities = Some(intensities);
        self
    }
}
