//! Perspective projection from camera space to canvas pixels.
//!
//! The [`Projection`] struct is the single source of truth for the canvas
//! size, viewport size and focal distance. It offers two equivalent routes:
//!
//! - [`Projection::project_vertex`] divides by depth explicitly and then
//!   scales viewport units to canvas pixels
//! - [`Projection::matrix`] folds the viewport-to-canvas scale into a 4x4
//!   matrix that writes `z / d` into `w`; [`Projection::to_canvas`] then
//!   performs the perspective divide
//!
//! Both produce the same pixel for the same camera-space point. There is no
//! clipping: points behind the camera project to a mirrored but
//! deterministic pixel, and coordinates are clamped to [`EXTENT_LIMIT`]
//! canvas extents so a vertex on the camera plane cannot produce a
//! rasterization span of billions of pixels.

use crate::math::mat4::Mat4;
use crate::math::point::Point;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// Projected coordinates are clamped to this many canvas extents from the
/// center.
pub const EXTENT_LIMIT: f32 = 4.0;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    canvas_width: u32,
    canvas_height: u32,
    /// Viewport extents on the projection plane, in world units.
    viewport_width: f32,
    viewport_height: f32,
    /// Distance from the camera to the projection plane.
    focal_distance: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `canvas_width`, `canvas_height` - Output resolution in pixels
    /// * `viewport_width`, `viewport_height` - Projection plane extents (must be > 0)
    /// * `focal_distance` - Camera to projection plane distance (must be > 0)
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        viewport_width: f32,
        viewport_height: f32,
        focal_distance: f32,
    ) -> Self {
        Self {
            canvas_width,
            canvas_height,
            viewport_width,
            viewport_height,
            focal_distance,
        }
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    pub fn focal_distance(&self) -> f32 {
        self.focal_distance
    }

    /// Returns the horizontal field of view in radians.
    pub fn fov_x(&self) -> f32 {
        2.0 * (self.viewport_width / (2.0 * self.focal_distance)).atan()
    }

    /// Returns the vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        2.0 * (self.viewport_height / (2.0 * self.focal_distance)).atan()
    }

    /// Pixels per viewport unit along x.
    #[inline]
    fn scale_x(&self) -> f32 {
        self.canvas_width as f32 / self.viewport_width
    }

    /// Pixels per viewport unit along y.
    #[inline]
    fn scale_y(&self) -> f32 {
        self.canvas_height as f32 / self.viewport_height
    }

    /// Rounds a canvas coordinate to a pixel within the clamp range.
    ///
    /// NaN maps to 0.
    #[inline]
    fn to_pixel(&self, value: f32) -> i32 {
        let limit = self.canvas_width.max(self.canvas_height) as f32 * EXTENT_LIMIT;
        value.round().clamp(-limit, limit) as i32
    }

    /// Maps a point on the projection plane to canvas pixels.
    pub fn viewport_to_canvas(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.to_pixel(x * self.scale_x()),
            self.to_pixel(y * self.scale_y()),
        )
    }

    /// Projects a camera-space point by dividing by its depth explicitly.
    pub fn project_vertex(&self, v: Vec3) -> Point {
        let z = nonzero_depth(v.z);
        self.viewport_to_canvas(v.x * self.focal_distance / z, v.y * self.focal_distance / z)
    }

    /// Generates the projection matrix.
    ///
    /// ```text
    /// | Cw/Vw  0      0    0 |
    /// | 0      Ch/Vh  0    0 |
    /// | 0      0      1    0 |
    /// | 0      0      1/d  0 |
    /// ```
    ///
    /// The output `w` is `z / d`, so dividing x and y by it reproduces
    /// [`Self::project_vertex`].
    pub fn matrix(&self) -> Mat4 {
        Mat4::new([
            [self.scale_x(), 0.0, 0.0, 0.0],
            [0.0, self.scale_y(), 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0 / self.focal_distance, 0.0],
        ])
    }

    /// Perspective divide of a vertex already multiplied by [`Self::matrix`].
    pub fn to_canvas(&self, v: Vec4) -> Point {
        let w = nonzero_depth(v.w);
        Point::new(self.to_pixel(v.x / w), self.to_pixel(v.y / w))
    }
}

/// Replaces a depth too close to zero with `f32::EPSILON`, keeping its sign.
#[inline]
fn nonzero_depth(depth: f32) -> f32 {
    if depth.abs() >= f32::EPSILON {
        depth
    } else if depth.is_sign_negative() {
        -f32::EPSILON
    } else {
        f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> Projection {
        Projection::new(400, 400, 1.5, 1.5, 0.8)
    }

    #[test]
    fn optical_axis_maps_to_canvas_center() {
        for d in [0.1, 0.8, 1.0, 5.0] {
            let proj = Projection::new(640, 480, 2.0, 1.5, d);
            assert_eq!(proj.project_vertex(Vec3::new(0.0, 0.0, d)), Point::ORIGIN);
            let v = proj.matrix() * Vec4::point(0.0, 0.0, d);
            assert_eq!(proj.to_canvas(v), Point::ORIGIN);
        }
    }

    #[test]
    fn matrix_sets_w_to_depth_over_focal_distance() {
        let proj = reference();
        let v = proj.matrix() * Vec4::point(1.0, 2.0, 4.0);
        assert_relative_eq!(v.w, 4.0 / 0.8, epsilon = 1e-5);
    }

    #[test]
    fn both_formulations_agree() {
        let proj = reference();
        let samples = [
            Vec3::new(0.3, -0.7, 3.0),
            Vec3::new(-1.2, 0.4, 6.5),
            Vec3::new(2.0, 2.0, 9.0),
            Vec3::new(-0.05, 0.9, 1.1),
        ];
        for v in samples {
            let explicit = proj.project_vertex(v);
            let via_matrix = proj.to_canvas(proj.matrix() * Vec4::from(v));
            assert_eq!(explicit, via_matrix, "mismatch for {v:?}");
        }
    }

    #[test]
    fn explicit_divide_matches_formula() {
        let proj = reference();
        // x = 0.3 * 0.8 / 3 * 400 / 1.5 = 21.33
        assert_eq!(proj.project_vertex(Vec3::new(0.3, -0.7, 3.0)), Point::new(21, -50));
    }

    #[test]
    fn zero_depth_is_clamped() {
        let proj = reference();
        // 4 canvas extents of a 400 px canvas.
        assert_eq!(proj.project_vertex(Vec3::new(1.0, -1.0, 0.0)), Point::new(1600, -1600));
        assert_eq!(proj.project_vertex(Vec3::new(-1.0, 1.0, -0.0)), Point::new(1600, -1600));
        assert_eq!(
            proj.to_canvas(Vec4::new(2.0, 0.0, 0.0, 0.0)),
            Point::new(1600, 0)
        );
        assert_eq!(proj.project_vertex(Vec3::new(0.0, 0.0, 0.0)), Point::ORIGIN);
    }

    #[test]
    fn near_camera_plane_stays_within_limit() {
        let proj = reference();
        for z in [1e-3, 1e-6, -1e-6, f32::MIN_POSITIVE] {
            let p = proj.project_vertex(Vec3::new(3.0, 2.0, z));
            assert!(p.x.abs() <= 1600 && p.y.abs() <= 1600, "{p:?} for z = {z}");
            let q = proj.to_canvas(proj.matrix() * Vec4::point(3.0, 2.0, z));
            assert!(q.x.abs() <= 1600 && q.y.abs() <= 1600, "{q:?} for z = {z}");
        }
    }

    #[test]
    fn behind_camera_is_mirrored_and_deterministic() {
        let proj = reference();
        let front = proj.project_vertex(Vec3::new(1.0, 0.5, 4.0));
        let behind = proj.project_vertex(Vec3::new(1.0, 0.5, -4.0));
        assert_eq!(behind, Point::new(-front.x, -front.y));
        assert_eq!(behind, proj.project_vertex(Vec3::new(1.0, 0.5, -4.0)));
    }

    #[test]
    fn halving_viewport_doubles_zoom() {
        let wide = Projection::new(400, 400, 2.0, 2.0, 1.0);
        let narrow = Projection::new(400, 400, 1.0, 1.0, 1.0);
        let v = Vec3::new(0.25, 0.25, 1.0);
        let a = wide.project_vertex(v);
        let b = narrow.project_vertex(v);
        assert_eq!(b, Point::new(a.x * 2, a.y * 2));
        assert!(narrow.fov_x() < wide.fov_x());
    }

    #[test]
    fn square_viewport_has_equal_fov() {
        let proj = reference();
        assert_relative_eq!(proj.fov_x(), proj.fov_y(), epsilon = 1e-6);
    }
}
