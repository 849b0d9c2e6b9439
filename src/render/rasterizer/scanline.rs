//! Scanline-based triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y so that `p0.y <= p1.y <= p2.y`
//! 2. **Interpolate the edges**: the long edge `p0 -> p2` spans every row of
//!    the triangle; the two short edges `p0 -> p1` and `p1 -> p2` together
//!    span the same rows
//! 3. **Classify** which side is left by comparing the two at the middle row
//! 4. **Fill** each row from the left boundary up to the right boundary
//!
//! ```text
//!             p2
//!             /\
//!            /  \           x02  = long edge, one sample per row
//!   long    /    \  short   x012 = x01 (minus its last sample) ++ x12
//!   edge   /     / p1
//!         /    /
//!        /   /
//!       /  /
//!      / /
//!     p0
//! ```
//!
//! The two boundaries only meet at `p0` and `p2`, so the middle sample
//! decides the sides for every row.
//!
//! # Coverage rules
//!
//! The last row (`p2.y`) and the right boundary column are never painted.
//! Two triangles sharing an edge therefore never paint the same pixel
//! twice, and a triangle with zero height paints nothing.
//!
//! # Shading
//!
//! For gradient fills the per-vertex intensity is interpolated along the
//! same edges in lockstep with X, then across each row between the left and
//! right boundary intensities. Each pixel receives the base color scaled by
//! its intensity.

use super::ScreenTriangle;
use crate::colors;
use crate::math::point::Point;
use crate::render::canvas::PixelSink;
use crate::render::interpolate::interpolate;
use crate::render::line::draw_line;

/// Scanline triangle rasterizer.
///
/// Input vertices may arrive in any order; the rasterizer canonicalizes them
/// itself. Intensities travel with their vertices through the sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by Y coordinate (ascending).
    ///
    /// Three fixed compare-and-swap steps: (p0, p1), (p0, p2), (p1, p2).
    /// Ties are never swapped, so equal-Y vertices keep their input order.
    fn sort_vertices(p0: &mut Point, p1: &mut Point, p2: &mut Point) {
        if p1.y < p0.y {
            std::mem::swap(p0, p1);
        }
        if p2.y < p0.y {
            std::mem::swap(p0, p2);
        }
        if p2.y < p1.y {
            std::mem::swap(p1, p2);
        }
    }

    /// Same as [`Self::sort_vertices`], keeping intensities attached.
    fn sort_vertices_with_intensities(
        p0: &mut Point,
        p1: &mut Point,
        p2: &mut Point,
        h0: &mut f32,
        h1: &mut f32,
        h2: &mut f32,
    ) {
        if p1.y < p0.y {
            std::mem::swap(p0, p1);
            std::mem::swap(h0, h1);
        }
        if p2.y < p0.y {
            std::mem::swap(p0, p2);
            std::mem::swap(h0, h2);
        }
        if p2.y < p1.y {
            std::mem::swap(p1, p2);
            std::mem::swap(h1, h2);
        }
    }

    /// Interpolates an attribute along both sides of a Y-sorted triangle.
    ///
    /// Returns `(long, short)`: the samples along `p0 -> p2` and the
    /// concatenation of `p0 -> p1` and `p1 -> p2`, with the sample at `p1`
    /// counted once. Both hold `y2 - y0 + 1` values.
    fn edge_samples(
        y0: i32,
        a0: f32,
        y1: i32,
        a1: f32,
        y2: i32,
        a2: f32,
    ) -> (Vec<f32>, Vec<f32>) {
        let mut short = interpolate(y0, a0, y1, a1);
        short.pop();
        short.extend(interpolate(y1, a1, y2, a2));
        let long = interpolate(y0, a0, y2, a2);
        debug_assert_eq!(long.len(), short.len());
        (long, short)
    }

    /// True when the long edge lies left of the short edges.
    fn long_edge_is_left(x_long: &[f32], x_short: &[f32]) -> bool {
        let mid = x_long.len() / 2;
        x_long[mid] < x_short[mid]
    }

    /// Draws the three edges of the triangle with its flat color.
    pub fn draw_wireframe(&self, sink: &mut impl PixelSink, triangle: &ScreenTriangle) {
        let [p0, p1, p2] = triangle.points;
        draw_line(sink, p0, p1, triangle.color);
        draw_line(sink, p1, p2, triangle.color);
        draw_line(sink, p0, p2, triangle.color);
    }

    /// Fills the triangle with its flat color.
    pub fn fill_flat(&self, sink: &mut impl PixelSink, triangle: &ScreenTriangle) {
        let [mut p0, mut p1, mut p2] = triangle.points;
        Self::sort_vertices(&mut p0, &mut p1, &mut p2);

        let (x02, x012) = Self::edge_samples(
            p0.y, p0.x as f32, p1.y, p1.x as f32, p2.y, p2.x as f32,
        );

        let (x_left, x_right) = if Self::long_edge_is_left(&x02, &x012) {
            (x02, x012)
        } else {
            (x012, x02)
        };

        for y in p0.y..p2.y {
            let row = (y - p0.y) as usize;
            let xl = x_left[row].round() as i32;
            let xr = x_right[row].round() as i32;
            for x in xl..xr {
                sink.put_pixel(x, y, triangle.color);
            }
        }
    }

    /// Fills the triangle, scaling its color by interpolated intensities.
    ///
    /// A triangle without intensities is flat filled instead.
    pub fn fill_shaded(&self, sink: &mut impl PixelSink, triangle: &ScreenTriangle) {
        let Some([mut h0, mut h1, mut h2]) = triangle.intensities else {
            self.fill_flat(sink, triangle);
            return;
        };

        let [mut p0, mut p1, mut p2] = triangle.points;
        Self::sort_vertices_with_intensities(
            &mut p0, &mut p1, &mut p2, &mut h0, &mut h1, &mut h2,
        );

        let (x02, x012) = Self::edge_samples(
            p0.y, p0.x as f32, p1.y, p1.x as f32, p2.y, p2.x as f32,
        );
        let (h02, h012) = Self::edge_samples(p0.y, h0, p1.y, h1, p2.y, h2);

        let (x_left, h_left, x_right, h_right) = if Self::long_edge_is_left(&x02, &x012) {
            (x02, h02, x012, h012)
        } else {
            (x012, h012, x02, h02)
        };

        for y in p0.y..p2.y {
            let row = (y - p0.y) as usize;
            let xl = x_left[row].round() as i32;
            let xr = x_right[row].round() as i32;
            if xl >= xr {
                continue;
            }

            let h_segment = interpolate(xl, h_left[row], xr, h_right[row]);
            for (x, h) in (xl..xr).zip(h_segment) {
                sink.put_pixel(x, y, colors::scale(triangle.color, h));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{Color, RED, WHITE};
    use crate::render::canvas::PixelRecorder;
    use std::collections::{BTreeMap, HashSet};

    fn tri(points: [(i32, i32); 3], color: Color) -> ScreenTriangle {
        ScreenTriangle::new(points.map(Point::from), color)
    }

    #[test]
    fn sort_orders_every_permutation() {
        let pts = [Point::new(5, 5), Point::new(6, 6), Point::new(1, 1)];
        let perms = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for perm in perms {
            let (mut a, mut b, mut c) = (pts[perm[0]], pts[perm[1]], pts[perm[2]]);
            ScanlineRasterizer::sort_vertices(&mut a, &mut b, &mut c);
            assert!(a.y <= b.y && b.y <= c.y, "unsorted for {perm:?}");
        }
    }

    #[test]
    fn sort_keeps_intensities_attached() {
        let (mut a, mut b, mut c) = (Point::new(0, 9), Point::new(0, 3), Point::new(0, 6));
        let (mut ha, mut hb, mut hc) = (0.9, 0.3, 0.6);
        ScanlineRasterizer::sort_vertices_with_intensities(
            &mut a, &mut b, &mut c, &mut ha, &mut hb, &mut hc,
        );
        assert_eq!((a.y, b.y, c.y), (3, 6, 9));
        assert_eq!((ha, hb, hc), (0.3, 0.6, 0.9));
    }

    #[test]
    fn wireframe_draws_three_edges() {
        let mut recorder = PixelRecorder::new();
        ScanlineRasterizer::new().draw_wireframe(&mut recorder, &tri([(0, 0), (10, 0), (5, 8)], RED));
        // 11 pixels along the base, 9 along each steep side.
        assert_eq!(recorder.len(), 29);
        let points: HashSet<Point> = recorder.points().collect();
        for v in [(0, 0), (10, 0), (5, 8)] {
            assert!(points.contains(&Point::from(v)));
        }
    }

    #[test]
    fn flat_fill_small_triangle() {
        let mut recorder = PixelRecorder::new();
        ScanlineRasterizer::new().fill_flat(&mut recorder, &tri([(0, 0), (4, 0), (2, 4)], RED));

        let mut rows: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
        for p in recorder.points() {
            rows.entry(p.y).or_default().push(p.x);
        }
        assert_eq!(rows.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(rows[&0], vec![0, 1, 2, 3]);
        assert_eq!(rows[&1], vec![1, 2, 3]);
        assert_eq!(rows[&2], vec![1, 2]);
        assert_eq!(rows[&3], vec![2]);
        assert!(recorder.pixels().iter().all(|&(_, c)| c == RED));
    }

    #[test]
    fn zero_height_triangle_paints_nothing() {
        let mut recorder = PixelRecorder::new();
        let rasterizer = ScanlineRasterizer::new();
        let flat = tri([(0, 5), (10, 5), (-3, 5)], RED);
        rasterizer.fill_flat(&mut recorder, &flat);
        rasterizer.fill_shaded(&mut recorder, &flat.with_intensities([0.0, 0.5, 1.0]));
        assert!(recorder.is_empty());
    }

    #[test]
    fn single_point_triangle_paints_nothing() {
        let mut recorder = PixelRecorder::new();
        ScanlineRasterizer::new().fill_flat(&mut recorder, &tri([(2, 2), (2, 2), (2, 2)], RED));
        assert!(recorder.is_empty());
    }

    #[test]
    fn triangles_sharing_an_edge_do_not_overlap() {
        let mut recorder = PixelRecorder::new();
        let rasterizer = ScanlineRasterizer::new();
        rasterizer.fill_flat(&mut recorder, &tri([(0, 0), (10, 0), (0, 10)], RED));
        rasterizer.fill_flat(&mut recorder, &tri([(10, 0), (10, 10), (0, 10)], RED));

        let unique: HashSet<Point> = recorder.points().collect();
        assert_eq!(unique.len(), recorder.len());
        // Together they tile the 10x10 square exactly.
        assert_eq!(unique.len(), 100);
        assert!(unique.iter().all(|p| (0..10).contains(&p.x) && (0..10).contains(&p.y)));
    }

    #[test]
    fn vertex_order_does_not_change_flat_coverage() {
        let rasterizer = ScanlineRasterizer::new();
        let mut a = PixelRecorder::new();
        let mut b = PixelRecorder::new();
        rasterizer.fill_flat(&mut a, &tri([(-20, -15), (25, 3), (4, 30)], RED));
        rasterizer.fill_flat(&mut b, &tri([(4, 30), (-20, -15), (25, 3)], RED));
        let a: HashSet<Point> = a.points().collect();
        let b: HashSet<Point> = b.points().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn uniform_half_intensity_halves_every_pixel() {
        let mut recorder = PixelRecorder::new();
        let triangle = tri([(-10, -10), (10, -10), (0, 10)], RED).with_intensities([0.5, 0.5, 0.5]);
        ScanlineRasterizer::new().fill_shaded(&mut recorder, &triangle);
        assert!(!recorder.is_empty());
        assert!(recorder.pixels().iter().all(|&(_, c)| c == Color::new(127, 0, 0)));
    }

    #[test]
    fn gradient_runs_from_black_to_white() {
        let mut recorder = PixelRecorder::new();
        let triangle = tri([(0, -40), (-40, 40), (40, 40)], WHITE).with_intensities([0.0, 1.0, 1.0]);
        ScanlineRasterizer::new().fill_shaded(&mut recorder, &triangle);
        assert!(!recorder.is_empty());

        let mut rows: BTreeMap<i32, Vec<(i32, Color)>> = BTreeMap::new();
        for &(p, c) in recorder.pixels() {
            assert!(c.r == c.g && c.g == c.b, "white scaled stays gray");
            rows.entry(p.y).or_default().push((p.x, c));
        }

        let (&bottom, bottom_row) = rows.iter().next().unwrap();
        let (&top, top_row) = rows.iter().next_back().unwrap();
        assert_eq!(bottom, -39);
        assert_eq!(top, 39);
        assert!(bottom_row.iter().all(|(_, c)| c.r < 10));
        assert!(top_row.iter().all(|(_, c)| c.r > 245));

        for row in rows.values_mut() {
            row.sort_by_key(|&(x, _)| x);
            let reds: Vec<u8> = row.iter().map(|(_, c)| c.r).collect();
            let rising = reds.windows(2).all(|w| w[0] <= w[1]);
            let falling = reds.windows(2).all(|w| w[0] >= w[1]);
            assert!(rising || falling, "non-monotonic span {reds:?}");
        }
    }

    #[test]
    fn gradient_varies_across_a_row() {
        let mut recorder = PixelRecorder::new();
        let triangle = tri([(-30, 0), (30, 0), (0, 30)], WHITE).with_intensities([0.0, 1.0, 0.5]);
        ScanlineRasterizer::new().fill_shaded(&mut recorder, &triangle);

        let mut bottom: Vec<(i32, u8)> = recorder
            .pixels()
            .iter()
            .filter(|(p, _)| p.y == 0)
            .map(|&(p, c)| (p.x, c.r))
            .collect();
        bottom.sort();
        assert_eq!(bottom.first().map(|&(x, _)| x), Some(-30));
        assert!(bottom.first().unwrap().1 < 10);
        assert!(bottom.last().unwrap().1 > 240);
        assert!(bottom.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn missing_intensities_fall_back_to_flat_fill() {
        let rasterizer = ScanlineRasterizer::new();
        let triangle = tri([(-12, -9), (15, 2), (0, 20)], RED);
        let mut flat = PixelRecorder::new();
        let mut shaded = PixelRecorder::new();
        rasterizer.fill_flat(&mut flat, &triangle);
        rasterizer.fill_shaded(&mut shaded, &triangle);
        assert_eq!(flat.pixels(), shaded.pixels());
    }

    #[test]
    fn full_intensity_matches_flat_coverage() {
        let rasterizer = ScanlineRasterizer::new();
        let triangle = tri([(-12, -9), (15, 2), (0, 20)], RED);
        let mut flat = PixelRecorder::new();
        let mut shaded = PixelRecorder::new();
        rasterizer.fill_flat(&mut flat, &triangle);
        rasterizer.fill_shaded(&mut shaded, &triangle.with_intensities([1.0, 1.0, 1.0]));
        assert_eq!(flat.pixels(), shaded.pixels());
    }
}
