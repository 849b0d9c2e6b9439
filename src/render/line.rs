//! Solid line drawing by interpolation along the dominant axis.

use super::canvas::PixelSink;
use super::interpolate::interpolate;
use crate::colors::Color;
use crate::math::point::Point;

/// Draws the segment `p0`–`p1` with a solid color.
///
/// Shallow lines (`|dx| >= |dy|`, ties included) sweep x and interpolate y;
/// steep lines sweep y and interpolate x. One pixel is painted per step of
/// the sweep axis, so neither kind leaves gaps. Endpoints are swapped as
/// needed so the sweep always runs upward. Identical endpoints paint a
/// single pixel.
pub fn draw_line(sink: &mut impl PixelSink, p0: Point, p1: Point, color: Color) {
    let (mut p0, mut p1) = (p0, p1);
    let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
    let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();

    if dx >= dy {
        if p0.x > p1.x {
            std::mem::swap(&mut p0, &mut p1);
        }
        let ys = interpolate(p0.x, p0.y as f32, p1.x, p1.y as f32);
        for (x, y) in (p0.x..=p1.x).zip(ys) {
            sink.put_pixel(x, y.round() as i32, color);
        }
    } else {
        if p0.y > p1.y {
            std::mem::swap(&mut p0, &mut p1);
        }
        let xs = interpolate(p0.y, p0.x as f32, p1.y, p1.x as f32);
        for (y, x) in (p0.y..=p1.y).zip(xs) {
            sink.put_pixel(x.round() as i32, y, color);
        }
    }
}
