//! Integer pixel coordinates in canvas space.

/// A pixel position on the canvas.
///
/// The origin is the canvas center and `y` grows upward. Only the projection
/// produces these; lines, triangles and pixel sinks consume them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
