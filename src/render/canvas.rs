//! Pixel sinks: the only place rasterized pixels leave the core.
//!
//! Drawing routines address pixels in canvas space (origin at the center,
//! y-up). A [`PixelSink`] decides what a write means; [`Canvas`] translates
//! to a top-left, row-major ARGB8888 buffer suitable for presentation.

use std::path::Path;

use crate::colors::Color;
use crate::math::point::Point;

/// Capability to write one pixel at a canvas coordinate.
///
/// Writes are fire-and-forget: sinks silently drop anything they cannot
/// represent (for example coordinates outside the surface).
pub trait PixelSink {
    fn put_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// An owned color buffer addressed in canvas coordinates.
pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Creates a canvas cleared to `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![background.to_argb(); size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    /// Maps a canvas coordinate to a buffer index, or `None` when off-surface.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let sx = (self.width / 2) as i32 + x;
        let sy = (self.height / 2) as i32 - y;
        if sx >= 0 && sx < self.width as i32 && sy >= 0 && sy < self.height as i32 {
            Some((sy as u32 * self.width + sx as u32) as usize)
        } else {
            None
        }
    }

    /// Get the color at canvas coordinate (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y)
            .map(|idx| Color::from_argb(self.color_buffer[idx]))
    }

    /// Raw ARGB8888 bytes, row-major from the top-left corner.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and any byte pattern is a valid u8; the
        // slice covers exactly the buffer's memory and borrows `self`.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Writes the canvas to an image file (format chosen by extension).
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let img = image::RgbImage::from_fn(self.width, self.height, |sx, sy| {
            let c = Color::from_argb(self.color_buffer[(sy * self.width + sx) as usize]);
            image::Rgb([c.r, c.g, c.b])
        });
        img.save(path)
    }
}

impl PixelSink for Canvas {
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color.to_argb();
        }
    }
}

/// A sink that records every write in order, for inspection.
#[derive(Debug, Default, Clone)]
pub struct PixelRecorder {
    pixels: Vec<(Point, Color)>,
}

impl PixelRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes, in draw order, including overwrites of the same pixel.
    pub fn pixels(&self) -> &[(Point, Color)] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterates over the written positions only.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.pixels.iter().map(|&(p, _)| p)
    }
}

impl PixelSink for PixelRecorder {
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.pixels.push((Point::new(x, y), color));
    }
}
