//! RGB colors and the intensity shading operator.

use serde::{Deserialize, Serialize};

/// An opaque RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const PURPLE: Color = Color::new(255, 0, 255);
pub const CYAN: Color = Color::new(0, 255, 255);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from wide channel values, clamping each to `[0, 255]`.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Scales every channel by `intensity`.
    ///
    /// Each product is truncated toward zero and clamped back into
    /// `[0, 255]`, so negative intensities give black and intensities above
    /// one saturate.
    pub fn scaled(self, intensity: f32) -> Self {
        let scale = |c: u8| (c as f32 * intensity) as i32;
        Self::clamped(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Packs into ARGB8888 with full alpha.
    #[inline]
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpacks an ARGB8888 value, ignoring alpha.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        Self::new((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
    }
}

/// Free-function form of [`Color::scaled`].
pub fn scale(color: Color, intensity: f32) -> Color {
    color.scaled(intensity)
}

#[inline]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
