//! Render configuration.
//!
//! Every option has a default, so a config file only needs the keys it
//! changes. Files are JSON:
//!
//! ```json
//! { "canvas_width": 640, "focal_distance": 1.0, "mode": "shaded" }
//! ```

use std::fmt;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::colors::{self, Color};
use crate::projection::Projection;
use crate::render::RenderMode;

/// Output resolution, field of view and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Width of the projection plane slice mapped onto the canvas.
    pub viewport_width: f32,
    /// Height of the projection plane slice mapped onto the canvas.
    pub viewport_height: f32,
    /// Camera to projection plane distance ("d").
    pub focal_distance: f32,
    /// How triangles are drawn.
    pub mode: RenderMode,
    /// Color the canvas is cleared to before each frame.
    pub background: Color,
    /// Pause between presented frames, in milliseconds.
    pub frame_delay_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            viewport_width: 1.5,
            viewport_height: 1.5,
            focal_distance: 0.8,
            mode: RenderMode::default(),
            background: colors::WHITE,
            frame_delay_ms: 50,
        }
    }
}

/// Errors from reading or validating a [`RenderConfig`].
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A value parsed but is outside its valid range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl RenderConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!("config loaded from {}", path.display());
        Ok(config)
    }

    /// Checks that every dimension is positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        // Written as negated comparisons so NaN is rejected too.
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if !(self.focal_distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "focal distance must be positive, got {}",
                self.focal_distance
            )));
        }
        Ok(())
    }

    pub fn projection(&self) -> Projection {
        Projection::new(
            self.canvas_width,
            self.canvas_height,
            self.viewport_width,
            self.viewport_height,
            self.focal_distance,
        )
    }
}
