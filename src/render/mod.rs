//! Rasterization: pixel sinks, interpolation, lines, triangles and the scene
//! renderer that drives them.

pub mod canvas;
pub mod interpolate;
pub mod line;
pub mod rasterizer;
pub mod renderer;

pub use canvas::{Canvas, PixelRecorder, PixelSink};
pub use interpolate::interpolate;
pub use line::draw_line;
pub use rasterizer::{ScanlineRasterizer, ScreenTriangle};
pub use renderer::{RenderMode, SceneRenderer};
