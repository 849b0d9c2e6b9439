//! SDL2 presentation shell: shows a [`Canvas`] in a window.
//!
//! Only the binary uses this module. Rendering never depends on it.

use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::render::{Canvas, RenderMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    SetMode(RenderMode),
}

/// Keeps presented frames at least `delay` apart.
pub struct FrameLimiter {
    delay: Duration,
    previous_frame: Instant,
}

impl FrameLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            previous_frame: Instant::now(),
        }
    }

    /// Sleeps out the remainder of the frame and returns the elapsed time
    /// since the previous call.
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.previous_frame.elapsed();
        if elapsed < self.delay {
            std::thread::sleep(self.delay - elapsed);
        }
        let delta = self.previous_frame.elapsed();
        self.previous_frame = Instant::now();
        delta
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before `texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    #[allow(dead_code)] // only owned, borrowed by `texture`
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    /// Opens a fixed-size window matching the canvas resolution.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: the creator is boxed, never moved out of `Window`, and
        // outlives `texture` by field drop order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            width,
            height,
        })
    }

    /// Drains pending events; quit wins over mode changes.
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    let mode = match key.name().as_str() {
                        "1" => Some(RenderMode::Wireframe),
                        "2" => Some(RenderMode::Filled),
                        "3" => Some(RenderMode::Shaded),
                        _ => None,
                    };
                    if let Some(mode) = mode {
                        result = WindowEvent::SetMode(mode);
                    }
                }
                _ => {}
            }
        }
        result
    }

    /// Uploads the canvas into the streaming texture and shows it.
    ///
    /// The canvas must match the window size.
    pub fn present(&mut self, frame: &Canvas) -> Result<(), String> {
        check_frame_size(frame, self.width, self.height)?;
        self.texture
            .update(None, frame.as_bytes(), (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }
}

/// The streaming texture is created once at window size; frames must match it.
fn check_frame_size(frame: &Canvas, width: u32, height: u32) -> Result<(), String> {
    if (frame.width(), frame.height()) != (width, height) {
        return Err(format!(
            "canvas is {}x{}, window is {}x{}",
            frame.width(),
            frame.height(),
            width,
            height
        ));
    }
    Ok(())
}
