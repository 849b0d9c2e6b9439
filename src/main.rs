use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use scanline3d::camera::Camera;
use scanline3d::colors;
use scanline3d::math::vec3::Vec3;
use scanline3d::window::{FrameLimiter, Window, WindowEvent};
use scanline3d::{Canvas, Instance, Model, RenderConfig, Scene, SceneRenderer};

/// Software rasterizer demo: three spinning models in an SDL2 window.
#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about)]
struct Args {
    /// JSON render config; defaults are used for missing keys
    config: Option<PathBuf>,

    /// Render one frame to this PNG file and exit
    #[arg(long, value_name = "OUT.png")]
    snapshot: Option<PathBuf>,

    /// Load this OBJ model instead of the built-in cube
    #[arg(long, value_name = "PATH")]
    obj: Option<PathBuf>,
}

/// Three spinning instances of one model in front of the camera.
fn demo_scene(model: &Model) -> Scene<'_> {
    let mut scene = Scene::new(Camera::default());
    scene
        .add_instance(
            Instance::new(model)
                .with_pose(Vec3::new(-1.5, 0.0, 7.0), 0.5, 0.5, 1.0)
                .with_spin(0.03, 0.01),
        )
        .add_instance(
            Instance::new(model)
                .with_pose(Vec3::new(1.25, 2.5, 7.5), 0.7, 0.2, 1.0)
                .with_spin(0.01, -0.02),
        )
        .add_instance(
            Instance::new(model)
                .with_pose(Vec3::new(1.25, -4.5, 7.5), 3.14, 1.4, 1.0)
                .with_spin(-0.02, -0.02),
        );
    scene
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => {
            info!("no config file given, using defaults");
            RenderConfig::default()
        }
    };

    let model = match &args.obj {
        Some(path) => Model::from_obj("obj", path, colors::GREEN)
            .with_context(|| format!("loading model {}", path.display()))?,
        None => Model::cube(),
    };

    let mut scene = demo_scene(&model);
    let mut renderer = SceneRenderer::new(config.projection(), config.mode);
    let mut canvas = Canvas::new(config.canvas_width, config.canvas_height, config.background);

    let projection = renderer.projection();
    info!(
        "canvas {}x{}, fov {:.1}x{:.1} deg, mode {}",
        projection.canvas_width(),
        projection.canvas_height(),
        projection.fov_x().to_degrees(),
        projection.fov_y().to_degrees(),
        renderer.mode()
    );

    if let Some(out) = &args.snapshot {
        renderer.render(&scene, &mut canvas);
        canvas
            .save_png(out)
            .with_context(|| format!("writing snapshot {}", out.display()))?;
        info!("snapshot written to {}", out.display());
        return Ok(());
    }

    let mut window = Window::new("scanline3d", config.canvas_width, config.canvas_height)
        .map_err(anyhow::Error::msg)
        .context("opening window")?;
    let mut limiter = FrameLimiter::new(config.frame_delay_ms);

    info!("press 1/2/3 to switch wireframe/filled/shaded, Esc to quit");
    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::SetMode(mode) => {
                info!("render mode: {mode}");
                renderer.set_mode(mode);
            }
            WindowEvent::None => {}
        }

        canvas.clear(config.background);
        renderer.render(&scene, &mut canvas);
        if let Err(e) = window.present(&canvas) {
            warn!("failed to present frame: {e}");
        }

        limiter.wait();
        scene.advance();
    }

    info!("exiting");
    Ok(())
}
