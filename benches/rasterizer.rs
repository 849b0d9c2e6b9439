use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scanline3d::camera::Camera;
use scanline3d::colors;
use scanline3d::math::point::Point;
use scanline3d::math::vec3::Vec3;
use scanline3d::prelude::{ScanlineRasterizer, ScreenTriangle};
use scanline3d::{Canvas, Instance, Model, RenderConfig, RenderMode, Scene, SceneRenderer};

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;

fn create_canvas() -> Canvas {
    Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, colors::BLACK)
}

fn small_triangle() -> ScreenTriangle {
    ScreenTriangle::new(
        [Point::new(-10, -10), Point::new(10, -10), Point::new(0, 10)],
        colors::RED,
    )
    .with_intensities([0.2, 0.6, 1.0])
}

fn medium_triangle() -> ScreenTriangle {
    ScreenTriangle::new(
        [Point::new(-100, -100), Point::new(100, -100), Point::new(0, 100)],
        colors::RED,
    )
    .with_intensities([0.2, 0.6, 1.0])
}

fn large_triangle() -> ScreenTriangle {
    ScreenTriangle::new(
        [Point::new(-350, -250), Point::new(350, -200), Point::new(0, 250)],
        colors::RED,
    )
    .with_intensities([0.2, 0.6, 1.0])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let rasterizer = ScanlineRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("wireframe", name), &triangle, |b, tri| {
            let mut canvas = create_canvas();
            b.iter(|| rasterizer.draw_wireframe(&mut canvas, black_box(tri)));
        });

        group.bench_with_input(BenchmarkId::new("flat", name), &triangle, |b, tri| {
            let mut canvas = create_canvas();
            b.iter(|| rasterizer.fill_flat(&mut canvas, black_box(tri)));
        });

        group.bench_with_input(BenchmarkId::new("shaded", name), &triangle, |b, tri| {
            let mut canvas = create_canvas();
            b.iter(|| rasterizer.fill_shaded(&mut canvas, black_box(tri)));
        });
    }

    group.finish();
}

fn benchmark_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    let config = RenderConfig {
        canvas_width: CANVAS_WIDTH,
        canvas_height: CANVAS_HEIGHT,
        ..RenderConfig::default()
    };
    let cube = Model::cube();
    let mut scene = Scene::new(Camera::default());
    scene
        .add_instance(Instance::new(&cube).with_pose(Vec3::new(-1.5, 0.0, 7.0), 0.5, 0.5, 1.0))
        .add_instance(Instance::new(&cube).with_pose(Vec3::new(1.25, 2.5, 7.5), 0.7, 0.2, 1.0))
        .add_instance(Instance::new(&cube).with_pose(Vec3::new(1.25, -4.5, 7.5), 3.14, 1.4, 1.0));

    for mode in [RenderMode::Wireframe, RenderMode::Filled, RenderMode::Shaded] {
        let renderer = SceneRenderer::new(config.projection(), mode);
        group.bench_function(BenchmarkId::new("three_cubes", mode), |b| {
            let mut canvas = create_canvas();
            b.iter(|| {
                canvas.clear(colors::BLACK);
                renderer.render(black_box(&scene), &mut canvas);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_scene);
criterion_main!(benches);
