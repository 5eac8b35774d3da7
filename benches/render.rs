use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hoodie::clock::HandRotations;
use hoodie::frame::render_frame;
use hoodie::{FaceAssets, FaceConfig, WatchFaceRenderer, WatchMode, WatchShape};
use hoodie_render::{Bitmap, RecordingCanvas, TimeArc};
use hoodie_types::{Color, LinearGradientConfig};

fn renderer(size: i32) -> WatchFaceRenderer {
    let assets = FaceAssets {
        texture: Bitmap::linear_gradient(256, 256, &LinearGradientConfig::gold()).unwrap(),
        emblem: Bitmap::disc(256, Color::WHITE).unwrap(),
    };
    let mut renderer = WatchFaceRenderer::new(FaceConfig::default(), assets);
    renderer.resize(size, size, 0, WatchShape::Round).unwrap();
    renderer
}

fn bench_time_arc(c: &mut Criterion) {
    c.bench_function("time_arc", |b| {
        b.iter(|| TimeArc::from_rotations(black_box(317.5), black_box(42.0)))
    });
}

fn bench_recorded_frame(c: &mut Criterion) {
    let renderer = renderer(320);
    c.bench_function("recorded_frame", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            renderer
                .render(&mut canvas, black_box(317.5), black_box(42.0))
                .unwrap();
            canvas
        })
    });
}

fn bench_cairo_frame(c: &mut Criterion) {
    let mut renderer = renderer(320);
    let rotations = HandRotations {
        hours: 317.5,
        minutes: 42.0,
    };

    c.bench_function("cairo_frame_interactive", |b| {
        b.iter(|| render_frame(&renderer, 320, 320, black_box(rotations)).unwrap())
    });

    renderer.set_mode(WatchMode::Ambient);
    c.bench_function("cairo_frame_ambient", |b| {
        b.iter(|| render_frame(&renderer, 320, 320, black_box(rotations)).unwrap())
    });
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("resize_rebuild", |b| {
        b.iter(|| renderer(black_box(320)))
    });
}

criterion_group!(
    benches,
    bench_time_arc,
    bench_recorded_frame,
    bench_cairo_frame,
    bench_resize
);
criterion_main!(benches);
