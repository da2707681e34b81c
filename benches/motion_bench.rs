//! Hot paths of the camera controls: view footprint, picking rays and
//! load planning.

use std::hint::black_box;

use city_controls::camera::{visible_rect, CameraState, Ray, Viewport};
use city_controls::controls::MotionStatus;
use city_controls::load::LoadPolicy;
use city_controls::options::LoadingOptions;
use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn camera_at(z: f32, pitch_deg: f32) -> CameraState {
    let eye = Vec3::new(100.0, -50.0, z);
    let reach = 50.0;
    let pitch = pitch_deg.to_radians();
    CameraState {
        eye,
        target: eye + Vec3::new(0.0, reach * pitch.cos(), -reach * pitch.sin()),
        up: Vec3::Z,
        aspect: 16.0 / 9.0,
        ..CameraState::default()
    }
}

fn visible_rect_benchmark(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 720.0);
    let mut group = c.benchmark_group("visible_rect");
    for pitch in [90.0_f32, 45.0, 10.0] {
        let camera = camera_at(150.0, pitch);
        let _ = group.bench_function(format!("pitch_{pitch}"), |b| {
            b.iter(|| black_box(visible_rect(black_box(&camera), viewport)));
        });
    }
    group.finish();
}

fn screen_ray_benchmark(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 720.0);
    let camera = camera_at(150.0, 60.0);
    let _ = c.bench_function("screen_ray_ground_hit", |b| {
        b.iter(|| {
            Ray::from_screen(&camera, viewport, black_box(1000.0), black_box(200.0))
                .and_then(|ray| ray.intersect_ground(0.0))
        });
    });
}

fn load_plan_benchmark(c: &mut Criterion) {
    let policy = LoadPolicy::new(LoadingOptions::default());
    let viewport = Viewport::new(1280.0, 720.0);
    let camera = CameraState::at(Vec3::new(0.0, 0.0, 300.0));
    let _ = c.bench_function("stopping_region_plan", |b| {
        b.iter(|| {
            black_box(policy.for_status(
                MotionStatus::Stopping,
                black_box(&camera),
                viewport,
                None,
            ))
        });
    });
}

criterion_group!(
    benches,
    visible_rect_benchmark,
    screen_ray_benchmark,
    load_plan_benchmark
);
criterion_main!(benches);
