//! Benchmarks for the per-frame hot paths: picking, trajectory extraction
//! and clock ticks.

#![allow(missing_docs, unused_results)]

use std::hint::black_box;

use cloudscope::animation::PlaybackClock;
use cloudscope::frame::Frame;
use cloudscope::picking::{find_closest_index, PICK_THRESHOLD};
use cloudscope::util::trajectory::TrajectoryExtractor;
use criterion::{criterion_group, criterion_main, Criterion};
use glam::DVec3;
use web_time::{Duration, Instant};

fn cloud(points: usize, offset: f64) -> Vec<DVec3> {
    (0..points)
        .map(|i| {
            let t = i as f64 * 0.1;
            DVec3::new(t.sin(), t.cos(), t * 0.01 + offset)
        })
        .collect()
}

fn frames(count: usize, points: usize) -> Vec<Frame> {
    (0..count)
        .map(|f| {
            let all_points = cloud(points, f as f64 * 0.001);
            Frame {
                anomaly_points: all_points.iter().step_by(50).copied().collect(),
                all_points,
                ..Frame::default()
            }
        })
        .collect()
}

fn pick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_closest_index");

    for count in [100, 1_000, 10_000] {
        let points = cloud(count, 0.0);
        let target = points[count - 1];
        group.bench_function(format!("{count}_points"), |b| {
            b.iter(|| {
                black_box(find_closest_index(
                    black_box(target),
                    &points,
                    PICK_THRESHOLD,
                ))
            })
        });
    }
    group.finish();
}

fn trajectory_benchmark(c: &mut Criterion) {
    let frames = frames(100, 1_000);
    let extractor = TrajectoryExtractor::default();
    c.bench_function("extract_100_frames", |b| {
        b.iter(|| black_box(extractor.extract(black_box(500), &frames)))
    });
}

fn clock_benchmark(c: &mut Criterion) {
    let start = Instant::now();
    let mut clock =
        PlaybackClock::new(100, Duration::from_millis(16), 1.0, start).unwrap();
    clock.play();
    let mut now = start;
    c.bench_function("clock_tick", |b| {
        b.iter(|| {
            now += Duration::from_millis(17);
            black_box(clock.tick(now))
        })
    });
}

criterion_group!(benches, pick_benchmark, trajectory_benchmark, clock_benchmark);
criterion_main!(benches);
