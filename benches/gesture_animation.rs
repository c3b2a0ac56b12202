// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame overlay work.
//!
//! Measures the performance of:
//! - Swipe interpretation over a full drag
//! - Sampling animated values (spring and eased curves)
//! - One animation frame of the overlay state machine

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};
use yohaku::domain::overlay::animation::{AnimatedValue, CubicBezier, Motion};
use yohaku::domain::overlay::gesture::SwipeGesture;
use yohaku::domain::overlay::{OverlayState, FADE_IN_SPRING};

const HEIGHT: f32 = 800.0;

/// Benchmark a complete pull-down gesture sampled at 60 Hz.
fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");

    group.bench_function("pull_down_drag", |b| {
        b.iter(|| {
            let mut gesture = SwipeGesture::new();
            gesture.begin(100.0);
            for step in 1..=30 {
                black_box(gesture.moved(100.0 + step as f32 * 10.0, false));
            }
            black_box(gesture.released(400.0, false));
        });
    });

    group.finish();
}

/// Benchmark sampling animated values mid-flight.
fn bench_animated_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");
    let start = Instant::now();
    let mid = start + Duration::from_millis(120);

    let mut spring = AnimatedValue::new(0.0);
    spring.go(1.0, start, FADE_IN_SPRING);
    group.bench_function("spring_value", |b| {
        b.iter(|| black_box(spring.value(black_box(mid))));
    });

    let mut eased = AnimatedValue::new(0.0);
    eased.go(
        1.0,
        start,
        Motion::timing(300, CubicBezier::new(0.25, 0.1, 0.25, 1.0)),
    );
    group.bench_function("bezier_value", |b| {
        b.iter(|| black_box(eased.value(black_box(mid))));
    });

    group.finish();
}

/// Benchmark one frame: settle layers and read every animated property.
fn bench_overlay_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay");
    let start = Instant::now();
    let mut overlay = OverlayState::new(HEIGHT);
    overlay.show_mixer(start);
    let frame = start + Duration::from_millis(16);

    group.bench_function("tick_and_sample", |b| {
        b.iter(|| {
            let mut state = overlay.clone();
            black_box(state.tick(frame));
            black_box(state.mixer_opacity(frame));
            black_box(state.mixer_offset(frame));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_swipe,
    bench_animated_value,
    bench_overlay_frame
);
criterion_main!(benches);
