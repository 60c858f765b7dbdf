use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mapnav_animation::{bezier, ease, InertiaTracker, LinearDecay, SmoothOutEasing};
use mapnav_core::Clock;
use mapnav_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

const SAMPLE_COUNTS: &[usize] = &[16, 256, 2_048];

#[derive(Default)]
struct BenchClock {
    now: Cell<f64>,
}

impl Clock for BenchClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

fn bench_tracker_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("inertia_update");
    for &count in SAMPLE_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let clock = Rc::new(BenchClock::default());
                let mut tracker = InertiaTracker::new(clock.clone(), LinearDecay::PAN);
                for i in 0..count {
                    clock.now.set(i as f64 * 4.0);
                    tracker.update(Point::new(i as f64, (i / 2) as f64));
                }
                black_box(tracker.calculate())
            });
        });
    }
    group.finish();
}

fn bench_bezier_solve(c: &mut Criterion) {
    let curves = [ease(), bezier(0.0, 0.0, 0.25, 1.0), bezier(0.0, 0.0, 0.3, 1.0)];
    c.bench_function("bezier_transform", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for curve in &curves {
                for step in 0..100 {
                    sum += curve.transform(black_box(step as f64 / 100.0));
                }
            }
            sum
        });
    });
}

fn bench_smooth_out(c: &mut Criterion) {
    c.bench_function("smooth_out_compute", |b| {
        b.iter(|| {
            let mut factory = SmoothOutEasing::new();
            for tick in 0..32 {
                black_box(factory.compute(tick as f64 * 40.0, 200.0));
            }
        });
    });
}

criterion_group!(inertia, bench_tracker_update, bench_bezier_solve, bench_smooth_out);
criterion_main!(inertia);
