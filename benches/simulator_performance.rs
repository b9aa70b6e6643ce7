use chrono::Local;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use truck_monitor::telemetry::{AlertThresholds, RandomJitter};
use truck_monitor::{Dashboard, FuelHistory, Route, TelemetrySimulator, TelemetrySnapshot};

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulator");

    group.bench_function("single_snapshot", |b| {
        let mut simulator = TelemetrySimulator::new(
            Route::default(),
            AlertThresholds::default(),
            RandomJitter::from_seed(Some(42)),
        );
        b.iter(|| black_box(simulator.snapshot(black_box(63.))));
    });

    group.bench_function("full_slider_sweep", |b| {
        let mut simulator = TelemetrySimulator::new(
            Route::default(),
            AlertThresholds::default(),
            RandomJitter::from_seed(Some(42)),
        );
        b.iter(|| {
            for progress in 0..=100 {
                black_box(simulator.snapshot(progress as f64));
            }
        });
    });

    group.finish();
}

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");

    group.bench_function("record_when_full", |b| {
        let mut history = FuelHistory::default();
        let snapshot = TelemetrySnapshot {
            distance_km: 500.,
            fuel_level_pct: 40.,
            ..Default::default()
        };
        let now = Local::now();
        b.iter(|| history.record(black_box(&snapshot), now));
    });

    group.bench_function("dashboard_update", |b| {
        let mut dashboard = Dashboard::new(
            TelemetrySimulator::new(
                Route::default(),
                AlertThresholds::default(),
                RandomJitter::from_seed(Some(42)),
            ),
            20,
        );
        let mut progress = 0;
        b.iter(|| {
            progress = (progress + 1) % 101;
            black_box(dashboard.set_progress(progress as f64).fuel_level_pct);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_snapshot, bench_history);
criterion_main!(benches);
