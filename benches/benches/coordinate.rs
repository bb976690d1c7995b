// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_coordinate` projection.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_coordinate::{Axis, Coordinate, Grid, Length, Options, Orientation, Polar};

fn value_options() -> Options<u32, u32> {
    Options::new(Axis::value(0.0, 1_000.0), Axis::value(-50.0, 50.0))
        .with_grid(Grid::new(Length::Percent(5.0), 20, Length::Percent(5.0), 40))
}

fn bench_cartesian_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate/cartesian");
    let points: Vec<(f64, f64)> = (0..4_096)
        .map(|i| (f64::from(i) * 0.25, f64::from(i % 100) - 50.0))
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    for orientation in Orientation::ALL {
        let coord = Coordinate::new(
            (1280.0, 720.0),
            value_options().with_orientation(orientation),
        );
        group.bench_with_input(
            BenchmarkId::new("coord", format!("{orientation:?}")),
            &points,
            |b, points| {
                b.iter(|| {
                    for &(x, y) in points {
                        black_box(coord.coord(x, y));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_polar_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate/polar");
    let points: Vec<(f64, f64)> = (0..4_096)
        .map(|i| (f64::from(i % 1_000), f64::from(i) * 0.1))
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    let coord = Coordinate::new((1280.0, 720.0), value_options().with_polar(Polar::default()));
    group.bench_function("coord", |b| {
        b.iter(|| {
            for &(x, y) in &points {
                black_box(coord.coord(x, y));
            }
        });
    });

    group.finish();
}

fn bench_category_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate/category_lookup");

    // Category lookup is a linear scan, so cost grows with the list length.
    for len in [8_u32, 64, 512, 4_096] {
        let options: Options<u32, u32> =
            Options::new(Axis::category(0..len), Axis::category(0..len));
        let coord = Coordinate::new((1280.0, 720.0), options);
        let labels: Vec<u32> = (0..len).rev().collect();
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("coord_x", len), &labels, |b, labels| {
            b.iter(|| {
                for &label in labels {
                    black_box(coord.coord_x(understory_coordinate::Datum::Category(label)));
                }
            });
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut coord = Coordinate::new((1280.0, 720.0), value_options().with_polar(Polar::default()));
    c.bench_function("coordinate/resize", |b| {
        let mut w = 640.0;
        b.iter(|| {
            w = if w > 1920.0 { 640.0 } else { w + 1.0 };
            coord.resize(black_box((w, 720.0)));
            black_box(coord.max_radius());
        });
    });
}

criterion_group!(
    benches,
    bench_cartesian_values,
    bench_polar_values,
    bench_category_lookup,
    bench_resize
);
criterion_main!(benches);
