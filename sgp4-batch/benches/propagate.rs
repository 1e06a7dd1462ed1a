//! Propagation throughput.
//!
//! Run with: cargo bench -p sgp4-batch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sgp4_batch::kernel::propagate_scalar;
use sgp4_batch::{ElementSet, OrbitalElementBatch, PropagationResult, Propagator, WGS72};
use sgp4_core::constants::{rev_per_day_to_rad_per_min, DEG_TO_RAD};

fn fleet(n: usize) -> Vec<ElementSet> {
    (0..n)
        .map(|i| {
            let v = i as f64 * 0.0001;
            ElementSet {
                bstar: 0.00010270,
                inclination: 51.6400 * DEG_TO_RAD + v,
                raan: 208.9163 * DEG_TO_RAD + v,
                eccentricity: 0.0006703,
                arg_perigee: 30.0825 * DEG_TO_RAD + v,
                mean_anomaly: 330.0579 * DEG_TO_RAD + v,
                mean_motion: rev_per_day_to_rad_per_min(15.49560830),
                ..ElementSet::default()
            }
        })
        .collect()
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate_step");
    let propagator = Propagator::default();

    for size in [8, 64, 1024, 9534] {
        let elements = fleet(size);
        let batch = OrbitalElementBatch::from_elements(&elements).unwrap();
        let mut result = PropagationResult::allocate(size, 1).unwrap();

        group.throughput(Throughput::Elements(size as u64));

        // One satellite at a time
        group.bench_with_input(BenchmarkId::new("scalar", size), &elements, |b, elements| {
            b.iter(|| {
                for e in elements {
                    black_box(propagate_scalar(&e.into(), black_box(90.0), &WGS72));
                }
            });
        });

        group.bench_function(BenchmarkId::new("batch", size), |b| {
            b.iter(|| {
                let mut row = result.row_mut(0).unwrap();
                propagator
                    .propagate_step(&batch, black_box(90.0), &mut row)
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate_sweep");
    let propagator = Propagator::default();
    let batch = OrbitalElementBatch::from_elements(&fleet(1024)).unwrap();
    let steps = 60;
    let mut result = PropagationResult::allocate(batch.count(), steps).unwrap();

    group.throughput(Throughput::Elements((batch.count() * steps) as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| {
            propagator
                .propagate_sweep_into(&batch, &mut result, 0.0, 60.0)
                .unwrap();
        });
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        b.iter(|| {
            propagator
                .propagate_sweep_into_par(&batch, &mut result, 0.0, 60.0)
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_step, bench_sweep);
criterion_main!(benches);
