//! Batch driver behavior end to end: dispatch paths, padding, sweeps.

use approx::assert_relative_eq;
use sgp4_batch::kernel::propagate_scalar;
use sgp4_batch::{
    sweep_tsince, ElementSet, GeophysicalModel, OrbitalElementBatch, PropagationResult,
    Propagator, StepView,
};
use sgp4_core::constants::{rev_per_day_to_rad_per_min, DEG_TO_RAD};
use sgp4_core::test_helpers::assert_states_ulp_le;

fn iss() -> ElementSet {
    ElementSet {
        ndot: 0.00016717,
        nddot: 0.0,
        bstar: 0.00010270,
        inclination: 51.6400 * DEG_TO_RAD,
        raan: 208.9163 * DEG_TO_RAD,
        eccentricity: 0.0006703,
        arg_perigee: 30.0825 * DEG_TO_RAD,
        mean_anomaly: 330.0579 * DEG_TO_RAD,
        mean_motion: rev_per_day_to_rad_per_min(15.49560830),
        epoch: 0.0,
    }
}

fn step(propagator: &Propagator, batch: &OrbitalElementBatch, tsince: f64) -> PropagationResult {
    propagator
        .propagate_sweep(batch, tsince, 0.0, 1)
        .expect("single-step sweep")
}

fn assert_rows_identical(a: StepView<'_>, b: StepView<'_>, count: usize) {
    assert_eq!(a.x[..count], b.x[..count]);
    assert_eq!(a.y[..count], b.y[..count]);
    assert_eq!(a.z[..count], b.z[..count]);
    assert_eq!(a.vx[..count], b.vx[..count]);
    assert_eq!(a.vy[..count], b.vy[..count]);
    assert_eq!(a.vz[..count], b.vz[..count]);
}

#[test]
fn test_iss_radius_at_epoch_and_after_one_period() {
    let batch = OrbitalElementBatch::from_elements(&[iss()]).unwrap();
    let propagator = Propagator::default();
    for tsince in [0.0, 90.0] {
        let r = step(&propagator, &batch, tsince).state(0, 0).unwrap().radius();
        assert!(r > 6700.0 && r < 6900.0, "t={tsince}: radius {r} km");
    }
}

#[test]
fn test_remainder_path_matches_vector_path() {
    let single = OrbitalElementBatch::from_elements(&[iss()]).unwrap();
    let full = OrbitalElementBatch::from_elements(&[iss(); 16]).unwrap();
    assert_eq!(single.capacity(), 8);
    assert_eq!(full.capacity(), 16);

    let propagator = Propagator::default();
    for tsince in [0.0, 17.5, 90.0, 1440.0] {
        let lone = step(&propagator, &single, tsince).state(0, 0).unwrap();
        let many = step(&propagator, &full, tsince);
        for i in 0..16 {
            let s = many.state(0, i).unwrap();
            for c in 0..3 {
                assert_relative_eq!(s.position[c], lone.position[c], max_relative = 1e-9);
                assert_relative_eq!(s.velocity[c], lone.velocity[c], max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn test_vector_lanes_and_remainder_share_scalar_bits() {
    let batch = OrbitalElementBatch::from_elements(&[iss(); 13]).unwrap();
    let propagator = Propagator::default();
    let scalar = propagate_scalar(&(&iss()).into(), 1440.0, propagator.constants()).to_array();

    let result = step(&propagator, &batch, 1440.0);
    for i in 0..13 {
        let got = result.state(0, i).unwrap().to_array();
        assert_states_ulp_le(&got, &scalar, 0, &format!("satellite {i}"));
    }
}

#[test]
fn test_repeated_step_is_bit_identical() {
    let elements: Vec<_> = (0..37)
        .map(|i| ElementSet {
            mean_anomaly: iss().mean_anomaly + i as f64 * 0.1,
            ..iss()
        })
        .collect();
    let batch = OrbitalElementBatch::from_elements(&elements).unwrap();
    let propagator = Propagator::default();
    let a = step(&propagator, &batch, 321.0);
    let b = step(&propagator, &batch, 321.0);
    assert_rows_identical(a.row(0).unwrap(), b.row(0).unwrap(), 37);
}

#[test]
fn test_padding_lanes_do_not_influence_real_satellites() {
    let elements: Vec<_> = (0..5)
        .map(|i| ElementSet {
            raan: i as f64,
            ..iss()
        })
        .collect();
    let exact = OrbitalElementBatch::from_elements(&elements).unwrap();

    // Same five satellites in the first rows of a larger batch whose other
    // rows hold unrelated, partly degenerate elements.
    let mut noisy = OrbitalElementBatch::allocate(8).unwrap();
    for (i, e) in elements.iter().enumerate() {
        noisy.set(i, e).unwrap();
    }
    for i in 5..8 {
        let junk = ElementSet {
            eccentricity: 1.5,
            mean_motion: 0.0,
            ..iss()
        };
        noisy.set(i, &junk).unwrap();
    }

    let propagator = Propagator::default();
    let a = step(&propagator, &exact, 60.0);
    let b = step(&propagator, &noisy, 60.0);
    assert_rows_identical(a.row(0).unwrap(), b.row(0).unwrap(), 5);

    let padding = a.row(0).unwrap();
    assert!(padding.x[5..].iter().all(|&v| v == 0.0));
}

#[test]
fn test_sweep_rows_equal_standalone_steps() {
    let elements: Vec<_> = (0..19)
        .map(|i| ElementSet {
            inclination: iss().inclination + i as f64 * 1e-4,
            ..iss()
        })
        .collect();
    let batch = OrbitalElementBatch::from_elements(&elements).unwrap();
    let propagator = Propagator::new(GeophysicalModel::wgs84());

    let (t0, step_seconds, steps) = (-30.0, 45.0, 12);
    let sweep = propagator
        .propagate_sweep(&batch, t0, step_seconds, steps)
        .unwrap();
    for i in 0..steps {
        let single = step(&propagator, &batch, sweep_tsince(t0, step_seconds, i));
        assert_rows_identical(sweep.row(i).unwrap(), single.row(0).unwrap(), 19);
    }
}

#[test]
fn test_sweep_reuses_result_buffer() {
    let batch = OrbitalElementBatch::from_elements(&[iss(); 3]).unwrap();
    let propagator = Propagator::default();
    let mut result = PropagationResult::allocate(3, 4).unwrap();

    propagator
        .propagate_sweep_into(&batch, &mut result, 0.0, 60.0)
        .unwrap();
    let first = result.x().to_vec();
    propagator
        .propagate_sweep_into(&batch, &mut result, 0.0, 60.0)
        .unwrap();
    assert_eq!(result.x(), &first[..]);
}

#[test]
fn test_propagate_to_ephemeris_time() {
    let elements = ElementSet {
        epoch: 7.0e8,
        ..iss()
    };
    let batch = OrbitalElementBatch::from_elements(&[elements]).unwrap();
    let propagator = Propagator::default();

    let target = elements.epoch + 5400.0;
    let direct = propagator.propagate_to(&elements, target);
    let batched = step(&propagator, &batch, elements.tsince_minutes(target))
        .state(0, 0)
        .unwrap();
    assert_eq!(direct, batched);
}

#[test]
fn test_allocate_and_drop_in_a_loop() {
    for n in [0usize, 1, 7, 8, 9, 1000] {
        for _ in 0..50 {
            let batch = OrbitalElementBatch::allocate(n).unwrap();
            assert_eq!(batch.count(), n);
            let result = PropagationResult::allocate(n, 2).unwrap();
            assert_eq!(result.capacity(), batch.capacity());
        }
    }
}

#[test]
fn test_batch_is_shared_across_threads() {
    let batch = OrbitalElementBatch::from_elements(&[iss(); 12]).unwrap();
    let propagator = Propagator::default();
    let reference = step(&propagator, &batch, 100.0);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| step(&propagator, &batch, 100.0)))
            .collect();
        for handle in handles {
            let result = handle.join().unwrap();
            assert_rows_identical(result.row(0).unwrap(), reference.row(0).unwrap(), 12);
        }
    });
}
