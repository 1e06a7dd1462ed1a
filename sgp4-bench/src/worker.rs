//! Benchmark workers.
//!
//! Each worker owns a private batch holding its slice of the fleet and a
//! single-step output buffer that is overwritten at every instant.

use rayon::prelude::*;
use sgp4_batch::{sweep_tsince, OrbitalElementBatch, PropagationResult, Propagator};
use sgp4_core::constants::{rev_per_day2_to_rad_per_min2, rev_per_day_to_rad_per_min, DEG_TO_RAD};
use sgp4_core::{ElementSet, Sgp4Result};
use std::ops::Range;

/// ISS elements from
/// `2 25544  51.6400 208.9163 0006703  30.0825 330.0579 15.49560830    19`.
pub fn iss() -> ElementSet {
    ElementSet {
        ndot: rev_per_day2_to_rad_per_min2(0.00016717),
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

/// Synthetic satellite `index`: the ISS with its angles nudged by `index × 1e-4` rad.
pub fn synthetic_satellite(index: usize) -> ElementSet {
    let base = iss();
    let variation = index as f64 * 0.0001;
    ElementSet {
        inclination: base.inclination + variation,
        raan: base.raan + variation,
        arg_perigee: base.arg_perigee + variation,
        mean_anomaly: base.mean_anomaly + variation,
        ..base
    }
}

/// Splits `satellites` into `workers` contiguous ranges; the first
/// `satellites % workers` ranges take one extra.
pub fn partition(satellites: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let per_worker = satellites / workers;
    let remainder = satellites % workers;

    let mut start = 0;
    (0..workers)
        .map(|w| {
            let len = per_worker + usize::from(w < remainder);
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}

/// Propagates one range over `steps` instants and returns the propagation count.
pub fn run_worker(
    propagator: &Propagator,
    satellites: Range<usize>,
    steps: usize,
    step_seconds: f64,
) -> Sgp4Result<u64> {
    if satellites.is_empty() {
        return Ok(0);
    }

    let elements: Vec<_> = satellites.clone().map(synthetic_satellite).collect();
    let batch = OrbitalElementBatch::from_elements(&elements)?;
    let mut buffer = PropagationResult::allocate(batch.count(), 1)?;

    let mut props = 0u64;
    for step in 0..steps {
        let tsince = sweep_tsince(0.0, step_seconds, step);
        if let Some(mut row) = buffer.row_mut(0) {
            propagator.propagate_step(&batch, tsince, &mut row)?;
        }
        props += batch.count() as u64;
    }

    tracing::debug!(
        start = satellites.start,
        end = satellites.end,
        props,
        "worker finished"
    );
    Ok(props)
}

/// Runs every range on the current rayon pool and sums the propagation counts.
pub fn run_all(
    propagator: &Propagator,
    ranges: Vec<Range<usize>>,
    steps: usize,
    step_seconds: f64,
) -> Sgp4Result<u64> {
    ranges
        .into_par_iter()
        .map(|range| run_worker(propagator, range, steps, step_seconds))
        .try_reduce(|| 0, |a, b| Ok(a + b))
}
