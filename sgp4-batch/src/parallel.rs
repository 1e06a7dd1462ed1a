//! Multi-threaded sweeps.
//!
//! Rows of a [`PropagationResult`] are disjoint, so each time step can run on
//! its own rayon task. Every row is computed exactly as the sequential sweep
//! computes it, so the output is bit-identical regardless of thread count.

use crate::batch::OrbitalElementBatch;
use crate::driver::{check_shape, sweep_tsince, Propagator};
use crate::result::PropagationResult;
use rayon::prelude::*;
use sgp4_core::Sgp4Result;

impl Propagator {
    /// Parallel form of [`Propagator::propagate_sweep`].
    pub fn propagate_sweep_par(
        &self,
        batch: &OrbitalElementBatch,
        t0: f64,
        step_seconds: f64,
        steps: usize,
    ) -> Sgp4Result<PropagationResult> {
        let mut result = PropagationResult::allocate(batch.count(), steps)?;
        self.propagate_sweep_into_par(batch, &mut result, t0, step_seconds)?;
        Ok(result)
    }

    /// Parallel form of [`Propagator::propagate_sweep_into`].
    pub fn propagate_sweep_into_par(
        &self,
        batch: &OrbitalElementBatch,
        result: &mut PropagationResult,
        t0: f64,
        step_seconds: f64,
    ) -> Sgp4Result<()> {
        check_shape(batch, result)?;
        tracing::debug!(
            count = batch.count(),
            steps = result.steps(),
            threads = rayon::current_num_threads(),
            "starting parallel sweep"
        );

        let rows: Vec<_> = result.rows_mut().collect();
        rows.into_par_iter()
            .enumerate()
            .try_for_each(|(step, mut row)| {
                self.propagate_step(batch, sweep_tsince(t0, step_seconds, step), &mut row)
            })?;

        tracing::debug!("parallel sweep finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgp4_core::ElementSet;

    #[test]
    fn test_parallel_sweep_matches_sequential() {
        let elements: Vec<_> = (0..21)
            .map(|i| ElementSet {
                inclination: 0.9 + i as f64 * 0.01,
                eccentricity: 0.001 * i as f64,
                mean_motion: 0.06,
                mean_anomaly: i as f64,
                ..ElementSet::default()
            })
            .collect();
        let batch = OrbitalElementBatch::from_elements(&elements).unwrap();
        let propagator = Propagator::default();

        let seq = propagator.propagate_sweep(&batch, 0.0, 60.0, 17).unwrap();
        let par = propagator.propagate_sweep_par(&batch, 0.0, 60.0, 17).unwrap();
        assert_eq!(seq.x(), par.x());
        assert_eq!(seq.y(), par.y());
        assert_eq!(seq.z(), par.z());
        assert_eq!(seq.vx(), par.vx());
        assert_eq!(seq.vy(), par.vy());
        assert_eq!(seq.vz(), par.vz());
    }
}
