//! Batch propagation driver.
//!
//! A [`Propagator`] owns the geophysical model and nothing else. It borrows an
//! [`OrbitalElementBatch`] read-only for each call and writes into caller
//! owned output, so one propagator (or many) can serve any number of batches
//! from any number of threads.
//!
//! # Dispatch
//!
//! [`propagate_step`](Propagator::propagate_step) walks `[0, count)` in
//! strides of [`VECTOR_WIDTH`]: every full group goes to the vectorized
//! kernel, then the last `count % VECTOR_WIDTH` satellites go one by one to
//! the scalar kernel. Groups always start at a multiple of the width, and no
//! group ever extends past `count`.
//!
//! # Sweeps
//!
//! [`propagate_sweep`](Propagator::propagate_sweep) runs one step per instant
//! and writes instant `i` to row `i` of a [`PropagationResult`]. Instant `i`
//! is `t0 + i * step_seconds / 60` minutes past each satellite's epoch
//! (see [`sweep_tsince`]).
//!
//! ```
//! use sgp4_batch::{OrbitalElementBatch, Propagator};
//! use sgp4_core::constants::{rev_per_day_to_rad_per_min, DEG_TO_RAD};
//! use sgp4_core::ElementSet;
//!
//! let iss = ElementSet {
//!     inclination: 51.64 * DEG_TO_RAD,
//!     eccentricity: 0.0006703,
//!     mean_motion: rev_per_day_to_rad_per_min(15.49560830),
//!     ..ElementSet::default()
//! };
//! let batch = OrbitalElementBatch::from_elements(&[iss; 5]).unwrap();
//!
//! let propagator = Propagator::default();
//! let result = propagator.propagate_sweep(&batch, 0.0, 60.0, 10).unwrap();
//! let r = result.state(9, 4).unwrap().radius();
//! assert!(r > 6700.0 && r < 6900.0);
//! ```

use crate::batch::OrbitalElementBatch;
use crate::kernel::{propagate_group, propagate_scalar, MotionElements, NativeLanes, VECTOR_WIDTH};
use crate::result::{PropagationResult, StepColumns};
use sgp4_core::constants::SECONDS_PER_MINUTE;
use sgp4_core::{ElementSet, GeophysicalConstants, GeophysicalModel, Sgp4Error, Sgp4Result, StateVector};

/// Minutes since epoch of sweep instant `step`.
#[inline]
pub fn sweep_tsince(t0: f64, step_seconds: f64, step: usize) -> f64 {
    t0 + (step as f64 * step_seconds) / SECONDS_PER_MINUTE
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Propagator {
    model: GeophysicalModel,
}

impl Propagator {
    pub fn new(model: GeophysicalModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &GeophysicalModel {
        &self.model
    }

    pub fn constants(&self) -> &GeophysicalConstants {
        self.model.constants()
    }

    /// Replaces the label and all eight constants together.
    pub fn set_model(&mut self, model: GeophysicalModel) {
        tracing::debug!(label = model.label(), "geophysical model replaced");
        self.model = model;
    }

    /// Propagates one satellite to `tsince` minutes past its epoch.
    pub fn propagate(&self, elements: &ElementSet, tsince: f64) -> StateVector {
        propagate_scalar(&elements.into(), tsince, self.constants())
    }

    /// Propagates one satellite to ephemeris time `et_seconds`.
    pub fn propagate_to(&self, elements: &ElementSet, et_seconds: f64) -> StateVector {
        self.propagate(elements, elements.tsince_minutes(et_seconds))
    }

    /// Propagates every satellite in `batch` to `tsince` minutes past epoch.
    ///
    /// Satellite `i` is written to index `i` of each output channel; entries
    /// at or past `batch.count()` are left untouched.
    ///
    /// # Errors
    /// [`Sgp4Error::BufferTooSmall`] if any channel is shorter than
    /// `batch.count()`. Nothing is written in that case.
    pub fn propagate_step(
        &self,
        batch: &OrbitalElementBatch,
        tsince: f64,
        out: &mut StepColumns<'_>,
    ) -> Sgp4Result<()> {
        let count = batch.count();
        out.check_len(count)?;

        let geophs = self.constants();
        let vector_end = count - count % VECTOR_WIDTH;

        for start in (0..vector_end).step_by(VECTOR_WIDTH) {
            propagate_group::<NativeLanes>(batch, start, tsince, geophs, out);
        }

        for index in vector_end..count {
            let elements = MotionElements::<f64>::load(batch, index);
            out.write(index, &propagate_scalar(&elements, tsince, geophs));
        }

        tracing::trace!(
            tsince,
            groups = vector_end / VECTOR_WIDTH,
            remainder = count - vector_end,
            "propagated step"
        );
        Ok(())
    }

    /// Allocates a result for `steps` instants and fills it.
    ///
    /// # Errors
    /// [`Sgp4Error::AllocationFailure`] if the result cannot be allocated.
    pub fn propagate_sweep(
        &self,
        batch: &OrbitalElementBatch,
        t0: f64,
        step_seconds: f64,
        steps: usize,
    ) -> Sgp4Result<PropagationResult> {
        let mut result = PropagationResult::allocate(batch.count(), steps)?;
        self.propagate_sweep_into(batch, &mut result, t0, step_seconds)?;
        Ok(result)
    }

    /// Fills every row of an existing result, one instant per row.
    ///
    /// # Errors
    /// [`Sgp4Error::ShapeMismatch`] if `result` was allocated for a different
    /// capacity than `batch`.
    pub fn propagate_sweep_into(
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
            t0,
            step_seconds,
            "starting sweep"
        );

        for (step, mut row) in result.rows_mut().enumerate() {
            self.propagate_step(batch, sweep_tsince(t0, step_seconds, step), &mut row)?;
        }

        tracing::debug!("sweep finished");
        Ok(())
    }
}

pub(crate) fn check_shape(batch: &OrbitalElementBatch, result: &PropagationResult) -> Sgp4Result<()> {
    if result.capacity() != batch.capacity() {
        return Err(Sgp4Error::shape_mismatch(batch.capacity(), result.capacity()));
    }
    Ok(())
}
