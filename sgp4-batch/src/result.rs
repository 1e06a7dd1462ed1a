//! Structure-of-arrays output buffers.
//!
//! A [`PropagationResult`] holds six channels (`x`, `y`, `z`, `vx`, `vy`,
//! `vz`), each `capacity × steps` long and indexed `step * capacity + index`.
//! One time step is therefore one contiguous row slice per channel, borrowed
//! as a [`StepView`] for reading or a [`StepColumns`] for the driver to write.

use crate::aligned::{round_up_capacity, AlignedColumn};
use sgp4_core::{Sgp4Error, Sgp4Result, StateVector};
use std::fmt;

/// Mutable output slices for one time step, one per channel.
///
/// The driver writes satellite `i` to index `i` of every slice.
pub struct StepColumns<'a> {
    pub x: &'a mut [f64],
    pub y: &'a mut [f64],
    pub z: &'a mut [f64],
    pub vx: &'a mut [f64],
    pub vy: &'a mut [f64],
    pub vz: &'a mut [f64],
}

impl<'a> StepColumns<'a> {
    pub fn new(
        x: &'a mut [f64],
        y: &'a mut [f64],
        z: &'a mut [f64],
        vx: &'a mut [f64],
        vy: &'a mut [f64],
        vz: &'a mut [f64],
    ) -> Self {
        Self {
            x,
            y,
            z,
            vx,
            vy,
            vz,
        }
    }

    /// Fails unless every channel can hold `count` values.
    pub(crate) fn check_len(&self, count: usize) -> Sgp4Result<()> {
        let channels = [
            ("x", self.x.len()),
            ("y", self.y.len()),
            ("z", self.z.len()),
            ("vx", self.vx.len()),
            ("vy", self.vy.len()),
            ("vz", self.vz.len()),
        ];
        for (name, len) in channels {
            if len < count {
                return Err(Sgp4Error::buffer_too_small(name, count, len));
            }
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn write(&mut self, index: usize, state: &StateVector) {
        self.x[index] = state.position[0];
        self.y[index] = state.position[1];
        self.z[index] = state.position[2];
        self.vx[index] = state.velocity[0];
        self.vy[index] = state.velocity[1];
        self.vz[index] = state.velocity[2];
    }
}

/// Read-only view of one time step.
#[derive(Clone, Copy)]
pub struct StepView<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub z: &'a [f64],
    pub vx: &'a [f64],
    pub vy: &'a [f64],
    pub vz: &'a [f64],
}

impl StepView<'_> {
    pub fn state(&self, index: usize) -> Option<StateVector> {
        if index >= self.x.len() {
            return None;
        }
        Some(StateVector::new(
            [self.x[index], self.y[index], self.z[index]],
            [self.vx[index], self.vy[index], self.vz[index]],
        ))
    }
}

pub struct PropagationResult {
    count: usize,
    capacity: usize,
    steps: usize,
    x: AlignedColumn,
    y: AlignedColumn,
    z: AlignedColumn,
    vx: AlignedColumn,
    vy: AlignedColumn,
    vz: AlignedColumn,
}

impl PropagationResult {
    /// Allocates zeroed channels for `count` satellites over `steps` instants.
    ///
    /// # Errors
    /// [`Sgp4Error::AllocationFailure`] if a channel cannot be allocated or
    /// `capacity × steps` overflows.
    pub fn allocate(count: usize, steps: usize) -> Sgp4Result<Self> {
        let capacity =
            round_up_capacity(count).ok_or_else(|| Sgp4Error::allocation_failure("result", count))?;
        let len = capacity
            .checked_mul(steps)
            .ok_or_else(|| Sgp4Error::allocation_failure("result", usize::MAX))?;

        let result = Self {
            count,
            capacity,
            steps,
            x: AlignedColumn::zeroed("x", len)?,
            y: AlignedColumn::zeroed("y", len)?,
            z: AlignedColumn::zeroed("z", len)?,
            vx: AlignedColumn::zeroed("vx", len)?,
            vy: AlignedColumn::zeroed("vy", len)?,
            vz: AlignedColumn::zeroed("vz", len)?,
        };

        tracing::debug!(count, capacity, steps, "allocated propagation result");
        Ok(result)
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn x(&self) -> &[f64] {
        self.x.as_slice()
    }

    pub fn y(&self) -> &[f64] {
        self.y.as_slice()
    }

    pub fn z(&self) -> &[f64] {
        self.z.as_slice()
    }

    pub fn vx(&self) -> &[f64] {
        self.vx.as_slice()
    }

    pub fn vy(&self) -> &[f64] {
        self.vy.as_slice()
    }

    pub fn vz(&self) -> &[f64] {
        self.vz.as_slice()
    }

    pub fn row(&self, step: usize) -> Option<StepView<'_>> {
        if step >= self.steps {
            return None;
        }
        let span = step * self.capacity..(step + 1) * self.capacity;
        Some(StepView {
            x: &self.x.as_slice()[span.clone()],
            y: &self.y.as_slice()[span.clone()],
            z: &self.z.as_slice()[span.clone()],
            vx: &self.vx.as_slice()[span.clone()],
            vy: &self.vy.as_slice()[span.clone()],
            vz: &self.vz.as_slice()[span],
        })
    }

    pub fn row_mut(&mut self, step: usize) -> Option<StepColumns<'_>> {
        if step >= self.steps {
            return None;
        }
        let span = step * self.capacity..(step + 1) * self.capacity;
        Some(StepColumns {
            x: &mut self.x.as_mut_slice()[span.clone()],
            y: &mut self.y.as_mut_slice()[span.clone()],
            z: &mut self.z.as_mut_slice()[span.clone()],
            vx: &mut self.vx.as_mut_slice()[span.clone()],
            vy: &mut self.vy.as_mut_slice()[span.clone()],
            vz: &mut self.vz.as_mut_slice()[span],
        })
    }

    /// Every row as disjoint mutable views, in step order.
    ///
    /// Yields nothing for a zero-capacity result.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = StepColumns<'_>> + '_ {
        let width = self.capacity.max(1);
        self.x
            .as_mut_slice()
            .chunks_mut(width)
            .zip(self.y.as_mut_slice().chunks_mut(width))
            .zip(self.z.as_mut_slice().chunks_mut(width))
            .zip(self.vx.as_mut_slice().chunks_mut(width))
            .zip(self.vy.as_mut_slice().chunks_mut(width))
            .zip(self.vz.as_mut_slice().chunks_mut(width))
            .map(|(((((x, y), z), vx), vy), vz)| StepColumns::new(x, y, z, vx, vy, vz))
    }

    /// State of satellite `index` at `step`, or `None` outside `count × steps`.
    pub fn state(&self, step: usize, index: usize) -> Option<StateVector> {
        if index >= self.count {
            return None;
        }
        self.row(step)?.state(index)
    }
}

impl fmt::Debug for PropagationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropagationResult")
            .field("count", &self.count)
            .field("capacity", &self.capacity)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}
