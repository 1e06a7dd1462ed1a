//! Structure-of-arrays storage for the orbital elements of many satellites.
//!
//! An [`OrbitalElementBatch`] is a matrix with satellites as rows and the ten
//! TLE-derived elements as columns, stored column by column: each element
//! lives in its own 64-byte aligned array. A vector load from one column at
//! index `i` picks up the same element for satellites `i..i + width`, which is
//! what the vectorized kernel consumes directly without any shuffling.
//!
//! # Capacity and padding
//!
//! The logical `count` is fixed at allocation. Every column is `capacity`
//! long, where `capacity` is `count` rounded up to
//! [`BATCH_LANES`](crate::aligned::BATCH_LANES). Rows in
//! `[count, capacity)` are zero and stay zero: [`set`](OrbitalElementBatch::set)
//! refuses indices at or past `count`. Lanes that read the padding therefore
//! see well-defined values, and since every lane is computed independently
//! they cannot influence real satellites.
//!
//! ```
//! use sgp4_batch::OrbitalElementBatch;
//! use sgp4_core::ElementSet;
//!
//! let mut batch = OrbitalElementBatch::allocate(3).unwrap();
//! assert_eq!(batch.capacity(), 8);
//!
//! batch.set(2, &ElementSet { eccentricity: 0.01, ..ElementSet::default() }).unwrap();
//! assert_eq!(batch.eccentricity()[2], 0.01);
//! assert!(batch.set(3, &ElementSet::default()).is_err());
//! ```

use crate::aligned::{round_up_capacity, AlignedColumn};
use sgp4_core::{ElementSet, Sgp4Error, Sgp4Result};
use std::fmt;

pub struct OrbitalElementBatch {
    count: usize,
    capacity: usize,
    ndot: AlignedColumn,
    nddot: AlignedColumn,
    bstar: AlignedColumn,
    inclination: AlignedColumn,
    raan: AlignedColumn,
    eccentricity: AlignedColumn,
    arg_perigee: AlignedColumn,
    mean_anomaly: AlignedColumn,
    mean_motion: AlignedColumn,
    epoch: AlignedColumn,
}

impl OrbitalElementBatch {
    /// Allocates a zeroed batch for `count` satellites.
    ///
    /// # Errors
    /// [`Sgp4Error::AllocationFailure`] if any column cannot be allocated or the
    /// capacity overflows. Columns allocated before the failure are released.
    pub fn allocate(count: usize) -> Sgp4Result<Self> {
        let capacity =
            round_up_capacity(count).ok_or_else(|| Sgp4Error::allocation_failure("batch", count))?;

        let batch = Self {
            count,
            capacity,
            ndot: AlignedColumn::zeroed("ndot", capacity)?,
            nddot: AlignedColumn::zeroed("nddot", capacity)?,
            bstar: AlignedColumn::zeroed("bstar", capacity)?,
            inclination: AlignedColumn::zeroed("inclination", capacity)?,
            raan: AlignedColumn::zeroed("raan", capacity)?,
            eccentricity: AlignedColumn::zeroed("eccentricity", capacity)?,
            arg_perigee: AlignedColumn::zeroed("arg_perigee", capacity)?,
            mean_anomaly: AlignedColumn::zeroed("mean_anomaly", capacity)?,
            mean_motion: AlignedColumn::zeroed("mean_motion", capacity)?,
            epoch: AlignedColumn::zeroed("epoch", capacity)?,
        };

        tracing::debug!(count, capacity, "allocated orbital element batch");
        Ok(batch)
    }

    /// Allocates a batch sized to `elements` and fills it in order.
    pub fn from_elements(elements: &[ElementSet]) -> Sgp4Result<Self> {
        let mut batch = Self::allocate(elements.len())?;
        for (index, row) in elements.iter().enumerate() {
            batch.write_row(index, row);
        }
        Ok(batch)
    }

    /// Writes one satellite's elements.
    ///
    /// # Errors
    /// [`Sgp4Error::IndexOutOfRange`] if `index >= count`. Padding rows are
    /// never writable.
    pub fn set(&mut self, index: usize, elements: &ElementSet) -> Sgp4Result<()> {
        if index >= self.count {
            return Err(Sgp4Error::index_out_of_range(index, self.count));
        }
        self.write_row(index, elements);
        Ok(())
    }

    /// Writes one satellite from the parser's 10-element vector.
    pub fn set_array(&mut self, index: usize, values: [f64; 10]) -> Sgp4Result<()> {
        self.set(index, &ElementSet::from_array(values))
    }

    /// Reads one satellite back, or `None` past `count`.
    pub fn get(&self, index: usize) -> Option<ElementSet> {
        if index >= self.count {
            return None;
        }
        Some(ElementSet {
            ndot: self.ndot.as_slice()[index],
            nddot: self.nddot.as_slice()[index],
            bstar: self.bstar.as_slice()[index],
            inclination: self.inclination.as_slice()[index],
            raan: self.raan.as_slice()[index],
            eccentricity: self.eccentricity.as_slice()[index],
            arg_perigee: self.arg_perigee.as_slice()[index],
            mean_anomaly: self.mean_anomaly.as_slice()[index],
            mean_motion: self.mean_motion.as_slice()[index],
            epoch: self.epoch.as_slice()[index],
        })
    }

    fn write_row(&mut self, index: usize, e: &ElementSet) {
        self.ndot.as_mut_slice()[index] = e.ndot;
        self.nddot.as_mut_slice()[index] = e.nddot;
        self.bstar.as_mut_slice()[index] = e.bstar;
        self.inclination.as_mut_slice()[index] = e.inclination;
        self.raan.as_mut_slice()[index] = e.raan;
        self.eccentricity.as_mut_slice()[index] = e.eccentricity;
        self.arg_perigee.as_mut_slice()[index] = e.arg_perigee;
        self.mean_anomaly.as_mut_slice()[index] = e.mean_anomaly;
        self.mean_motion.as_mut_slice()[index] = e.mean_motion;
        self.epoch.as_mut_slice()[index] = e.epoch;
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
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of padding rows, always below [`BATCH_LANES`](crate::aligned::BATCH_LANES).
    #[inline]
    pub fn padding(&self) -> usize {
        self.capacity - self.count
    }

    pub fn ndot(&self) -> &[f64] {
        self.ndot.as_slice()
    }

    pub fn nddot(&self) -> &[f64] {
        self.nddot.as_slice()
    }

    pub fn bstar(&self) -> &[f64] {
        self.bstar.as_slice()
    }

    pub fn inclination(&self) -> &[f64] {
        self.inclination.as_slice()
    }

    pub fn raan(&self) -> &[f64] {
        self.raan.as_slice()
    }

    pub fn eccentricity(&self) -> &[f64] {
        self.eccentricity.as_slice()
    }

    pub fn arg_perigee(&self) -> &[f64] {
        self.arg_perigee.as_slice()
    }

    pub fn mean_anomaly(&self) -> &[f64] {
        self.mean_anomaly.as_slice()
    }

    pub fn mean_motion(&self) -> &[f64] {
        self.mean_motion.as_slice()
    }

    pub fn epoch(&self) -> &[f64] {
        self.epoch.as_slice()
    }

    /// All ten columns in parser order, for bulk inspection.
    pub fn columns(&self) -> [&[f64]; 10] {
        [
            self.ndot(),
            self.nddot(),
            self.bstar(),
            self.inclination(),
            self.raan(),
            self.eccentricity(),
            self.arg_perigee(),
            self.mean_anomaly(),
            self.mean_motion(),
            self.epoch(),
        ]
    }
}

impl fmt::Debug for OrbitalElementBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrbitalElementBatch")
            .field("count", &self.count)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
