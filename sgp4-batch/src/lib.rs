//! Batch SGP4 propagation over structure-of-arrays element storage.
//!
//! Thousands of satellites are stored column by column in an
//! [`OrbitalElementBatch`], propagated a group of [`VECTOR_WIDTH`] at a time
//! by the vectorized kernel (the remainder one at a time by the scalar
//! kernel), and written to the six channels of a [`PropagationResult`].
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`aligned`] | 64-byte aligned, zero-initialized `f64` columns |
//! | [`batch`] | [`OrbitalElementBatch`], one column per orbital element |
//! | [`result`] | [`PropagationResult`] and per-step row views |
//! | [`kernel`] | Scalar and vectorized near-earth kernels |
//! | [`driver`] | [`Propagator`]: step and sweep dispatch |
//!
//! # Features
//!
//! - `simd` (default): vector groups of two doubles via `wide`, four when
//!   the build enables AVX.
//! - `parallel`: `Propagator::propagate_sweep_par` over the rayon pool.
//! - `serde`: serde derives on the `sgp4-core` value types.
//!
//! # Example
//!
//! ```
//! use sgp4_batch::{OrbitalElementBatch, Propagator};
//! use sgp4_core::constants::{rev_per_day_to_rad_per_min, DEG_TO_RAD};
//! use sgp4_core::{ElementSet, GeophysicalModel};
//!
//! let mut batch = OrbitalElementBatch::allocate(2).unwrap();
//! for i in 0..2 {
//!     let elements = ElementSet {
//!         inclination: (51.64 + i as f64) * DEG_TO_RAD,
//!         eccentricity: 0.0007,
//!         mean_motion: rev_per_day_to_rad_per_min(15.5),
//!         ..ElementSet::default()
//!     };
//!     batch.set(i, &elements).unwrap();
//! }
//!
//! let propagator = Propagator::new(GeophysicalModel::wgs84());
//! let result = propagator.propagate_sweep(&batch, 0.0, 60.0, 90).unwrap();
//! assert_eq!(result.steps(), 90);
//! assert!(result.state(89, 1).unwrap().speed() > 7.0);
//! ```

pub mod aligned;
pub mod batch;
pub mod driver;
pub mod kernel;
#[cfg(feature = "parallel")]
mod parallel;
pub mod result;

pub use batch::OrbitalElementBatch;
pub use driver::{sweep_tsince, Propagator};
pub use kernel::{simd_name, BATCH_LANES, VECTOR_WIDTH};
pub use result::{PropagationResult, StepColumns, StepView};

pub use sgp4_core::{
    ElementSet, GeophysicalConstants, GeophysicalModel, Sgp4Error, Sgp4Result, StateVector, WGS72,
    WGS84,
};
