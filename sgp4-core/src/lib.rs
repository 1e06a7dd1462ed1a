//! Shared building blocks for batch SGP4 propagation.
//!
//! `sgp4-core` holds the value types every other crate in the workspace passes
//! around: the geophysical model a propagation runs under, the canonical
//! 10-element vector produced by a TLE parser, the TEME state vector that comes
//! out, and the error type. Nothing here allocates buffers or runs the
//! propagation math; that lives in `sgp4-batch`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`geophysical`] | [`GeophysicalConstants`] 8-tuples, WGS-72/WGS-84 presets, labelled [`GeophysicalModel`] |
//! | [`elements`] | [`ElementSet`], the 10-field TLE-derived element vector |
//! | [`state`] | [`StateVector`], TEME position (km) and velocity (km/s) |
//! | [`constants`] | Angle and time unit conversions |
//! | [`math`] | Angle wrapping helpers shared by both kernels |
//! | [`errors`] | [`Sgp4Error`] and [`Sgp4Result`] |
//!
//! # Units
//!
//! Angles are radians, mean motion is radians per minute, epochs are
//! ephemeris seconds past a fixed reference epoch, and `tsince` is minutes
//! since the element epoch.
//!
//! ```
//! use sgp4_core::constants::{rev_per_day_to_rad_per_min, DEG_TO_RAD};
//! use sgp4_core::{ElementSet, GeophysicalModel};
//!
//! let model = GeophysicalModel::wgs72();
//! assert_eq!(model.label(), "wgs72");
//!
//! let iss = ElementSet {
//!     inclination: 51.64 * DEG_TO_RAD,
//!     eccentricity: 0.0006703,
//!     mean_motion: rev_per_day_to_rad_per_min(15.49560830),
//!     ..ElementSet::default()
//! };
//! assert!(iss.validate().is_ok());
//! ```

pub mod constants;
pub mod elements;
pub mod errors;
pub mod geophysical;
pub mod math;
pub mod state;

pub use elements::ElementSet;
pub use errors::{Sgp4Error, Sgp4Result};
pub use geophysical::{GeophysicalConstants, GeophysicalModel, WGS72, WGS84};
pub use state::StateVector;

pub mod test_helpers;
