//! The canonical element vector handed over by a TLE parser.
//!
//! A parser reduces the two TLE lines to ten doubles in a fixed order:
//!
//! | Index | Field | Unit |
//! |-------|-------|------|
//! | 0 | `ndot` | rad/min² |
//! | 1 | `nddot` | rad/min³ |
//! | 2 | `bstar` | 1/earth radii |
//! | 3 | `inclination` | rad |
//! | 4 | `raan` | rad |
//! | 5 | `eccentricity` | - |
//! | 6 | `arg_perigee` | rad |
//! | 7 | `mean_anomaly` | rad |
//! | 8 | `mean_motion` | rad/min |
//! | 9 | `epoch` | ephemeris seconds |
//!
//! Nothing in the propagation path checks these values. Call
//! [`ElementSet::validate`] when the TLEs come from a source you do not trust.

use crate::constants::SECONDS_PER_MINUTE;
use crate::errors::{Sgp4Error, Sgp4Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementSet {
    pub ndot: f64,
    pub nddot: f64,
    pub bstar: f64,
    pub inclination: f64,
    pub raan: f64,
    pub eccentricity: f64,
    pub arg_perigee: f64,
    pub mean_anomaly: f64,
    pub mean_motion: f64,
    pub epoch: f64,
}

impl ElementSet {
    pub const FIELD_NAMES: [&'static str; 10] = [
        "ndot",
        "nddot",
        "bstar",
        "inclination",
        "raan",
        "eccentricity",
        "arg_perigee",
        "mean_anomaly",
        "mean_motion",
        "epoch",
    ];

    pub const fn from_array(values: [f64; 10]) -> Self {
        let [ndot, nddot, bstar, inclination, raan, eccentricity, arg_perigee, mean_anomaly, mean_motion, epoch] =
            values;
        Self {
            ndot,
            nddot,
            bstar,
            inclination,
            raan,
            eccentricity,
            arg_perigee,
            mean_anomaly,
            mean_motion,
            epoch,
        }
    }

    pub const fn to_array(&self) -> [f64; 10] {
        [
            self.ndot,
            self.nddot,
            self.bstar,
            self.inclination,
            self.raan,
            self.eccentricity,
            self.arg_perigee,
            self.mean_anomaly,
            self.mean_motion,
            self.epoch,
        ]
    }

    /// Minutes from this element set's epoch to `et_seconds`.
    #[inline]
    pub fn tsince_minutes(&self, et_seconds: f64) -> f64 {
        (et_seconds - self.epoch) / SECONDS_PER_MINUTE
    }

    /// Rejects element sets the near-earth model cannot produce finite output for.
    ///
    /// # Errors
    /// [`Sgp4Error::InvalidElements`] naming the first offending field: any
    /// non-finite value, eccentricity outside `[0, 1)`, or non-positive mean motion.
    pub fn validate(&self) -> Sgp4Result<()> {
        for (name, value) in Self::FIELD_NAMES.iter().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(Sgp4Error::invalid_elements(name, "value is not finite"));
            }
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(Sgp4Error::invalid_elements(
                "eccentricity",
                &format!("{} is outside [0, 1)", self.eccentricity),
            ));
        }
        if self.mean_motion <= 0.0 {
            return Err(Sgp4Error::invalid_elements(
                "mean_motion",
                &format!("{} rad/min is not positive", self.mean_motion),
            ));
        }
        Ok(())
    }
}

impl From<[f64; 10]> for ElementSet {
    fn from(values: [f64; 10]) -> Self {
        Self::from_array(values)
    }
}

impl From<ElementSet> for [f64; 10] {
    fn from(elements: ElementSet) -> Self {
        elements.to_array()
    }
}
