//! Geophysical models for SGP4.
//!
//! SGP4 needs eight physical constants: three zonal harmonics of the Earth's
//! gravity field, the gravitational parameter expressed as `ke`, two
//! atmospheric density-model altitudes, the equatorial radius and the distance
//! unit. Published element sets are fitted against WGS-72, so [`WGS72`] is the
//! default; [`WGS84`] is provided for comparison work.
//!
//! A [`GeophysicalModel`] pairs a constant set with a short label. It is a
//! plain value: whoever drives the propagation owns one and replaces it whole.
//!
//! | Index | Field | Meaning | Unit |
//! |-------|-------|---------|------|
//! | 0 | `j2` | second zonal harmonic | - |
//! | 1 | `j3` | third zonal harmonic | - |
//! | 2 | `j4` | fourth zonal harmonic | - |
//! | 3 | `ke` | `sqrt(GM)` | earth radii^1.5 / min |
//! | 4 | `qo` | density model parameter | km |
//! | 5 | `so` | density model parameter | km |
//! | 6 | `re` | equatorial radius | km |
//! | 7 | `ae` | distance units per earth radius | - |

use crate::errors::{Sgp4Error, Sgp4Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest label a model carries; longer labels are truncated.
pub const MAX_LABEL_LEN: usize = 31;

/// The eight constants SGP4 is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeophysicalConstants {
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
    pub ke: f64,
    pub qo: f64,
    pub so: f64,
    pub re: f64,
    pub ae: f64,
}

/// WGS-72, the model TLEs are generated against.
pub const WGS72: GeophysicalConstants = GeophysicalConstants {
    j2: 1.082616e-3,
    j3: -2.53881e-6,
    j4: -1.65597e-6,
    ke: 7.43669161e-2,
    qo: 120.0,
    so: 78.0,
    re: 6378.135,
    ae: 1.0,
};

/// WGS-84.
#[allow(clippy::excessive_precision)]
pub const WGS84: GeophysicalConstants = GeophysicalConstants {
    j2: 1.08262998905e-3,
    j3: -2.53215306e-6,
    j4: -1.61098761e-6,
    ke: 7.43669161331734132e-2,
    qo: 120.0,
    so: 78.0,
    re: 6378.137,
    ae: 1.0,
};

impl GeophysicalConstants {
    /// Builds a set from the 8-tuple `[j2, j3, j4, ke, qo, so, re, ae]`.
    pub const fn from_array(values: [f64; 8]) -> Self {
        let [j2, j3, j4, ke, qo, so, re, ae] = values;
        Self {
            j2,
            j3,
            j4,
            ke,
            qo,
            so,
            re,
            ae,
        }
    }

    /// Returns the 8-tuple in the order accepted by [`from_array`](Self::from_array).
    pub const fn to_array(&self) -> [f64; 8] {
        [
            self.j2, self.j3, self.j4, self.ke, self.qo, self.so, self.re, self.ae,
        ]
    }
}

impl Default for GeophysicalConstants {
    fn default() -> Self {
        WGS72
    }
}

/// A labelled geophysical constant set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeophysicalModel {
    label: String,
    constants: GeophysicalConstants,
}

impl GeophysicalModel {
    /// Creates a custom model. Labels longer than [`MAX_LABEL_LEN`] characters are cut.
    pub fn new(label: &str, constants: GeophysicalConstants) -> Self {
        let label = match label.char_indices().nth(MAX_LABEL_LEN) {
            Some((cut, _)) => &label[..cut],
            None => label,
        };
        Self {
            label: label.to_string(),
            constants,
        }
    }

    pub fn wgs72() -> Self {
        Self::new("wgs72", WGS72)
    }

    pub fn wgs84() -> Self {
        Self::new("wgs84", WGS84)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn constants(&self) -> &GeophysicalConstants {
        &self.constants
    }
}

impl Default for GeophysicalModel {
    fn default() -> Self {
        Self::wgs72()
    }
}

impl fmt::Display for GeophysicalModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (J2={:e}, KE={}, RE={} km)",
            self.label, self.constants.j2, self.constants.ke, self.constants.re
        )
    }
}

impl FromStr for GeophysicalModel {
    type Err = Sgp4Error;

    fn from_str(s: &str) -> Sgp4Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs72" | "wgs-72" => Ok(Self::wgs72()),
            "wgs84" | "wgs-84" => Ok(Self::wgs84()),
            _ => Err(Sgp4Error::UnknownModel(s.to_string())),
        }
    }
}
