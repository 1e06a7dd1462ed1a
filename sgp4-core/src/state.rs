#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position (km) and velocity (km/s) in the TEME frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVector {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl StateVector {
    pub const fn new(position: [f64; 3], velocity: [f64; 3]) -> Self {
        Self { position, velocity }
    }

    /// Distance from the Earth's centre in km.
    #[inline]
    pub fn radius(&self) -> f64 {
        norm(&self.position)
    }

    /// Speed in km/s.
    #[inline]
    pub fn speed(&self) -> f64 {
        norm(&self.velocity)
    }

    /// The 6-element state `[x, y, z, vx, vy, vz]`.
    pub fn to_array(&self) -> [f64; 6] {
        let [x, y, z] = self.position;
        let [vx, vy, vz] = self.velocity;
        [x, y, z, vx, vy, vz]
    }
}

#[inline]
fn norm(v: &[f64; 3]) -> f64 {
    libm::sqrt(v[0] * v[0] + v[1] * v[1] + v[2] * v[2])
}
