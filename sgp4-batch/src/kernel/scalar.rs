use super::{near_earth, Lanes, MotionElements};
use sgp4_core::{ElementSet, GeophysicalConstants, StateVector};

impl Lanes for f64 {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn load(column: &[f64], start: usize) -> Self {
        column[start]
    }

    #[inline(always)]
    fn store(self, column: &mut [f64], start: usize) {
        column[start] = self;
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline(always)]
    fn negate(self) -> Self {
        -self
    }

    #[inline(always)]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        f(self)
    }

    #[inline(always)]
    fn zip_map(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        f(self, other)
    }
}

impl From<&ElementSet> for MotionElements<f64> {
    fn from(e: &ElementSet) -> Self {
        Self {
            inclination: e.inclination,
            raan: e.raan,
            eccentricity: e.eccentricity,
            arg_perigee: e.arg_perigee,
            mean_anomaly: e.mean_anomaly,
            mean_motion: e.mean_motion,
            bstar: e.bstar,
        }
    }
}

/// Reference single-satellite propagation to `tsince` minutes past epoch.
///
/// No validation: eccentricity at or above one, zero mean motion or
/// non-finite inputs come back as NaN or infinite components.
pub fn propagate_scalar(
    elements: &MotionElements<f64>,
    tsince: f64,
    geophs: &GeophysicalConstants,
) -> StateVector {
    let s = near_earth(elements, tsince, geophs);
    StateVector::new([s.x, s.y, s.z], [s.vx, s.vy, s.vz])
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgp4_core::constants::{rev_per_day_to_rad_per_min, DEG_TO_RAD, TWOPI};
    use sgp4_core::{WGS72, WGS84};

    fn iss() -> MotionElements<f64> {
        MotionElements {
            inclination: 51.6400 * DEG_TO_RAD,
            raan: 208.9163 * DEG_TO_RAD,
            eccentricity: 0.0006703,
            arg_perigee: 30.0825 * DEG_TO_RAD,
            mean_anomaly: 330.0579 * DEG_TO_RAD,
            mean_motion: rev_per_day_to_rad_per_min(15.49560830),
            bstar: 0.00010270,
        }
    }

    #[test]
    fn test_iss_at_epoch_is_low_earth_orbit() {
        let state = propagate_scalar(&iss(), 0.0, &WGS72);
        let r = state.radius();
        assert!((6700.0..6900.0).contains(&r), "radius {r} km");
        let v = state.speed();
        assert!((7.5..7.8).contains(&v), "speed {v} km/s");
    }

    #[test]
    fn test_iss_after_one_period_still_in_band() {
        let state = propagate_scalar(&iss(), 90.0, &WGS72);
        let r = state.radius();
        assert!((6700.0..6900.0).contains(&r), "radius {r} km");
    }

    #[test]
    fn test_circular_equatorial_orbit_geometry() {
        let el = MotionElements {
            inclination: 0.0,
            raan: 0.0,
            eccentricity: 0.0,
            arg_perigee: 0.0,
            mean_anomaly: 0.0,
            mean_motion: rev_per_day_to_rad_per_min(15.0),
            bstar: 0.0,
        };
        let state = propagate_scalar(&el, 0.0, &WGS72);
        assert!(state.position[0] > 6000.0);
        assert_eq!(state.position[1], 0.0);
        assert_eq!(state.position[2], 0.0);
        assert_eq!(state.velocity[0], 0.0);
        assert!(state.velocity[1] > 7.0);
        assert_eq!(state.velocity[2], 0.0);
    }

    #[test]
    fn test_circular_orbit_radius_is_constant() {
        let el = MotionElements {
            eccentricity: 0.0,
            bstar: 0.0,
            ..iss()
        };
        let r0 = propagate_scalar(&el, 0.0, &WGS72).radius();
        for t in [10.0, 45.0, 90.0, 600.0, -300.0] {
            let r = propagate_scalar(&el, t, &WGS72).radius();
            assert!((r - r0).abs() < 1e-9 * r0, "t={t}: {r} vs {r0}");
        }
    }

    #[test]
    fn test_position_orthogonal_to_velocity_for_circular_orbit() {
        let el = MotionElements {
            eccentricity: 0.0,
            bstar: 0.0,
            ..iss()
        };
        let s = propagate_scalar(&el, 37.0, &WGS72);
        let dot: f64 = (0..3).map(|i| s.position[i] * s.velocity[i]).sum();
        assert!(dot.abs() < 1e-6, "r·v = {dot}");
    }

    #[test]
    fn test_full_turn_of_mean_anomaly_is_periodic() {
        let mut el = iss();
        el.bstar = 0.0;
        let a = propagate_scalar(&el, 0.0, &WGS72);
        el.mean_anomaly += TWOPI;
        let b = propagate_scalar(&el, 0.0, &WGS72);
        for i in 0..3 {
            assert!((a.position[i] - b.position[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_model_changes_output() {
        let a = propagate_scalar(&iss(), 30.0, &WGS72);
        let b = propagate_scalar(&iss(), 30.0, &WGS84);
        assert_ne!(a, b);
        assert!((a.radius() - b.radius()).abs() < 1.0);
    }

    #[test]
    fn test_hyperbolic_input_is_not_finite() {
        let el = MotionElements {
            eccentricity: 1.5,
            ..iss()
        };
        let s = propagate_scalar(&el, 10.0, &WGS72);
        assert!(s.to_array().iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_from_element_set() {
        let e = ElementSet {
            inclination: 1.0,
            raan: 2.0,
            eccentricity: 0.1,
            arg_perigee: 3.0,
            mean_anomaly: 4.0,
            mean_motion: 0.05,
            bstar: 1e-5,
            ..ElementSet::default()
        };
        let m = MotionElements::<f64>::from(&e);
        assert_eq!(m.raan, 2.0);
        assert_eq!(m.bstar, 1e-5);
    }
}
