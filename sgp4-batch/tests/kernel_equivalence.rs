//! Differential tests: the vectorized path against the scalar kernel.
//!
//! Both paths run the same lane-wise routine, so besides the 1e-9 relative
//! bound every channel must come out with the same bits.

use proptest::prelude::*;
use sgp4_batch::kernel::{propagate_group, propagate_scalar, NativeLanes, VECTOR_WIDTH};
use sgp4_batch::{ElementSet, OrbitalElementBatch, PropagationResult, Propagator, WGS72, WGS84};
use sgp4_core::constants::TWOPI;
use sgp4_core::test_helpers::{assert_states_close, assert_states_ulp_le};

fn element_set() -> impl Strategy<Value = ElementSet> {
    (
        0.0..3.1f64,
        0.0..TWOPI,
        0.0..0.9f64,
        0.0..TWOPI,
        0.0..TWOPI,
        0.002..0.07f64,
        -1e-3..1e-3f64,
    )
        .prop_map(
            |(inclination, raan, eccentricity, arg_perigee, mean_anomaly, mean_motion, bstar)| {
                ElementSet {
                    inclination,
                    raan,
                    eccentricity,
                    arg_perigee,
                    mean_anomaly,
                    mean_motion,
                    bstar,
                    ..ElementSet::default()
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn vector_group_matches_scalar(
        elements in prop::collection::vec(element_set(), 8),
        tsince in -2880.0..2880.0f64,
        wgs84 in any::<bool>(),
    ) {
        let geophs = if wgs84 { WGS84 } else { WGS72 };
        let batch = OrbitalElementBatch::from_elements(&elements).unwrap();
        let mut result = PropagationResult::allocate(8, 1).unwrap();
        {
            let mut row = result.row_mut(0).unwrap();
            for start in (0..8).step_by(VECTOR_WIDTH) {
                propagate_group::<NativeLanes>(&batch, start, tsince, &geophs, &mut row);
            }
        }

        for (i, e) in elements.iter().enumerate() {
            let expected = propagate_scalar(&e.into(), tsince, &geophs);
            let got = result.state(0, i).unwrap();
            let ctx = format!("satellite {i} at {tsince} min");
            assert_states_close(&got.to_array(), &expected.to_array(), 1e-9, &ctx);
            assert_states_ulp_le(&got.to_array(), &expected.to_array(), 0, &ctx);
        }
    }

    #[test]
    fn batch_step_matches_single_satellite_calls(
        elements in prop::collection::vec(element_set(), 1..40),
        tsince in 0.0..1440.0f64,
    ) {
        let batch = OrbitalElementBatch::from_elements(&elements).unwrap();
        let propagator = Propagator::default();
        let result = propagator.propagate_sweep(&batch, tsince, 0.0, 1).unwrap();

        for (i, e) in elements.iter().enumerate() {
            let expected = propagator.propagate(e, tsince).to_array();
            let got = result.state(0, i).unwrap().to_array();
            let ctx = format!("satellite {i} of {}", elements.len());
            assert_states_close(&got, &expected, 1e-9, &ctx);
            assert_states_ulp_le(&got, &expected, 0, &ctx);
        }
    }
}
