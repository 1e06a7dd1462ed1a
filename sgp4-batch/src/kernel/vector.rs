//! Vectorized propagation over `wide` lane types.
//!
//! With the `simd` feature the native group matches the widest double
//! precision register the build targets: [`wide::f64x4`] (one 256-bit AVX
//! register) when AVX is enabled, [`wide::f64x2`] (one SSE2 or NEON register)
//! otherwise. Without the feature the native group is a single `f64` and every
//! satellite takes the scalar path.

use super::{near_earth, Lanes, MotionElements};
use crate::batch::OrbitalElementBatch;
use crate::result::StepColumns;
use sgp4_core::GeophysicalConstants;

#[cfg(feature = "simd")]
use wide::{f64x2, f64x4};

#[cfg(all(feature = "simd", target_feature = "avx"))]
pub type NativeLanes = f64x4;

#[cfg(all(feature = "simd", not(target_feature = "avx")))]
pub type NativeLanes = f64x2;

#[cfg(not(feature = "simd"))]
pub type NativeLanes = f64;

/// Satellites per vectorized kernel call.
pub const VECTOR_WIDTH: usize = <NativeLanes as Lanes>::WIDTH;

/// Describes the active vector path.
pub fn simd_name() -> &'static str {
    if !cfg!(feature = "simd") {
        "scalar (1 double/op)"
    } else if cfg!(target_feature = "avx") {
        "wide f64x4 on AVX (4 doubles/op)"
    } else if cfg!(target_arch = "aarch64") {
        "wide f64x2 on NEON (2 doubles/op)"
    } else if cfg!(target_arch = "x86_64") {
        "wide f64x2 on SSE2 (2 doubles/op)"
    } else {
        "wide f64x2 (2 doubles/op)"
    }
}

#[cfg(feature = "simd")]
impl Lanes for f64x4 {
    const WIDTH: usize = 4;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        f64x4::splat(value)
    }

    #[inline(always)]
    fn load(column: &[f64], start: usize) -> Self {
        let mut lanes = [0.0; 4];
        lanes.copy_from_slice(&column[start..start + 4]);
        f64x4::from(lanes)
    }

    #[inline(always)]
    fn store(self, column: &mut [f64], start: usize) {
        column[start..start + 4].copy_from_slice(&self.to_array());
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        f64x4::sqrt(self)
    }

    #[inline(always)]
    fn negate(self) -> Self {
        self ^ f64x4::splat(-0.0)
    }

    #[inline(always)]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        f64x4::from(self.to_array().map(f))
    }

    #[inline(always)]
    fn zip_map(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        f64x4::from([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])])
    }
}

#[cfg(feature = "simd")]
impl Lanes for f64x2 {
    const WIDTH: usize = 2;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        f64x2::splat(value)
    }

    #[inline(always)]
    fn load(column: &[f64], start: usize) -> Self {
        f64x2::from([column[start], column[start + 1]])
    }

    #[inline(always)]
    fn store(self, column: &mut [f64], start: usize) {
        column[start..start + 2].copy_from_slice(&self.to_array());
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        f64x2::sqrt(self)
    }

    #[inline(always)]
    fn negate(self) -> Self {
        self ^ f64x2::splat(-0.0)
    }

    #[inline(always)]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        f64x2::from(self.to_array().map(f))
    }

    #[inline(always)]
    fn zip_map(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        f64x2::from([f(a[0], b[0]), f(a[1], b[1])])
    }
}

/// Propagates satellites `start..start + L::WIDTH` and writes them to `out`.
///
/// `start` must be a multiple of `L::WIDTH` and the whole group must lie
/// inside the batch capacity and the output slices; the batch driver only
/// calls this for full groups below `count`.
#[inline]
pub fn propagate_group<L: Lanes>(
    batch: &OrbitalElementBatch,
    start: usize,
    tsince: f64,
    geophs: &GeophysicalConstants,
    out: &mut StepColumns<'_>,
) {
    debug_assert_eq!(start % L::WIDTH, 0, "group start {start} is not lane aligned");
    let elements = MotionElements::<L>::load(batch, start);
    let s = near_earth(&elements, tsince, geophs);
    s.x.store(out.x, start);
    s.y.store(out.y, start);
    s.z.store(out.z, start);
    s.vx.store(out.vx, start);
    s.vy.store(out.vy, start);
    s.vz.store(out.vz, start);
}
