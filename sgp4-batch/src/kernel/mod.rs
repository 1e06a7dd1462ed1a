//! Near-earth SGP4 propagation kernels.
//!
//! The algorithm is written once, in [`near_earth`], against the [`Lanes`]
//! trait. A lane type is either a plain `f64` (one satellite) or a `wide`
//! vector of doubles (two or four satellites per operation). The scalar kernel
//! and the vectorized kernel are two instantiations of that one routine, so
//! they execute the same operations in the same order on every lane.
//!
//! # Lane operations
//!
//! Add, subtract, multiply, divide, negate and square root map to native
//! vector instructions. `sin`, `cos`, `atan2`, `pow` and `fmod` have no vector form:
//! they are applied lane by lane through `libm`, exactly as the scalar path
//! calls them. IEEE arithmetic and a correctly rounded square root make the
//! remaining operations bit-identical between the two paths.
//!
//! # Model
//!
//! 1. Inclination terms `cos i`, `sin i`, `3cos²i − 1` and `β₀ = sqrt(1 − e²)`.
//! 2. Un-Kozai the mean motion: `a₁ = (ke/n)^(2/3)`, `δ₁`, `a₀`, `δ₀`, giving
//!    the original mean motion `n″` and semi-major axis `a″`.
//! 3. Drag: `C₁ = B*·a″²`, mean anomaly `M = M₀ + n″t + C₁t²`.
//! 4. Kepler's equation by Newton-Raphson, exactly [`KEPLER_ITERATIONS`]
//!    iterations with no convergence test.
//! 5. True anomaly from `atan2(√(1−e²)·sinE/(1−e·cosE), (cosE−e)/(1−e·cosE))`.
//! 6. Orientation from `u = ω + ν` and `Ω`, scaled to km and km/s.
//!
//! Secular drift of the node and perigee and all deep-space terms are left out.

mod scalar;
mod vector;

pub use scalar::propagate_scalar;
pub use vector::{propagate_group, simd_name, NativeLanes, VECTOR_WIDTH};

pub use crate::aligned::BATCH_LANES;

use crate::batch::OrbitalElementBatch;
use sgp4_core::constants::{SECONDS_PER_MINUTE, TWO_THIRDS};
use sgp4_core::math::wrap_two_pi;
use sgp4_core::GeophysicalConstants;
use std::ops::{Add, Div, Mul, Sub};

/// Newton-Raphson iterations for Kepler's equation.
pub const KEPLER_ITERATIONS: usize = 4;

/// A group of `WIDTH` doubles processed in lock step.
pub trait Lanes:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const WIDTH: usize;

    fn splat(value: f64) -> Self;

    /// Reads `WIDTH` values starting at `start`.
    fn load(column: &[f64], start: usize) -> Self;

    /// Writes `WIDTH` values starting at `start`.
    fn store(self, column: &mut [f64], start: usize);

    fn sqrt(self) -> Self;

    /// Flips the sign bit of every lane, zeros included.
    fn negate(self) -> Self;

    /// Applies `f` to every lane.
    fn map(self, f: impl Fn(f64) -> f64) -> Self;

    /// Applies `f` lane-wise to `self` and `other`.
    fn zip_map(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self;

    #[inline(always)]
    fn sin(self) -> Self {
        self.map(libm::sin)
    }

    #[inline(always)]
    fn cos(self) -> Self {
        self.map(libm::cos)
    }

    #[inline(always)]
    fn atan2(self, x: Self) -> Self {
        self.zip_map(x, libm::atan2)
    }
}

/// The seven elements the model reads, one lane per satellite.
#[derive(Debug, Clone, Copy)]
pub struct MotionElements<L> {
    pub inclination: L,
    pub raan: L,
    pub eccentricity: L,
    pub arg_perigee: L,
    pub mean_anomaly: L,
    pub mean_motion: L,
    pub bstar: L,
}

impl<L: Lanes> MotionElements<L> {
    /// Loads lanes `start..start + L::WIDTH` straight from the batch columns.
    #[inline(always)]
    pub fn load(batch: &OrbitalElementBatch, start: usize) -> Self {
        Self {
            inclination: L::load(batch.inclination(), start),
            raan: L::load(batch.raan(), start),
            eccentricity: L::load(batch.eccentricity(), start),
            arg_perigee: L::load(batch.arg_perigee(), start),
            mean_anomaly: L::load(batch.mean_anomaly(), start),
            mean_motion: L::load(batch.mean_motion(), start),
            bstar: L::load(batch.bstar(), start),
        }
    }
}

/// TEME position (km) and velocity (km/s), one lane per satellite.
#[derive(Debug, Clone, Copy)]
pub struct LaneState<L> {
    pub x: L,
    pub y: L,
    pub z: L,
    pub vx: L,
    pub vy: L,
    pub vz: L,
}

/// Propagates every lane of `el` to `tsince` minutes past epoch.
#[inline(always)]
pub fn near_earth<L: Lanes>(
    el: &MotionElements<L>,
    tsince: f64,
    geophs: &GeophysicalConstants,
) -> LaneState<L> {
    let one = L::splat(1.0);
    let t = L::splat(tsince);
    let j2 = L::splat(geophs.j2);
    let ke = L::splat(geophs.ke);
    let re = L::splat(geophs.re);
    let ecc = el.eccentricity;

    let cosio = el.inclination.cos();
    let sinio = el.inclination.sin();
    let theta2 = cosio * cosio;
    let x3thm1 = L::splat(3.0) * theta2 - one;
    let eosq = ecc * ecc;
    let betao2 = one - eosq;
    let betao = betao2.sqrt();

    let a1 = (ke / el.mean_motion).map(|v| libm::pow(v, TWO_THIRDS));
    let del1 = L::splat(1.5) * j2 * x3thm1 / (betao2 * betao * a1 * a1);
    let ao = a1 * (one - del1 * (L::splat(1.0 / 3.0) + del1 * (one + del1)));
    let delo = L::splat(1.5) * j2 * x3thm1 / (betao2 * betao * ao * ao);
    let xnodp = el.mean_motion / (one + delo);
    let aodp = ao / (one - delo);

    let c1 = el.bstar * aodp * aodp;
    let xmp = el.mean_anomaly + xnodp * t;
    let xmdf = xmp + c1 * t * t;

    let u = xmdf.map(wrap_two_pi);
    let mut eo1 = u;
    for _ in 0..KEPLER_ITERATIONS {
        let f = eo1 - ecc * eo1.sin() - u;
        let fp = one - ecc * eo1.cos();
        eo1 = eo1 - f / fp;
    }

    let sin_eo1 = eo1.sin();
    let cos_eo1 = eo1.cos();
    let ecose = ecc * cos_eo1;
    let esine = ecc * sin_eo1;
    let el2 = one - eosq;
    let pl = aodp * el2;
    let r = aodp * (one - ecose);
    let rdot = ke * aodp.sqrt() * esine / r;
    let rvdot = ke * pl.sqrt() / r;

    let sinv = el2.sqrt() * sin_eo1 / (one - ecose);
    let cosv = (cos_eo1 - ecc) / (one - ecose);
    let v = sinv.atan2(cosv);

    let su = el.arg_perigee + v;
    let sin_su = su.sin();
    let cos_su = su.cos();
    let sin_node = el.raan.sin();
    let cos_node = el.raan.cos();

    let ux = cos_su * cos_node - sin_su * cosio * sin_node;
    let uy = cos_su * sin_node + sin_su * cosio * cos_node;
    let uz = sin_su * sinio;
    let vx_u = (sin_su * cos_node + cos_su * cosio * sin_node).negate();
    let vy_u = cos_su * cosio * cos_node - sin_su * sin_node;
    let vz_u = cos_su * sinio;

    let per_second = L::splat(SECONDS_PER_MINUTE);
    let r_km = r * re;
    let rdot_kms = rdot * re / per_second;
    let rvdot_kms = rvdot * re / per_second;

    LaneState {
        x: r_km * ux,
        y: r_km * uy,
        z: r_km * uz,
        vx: rdot_kms * ux + rvdot_kms * vx_u,
        vy: rdot_kms * uy + rvdot_kms * vy_u,
        vz: rdot_kms * uz + rvdot_kms * vz_u,
    }
}
