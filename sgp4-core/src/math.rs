use crate::constants::TWOPI;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Reduces an angle to `[0, 2π)` the way the Kepler solver expects its mean anomaly.
///
/// `fmod` keeps the sign of `x`, so negative remainders are shifted up by one turn.
#[inline]
pub fn wrap_two_pi(x: f64) -> f64 {
    let r = fmod(x, TWOPI);
    if r < 0.0 {
        r + TWOPI
    } else {
        r
    }
}
