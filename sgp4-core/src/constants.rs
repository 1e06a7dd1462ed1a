#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Exponent recovering the semi-major axis from mean motion, `a = (ke / n)^(2/3)`.
#[allow(clippy::excessive_precision)]
pub const TWO_THIRDS: f64 = 0.66666666666666666667;

/// Converts a TLE mean motion in revolutions per day to radians per minute.
#[inline]
pub fn rev_per_day_to_rad_per_min(rev_per_day: f64) -> f64 {
    rev_per_day * TWOPI / MINUTES_PER_DAY
}

/// Converts a TLE first mean-motion derivative (rev/day²) to rad/min².
#[inline]
pub fn rev_per_day2_to_rad_per_min2(rev_per_day2: f64) -> f64 {
    rev_per_day2 * TWOPI / (MINUTES_PER_DAY * MINUTES_PER_DAY)
}
