//! Float assertions shared by the workspace's tests.
//!
//! States are compared as `[x, y, z, vx, vy, vz]` arrays so failures can
//! name the channel that diverged.

const CHANNELS: [&str; 6] = ["x", "y", "z", "vx", "vy", "vz"];

/// Maps a double onto `u64` so that numeric order matches integer order.
#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    const SIGN: u64 = 1 << 63;
    let bits = x.to_bits();
    if bits & SIGN == 0 {
        bits | SIGN
    } else {
        !bits
    }
}

/// Representable doubles between `a` and `b`.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

/// Relative difference, measured against `max(|a|, |b|, 1)` so values near zero
/// are compared absolutely.
#[inline]
pub fn relative_diff(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() / scale
}

#[track_caller]
pub fn assert_relative_le(a: f64, b: f64, tolerance: f64, ctx: &str) {
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}: a={} b={}",
        ctx,
        a,
        b
    );
    let d = relative_diff(a, b);
    assert!(
        d <= tolerance,
        "{}: relative difference {:e} exceeds {:e}, a={} b={}",
        ctx,
        d,
        tolerance,
        a,
        b
    );
}

/// Asserts `a` and `b` are at most `max_ulp` doubles apart. Signed zeros
/// compare equal; NaN never passes.
#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(!a.is_nan() && !b.is_nan(), "{}: NaN (a={}, b={})", ctx, a, b);
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: {} ulp apart, {} allowed: {:e} [{:#018x}] vs {:e} [{:#018x}]",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Compares two 6-element states channel by channel within a relative tolerance.
#[track_caller]
pub fn assert_states_close(a: &[f64; 6], b: &[f64; 6], tolerance: f64, ctx: &str) {
    for (i, channel) in CHANNELS.iter().enumerate() {
        assert_relative_le(a[i], b[i], tolerance, &format!("{} [{}]", ctx, channel));
    }
}

/// Compares two 6-element states channel by channel in ulps; `0` demands
/// identical values.
#[track_caller]
pub fn assert_states_ulp_le(a: &[f64; 6], b: &[f64; 6], max_ulp: u64, ctx: &str) {
    for (i, channel) in CHANNELS.iter().enumerate() {
        assert_ulp_le(a[i], b[i], max_ulp, &format!("{} [{}]", ctx, channel));
    }
}
