//! Generic range mapping and angle helpers used by the widget code.

use std::f32::consts::PI;

/// Affine map of `x` from `[src_lo, src_hi]` onto `[dst_lo, dst_hi]`.
///
/// A degenerate source range divides by zero; callers must avoid it.
#[inline]
pub fn map_range(x: f32, src_lo: f32, src_hi: f32, dst_lo: f32, dst_hi: f32) -> f32 {
    (x - src_lo) / (src_hi - src_lo) * (dst_hi - dst_lo) + dst_lo
}

/// Restricts `x` to `[lo, hi]`, assuming `lo <= hi`.
#[inline]
pub fn clamp<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Maps `v` from `[lo, hi]` onto the unit interval.
#[inline]
pub fn normalized(v: f32, lo: f32, hi: f32) -> f32 {
    map_range(v, lo, hi, 0.0, 1.0)
}

/// Maps `v` from the unit interval onto `[lo, hi]`.
#[inline]
pub fn denormalized(v: f32, lo: f32, hi: f32) -> f32 {
    map_range(v, 0.0, 1.0, lo, hi)
}
