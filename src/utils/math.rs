use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::utils::constants::MIN_VELOCITY_SQUARED;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values. `factor` is not clamped, so values outside
/// `[0, 1]` extrapolate along the line.
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Inverse of [`lerp`]: where `value` sits between `start` and `end`, unclamped.
/// Returns 0 for a degenerate range.
#[inline]
pub fn inverse_lerp(start: f64, end: f64, value: f64) -> f64 {
    let range = end - start;
    if range == 0.0 {
        0.0
    } else {
        (value - start) / range
    }
}

/// [`inverse_lerp`] clamped to `[0, 1]`.
#[inline]
pub fn inverse_lerp_clamped(start: f64, end: f64, value: f64) -> f64 {
    inverse_lerp(start, end, value).clamp(0.0, 1.0)
}

/// Remove the component of `vector` along `normal`.
pub fn project_on_plane(vector: &Vector3<f64>, normal: &Vector3<f64>) -> Vector3<f64> {
    let norm_sq = normal.norm_squared();
    if norm_sq < MIN_VELOCITY_SQUARED {
        return *vector;
    }
    vector - normal * (vector.dot(normal) / norm_sq)
}

/// Signed angle in radians from `from` to `to`, positive when the rotation is
/// right-handed about `axis`. Result lies in `[-PI, PI]`.
pub fn signed_angle(from: &Vector3<f64>, to: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let cross = from.cross(to);
    let unsigned = cross.norm().atan2(from.dot(to));
    if cross.dot(axis) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Replace NaN/Inf with 0 for display purposes.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
