//! Mathematical primitives for state handling.
//!
//! Functions for angle normalization, angular arithmetic, and Euler-angle
//! extraction from unit quaternions.

use nalgebra::UnitQuaternion;
use std::f64::consts::PI;

/// Normalize angle to [-π, π].
///
/// # Example
/// ```
/// use gati_types::math::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-9);
/// assert!((normalize_angle(-3.0 * PI) - (-PI)).abs() < 1e-9);
/// ```
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % (2.0 * PI);
    if a > PI {
        a -= 2.0 * PI;
    } else if a < -PI {
        a += 2.0 * PI;
    }
    a
}

/// Shortest angular difference from angle `a` to angle `b`.
///
/// Returns the signed angle you need to add to `a` to reach `b`,
/// taking the shortest path around the circle.
///
/// # Example
/// ```
/// use gati_types::math::angle_diff;
/// use std::f64::consts::PI;
///
/// // From 0 to π/2 is +π/2
/// assert!((angle_diff(0.0, PI / 2.0) - PI / 2.0).abs() < 1e-9);
///
/// // Crossing the ±π boundary takes the short way
/// let diff = angle_diff(PI - 0.1, -PI + 0.1);
/// assert!((diff - 0.2).abs() < 1e-9);
/// ```
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    normalize_angle(b - a)
}

/// Yaw (heading) of a rotation, in radians.
///
/// Uses the ZYX (yaw-pitch-roll) Euler decomposition. This is the one
/// convention used everywhere a heading is pulled out of a quaternion,
/// so headings extracted from different pipeline stages stay comparable.
#[inline]
pub fn yaw_of(q: &UnitQuaternion<f64>) -> f64 {
    q.euler_angles().2
}

/// Pitch of a rotation, in radians (ZYX decomposition).
#[inline]
pub fn pitch_of(q: &UnitQuaternion<f64>) -> f64 {
    q.euler_angles().1
}

/// Roll of a rotation, in radians (ZYX decomposition).
#[inline]
pub fn roll_of(q: &UnitQuaternion<f64>) -> f64 {
    q.euler_angles().0
}
