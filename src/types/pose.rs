//! 3D pose type.

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::math;

/// Body pose in 3D space.
///
/// Position in meters and orientation as a body-to-world unit quaternion.
/// Equivalent to a rigid transform: the orientation is applied first, then
/// the translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in meters
    pub position: Vector3<f64>,
    /// Orientation as a body-to-world rotation
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    /// Create a new pose.
    #[inline]
    pub fn new(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Identity pose at the origin with no rotation.
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }

    /// Decompose a rigid transform into a pose.
    #[inline]
    pub fn from_isometry(iso: &Isometry3<f64>) -> Self {
        Self {
            position: iso.translation.vector,
            orientation: iso.rotation,
        }
    }

    /// Build the rigid transform: rotate by `orientation`, then translate
    /// by `position`.
    #[inline]
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.position), self.orientation)
    }

    /// Compose two poses: self ⊕ other
    ///
    /// Applies `other` relative to `self`'s frame.
    #[inline]
    pub fn compose(&self, other: &Pose) -> Pose {
        Pose {
            position: self.position + self.orientation * other.position,
            orientation: self.orientation * other.orientation,
        }
    }

    /// Inverse of this pose.
    ///
    /// Returns the transform that undoes this pose.
    #[inline]
    pub fn inverse(&self) -> Pose {
        let inv = self.orientation.inverse();
        Pose {
            position: -(inv * self.position),
            orientation: inv,
        }
    }

    /// Transform a point from local frame to global frame.
    #[inline]
    pub fn transform_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.position + self.orientation * point
    }

    /// Transform a point from global frame to local frame.
    #[inline]
    pub fn inverse_transform_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.orientation.inverse() * (point - self.position)
    }

    /// Yaw (heading) of the orientation, ZYX convention.
    #[inline]
    pub fn yaw(&self) -> f64 {
        math::yaw_of(&self.orientation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn sample_pose() -> Pose {
        Pose::new(
            Vector3::new(1.0, 2.0, 3.0),
            UnitQuaternion::from_euler_angles(0.1, -0.2, 0.5),
        )
    }

    #[test]
    fn test_compose_identity() {
        let p = sample_pose();
        let result = p.compose(&Pose::identity());
        assert_relative_eq!(result.position, p.position, epsilon = 1e-12);
        assert_relative_eq!(result.orientation.angle_to(&p.orientation), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let p = sample_pose();
        let result = p.compose(&p.inverse());
        assert_relative_eq!(result.position, Vector3::zeros(), epsilon = 1e-9);
        assert_relative_eq!(result.orientation.angle(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transform_point_pure_yaw() {
        // 90° yaw about +Z sends +X to +Y
        let pose = Pose::new(
            Vector3::new(1.0, 0.0, 0.0),
            UnitQuaternion::from_euler_angles(0.0, 0.0, FRAC_PI_2),
        );
        let result = pose.transform_point(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(result, Vector3::new(1.0, 1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_transform_point() {
        let pose = sample_pose();
        let point = Vector3::new(-0.5, 2.5, 1.0);
        let roundtrip = pose.inverse_transform_point(&pose.transform_point(&point));
        assert_relative_eq!(roundtrip, point, epsilon = 1e-9);
    }

    #[test]
    fn test_isometry_roundtrip() {
        let pose = sample_pose();
        let back = Pose::from_isometry(&pose.to_isometry());
        assert_relative_eq!(back.position, pose.position, epsilon = 1e-12);
        assert_relative_eq!(back.orientation.angle_to(&pose.orientation), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_isometry_matches_manual_transform() {
        let pose = sample_pose();
        let iso = pose.to_isometry();
        let point = Vector3::new(0.3, -1.0, 2.0);
        assert_relative_eq!(
            iso.transform_point(&point.into()).coords,
            pose.transform_point(&point),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_yaw_of_pure_yaw_pose() {
        let pose = Pose::new(
            Vector3::zeros(),
            UnitQuaternion::from_euler_angles(0.0, 0.0, 1.2),
        );
        assert_relative_eq!(pose.yaw(), 1.2, epsilon = 1e-9);
    }

    #[test]
    fn test_default_is_identity() {
        let pose = Pose::default();
        assert_relative_eq!(pose.position, Vector3::zeros());
        assert_relative_eq!(pose.orientation.angle(), 0.0);
    }
}
