//! Rigid body state sample type.

use nalgebra::{Isometry3, Matrix3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::math;
use crate::types::{Pose, Time};

/// Covariance marking a quantity group as unknown: +infinity on the
/// diagonal, zero off the diagonal.
#[inline]
fn unknown_covariance() -> Matrix3<f64> {
    Matrix3::from_diagonal_element(f64::INFINITY)
}

#[inline]
fn axis_known(cov: &Matrix3<f64>, axis: usize) -> bool {
    !cov[(axis, axis)].is_infinite()
}

#[inline]
fn group_known(cov: &Matrix3<f64>) -> bool {
    axis_known(cov, 0) && axis_known(cov, 1) && axis_known(cov, 2)
}

/// Estimated kinematic state of a rigid body at one instant.
///
/// This is the exchange sample passed between perception, estimation, and
/// control stages: a timestamped pose, velocity, and angular velocity,
/// each paired with a 3x3 covariance. Instances move between stages by
/// value; two clones never alias.
///
/// # Frame conventions
///
/// `orientation` and `position` express the transform from `source_frame`
/// (the body) to `target_frame` (the world). Position is in meters in the
/// East-North-Up world frame. Velocity is the body's velocity relative to
/// the world, expressed in body-fixed Right-Front-Up coordinates, in m/s.
/// Angular velocity is an axis-angle rate in body-fixed coordinates: the
/// direction is the rotation axis, the magnitude the angular speed in
/// rad/s.
///
/// # Validity
///
/// A quantity group carries no information exactly when the diagonal of
/// its covariance is +infinity; there is no separate "valid" flag. Use
/// [`invalidate_position`](Self::invalidate_position) and friends to mark
/// a group unknown, and the `has_valid_*` predicates to check before
/// trusting a mean. Means always hold deterministic values (zero, or the
/// identity rotation) even when the group is unknown, so a consumer that
/// skips the check reads something harmless rather than garbage.
///
/// Producers that have measured a group must fill both the mean and a
/// symmetric positive-semidefinite covariance. Nothing on this type
/// enforces that on direct field writes; see [`crate::validation`] for
/// the opt-in producer-side checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyState {
    /// Timestamp of the estimate
    pub time: Time,

    /// Name of the source (body) reference frame
    pub source_frame: String,

    /// Name of the target (world) reference frame
    pub target_frame: String,

    /// Position of the body origin in the target frame, in meters (ENU)
    pub position: Vector3<f64>,
    /// Covariance of `position`, in the same frame
    pub cov_position: Matrix3<f64>,

    /// Orientation as a body-to-world rotation
    pub orientation: UnitQuaternion<f64>,
    /// Covariance of the orientation error as an axis-angle perturbation
    /// in body coordinates
    pub cov_orientation: Matrix3<f64>,

    /// Velocity relative to the world, in body-fixed coordinates (RFU), m/s
    pub velocity: Vector3<f64>,
    /// Covariance of `velocity`
    pub cov_velocity: Matrix3<f64>,

    /// Angular velocity as an axis-angle rate in body-fixed coordinates
    pub angular_velocity: Vector3<f64>,
    /// Covariance of `angular_velocity`
    pub cov_angular_velocity: Matrix3<f64>,
}

impl RigidBodyState {
    /// The canonical unknown-state sentinel.
    ///
    /// All four quantity groups are invalidated, means are zero (identity
    /// rotation for the orientation), frame names are empty, and the
    /// timestamp is zero. Every validity predicate on the result returns
    /// false.
    pub fn invalid() -> Self {
        Self {
            time: Time::default(),
            source_frame: String::new(),
            target_frame: String::new(),
            position: Vector3::zeros(),
            cov_position: unknown_covariance(),
            orientation: UnitQuaternion::identity(),
            cov_orientation: unknown_covariance(),
            velocity: Vector3::zeros(),
            cov_velocity: unknown_covariance(),
            angular_velocity: Vector3::zeros(),
            cov_angular_velocity: unknown_covariance(),
        }
    }

    /// Invalidate all four quantity groups and reset the means to their
    /// zero / identity defaults.
    ///
    /// This is the only operation that touches means and covariances
    /// together; the per-group `invalidate_*` operations leave means
    /// untouched.
    pub fn invalidate(&mut self) {
        self.invalidate_orientation();
        self.invalidate_position();
        self.invalidate_velocity();
        self.invalidate_angular_velocity();

        self.position = Vector3::zeros();
        self.velocity = Vector3::zeros();
        self.orientation = UnitQuaternion::identity();
        self.angular_velocity = Vector3::zeros();
    }

    /// Mark the position as unknown. Idempotent; the mean is untouched.
    #[inline]
    pub fn invalidate_position(&mut self) {
        self.cov_position = unknown_covariance();
    }

    /// Mark the orientation as unknown. Idempotent; the mean is untouched.
    #[inline]
    pub fn invalidate_orientation(&mut self) {
        self.cov_orientation = unknown_covariance();
    }

    /// Mark the velocity as unknown. Idempotent; the mean is untouched.
    #[inline]
    pub fn invalidate_velocity(&mut self) {
        self.cov_velocity = unknown_covariance();
    }

    /// Mark the angular velocity as unknown. Idempotent; the mean is
    /// untouched.
    #[inline]
    pub fn invalidate_angular_velocity(&mut self) {
        self.cov_angular_velocity = unknown_covariance();
    }

    /// True iff all three diagonal entries of the position covariance are
    /// not infinite.
    ///
    /// Only infinity is checked: a NaN diagonal entry reports valid. Use
    /// [`crate::validation::validate`] to catch NaN-contaminated samples.
    #[inline]
    pub fn has_valid_position(&self) -> bool {
        group_known(&self.cov_position)
    }

    /// Per-axis position validity.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not 0, 1, or 2.
    #[inline]
    pub fn has_valid_position_axis(&self, axis: usize) -> bool {
        axis_known(&self.cov_position, axis)
    }

    /// True iff all three diagonal entries of the orientation covariance
    /// are not infinite.
    #[inline]
    pub fn has_valid_orientation(&self) -> bool {
        group_known(&self.cov_orientation)
    }

    /// Per-axis orientation validity.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not 0, 1, or 2.
    #[inline]
    pub fn has_valid_orientation_axis(&self, axis: usize) -> bool {
        axis_known(&self.cov_orientation, axis)
    }

    /// True iff all three diagonal entries of the velocity covariance are
    /// not infinite.
    #[inline]
    pub fn has_valid_velocity(&self) -> bool {
        group_known(&self.cov_velocity)
    }

    /// Per-axis velocity validity.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not 0, 1, or 2.
    #[inline]
    pub fn has_valid_velocity_axis(&self, axis: usize) -> bool {
        axis_known(&self.cov_velocity, axis)
    }

    /// True iff all three diagonal entries of the angular velocity
    /// covariance are not infinite.
    #[inline]
    pub fn has_valid_angular_velocity(&self) -> bool {
        group_known(&self.cov_angular_velocity)
    }

    /// Per-axis angular velocity validity.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not 0, 1, or 2.
    #[inline]
    pub fn has_valid_angular_velocity_axis(&self, axis: usize) -> bool {
        axis_known(&self.cov_angular_velocity, axis)
    }

    /// Project to a (position, orientation) pose, ignoring velocities and
    /// covariances.
    #[inline]
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.orientation)
    }

    /// Overwrite position and orientation from a pose. All other fields,
    /// covariances included, are untouched.
    #[inline]
    pub fn set_pose(&mut self, pose: &Pose) {
        self.orientation = pose.orientation;
        self.position = pose.position;
    }

    /// The rigid transform from `source_frame` to `target_frame`: rotate
    /// by `orientation`, then translate by `position`.
    #[inline]
    pub fn transform(&self) -> Isometry3<f64> {
        self.pose().to_isometry()
    }

    /// Overwrite position and orientation from a rigid transform. All
    /// other fields, covariances included, are untouched.
    #[inline]
    pub fn set_transform(&mut self, transform: &Isometry3<f64>) {
        self.orientation = transform.rotation;
        self.position = transform.translation.vector;
    }

    /// Yaw (heading) extracted from the orientation, ZYX convention.
    ///
    /// A derived scalar with no uncertainty attached; `cov_orientation`
    /// is not propagated.
    #[inline]
    pub fn yaw(&self) -> f64 {
        math::yaw_of(&self.orientation)
    }
}

impl Default for RigidBodyState {
    /// Same as [`RigidBodyState::invalid`]: a default-constructed state
    /// never passes for a measurement.
    fn default() -> Self {
        Self::invalid()
    }
}

impl From<&RigidBodyState> for Isometry3<f64> {
    /// Identical to [`RigidBodyState::transform`].
    fn from(state: &RigidBodyState) -> Self {
        state.transform()
    }
}
