//! Producer-side sanity checks for state samples.
//!
//! [`RigidBodyState`] itself is a trust-the-producer type: its operations
//! never fail and direct field writes are not policed. Producers that want
//! to guarantee well-formed output before handing a sample downstream run
//! [`validate`] as a separate step. Groups marked unknown through the
//! covariance sentinel are skipped entirely, so an all-invalid state always
//! passes.

use nalgebra::{Matrix3, UnitQuaternion, Vector3};

use crate::types::RigidBodyState;

/// Result type alias for validation checks.
pub type Result<T> = std::result::Result<T, StateError>;

/// Tolerance for covariance symmetry checks.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Tolerance on the orientation quaternion norm.
const UNIT_NORM_TOLERANCE: f64 = 1e-6;

/// The four quantity groups of a state sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Position,
    Orientation,
    Velocity,
    AngularVelocity,
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Group::Position => "position",
            Group::Orientation => "orientation",
            Group::Velocity => "velocity",
            Group::AngularVelocity => "angular velocity",
        };
        f.write_str(name)
    }
}

/// Ways a produced state sample can be malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateError {
    /// Mean of a group reported as measured contains NaN or infinity
    #[error("{group} mean contains a non-finite component")]
    NonFiniteMean {
        /// The offending quantity group
        group: Group,
    },

    /// Orientation quaternion is not unit-norm
    #[error("orientation quaternion norm {norm} is not 1")]
    NonNormalizedOrientation {
        /// Actual norm of the quaternion
        norm: f64,
    },

    /// Covariance of a group reported as measured contains NaN or infinity
    #[error("{group} covariance contains a non-finite entry")]
    NonFiniteCovariance {
        /// The offending quantity group
        group: Group,
    },

    /// Negative diagonal entry in a covariance matrix
    #[error("{group} covariance has negative variance on axis {axis}")]
    NegativeVariance {
        /// The offending quantity group
        group: Group,
        /// Diagonal index 0..=2
        axis: usize,
    },

    /// Covariance matrix is not symmetric
    #[error("{group} covariance is not symmetric")]
    AsymmetricCovariance {
        /// The offending quantity group
        group: Group,
    },
}

/// Check that every group the sentinel marks as measured is well-formed.
///
/// For each valid group: the mean must be finite, the covariance finite,
/// symmetric (within 1e-9) and with non-negative variances. The
/// orientation quaternion must additionally be unit-norm. Groups marked
/// unknown are not inspected at all.
///
/// This also closes the sentinel's NaN gap: a NaN covariance diagonal
/// makes the `has_valid_*` predicates report the group as measured, and
/// it is rejected here as [`StateError::NonFiniteCovariance`].
pub fn validate(state: &RigidBodyState) -> Result<()> {
    if state.has_valid_position() {
        check_mean(Group::Position, &state.position)?;
        check_covariance(Group::Position, &state.cov_position)?;
    }
    if state.has_valid_orientation() {
        check_orientation(&state.orientation)?;
        check_covariance(Group::Orientation, &state.cov_orientation)?;
    }
    if state.has_valid_velocity() {
        check_mean(Group::Velocity, &state.velocity)?;
        check_covariance(Group::Velocity, &state.cov_velocity)?;
    }
    if state.has_valid_angular_velocity() {
        check_mean(Group::AngularVelocity, &state.angular_velocity)?;
        check_covariance(Group::AngularVelocity, &state.cov_angular_velocity)?;
    }
    Ok(())
}

fn check_mean(group: Group, mean: &Vector3<f64>) -> Result<()> {
    if mean.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(StateError::NonFiniteMean { group })
    }
}

fn check_orientation(orientation: &UnitQuaternion<f64>) -> Result<()> {
    let q = orientation.quaternion();
    if !q.coords.iter().all(|c| c.is_finite()) {
        return Err(StateError::NonFiniteMean {
            group: Group::Orientation,
        });
    }
    let norm = q.norm();
    if (norm - 1.0).abs() > UNIT_NORM_TOLERANCE {
        return Err(StateError::NonNormalizedOrientation { norm });
    }
    Ok(())
}

fn check_covariance(group: Group, cov: &Matrix3<f64>) -> Result<()> {
    if !cov.iter().all(|c| c.is_finite()) {
        return Err(StateError::NonFiniteCovariance { group });
    }
    for axis in 0..3 {
        if cov[(axis, axis)] < 0.0 {
            return Err(StateError::NegativeVariance { group, axis });
        }
    }
    for i in 0..3 {
        for j in (i + 1)..3 {
            if (cov[(i, j)] - cov[(j, i)]).abs() > SYMMETRY_TOLERANCE {
                return Err(StateError::AsymmetricCovariance { group });
            }
        }
    }
    Ok(())
}
