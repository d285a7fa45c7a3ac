//! GatiTypes - Kinematic state exchange types for robotics pipelines
//!
//! The canonical sample passed between perception, estimation, and control
//! stages is [`RigidBodyState`]: pose, velocity, and angular velocity of a
//! tracked body at one instant, each paired with a 3x3 covariance.
//! Producers (estimators, drivers) fill samples in; consumers (planners,
//! controllers, loggers) check the validity predicates before trusting a
//! quantity.
//!
//! # Validity without flags
//!
//! Absence of information is encoded structurally: a quantity group is
//! unknown exactly when the diagonal of its covariance matrix is
//! +infinity. There is no separate boolean, so partially-filled samples
//! from different producers can be aggregated without any sample raising
//! an error. See the [`types::RigidBodyState`] docs for the per-group and
//! per-axis predicates.
//!
//! # Module layout
//!
//! - [`math`]: angle arithmetic and Euler extraction (no internal deps)
//! - [`types`]: the exchange value types ([`Time`], [`Pose`],
//!   [`RigidBodyState`])
//! - [`validation`]: opt-in producer-side sanity checks
//!
//! Frame conventions (ENU world, RFU body, body-to-world orientation) are
//! documented on [`RigidBodyState`]. Wire transport of these types is the
//! messaging layer's business; everything here derives serde and stops
//! there.

pub mod math;
pub mod types;
pub mod validation;

// Convenience re-exports (flat namespace for common use)
pub use types::{Pose, RigidBodyState, Time};
pub use validation::{validate, StateError};
