//! Exchange value types.
//!
//! - [`Time`]: microsecond sample timestamp
//! - [`Pose`]: 3D position + orientation pair
//! - [`RigidBodyState`]: timestamped kinematic state with per-group
//!   covariance, the canonical sample passed between pipeline stages

mod pose;
mod rigid_body_state;
mod time;

pub use pose::Pose;
pub use rigid_body_state::RigidBodyState;
pub use time::Time;
