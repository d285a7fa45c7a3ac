//! Sample timestamp type.

use serde::{Deserialize, Serialize};
use std::ops::Sub;
use std::time::{SystemTime, UNIX_EPOCH};

/// Timestamp of an estimate or measurement.
///
/// Microseconds since the Unix epoch. A zero value means "never stamped"
/// and is what [`Time::default`] returns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Time {
    /// Microseconds since the Unix epoch
    pub microseconds: u64,
}

impl Time {
    /// Create from a microsecond count.
    #[inline]
    pub fn from_micros(microseconds: u64) -> Self {
        Self { microseconds }
    }

    /// Create from seconds. Negative or NaN input saturates to zero.
    #[inline]
    pub fn from_secs_f64(seconds: f64) -> Self {
        Self {
            microseconds: (seconds * 1_000_000.0) as u64,
        }
    }

    /// Current wall-clock time. Falls back to zero if the system clock
    /// reports a pre-epoch time.
    pub fn now() -> Self {
        let microseconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0);
        Self { microseconds }
    }

    /// Microsecond count since the epoch.
    #[inline]
    pub fn as_micros(&self) -> u64 {
        self.microseconds
    }

    /// Seconds since the epoch.
    #[inline]
    pub fn as_secs_f64(&self) -> f64 {
        self.microseconds as f64 / 1_000_000.0
    }

    /// True for the "never stamped" sentinel.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.microseconds == 0
    }
}

impl Sub for Time {
    type Output = i64;

    /// Signed difference `self - rhs` in microseconds.
    #[inline]
    fn sub(self, rhs: Time) -> i64 {
        self.microseconds as i64 - rhs.microseconds as i64
    }
}
