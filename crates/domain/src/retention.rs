//! Retention window policy and cutoff arithmetic.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use maildeck_core::{AppError, AppResult};

/// Default retention window applied when no override is configured.
pub const DEFAULT_RETENTION_DAYS: u32 = 31;

const SECONDS_PER_DAY: i64 = 86_400;

/// Immutable retention window policy.
///
/// Constructed once at process start; the cutoff is derived fresh on every
/// sweep so two sweeps in the same run may observe slightly different
/// cutoffs, which is acceptable for disjoint collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    retention_days: u32,
}

impl RetentionPolicy {
    /// Creates a policy for the given retention window in days.
    ///
    /// A zero-day window would make the cutoff equal to `now` and qualify
    /// every record for deletion, so it is rejected here rather than
    /// checked per sweep.
    pub fn new(retention_days: u32) -> AppResult<Self> {
        if retention_days == 0 {
            return Err(AppError::Validation(
                "retention window must be at least one day".to_owned(),
            ));
        }

        Ok(Self { retention_days })
    }

    /// Returns the retention window length in days.
    #[must_use]
    pub fn retention_days(&self) -> u32 {
        self.retention_days
    }

    /// Computes the deletion cutoff for the given instant.
    ///
    /// Records whose age field is strictly before the returned instant are
    /// eligible for deletion. Pure and total: `now - retention_days * 86400s`.
    #[must_use]
    pub fn cutoff_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::seconds(i64::from(self.retention_days) * SECONDS_PER_DAY)
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}
