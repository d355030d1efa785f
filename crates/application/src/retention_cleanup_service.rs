//! Retention cleanup service.
//!
//! Sweeps expired records out of the cloned email and created list
//! collections. Each sweep reports its result as a [`SweepOutcome`] instead
//! of failing, so [`RetentionCleanupService::run_cleanup`] always produces a
//! full [`CleanupReport`] even when the store is unreachable. Unattended
//! schedulers can therefore call it without any error handling of their own.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

use maildeck_domain::{CollectionName, RetentionPolicy, SweepTarget};

use crate::retention_ports::RetentionStore;

/// Result of one deletion pass over a single collection.
#[derive(Debug, Clone, Serialize)]
pub struct SweepOutcome {
    /// Collection the sweep ran against.
    pub collection: CollectionName,
    /// Whether the store delete succeeded.
    pub success: bool,
    /// Number of records removed. Always zero when `success` is false.
    pub deleted_count: u64,
    /// Cutoff instant the sweep used; records strictly older were deleted.
    pub cutoff: DateTime<Utc>,
    /// Failure description when `success` is false.
    pub error: Option<String>,
}

impl SweepOutcome {
    fn succeeded(target: &SweepTarget, deleted_count: u64, cutoff: DateTime<Utc>) -> Self {
        Self {
            collection: target.collection().clone(),
            success: true,
            deleted_count,
            cutoff,
            error: None,
        }
    }

    fn failed(target: &SweepTarget, cutoff: DateTime<Utc>, error: String) -> Self {
        Self {
            collection: target.collection().clone(),
            success: false,
            deleted_count: 0,
            cutoff,
            error: Some(error),
        }
    }
}

/// Aggregate result of one retention cleanup run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanupReport {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Retention window in effect, in days.
    pub retention_days: u32,
    /// Outcome of the cloned email sweep.
    pub cloned_emails: SweepOutcome,
    /// Outcome of the created list sweep.
    pub created_lists: SweepOutcome,
}

impl CleanupReport {
    /// Total records removed across both sweeps.
    #[must_use]
    pub fn total_deleted(&self) -> u64 {
        self.cloned_emails.deleted_count + self.created_lists.deleted_count
    }
}

/// Application service that sweeps expired records from both collections.
#[derive(Clone)]
pub struct RetentionCleanupService {
    store: Arc<dyn RetentionStore>,
    policy: RetentionPolicy,
    cloned_emails: SweepTarget,
    created_lists: SweepTarget,
}

impl RetentionCleanupService {
    /// Creates a service from a store implementation and a retention policy.
    #[must_use]
    pub fn new(store: Arc<dyn RetentionStore>, policy: RetentionPolicy) -> Self {
        Self {
            store,
            policy,
            cloned_emails: SweepTarget::cloned_emails(),
            created_lists: SweepTarget::created_lists(),
        }
    }

    /// Runs both sweeps and aggregates their outcomes.
    ///
    /// Never fails: store errors are captured inside the per-collection
    /// outcomes, and a failure in one collection does not prevent the other
    /// collection from being swept.
    pub async fn run_cleanup(&self) -> CleanupReport {
        let started_at = Utc::now();
        info!(
            retention_days = self.policy.retention_days(),
            "starting retention cleanup"
        );

        let cloned_emails = self.sweep(&self.cloned_emails).await;
        let created_lists = self.sweep(&self.created_lists).await;

        let report = CleanupReport {
            started_at,
            retention_days: self.policy.retention_days(),
            cloned_emails,
            created_lists,
        };

        info!(
            cloned_emails_deleted = report.cloned_emails.deleted_count,
            created_lists_deleted = report.created_lists.deleted_count,
            total_deleted = report.total_deleted(),
            "retention cleanup completed"
        );

        report
    }

    /// Deletes expired records from one collection.
    ///
    /// The cutoff is computed fresh from the wall clock on every call.
    /// Store failures are converted into a failed outcome here and never
    /// propagate to the caller. Zero qualifying records is a success.
    pub async fn sweep(&self, target: &SweepTarget) -> SweepOutcome {
        let cutoff = self.policy.cutoff_from(Utc::now());

        match self.store.delete_older_than(target, cutoff).await {
            Ok(deleted_count) => {
                info!(
                    collection = %target.collection(),
                    deleted_count,
                    cutoff = %cutoff,
                    "deleted records older than retention window"
                );
                SweepOutcome::succeeded(target, deleted_count, cutoff)
            }
            Err(store_error) => {
                error!(
                    collection = %target.collection(),
                    cutoff = %cutoff,
                    error = %store_error,
                    "retention sweep failed"
                );
                SweepOutcome::failed(target, cutoff, store_error.to_string())
            }
        }
    }
}
