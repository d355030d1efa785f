use async_trait::async_trait;
use chrono::{DateTime, Utc};

use maildeck_core::AppResult;
use maildeck_domain::SweepTarget;

/// Store port for predicate deletes against one collection.
///
/// This is the only capability the retention core requires from the
/// persistence layer. Adapters fail with [`maildeck_core::AppError::Store`]
/// on connectivity or query problems.
#[async_trait]
pub trait RetentionStore: Send + Sync {
    /// Deletes every record in the target collection whose age field is
    /// strictly before `cutoff`, returning the number of records removed.
    ///
    /// A record whose age field equals `cutoff` exactly is retained.
    async fn delete_older_than(
        &self,
        target: &SweepTarget,
        cutoff: DateTime<Utc>,
    ) -> AppResult<u64>;
}
