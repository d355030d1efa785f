//! PostgreSQL-backed retention store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use maildeck_application::RetentionStore;
use maildeck_core::{AppError, AppResult};
use maildeck_domain::SweepTarget;

/// PostgreSQL implementation of the retention store port.
///
/// Each sweep is a single `DELETE` statement, so no record is read before
/// removal and no transaction beyond the statement itself is needed.
#[derive(Clone)]
pub struct PostgresRetentionStore {
    pool: PgPool,
}

impl PostgresRetentionStore {
    /// Creates a store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RetentionStore for PostgresRetentionStore {
    async fn delete_older_than(
        &self,
        target: &SweepTarget,
        cutoff: DateTime<Utc>,
    ) -> AppResult<u64> {
        // Table and column names cannot be bound as parameters. Both are
        // validated snake_case identifiers at construction, so splicing the
        // quoted forms into the statement is safe.
        let statement = format!(
            r#"DELETE FROM "{collection}" WHERE "{age_field}" < $1"#,
            collection = target.collection().as_str(),
            age_field = target.age_field().as_str(),
        );

        let result = sqlx::query(statement.as_str())
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Store(format!(
                    "failed to delete expired records from '{}': {error}",
                    target.collection()
                ))
            })?;

        Ok(result.rows_affected())
    }
}
