use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use maildeck_application::RetentionStore;
use maildeck_core::AppResult;
use maildeck_domain::{CollectionName, FieldName, SweepTarget};

#[derive(Debug, Clone)]
struct StoredRecord {
    id: Uuid,
    timestamps: HashMap<String, DateTime<Utc>>,
}

/// In-memory retention store implementation.
///
/// Used by tests and local development in place of a real database.
#[derive(Debug, Default)]
pub struct InMemoryRetentionStore {
    collections: RwLock<HashMap<String, Vec<StoredRecord>>>,
}

impl InMemoryRetentionStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a record carrying a single timestamp field and returns its id.
    pub async fn insert(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        timestamp: DateTime<Utc>,
    ) -> Uuid {
        let record = StoredRecord {
            id: Uuid::new_v4(),
            timestamps: HashMap::from([(field.as_str().to_owned(), timestamp)]),
        };
        let id = record.id;

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.as_str().to_owned())
            .or_default()
            .push(record);

        id
    }

    /// Returns the number of records currently held in a collection.
    pub async fn count(&self, collection: &CollectionName) -> usize {
        let collections = self.collections.read().await;
        collections
            .get(collection.as_str())
            .map_or(0, |records| records.len())
    }
}

#[async_trait]
impl RetentionStore for InMemoryRetentionStore {
    async fn delete_older_than(
        &self,
        target: &SweepTarget,
        cutoff: DateTime<Utc>,
    ) -> AppResult<u64> {
        let mut collections = self.collections.write().await;

        let Some(records) = collections.get_mut(target.collection().as_str()) else {
            return Ok(0);
        };

        let before = records.len();
        // Records without the age field do not match the predicate and are
        // retained, as is a record whose age field equals the cutoff exactly.
        records.retain(|record| {
            record
                .timestamps
                .get(target.age_field().as_str())
                .is_none_or(|timestamp| *timestamp >= cutoff)
        });

        Ok((before - records.len()) as u64)
    }
}

#[cfg(test)]
mod tests;
