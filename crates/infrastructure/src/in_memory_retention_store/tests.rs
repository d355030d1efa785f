use chrono::{DateTime, Duration, Utc};

use maildeck_application::RetentionStore;
use maildeck_domain::{FieldName, SweepTarget};

use super::InMemoryRetentionStore;

fn parse_instant(value: &str) -> DateTime<Utc> {
    value
        .parse::<DateTime<Utc>>()
        .unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn deletes_records_strictly_older_than_the_cutoff() {
    let store = InMemoryRetentionStore::new();
    let target = SweepTarget::cloned_emails();
    let cutoff = parse_instant("2024-01-15T00:00:00Z");

    store
        .insert(
            target.collection(),
            target.age_field(),
            parse_instant("2024-01-10T00:00:00Z"),
        )
        .await;
    store
        .insert(
            target.collection(),
            target.age_field(),
            parse_instant("2024-01-20T00:00:00Z"),
        )
        .await;

    let deleted = store.delete_older_than(&target, cutoff).await;

    assert!(deleted.is_ok());
    assert_eq!(deleted.unwrap_or_default(), 1);
    assert_eq!(store.count(target.collection()).await, 1);
}

#[tokio::test]
async fn retains_a_record_whose_age_equals_the_cutoff_exactly() {
    let store = InMemoryRetentionStore::new();
    let target = SweepTarget::created_lists();
    let cutoff = parse_instant("2024-01-15T00:00:00Z");

    store
        .insert(target.collection(), target.age_field(), cutoff)
        .await;
    store
        .insert(
            target.collection(),
            target.age_field(),
            cutoff - Duration::seconds(1),
        )
        .await;

    let deleted = store.delete_older_than(&target, cutoff).await;

    assert!(deleted.is_ok());
    assert_eq!(deleted.unwrap_or_default(), 1);
    assert_eq!(store.count(target.collection()).await, 1);
}

#[tokio::test]
async fn repeated_sweeps_delete_nothing_new() {
    let store = InMemoryRetentionStore::new();
    let target = SweepTarget::cloned_emails();
    let cutoff = Utc::now();

    for offset_days in [1_i64, 5, 40] {
        store
            .insert(
                target.collection(),
                target.age_field(),
                cutoff - Duration::days(offset_days),
            )
            .await;
    }

    let first = store.delete_older_than(&target, cutoff).await;
    assert_eq!(first.unwrap_or_default(), 3);

    let second = store.delete_older_than(&target, cutoff).await;
    assert_eq!(second.unwrap_or_default(), 0);
}

#[tokio::test]
async fn sweeping_one_collection_leaves_the_other_untouched() {
    let store = InMemoryRetentionStore::new();
    let cloned_emails = SweepTarget::cloned_emails();
    let created_lists = SweepTarget::created_lists();
    let cutoff = Utc::now();

    store
        .insert(
            cloned_emails.collection(),
            cloned_emails.age_field(),
            cutoff - Duration::days(2),
        )
        .await;
    store
        .insert(
            created_lists.collection(),
            created_lists.age_field(),
            cutoff - Duration::days(2),
        )
        .await;

    let deleted = store.delete_older_than(&cloned_emails, cutoff).await;

    assert_eq!(deleted.unwrap_or_default(), 1);
    assert_eq!(store.count(cloned_emails.collection()).await, 0);
    assert_eq!(store.count(created_lists.collection()).await, 1);
}

#[tokio::test]
async fn records_without_the_age_field_are_retained() {
    let store = InMemoryRetentionStore::new();
    let target = SweepTarget::cloned_emails();
    let cutoff = Utc::now();

    let other_field = FieldName::new("updated_at").unwrap_or_else(|_| unreachable!());
    store
        .insert(target.collection(), &other_field, cutoff - Duration::days(90))
        .await;

    let deleted = store.delete_older_than(&target, cutoff).await;

    assert_eq!(deleted.unwrap_or_default(), 0);
    assert_eq!(store.count(target.collection()).await, 1);
}

#[tokio::test]
async fn sweeping_an_unknown_collection_deletes_nothing() {
    let store = InMemoryRetentionStore::new();
    let target = SweepTarget::created_lists();

    let deleted = store.delete_older_than(&target, Utc::now()).await;

    assert_eq!(deleted.unwrap_or_default(), 0);
}
