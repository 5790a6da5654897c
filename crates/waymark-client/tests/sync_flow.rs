//! End-to-end sync flow over two in-memory stores.
//!
//! Exercises the full loop the interactive flow performs: fetch both
//! snapshots, inspect the classified diff, synthesize the chosen
//! convergence operations, apply them, and re-reconcile to observe
//! convergence.

use std::sync::Arc;

use waymark_client::{SnapshotCache, SyncClient};
use waymark_config::SyncConfig;
use waymark_core::{
    StoreId, SyncAction, Waypoint, WaypointSource, synthesize, synthesize_all,
};
use waymark_db_memory::MemoryWaypointStore;

fn setup() -> (Arc<MemoryWaypointStore>, Arc<MemoryWaypointStore>, SyncClient) {
    let store_a = Arc::new(MemoryWaypointStore::new(StoreId::A));
    let store_b = Arc::new(MemoryWaypointStore::new(StoreId::B));
    let client = SyncClient::new(store_a.clone(), store_b.clone(), SyncConfig::default());
    (store_a, store_b, client)
}

fn waypoint(name: &str, x: i32) -> Waypoint {
    Waypoint::new(name, x, 64, 0, "minecraft:overworld", WaypointSource::StoreA)
}

#[tokio::test]
async fn push_missing_records_until_stores_converge() {
    let (store_a, store_b, client) = setup();
    store_a.seed(waypoint("Base", 10));
    store_a.seed(waypoint("Farm", 20));
    store_b.seed(waypoint("Outpost", 30));

    let diff = client.reconcile().await.expect("reconcile");
    assert_eq!(diff.only_in_a.len(), 2);
    assert_eq!(diff.only_in_b.len(), 1);
    assert!(diff.conflicts.is_empty());
    assert!(diff.has_changes());

    // Push each side's missing records to the other store.
    let mut operations = synthesize_all(&diff.only_in_a, SyncAction::Create, StoreId::B);
    operations.extend(synthesize_all(&diff.only_in_b, SyncAction::Create, StoreId::A));

    let results = client.apply(&operations).await;
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.success));

    let rerun = client.reconcile().await.expect("reconcile after apply");
    assert!(!rerun.has_changes());
    assert_eq!(rerun.synced.len(), 3);
}

#[tokio::test]
async fn conflict_resolved_by_update_to_target() {
    let (store_a, store_b, client) = setup();
    store_a.seed(waypoint("Base", 0).with_color(0xFF_0000));
    store_b.seed(waypoint("Base", 0).with_color(0x00_FF00));

    let diff = client.reconcile().await.expect("reconcile");
    assert_eq!(diff.conflicts.len(), 1);
    let conflict = &diff.conflicts[0];
    assert_eq!(conflict.differences, vec!["Color: #ff0000 vs #ff00".to_string()]);

    // Caller decides A wins and overwrites B's version.
    let operation = synthesize(&conflict.version_a, SyncAction::Update, StoreId::B);
    let results = client.apply(&[operation]).await;
    assert!(results[0].success);

    let rerun = client.reconcile().await.expect("reconcile after update");
    assert!(!rerun.has_changes());
    assert_eq!(rerun.synced.len(), 1);
    assert_eq!(rerun.synced[0].color, 0xFF_0000);
}

#[tokio::test]
async fn delete_converges_by_removing_foreign_record() {
    let (_store_a, store_b, client) = setup();
    store_b.seed(waypoint("Stale", 5));

    let diff = client.reconcile().await.expect("reconcile");
    assert_eq!(diff.only_in_b.len(), 1);

    // Caller decides the record should not exist anywhere.
    let operation = synthesize(&diff.only_in_b[0], SyncAction::Delete, StoreId::B);
    let results = client.apply(&[operation]).await;
    assert!(results[0].success);

    let rerun = client.reconcile().await.expect("reconcile after delete");
    assert!(!rerun.has_changes());
    assert!(rerun.synced.is_empty());
}

#[tokio::test]
async fn failed_operation_reports_but_does_not_abort_batch() {
    let (store_a, store_b, client) = setup();
    store_a.seed(waypoint("Base", 0));
    store_b.seed(waypoint("Base", 0).with_color(0x12_3456));
    store_a.seed(waypoint("Farm", 1));

    let diff = client.reconcile().await.expect("reconcile");
    assert_eq!(diff.conflicts.len(), 1);
    assert_eq!(diff.only_in_a.len(), 1);

    // CREATE onto the conflicting location is rejected; the following
    // operation still runs.
    let operations = vec![
        synthesize(&diff.conflicts[0].version_a, SyncAction::Create, StoreId::B),
        synthesize(&diff.only_in_a[0], SyncAction::Create, StoreId::B),
    ];

    let results = client.apply(&operations).await;
    assert_eq!(results.len(), 2);
    assert!(!results[0].success);
    assert!(results[0].message.as_deref().unwrap_or("").contains("already exists"));
    assert!(results[1].success);

    let rerun = client.reconcile().await.expect("reconcile after batch");
    assert_eq!(rerun.conflicts.len(), 1);
    assert_eq!(rerun.synced.len(), 1);
}

#[tokio::test]
async fn cached_remote_snapshot_flow() {
    let (store_a, store_b, client) = setup();
    store_a.seed(waypoint("Base", 0));
    store_b.seed(waypoint("Base", 0));
    store_b.seed(waypoint("Remote", 9));

    let mut cache = SnapshotCache::new();
    client.refresh_remote(&mut cache).await.expect("refresh");
    assert!(cache.has_data());

    let diff = client.reconcile_cached(&cache).await.expect("cached reconcile");
    assert_eq!(diff.synced.len(), 1);
    assert_eq!(diff.only_in_b.len(), 1);

    // The cache is a point-in-time view: store B changing underneath does
    // not affect passes against the old snapshot.
    store_b.seed(waypoint("Newer", 11));
    let stale = client.reconcile_cached(&cache).await.expect("stale reconcile");
    assert_eq!(stale.only_in_b.len(), 1);

    // A refresh picks the change up.
    client.refresh_remote(&mut cache).await.expect("second refresh");
    let fresh = client.reconcile_cached(&cache).await.expect("fresh reconcile");
    assert_eq!(fresh.only_in_b.len(), 2);
}

#[tokio::test]
async fn synced_write_back_survives_round_trip_through_store() {
    let (store_a, _store_b, client) = setup();
    store_a.seed(waypoint("Base", 0));

    let diff = client.reconcile().await.expect("reconcile");
    let operation = synthesize(&diff.only_in_a[0], SyncAction::Create, StoreId::B);
    client.apply(&[operation]).await;

    // The write-back keeps its SYNCED tag through the store.
    let snapshot_b = client.fetch(StoreId::B).await.expect("fetch B");
    assert_eq!(snapshot_b.waypoints[0].source, WaypointSource::Synced);

    let rerun = client.reconcile().await.expect("reconcile after apply");
    assert_eq!(rerun.synced.len(), 1);
    assert!(!rerun.has_changes());
}
