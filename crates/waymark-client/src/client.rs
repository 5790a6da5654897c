//! The sync client.

use std::sync::Arc;

use waymark_config::SyncConfig;
use waymark_core::{
    StoreId, SyncOperation, SyncOperationResult, WaypointDiff, reconcile,
};
use waymark_storage::{Snapshot, WaypointStore};

use crate::cache::SnapshotCache;
use crate::error::SyncError;

/// Composes the two stores with the reconciliation engine.
///
/// Store A is treated as the local, cheap-to-read side and store B as the
/// remote one whose snapshot a caller may want to keep in a
/// [`SnapshotCache`] between passes. Both are reached only through the
/// store contracts; the client decides nothing about conflicts and applies
/// exactly the operations the caller hands it.
pub struct SyncClient {
    store_a: Arc<dyn WaypointStore>,
    store_b: Arc<dyn WaypointStore>,
    config: SyncConfig,
}

impl SyncClient {
    /// Creates a client over the two stores.
    #[must_use]
    pub fn new(
        store_a: Arc<dyn WaypointStore>,
        store_b: Arc<dyn WaypointStore>,
        config: SyncConfig,
    ) -> Self {
        Self {
            store_a,
            store_b,
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    fn store(&self, store_id: StoreId) -> &dyn WaypointStore {
        match store_id {
            StoreId::A => self.store_a.as_ref(),
            StoreId::B => self.store_b.as_ref(),
        }
    }

    /// Fetches one store's snapshot, bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::FetchTimeout` when the store does not answer in
    /// time and passes store failures through.
    pub async fn fetch(&self, store_id: StoreId) -> Result<Snapshot, SyncError> {
        let store = self.store(store_id);
        let timeout = self.config.fetch_timeout();
        let dimension = self.config.dimension.as_deref();

        match tokio::time::timeout(timeout, store.snapshot(dimension)).await {
            Ok(result) => {
                let snapshot = result?;
                tracing::debug!(
                    store = %store_id,
                    backend = store.backend_name(),
                    count = snapshot.len(),
                    "fetched snapshot"
                );
                Ok(snapshot)
            }
            Err(_) => Err(SyncError::FetchTimeout {
                store: store_id,
                timeout,
            }),
        }
    }

    /// Fetches both snapshots concurrently and reconciles them.
    ///
    /// The diff is computed in the completion path of the fetches; there is
    /// no fixed delay anywhere. Dropping the returned future cancels both
    /// in-flight fetches.
    ///
    /// # Errors
    ///
    /// Fails when either fetch fails or times out.
    pub async fn reconcile(&self) -> Result<WaypointDiff, SyncError> {
        let (snapshot_a, snapshot_b) =
            tokio::try_join!(self.fetch(StoreId::A), self.fetch(StoreId::B))?;

        let diff = reconcile(&snapshot_a.waypoints, &snapshot_b.waypoints);
        tracing::info!(
            only_in_a = diff.only_in_a.len(),
            only_in_b = diff.only_in_b.len(),
            conflicts = diff.conflicts.len(),
            synced = diff.synced.len(),
            "reconciliation pass complete"
        );
        Ok(diff)
    }

    /// Fetches a fresh snapshot of store B into the caller's cache.
    ///
    /// # Errors
    ///
    /// The cache is left untouched when the fetch fails or times out.
    pub async fn refresh_remote(&self, cache: &mut SnapshotCache) -> Result<(), SyncError> {
        let snapshot = self.fetch(StoreId::B).await?;
        cache.update(snapshot);
        Ok(())
    }

    /// Reconciles a live store A snapshot against the cached store B one.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::CacheEmpty` when the cache was never populated;
    /// the caller refreshes first via [`SyncClient::refresh_remote`].
    pub async fn reconcile_cached(
        &self,
        cache: &SnapshotCache,
    ) -> Result<WaypointDiff, SyncError> {
        let cached = cache.get().ok_or(SyncError::CacheEmpty)?;
        let snapshot_a = self.fetch(StoreId::A).await?;
        Ok(reconcile(&snapshot_a.waypoints, &cached.waypoints))
    }

    /// Applies operations sequentially, each routed to its target store.
    ///
    /// A failed operation is reported in its result and does not abort the
    /// rest of the batch.
    pub async fn apply(&self, operations: &[SyncOperation]) -> Vec<SyncOperationResult> {
        let mut results = Vec::with_capacity(operations.len());
        for operation in operations {
            let result = match self.store(operation.target_store).apply(operation).await {
                Ok(()) => {
                    tracing::debug!(
                        action = %operation.action,
                        target = %operation.target_store,
                        waypoint = %operation.waypoint.name,
                        "applied operation"
                    );
                    SyncOperationResult::ok(operation.clone())
                }
                Err(err) => {
                    tracing::warn!(
                        action = %operation.action,
                        target = %operation.target_store,
                        waypoint = %operation.waypoint.name,
                        error = %err,
                        "operation rejected"
                    );
                    SyncOperationResult::failed(operation.clone(), err.to_string())
                }
            };
            results.push(result);
        }
        results
    }
}
