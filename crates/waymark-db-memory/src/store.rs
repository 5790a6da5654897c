use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use papaya::HashMap as PapayaHashMap;

use waymark_core::{LocationKey, StoreId, SyncAction, SyncOperation, Waypoint, WaypointSource};
use waymark_storage::{Snapshot, StorageError, WaypointProvider, WaypointWriter};

/// A record as held by the memory backend.
///
/// The sequence number fixes snapshot order to insertion order, since the
/// underlying map itself has none.
#[derive(Debug, Clone)]
struct StoredWaypoint {
    seq: u64,
    waypoint: Waypoint,
}

/// In-memory waypoint store using papaya lock-free HashMap.
///
/// Records are keyed by a generated native id (the id a real store would
/// assign to a marker). Write-backs keep their `SYNCED` source tag, so a
/// reconciliation pass after an apply classifies them correctly; natively
/// authored records enter through [`MemoryWaypointStore::seed`] and carry
/// this store's own tag.
#[derive(Debug)]
pub struct MemoryWaypointStore {
    store_id: StoreId,
    data: PapayaHashMap<String, StoredWaypoint>,
    seq_counter: AtomicU64,
}

impl MemoryWaypointStore {
    /// Creates an empty store for the given side.
    #[must_use]
    pub fn new(store_id: StoreId) -> Self {
        Self {
            store_id,
            data: PapayaHashMap::new(),
            seq_counter: AtomicU64::new(1),
        }
    }

    /// Which side of the sync this store plays.
    #[must_use]
    pub fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// Ingests a natively authored record: tags it with this store's source
    /// and a fresh native id, then inserts it. Returns the native id.
    ///
    /// Existing records at the same location are not checked; a store can
    /// natively hold duplicates and the reconciliation engine tolerates
    /// them.
    pub fn seed(&self, waypoint: Waypoint) -> String {
        let native_id = uuid::Uuid::new_v4().to_string();
        let waypoint = waypoint
            .with_source(self.store_id.source_tag())
            .with_source_id(native_id.clone());
        self.insert(native_id.clone(), waypoint);
        native_id
    }

    /// Returns the number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        let guard = self.data.pin();
        guard.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn next_seq(&self) -> u64 {
        self.seq_counter.fetch_add(1, Ordering::SeqCst)
    }

    fn insert(&self, native_id: String, waypoint: Waypoint) {
        let stored = StoredWaypoint {
            seq: self.next_seq(),
            waypoint,
        };
        let guard = self.data.pin();
        guard.insert(native_id, stored);
    }

    /// Finds the native id of the record at the given location, if any.
    fn find_by_location(&self, location: &LocationKey) -> Option<(String, Waypoint)> {
        let guard = self.data.pin();
        guard
            .iter()
            .find(|(_, stored)| stored.waypoint.location_key() == *location)
            .map(|(native_id, stored)| (native_id.clone(), stored.waypoint.clone()))
    }

    /// Removes a record addressed by source id first, falling back to
    /// location. Returns the removed record, if any.
    fn remove_addressed(&self, waypoint: &Waypoint) -> Option<Waypoint> {
        if let Some(native_id) = &waypoint.source_id {
            let guard = self.data.pin();
            if let Some(stored) = guard.remove(native_id) {
                return Some(stored.waypoint.clone());
            }
        }

        let (native_id, removed) = self.find_by_location(&waypoint.location_key())?;
        let guard = self.data.pin();
        guard.remove(&native_id);
        Some(removed)
    }

    fn create(&self, waypoint: &Waypoint) -> Result<(), StorageError> {
        let location = waypoint.location_key();
        if let Some((_, existing)) = self.find_by_location(&location) {
            return Err(StorageError::already_exists(existing.name, location.to_string()));
        }

        let native_id = uuid::Uuid::new_v4().to_string();
        let waypoint = waypoint.clone().with_source_id(native_id.clone());
        self.insert(native_id, waypoint);
        Ok(())
    }

    fn delete(&self, waypoint: &Waypoint) -> Result<(), StorageError> {
        match self.remove_addressed(waypoint) {
            Some(removed) => {
                tracing::debug!(
                    store = %self.store_id,
                    name = %removed.name,
                    "removed waypoint"
                );
                Ok(())
            }
            None => Err(StorageError::not_found(
                waypoint.name.clone(),
                waypoint.location_key().to_string(),
            )),
        }
    }

    /// Delete-then-create. A missing predecessor is tolerated; the record is
    /// transiently absent between the two steps.
    fn update(&self, waypoint: &Waypoint) -> Result<(), StorageError> {
        self.remove_addressed(waypoint);

        let native_id = uuid::Uuid::new_v4().to_string();
        let replacement = waypoint.clone().with_source_id(native_id.clone());
        self.insert(native_id, replacement);
        Ok(())
    }
}

#[async_trait]
impl WaypointProvider for MemoryWaypointStore {
    async fn snapshot(&self, dimension: Option<&str>) -> Result<Snapshot, StorageError> {
        let guard = self.data.pin();
        let mut entries: Vec<(u64, Waypoint)> = guard
            .iter()
            .filter(|(_, stored)| {
                dimension.is_none_or(|wanted| stored.waypoint.dimension == wanted)
            })
            .map(|(_, stored)| (stored.seq, stored.waypoint.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);

        let waypoints: Vec<Waypoint> = entries.into_iter().map(|(_, wp)| wp).collect();
        tracing::debug!(
            store = %self.store_id,
            count = waypoints.len(),
            "materialized snapshot"
        );
        Ok(Snapshot::new(self.source(), waypoints))
    }

    fn source(&self) -> WaypointSource {
        self.store_id.source_tag()
    }

    fn backend_name(&self) -> &'static str {
        "in-memory-papaya"
    }
}

#[async_trait]
impl WaypointWriter for MemoryWaypointStore {
    async fn apply(&self, operation: &SyncOperation) -> Result<(), StorageError> {
        match operation.action {
            SyncAction::Create => self.create(&operation.waypoint),
            SyncAction::Update => self.update(&operation.waypoint),
            SyncAction::Delete => self.delete(&operation.waypoint),
        }
    }
}
