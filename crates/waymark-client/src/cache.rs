//! Caller-owned cache of the most recent remote snapshot.

use waymark_storage::Snapshot;

/// Holds the most recent snapshot fetched from the remote store.
///
/// This is a plain value: the caller owns it, decides when it is refreshed,
/// and passes it into the client explicitly. Nothing here is shared or
/// global, and the reconciliation engine never sees the cache itself - only
/// the snapshot the caller extracts from it.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    snapshot: Option<Snapshot>,
}

impl SnapshotCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached snapshot.
    pub fn update(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
    }

    /// The cached snapshot, if one was ever stored.
    #[must_use]
    pub fn get(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Whether the cache has been populated.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Age of the cached snapshot, `None` when the cache is empty.
    #[must_use]
    pub fn age(&self) -> Option<time::Duration> {
        self.snapshot.as_ref().map(Snapshot::age)
    }

    /// Empties the cache.
    pub fn clear(&mut self) {
        self.snapshot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_core::WaypointSource;

    #[test]
    fn test_cache_lifecycle() {
        let mut cache = SnapshotCache::new();
        assert!(!cache.has_data());
        assert!(cache.get().is_none());
        assert!(cache.age().is_none());

        cache.update(Snapshot::new(WaypointSource::StoreB, Vec::new()));
        assert!(cache.has_data());
        assert!(cache.age().unwrap() >= time::Duration::ZERO);

        cache.clear();
        assert!(!cache.has_data());
    }

    #[test]
    fn test_update_replaces_previous_snapshot() {
        let mut cache = SnapshotCache::new();
        cache.update(Snapshot::new(WaypointSource::StoreB, Vec::new()));
        let first_taken_at = cache.get().unwrap().taken_at;

        cache.update(Snapshot::new(WaypointSource::StoreB, Vec::new()));
        assert!(cache.get().unwrap().taken_at >= first_taken_at);
    }
}
