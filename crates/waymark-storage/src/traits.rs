//! Store traits for waypoint synchronization backends.

use async_trait::async_trait;

use waymark_core::{SyncOperation, WaypointSource};

use crate::error::StorageError;
use crate::types::Snapshot;

/// Materializes snapshots of one store's current waypoint records.
///
/// The call may be slow, may fail, and may return a view that is already
/// stale; the caller treats whatever it receives as ground truth for one
/// reconciliation pass. Retries, if any, are the implementation's own
/// responsibility. Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait WaypointProvider: Send + Sync {
    /// Returns the store's current records, in the store's own order.
    ///
    /// When `dimension` is given, only records in that dimension are
    /// returned (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues; an empty store is a
    /// valid, empty snapshot.
    async fn snapshot(&self, dimension: Option<&str>) -> Result<Snapshot, StorageError>;

    /// The source tag this store assigns to its natively authored records.
    fn source(&self) -> WaypointSource;

    /// Name of this backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

/// Applies convergence operations to one store.
#[async_trait]
pub trait WaypointWriter: Send + Sync {
    /// Performs the operation's CREATE/UPDATE/DELETE against this store.
    ///
    /// UPDATE carries delete-then-create semantics: any existing record at
    /// the payload's source id or location is removed before the new version
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` when a CREATE hits an occupied
    /// location, and `StorageError::NotFound` when a DELETE finds nothing to
    /// remove.
    async fn apply(&self, operation: &SyncOperation) -> Result<(), StorageError>;
}

/// A store that supports both sides of the synchronization flow.
pub trait WaypointStore: WaypointProvider + WaypointWriter {}

impl<T: WaypointProvider + WaypointWriter> WaypointStore for T {}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test that WaypointProvider is object-safe
    fn _assert_provider_object_safe(_: &dyn WaypointProvider) {}

    // Compile-time test that WaypointWriter is object-safe
    fn _assert_writer_object_safe(_: &dyn WaypointWriter) {}

    // Compile-time test that WaypointStore is object-safe
    fn _assert_store_object_safe(_: &dyn WaypointStore) {}
}
