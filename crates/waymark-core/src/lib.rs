//! # waymark-core
//!
//! Canonical waypoint record model and the reconciliation engine.
//!
//! This crate is pure and synchronous: [`reconcile`] is a function of its two
//! input snapshots and nothing else, so it is safe to call concurrently with
//! different snapshots. Fetching snapshots from real stores and applying the
//! resulting [`SyncOperation`]s belongs to the storage and client crates.

pub mod diff;
pub mod id;
pub mod location;
pub mod operation;
pub mod reconcile;
pub mod waypoint;

pub use diff::{WaypointConflict, WaypointDiff, diff_reasons};
pub use id::generate_sync_id;
pub use location::LocationKey;
pub use operation::{StoreId, SyncAction, SyncOperation, SyncOperationResult};
pub use reconcile::{reconcile, synthesize, synthesize_all};
pub use waypoint::{Waypoint, WaypointSource};
