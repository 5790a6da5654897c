//! # waymark-storage
//!
//! Store contracts for the Waymark waypoint synchronizer.
//!
//! This crate defines the traits a concrete waypoint store must implement.
//! It contains no implementations - those are provided by separate crates.
//!
//! ## Overview
//!
//! A store participates in synchronization through two contracts:
//! - [`WaypointProvider`] materializes a [`Snapshot`] of the store's current
//!   records (the snapshot may be slow to produce, may fail, and may already
//!   be stale by the time it is consumed; the reconciliation engine treats
//!   whatever it receives as ground truth for that pass).
//! - [`WaypointWriter`] applies a single `SyncOperation` to the store.
//!
//! [`WaypointStore`] combines the two for backends that support both sides.
//!
//! ## Example
//!
//! ```ignore
//! use waymark_storage::{Snapshot, StorageError, WaypointProvider};
//!
//! async fn overworld_snapshot(
//!     store: &dyn WaypointProvider,
//! ) -> Result<Snapshot, StorageError> {
//!     store.snapshot(Some("minecraft:overworld")).await
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::{ErrorCategory, StorageError};
pub use traits::{WaypointProvider, WaypointStore, WaypointWriter};
pub use types::Snapshot;

/// Type alias for a storage result.
pub type StorageResult<T> = Result<T, StorageError>;

/// Type alias for a shared store trait object.
pub type DynStore = std::sync::Arc<dyn WaypointStore>;
