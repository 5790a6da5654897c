//! In-memory waypoint store backend for Waymark.
//!
//! This crate provides an in-memory implementation of the store contracts
//! from `waymark-storage`, using papaya lock-free HashMap for concurrent
//! access. It is the reference backend: integration tests run the full
//! fetch/reconcile/apply loop against two instances of it.
//!
//! # Example
//!
//! ```ignore
//! use waymark_core::{StoreId, Waypoint};
//! use waymark_db_memory::MemoryWaypointStore;
//! use waymark_storage::WaypointProvider;
//!
//! let store = MemoryWaypointStore::new(StoreId::A);
//! store.seed(Waypoint::new("Base", 0, 64, 0, "overworld", StoreId::A.source_tag()));
//! let snapshot = store.snapshot(None).await?;
//! ```

mod store;

pub use store::MemoryWaypointStore;

// Re-export the store contracts for convenience
pub use waymark_storage::{StorageError, WaypointProvider, WaypointStore, WaypointWriter};
