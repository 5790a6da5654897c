//! # waymark-client
//!
//! The composition layer of Waymark: fetch snapshots from both stores,
//! reconcile them, and apply the caller's chosen convergence operations.
//!
//! The reconciliation engine itself is pure; this crate owns everything
//! around it that is allowed to wait or fail. Reconciliation is always
//! triggered by the completion of a snapshot fetch - awaiting the fetch
//! future *is* the synchronization barrier, there is no timer-based wait.
//! Dropping a [`SyncClient`] future cancels the in-flight fetch.
//!
//! The most recent remote snapshot can be kept in a [`SnapshotCache`], a
//! plain value owned by the caller and passed in explicitly; the client
//! holds no process-wide state.

mod cache;
mod client;
mod error;

pub use cache::SnapshotCache;
pub use client::SyncClient;
pub use error::SyncError;
