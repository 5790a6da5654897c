//! Convergence operations and their results.

use serde::{Deserialize, Serialize};

use crate::waypoint::{Waypoint, WaypointSource};

/// Names one of the two concrete stores as an operation target.
///
/// Distinct from [`WaypointSource`]: a record can be tagged `SYNCED`, but an
/// operation can only ever be applied to store A or store B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreId {
    /// Store A.
    #[serde(rename = "STORE_A")]
    A,
    /// Store B.
    #[serde(rename = "STORE_B")]
    B,
}

impl StoreId {
    /// The opposite store.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// The source tag carried by records natively authored in this store.
    #[must_use]
    pub fn source_tag(self) -> WaypointSource {
        match self {
            Self::A => WaypointSource::StoreA,
            Self::B => WaypointSource::StoreB,
        }
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "STORE_A"),
            Self::B => write!(f, "STORE_B"),
        }
    }
}

/// The kind of change a convergence operation performs at its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SyncAction {
    /// Write a record that the target does not have.
    Create,
    /// Replace the target's record at this location. Carries
    /// delete-then-create semantics: the applier removes any existing record
    /// at the payload's location or source id before writing the new
    /// version. There is no partial-field patch.
    Update,
    /// Remove the target's record at this location.
    Delete,
}

impl std::fmt::Display for SyncAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "CREATE"),
            Self::Update => write!(f, "UPDATE"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single convergence instruction for one target store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOperation {
    /// What to do at the target.
    pub action: SyncAction,
    /// The record payload.
    pub waypoint: Waypoint,
    /// Which store the operation must be applied to.
    pub target_store: StoreId,
}

impl SyncOperation {
    /// Creates a new `SyncOperation`.
    #[must_use]
    pub fn new(action: SyncAction, waypoint: Waypoint, target_store: StoreId) -> Self {
        Self {
            action,
            waypoint,
            target_store,
        }
    }
}

/// Outcome of applying one [`SyncOperation`] to its target store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOperationResult {
    /// The operation that was applied.
    pub operation: SyncOperation,
    /// Whether the target store accepted it.
    pub success: bool,
    /// Failure detail, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SyncOperationResult {
    /// A successful outcome.
    #[must_use]
    pub fn ok(operation: SyncOperation) -> Self {
        Self {
            operation,
            success: true,
            message: None,
        }
    }

    /// A failed outcome with detail.
    #[must_use]
    pub fn failed(operation: SyncOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            success: false,
            message: Some(message.into()),
        }
    }
}
