//! Storage types shared by all waypoint store backends.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use waymark_core::{Waypoint, WaypointSource};

/// A materialized view of one store's records at a point in time.
///
/// A snapshot may already be stale by the time it is consumed; the
/// reconciliation engine treats it as ground truth for a single pass and the
/// caller decides when to fetch a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The source tag of the store this snapshot was taken from.
    pub source: WaypointSource,
    /// The store's records, in the store's own order.
    pub waypoints: Vec<Waypoint>,
    /// When the snapshot was materialized.
    #[serde(with = "time::serde::rfc3339")]
    pub taken_at: OffsetDateTime,
}

impl Snapshot {
    /// Creates a snapshot stamped with the current time.
    #[must_use]
    pub fn new(source: WaypointSource, waypoints: Vec<Waypoint>) -> Self {
        Self {
            source,
            waypoints,
            taken_at: OffsetDateTime::now_utc(),
        }
    }

    /// Returns the number of records in this snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns true if the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Time elapsed since the snapshot was materialized.
    #[must_use]
    pub fn age(&self) -> time::Duration {
        OffsetDateTime::now_utc() - self.taken_at
    }
}
