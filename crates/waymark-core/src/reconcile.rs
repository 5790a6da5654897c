//! The reconciliation engine: matching, classification and operation
//! synthesis.
//!
//! [`reconcile`] is a pure function of its two input snapshots. It holds no
//! cache and retains nothing across calls; staleness tracking of snapshots is
//! the caller's concern.

use std::collections::HashMap;

use crate::diff::{WaypointConflict, WaypointDiff};
use crate::location::LocationKey;
use crate::operation::{StoreId, SyncAction, SyncOperation};
use crate::waypoint::{Waypoint, WaypointSource};

/// Compares two store snapshots and classifies every record.
///
/// Each record of `store_a` lands in exactly one of `only_in_a`, `synced`, or
/// `conflicts` (as `version_a`); each record of `store_b` in exactly one of
/// `only_in_b`, `synced`, or `conflicts` (as `version_b`). Matching is done
/// solely on [`LocationKey`]; matched-but-divergent pairs carry the A-side
/// record as their representative, so `synced` and `conflicts` follow A's
/// input order while `only_in_b` follows B's.
///
/// Duplicate location keys within one input are a caller error but are
/// tolerated: the later entry in input order wins and the superseded one is
/// reported through a `tracing::warn!` event.
///
/// Runs in O(|A| + |B|) time and auxiliary space.
#[must_use]
pub fn reconcile(store_a: &[Waypoint], store_b: &[Waypoint]) -> WaypointDiff {
    let mut only_in_a = Vec::new();
    let mut only_in_b = Vec::new();
    let mut conflicts = Vec::new();
    let mut synced = Vec::new();

    let b_by_location = index_by_location(store_b);

    for a in store_a {
        match b_by_location.get(&a.location_key()) {
            None => only_in_a.push(a.clone()),
            Some(b) if a.is_identical(b) => synced.push(a.clone()),
            Some(b) => conflicts.push(WaypointConflict::new(a.clone(), (*b).clone())),
        }
    }

    let a_by_location = index_by_location(store_a);

    for b in store_b {
        // Matches and conflicts were already captured from A's perspective.
        if !a_by_location.contains_key(&b.location_key()) {
            only_in_b.push(b.clone());
        }
    }

    WaypointDiff {
        only_in_a,
        only_in_b,
        conflicts,
        synced,
    }
}

fn index_by_location(waypoints: &[Waypoint]) -> HashMap<LocationKey, &Waypoint> {
    let mut by_location = HashMap::with_capacity(waypoints.len());
    for waypoint in waypoints {
        if let Some(superseded) = by_location.insert(waypoint.location_key(), waypoint) {
            tracing::warn!(
                location = %waypoint.location_key(),
                superseded = %superseded.name,
                kept = %waypoint.name,
                "duplicate location key within one snapshot, keeping the later entry"
            );
        }
    }
    by_location
}

/// Builds a convergence operation from one diff entry.
///
/// The engine never decides which side of a conflict wins: the caller picks
/// the record (a lone waypoint from `only_in_a`/`only_in_b`, or one side of a
/// conflict), the action, and the target store. For [`SyncAction::Create`]
/// the payload's source is reassigned to [`WaypointSource::Synced`] so that a
/// later reconciliation pass against the updated target classifies the
/// record as synced instead of re-reporting it as foreign.
#[must_use]
pub fn synthesize(waypoint: &Waypoint, action: SyncAction, target_store: StoreId) -> SyncOperation {
    let mut payload = waypoint.clone();
    if action == SyncAction::Create {
        payload.source = WaypointSource::Synced;
    }
    SyncOperation::new(action, payload, target_store)
}

/// Builds one operation per waypoint, preserving order.
///
/// Covers the "push everything on this side" flow over a whole diff section.
#[must_use]
pub fn synthesize_all(
    waypoints: &[Waypoint],
    action: SyncAction,
    target_store: StoreId,
) -> Vec<SyncOperation> {
    waypoints
        .iter()
        .map(|waypoint| synthesize(waypoint, action, target_store))
        .collect()
}
