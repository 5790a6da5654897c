//! Classified reconciliation results.

use serde::{Deserialize, Serialize};

use crate::waypoint::Waypoint;

/// The classified result of one reconciliation pass.
///
/// The four sequences are disjoint: relative to a single pass, no waypoint
/// appears in more than one of them. Each sequence preserves the relative
/// order of its source snapshot. A `WaypointDiff` is constructed fresh by
/// every pass and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointDiff {
    /// Waypoints present only in store A (candidates to copy to B).
    pub only_in_a: Vec<Waypoint>,
    /// Waypoints present only in store B (candidates to copy to A).
    pub only_in_b: Vec<Waypoint>,
    /// Same-location waypoints whose tracked content diverges.
    pub conflicts: Vec<WaypointConflict>,
    /// Waypoints identical in both stores.
    pub synced: Vec<Waypoint>,
}

impl WaypointDiff {
    /// Creates a diff with all four sequences empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True iff anything diverges between the two stores.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.only_in_a.is_empty() || !self.only_in_b.is_empty() || !self.conflicts.is_empty()
    }

    /// True iff every sequence, including `synced`, is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_changes() && self.synced.is_empty()
    }
}

/// A pair of same-location waypoints whose tracked content differs.
///
/// `differences` is non-empty whenever the pair is classified as a conflict,
/// one human-readable line per divergent tracked attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointConflict {
    /// The record as store A holds it.
    pub version_a: Waypoint,
    /// The record as store B holds it.
    pub version_b: Waypoint,
    /// Human-readable difference descriptions, in tracked-attribute order.
    pub differences: Vec<String>,
}

impl WaypointConflict {
    /// Pairs two conflicting versions, enumerating their differences.
    #[must_use]
    pub fn new(version_a: Waypoint, version_b: Waypoint) -> Self {
        let differences = diff_reasons(&version_a, &version_b);
        Self {
            version_a,
            version_b,
            differences,
        }
    }
}

/// Enumerates human-readable differences between two matched waypoints.
///
/// Tracked attributes are reported independently in a fixed order: name,
/// color (lowercase hexadecimal, no leading padding), enabled, icon. The
/// result is a pure function of the two inputs and is non-empty whenever
/// any tracked attribute diverges.
#[must_use]
pub fn diff_reasons(a: &Waypoint, b: &Waypoint) -> Vec<String> {
    let mut differences = Vec::new();

    if !a.name_matches(b) {
        differences.push(format!("Name: '{}' vs '{}'", a.name, b.name));
    }
    if a.color != b.color {
        differences.push(format!("Color: #{:x} vs #{:x}", a.color, b.color));
    }
    if a.enabled != b.enabled {
        differences.push(format!("Enabled: {} vs {}", a.enabled, b.enabled));
    }
    if a.icon != b.icon {
        differences.push("Icon differs".to_string());
    }

    differences
}
