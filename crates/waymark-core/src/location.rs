//! Location keys for exact-match waypoint lookup.

use serde::{Deserialize, Serialize};

/// The (x, y, z, dimension) tuple that identifies a waypoint position.
///
/// This is the *only* matching key used across stores: two waypoints refer to
/// the same place iff their location keys are equal. Integer coordinates are
/// compared exactly and the dimension string is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationKey {
    /// X coordinate in the world.
    pub x: i32,
    /// Y coordinate in the world.
    pub y: i32,
    /// Z coordinate in the world.
    pub z: i32,
    /// Dimension identifier the coordinates are relative to.
    pub dimension: String,
}

impl LocationKey {
    /// Creates a new `LocationKey`.
    #[must_use]
    pub fn new(x: i32, y: i32, z: i32, dimension: impl Into<String>) -> Self {
        Self {
            x,
            y,
            z,
            dimension: dimension.into(),
        }
    }
}

impl std::fmt::Display for LocationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}_{}_{}", self.x, self.y, self.z, self.dimension)
    }
}
