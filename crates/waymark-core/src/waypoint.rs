//! The canonical waypoint record.

use serde::{Deserialize, Serialize};

use crate::id::generate_sync_id;
use crate::location::LocationKey;

/// Which system a waypoint record originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaypointSource {
    /// Natively authored in store A.
    StoreA,
    /// Natively authored in store B.
    StoreB,
    /// Created by a sync write-back rather than natively authored.
    Synced,
}

impl std::fmt::Display for WaypointSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreA => write!(f, "STORE_A"),
            Self::StoreB => write!(f, "STORE_B"),
            Self::Synced => write!(f, "SYNCED"),
        }
    }
}

/// A named, colored, positioned point of interest tied to a world dimension.
///
/// Waypoints are plain immutable values. Matching across stores is done only
/// on [`LocationKey`]; `id` is a derived debug label and `source`/`source_id`
/// are provenance, none of which participate in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Derived sync id (see [`generate_sync_id`]). Debug label only.
    pub id: String,
    /// Display name of the waypoint.
    pub name: String,
    /// X coordinate in the world.
    pub x: i32,
    /// Y coordinate in the world.
    pub y: i32,
    /// Z coordinate in the world.
    pub z: i32,
    /// Dimension identifier (e.g., "minecraft:overworld").
    pub dimension: String,
    /// Color as a 24-bit RGB integer (e.g., 0xFF0000 for red).
    #[serde(default = "default_color")]
    pub color: u32,
    /// Optional icon reference. `None` means no icon and is distinct from
    /// an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether this waypoint is enabled/visible.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Source of this waypoint.
    pub source: WaypointSource,
    /// Identifier of this record in its originating store, used to address
    /// it there for removal or update. `None` for records not yet written
    /// anywhere.
    #[serde(rename = "sourceId", default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

fn default_color() -> u32 {
    0xFF_FFFF
}

fn default_enabled() -> bool {
    true
}

impl Waypoint {
    /// Creates a new waypoint with a derived id and default color, icon and
    /// enabled flag.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        x: i32,
        y: i32,
        z: i32,
        dimension: impl Into<String>,
        source: WaypointSource,
    ) -> Self {
        let name = name.into();
        let dimension = dimension.into();
        Self {
            id: generate_sync_id(&name, x, y, z, &dimension),
            name,
            x,
            y,
            z,
            dimension,
            color: default_color(),
            icon: None,
            enabled: default_enabled(),
            source,
            source_id: None,
        }
    }

    /// Sets the color.
    #[must_use]
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Sets the icon reference.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the source tag.
    #[must_use]
    pub fn with_source(mut self, source: WaypointSource) -> Self {
        self.source = source;
        self
    }

    /// Sets the originating store's identifier for this record.
    #[must_use]
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    /// The location key used for matching this waypoint across stores.
    #[must_use]
    pub fn location_key(&self) -> LocationKey {
        LocationKey::new(self.x, self.y, self.z, self.dimension.clone())
    }

    /// Whether two waypoints refer to the same place.
    #[must_use]
    pub fn is_same_location(&self, other: &Waypoint) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.z == other.z
            && self.dimension == other.dimension
    }

    /// Case-insensitive name equality.
    #[must_use]
    pub fn name_matches(&self, other: &Waypoint) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }

    /// Whether two same-location waypoints carry the same tracked content:
    /// name (case-insensitive), color and enabled flag.
    ///
    /// `id`, `source`, `source_id` and `icon` are intentionally excluded.
    /// Only meaningful when `self.is_same_location(other)` holds.
    #[must_use]
    pub fn is_identical(&self, other: &Waypoint) -> bool {
        self.name_matches(other) && self.color == other.color && self.enabled == other.enabled
    }
}
