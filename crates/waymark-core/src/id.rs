//! Sync-id derivation for waypoint records.
//!
//! The sync id is a human-debuggable label, not a lookup key: it is not
//! guaranteed unique and matching is always done on [`LocationKey`] instead.
//!
//! [`LocationKey`]: crate::location::LocationKey

/// Derives a sync id from a waypoint's properties.
///
/// The id is the lowercased name with spaces replaced by underscores, joined
/// with the coordinates and the dimension's suffix after its last namespace
/// separator (`minecraft:the_nether` contributes `the_nether`; a dimension
/// without a separator is used whole).
#[must_use]
pub fn generate_sync_id(name: &str, x: i32, y: i32, z: i32, dimension: &str) -> String {
    let name_part = name.to_lowercase().replace(' ', "_");
    let dimension_part = dimension.rsplit(':').next().unwrap_or(dimension);
    format!("{name_part}_{x}_{y}_{z}_{dimension_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_derivation() {
        assert_eq!(
            generate_sync_id("Base", 10, 64, -5, "minecraft:overworld"),
            "base_10_64_-5_overworld"
        );
    }

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(
            generate_sync_id("My Secret Base", 0, 0, 0, "minecraft:overworld"),
            "my_secret_base_0_0_0_overworld"
        );
    }

    #[test]
    fn test_dimension_without_namespace_is_used_whole() {
        assert_eq!(generate_sync_id("Spawn", 1, 2, 3, "overworld"), "spawn_1_2_3_overworld");
    }

    #[test]
    fn test_last_separator_wins() {
        assert_eq!(
            generate_sync_id("Hub", 0, 70, 0, "modpack:worlds:mining"),
            "hub_0_70_0_mining"
        );
    }
}
