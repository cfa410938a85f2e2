//! The ore registry: load, index, query.
//!
//! [`load`] runs once at host startup and produces a frozen [`OreRegistry`];
//! every query afterwards is a pure read. Hosts that want a process-wide
//! singleton can [`install`] the loaded registry behind a one-time
//! publication barrier.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use bedrock_ores_core::{BlockStateId, BlockStateResolver, DimensionId};

use crate::descriptor::OreDescriptor;
use crate::loader::{self, OreConfigError};
use crate::normalize;

/// Candidates and precomputed weight sum for one dimension.
struct DimensionOres {
    /// Kept in ascending weight order for the selection walk.
    candidates: Vec<OreDescriptor>,
    weight_sum: u64,
}

/// The normalised, indexed ore configuration.
///
/// Immutable once built; queries never fail, they return `None`/defaults.
pub struct OreRegistry {
    /// All surviving descriptors, alphabetically by state for listings.
    all_ores: Vec<OreDescriptor>,
    cooldown_by_state: HashMap<BlockStateId, f32>,
    by_dimension: HashMap<DimensionId, DimensionOres>,
}

/// Load the layered ore configuration and build the registry.
///
/// Fatal errors (unreadable embedded index, inaccessible user directory)
/// propagate; individual bad documents are logged and skipped.
pub fn load(
    config_dir: &Path,
    resolver: &dyn BlockStateResolver,
) -> Result<OreRegistry, OreConfigError> {
    let all_ores = loader::load_descriptors(config_dir)?;
    Ok(OreRegistry::from_descriptors(all_ores, resolver))
}

impl OreRegistry {
    /// Normalise and index an already-loaded descriptor list.
    ///
    /// This is the back half of [`load`], split out so hosts and tests can
    /// feed descriptor lists that did not come from the filesystem.
    pub fn from_descriptors(
        all_ores: Vec<OreDescriptor>,
        resolver: &dyn BlockStateResolver,
    ) -> Self {
        let normalized = normalize::normalize(all_ores, resolver);
        let mut all_ores = normalized.all_ores;

        // Project the weight-sorted list into each dimension.
        let mut by_dimension = HashMap::new();
        for dimension in DimensionId::ALL {
            let candidates: Vec<OreDescriptor> = all_ores
                .iter()
                .filter(|ore| dimension_matches(&ore.dimension, dimension))
                .cloned()
                .collect();
            let weight_sum = candidates.iter().map(|ore| u64::from(ore.weight)).sum();
            by_dimension.insert(
                dimension,
                DimensionOres {
                    candidates,
                    weight_sum,
                },
            );
        }

        // Weight order only matters inside the per-dimension lists; the
        // shared list sorts alphabetically for human-facing listings.
        all_ores.sort_by_key(|ore| ore.state.to_string());

        Self {
            all_ores,
            cooldown_by_state: normalized.cooldown_by_state,
            by_dimension,
        }
    }

    /// Weighted-random pick of an ore for `dimension`.
    ///
    /// `r` must be drawn from `[0, 1)`. Returns `None` for an unknown or
    /// empty dimension, a zero weight sum, or `r` at exactly 1.0.
    pub fn get_ore(&self, dimension: DimensionId, r: f32) -> Option<&OreDescriptor> {
        let ores = self.by_dimension.get(&dimension)?;
        if ores.candidates.is_empty() || ores.weight_sum == 0 {
            return None;
        }

        let want_weight_sum = (f64::from(r) * ores.weight_sum as f64) as u64;
        let mut weight_sum = 0u64;
        for ore in &ores.candidates {
            weight_sum += u64::from(ore.weight);
            if weight_sum > want_weight_sum {
                return Some(ore);
            }
        }

        None
    }

    /// Number of ore types that can generate in `dimension`.
    pub fn get_ore_type_count(&self, dimension: DimensionId) -> usize {
        self.by_dimension
            .get(&dimension)
            .map_or(0, |ores| ores.candidates.len())
    }

    /// Extraction cooldown multiplier for a block state.
    ///
    /// Defined for every input: states never seen in the configuration
    /// (and the absent state) report 1.0. Entries exist for every
    /// descriptor that ever resolved, including later-disabled ones, so
    /// veins from older configurations keep their configured rate.
    pub fn get_ore_extraction_cooldown_scale(&self, state: Option<BlockStateId>) -> f32 {
        state
            .and_then(|id| self.cooldown_by_state.get(&id))
            .copied()
            .unwrap_or(1.0)
    }

    /// All surviving descriptors, alphabetically by state.
    pub fn ores(&self) -> &[OreDescriptor] {
        &self.all_ores
    }
}

/// Whether a descriptor's dimension field targets `dimension`.
///
/// Empty means any dimension; names match case-insensitively; the `"*"`
/// wildcard matches exactly.
fn dimension_matches(descriptor_dimension: &str, dimension: DimensionId) -> bool {
    descriptor_dimension.is_empty()
        || descriptor_dimension.eq_ignore_ascii_case(dimension.as_str())
        || descriptor_dimension == "*"
}

static REGISTRY: OnceLock<OreRegistry> = OnceLock::new();

/// Publish `registry` as the process-wide instance.
///
/// Loading runs once per process; a second install is a programming error
/// and hands the rejected registry back.
pub fn install(registry: OreRegistry) -> Result<(), OreRegistry> {
    REGISTRY.set(registry)
}

/// The installed process-wide registry, if any.
pub fn global() -> Option<&'static OreRegistry> {
    REGISTRY.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedrock_ores_core::{BlockStateRef, BlockStateTable, ResourceKey};

    fn ore(name: &str, dimension: &str, weight: u32) -> OreDescriptor {
        let mut ore = OreDescriptor::new(BlockStateRef::new(ResourceKey::parse(name).unwrap()));
        ore.dimension = dimension.to_string();
        ore.weight = weight;
        ore
    }

    fn registry_of(entries: Vec<OreDescriptor>) -> OreRegistry {
        let mut table = BlockStateTable::new();
        for entry in &entries {
            table.register(entry.state.clone());
        }
        OreRegistry::from_descriptors(entries, &table)
    }

    #[test]
    fn r_zero_returns_the_lightest_candidate() {
        let registry = registry_of(vec![
            ore("minecraft:coal_ore", "overworld", 12),
            ore("minecraft:diamond_ore", "overworld", 2),
        ]);
        let picked = registry.get_ore(DimensionId::Overworld, 0.0).unwrap();
        assert_eq!(picked.state.to_string(), "minecraft:diamond_ore");
    }

    #[test]
    fn r_near_one_returns_the_heaviest_candidate() {
        let registry = registry_of(vec![
            ore("minecraft:coal_ore", "overworld", 12),
            ore("minecraft:diamond_ore", "overworld", 2),
        ]);
        let picked = registry
            .get_ore(DimensionId::Overworld, 1.0 - f32::EPSILON)
            .unwrap();
        assert_eq!(picked.state.to_string(), "minecraft:coal_ore");
    }

    #[test]
    fn selection_is_none_for_empty_dimensions() {
        let registry = registry_of(vec![ore("minecraft:quartz_ore", "nether", 8)]);
        assert!(registry.get_ore(DimensionId::Overworld, 0.5).is_none());
        assert_eq!(registry.get_ore_type_count(DimensionId::Overworld), 0);
        assert!(registry.get_ore(DimensionId::Nether, 0.5).is_some());
        assert_eq!(registry.get_ore_type_count(DimensionId::Nether), 1);
    }

    #[test]
    fn wildcard_and_empty_dimensions_match_everywhere() {
        let registry = registry_of(vec![
            ore("minecraft:iron_ore", "overworld", 1),
            ore("minecraft:quartz_ore", "nether", 1),
            ore("minecraft:coal_ore", "*", 1),
            ore("minecraft:gold_ore", "", 1),
        ]);
        assert_eq!(registry.get_ore_type_count(DimensionId::Overworld), 3);
        assert_eq!(registry.get_ore_type_count(DimensionId::Nether), 3);
        assert_eq!(registry.get_ore_type_count(DimensionId::End), 2);
    }

    #[test]
    fn dimension_names_match_case_insensitively() {
        let registry = registry_of(vec![ore("minecraft:iron_ore", "OverWorld", 1)]);
        assert_eq!(registry.get_ore_type_count(DimensionId::Overworld), 1);
        assert_eq!(registry.get_ore_type_count(DimensionId::Nether), 0);
    }

    #[test]
    fn cooldown_lookup_is_total() {
        let mut slow = ore("minecraft:diamond_ore", "overworld", 2);
        slow.extraction_cooldown_scale = 2.0;
        let entries = vec![slow];
        let mut table = BlockStateTable::new();
        let id = table.register(entries[0].state.clone());
        let registry = OreRegistry::from_descriptors(entries, &table);

        assert_eq!(registry.get_ore_extraction_cooldown_scale(Some(id)), 2.0);
        assert_eq!(registry.get_ore_extraction_cooldown_scale(Some(9999)), 1.0);
        assert_eq!(registry.get_ore_extraction_cooldown_scale(None), 1.0);
    }

    #[test]
    fn listing_is_alphabetical_by_state() {
        let registry = registry_of(vec![
            ore("minecraft:redstone_ore", "overworld", 6),
            ore("minecraft:coal_ore", "overworld", 12),
            ore("minecraft:iron_ore", "overworld", 10),
        ]);
        let names: Vec<String> = registry
            .ores()
            .iter()
            .map(|ore| ore.state.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "minecraft:coal_ore",
                "minecraft:iron_ore",
                "minecraft:redstone_ore"
            ]
        );
    }

    #[test]
    fn candidates_walk_in_weight_order() {
        // Weight sum 6: r below 1/6 must land on the weight-1 entry, the
        // first in the ascending walk.
        let registry = registry_of(vec![
            ore("minecraft:coal_ore", "overworld", 5),
            ore("minecraft:emerald_ore", "overworld", 1),
        ]);
        let picked = registry.get_ore(DimensionId::Overworld, 0.16).unwrap();
        assert_eq!(picked.state.to_string(), "minecraft:emerald_ore");
        let picked = registry.get_ore(DimensionId::Overworld, 0.17).unwrap();
        assert_eq!(picked.state.to_string(), "minecraft:coal_ore");
    }
}
