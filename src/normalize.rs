//! Filtering and canonicalisation of the loaded descriptor list.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use bedrock_ores_core::{BlockStateId, BlockStateResolver};
use tracing::info;

use crate::descriptor::OreDescriptor;

pub(crate) struct Normalized {
    /// Surviving descriptors, stably sorted by ascending weight.
    pub all_ores: Vec<OreDescriptor>,
    /// Extraction cooldown per state id, for every descriptor that resolved,
    /// including ones dropped as disabled or as group losers.
    pub cooldown_by_state: HashMap<BlockStateId, f32>,
}

/// Apply the normalisation rules to the raw load result.
///
/// Afterwards every surviving descriptor is enabled, has weight >= 1, a
/// resolvable state, and is its group's sole survivor.
pub(crate) fn normalize(
    all_ores: Vec<OreDescriptor>,
    resolver: &dyn BlockStateResolver,
) -> Normalized {
    info!(
        "Done loading ore config, got {} ores. Filtering...",
        all_ores.len()
    );

    // Drop entries whose block state does not resolve, remembering the
    // extraction cooldown of everything that does. Veins generated before an
    // ore was disabled still need their configured extraction rate.
    let mut cooldown_by_state = HashMap::new();
    let mut ores: Vec<OreDescriptor> = Vec::with_capacity(all_ores.len());
    for ore in all_ores {
        let Some(state_id) = resolver.resolve(&ore.state) else {
            continue;
        };
        cooldown_by_state.insert(state_id, ore.extraction_cooldown_scale.max(0.0));
        ores.push(ore);
    }

    // Disabled and zero-weight entries are authoring tools, not errors.
    ores.retain(|ore| ore.enabled && ore.weight >= 1);
    info!(
        "After removing disabled and unavailable ores, got {} ores.",
        ores.len()
    );

    // One survivor per non-empty group: lowest group order wins, ties go to
    // the earlier-loaded entry.
    let mut best_by_group: HashMap<String, (i32, usize)> = HashMap::new();
    for (index, ore) in ores.iter().enumerate() {
        if ore.group.is_empty() {
            continue;
        }
        match best_by_group.entry(ore.group.clone()) {
            Entry::Vacant(vacant) => {
                vacant.insert((ore.group_order, index));
            }
            Entry::Occupied(mut occupied) => {
                if ore.group_order < occupied.get().0 {
                    occupied.insert((ore.group_order, index));
                }
            }
        }
    }
    let mut index = 0;
    ores.retain(|ore| {
        let keep = ore.group.is_empty()
            || best_by_group
                .get(&ore.group)
                .is_none_or(|&(_, best)| best == index);
        index += 1;
        keep
    });
    info!("After removing duplicate ores, got {} ores.", ores.len());

    // Selection walks candidates in ascending weight order.
    ores.sort_by_key(|ore| ore.weight);

    Normalized {
        all_ores: ores,
        cooldown_by_state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedrock_ores_core::{BlockStateRef, BlockStateTable, ResourceKey};

    fn state(name: &str) -> BlockStateRef {
        BlockStateRef::new(ResourceKey::parse(name).unwrap())
    }

    fn table_for(ores: &[OreDescriptor]) -> BlockStateTable {
        let mut table = BlockStateTable::new();
        for ore in ores {
            table.register(ore.state.clone());
        }
        table
    }

    fn ore(name: &str, weight: u32) -> OreDescriptor {
        let mut ore = OreDescriptor::new(state(name));
        ore.weight = weight;
        ore
    }

    #[test]
    fn unresolvable_states_drop_but_keep_cooldown_of_resolved() {
        let mut dead = ore("nope:none", 5);
        dead.extraction_cooldown_scale = 3.0;
        let mut disabled = ore("minecraft:gold_ore", 4);
        disabled.enabled = false;
        disabled.extraction_cooldown_scale = 0.5;
        let kept = ore("minecraft:iron_ore", 10);

        let mut table = BlockStateTable::new();
        let gold_id = table.register(disabled.state.clone());
        let iron_id = table.register(kept.state.clone());

        let normalized = normalize(vec![dead, disabled, kept], &table);

        assert_eq!(normalized.all_ores.len(), 1);
        assert_eq!(normalized.all_ores[0].state, state("minecraft:iron_ore"));
        // Disabled entries still contribute their cooldown; unresolvable
        // entries never resolve to a state id at all.
        assert_eq!(normalized.cooldown_by_state.get(&gold_id), Some(&0.5));
        assert_eq!(normalized.cooldown_by_state.get(&iron_id), Some(&1.0));
        assert_eq!(normalized.cooldown_by_state.len(), 2);
    }

    #[test]
    fn negative_cooldown_clamps_to_zero() {
        let mut entry = ore("minecraft:iron_ore", 1);
        entry.extraction_cooldown_scale = -2.5;
        let table = table_for(std::slice::from_ref(&entry));
        let id = table.resolve(&entry.state).unwrap();

        let normalized = normalize(vec![entry], &table);
        assert_eq!(normalized.cooldown_by_state.get(&id), Some(&0.0));
    }

    #[test]
    fn zero_weight_entries_drop() {
        let entries = vec![ore("minecraft:iron_ore", 0), ore("minecraft:gold_ore", 1)];
        let table = table_for(&entries);
        let normalized = normalize(entries, &table);
        assert_eq!(normalized.all_ores.len(), 1);
        assert_eq!(normalized.all_ores[0].state, state("minecraft:gold_ore"));
    }

    #[test]
    fn lowest_group_order_wins() {
        let mut x = ore("minecraft:iron_ore", 3);
        x.group = "g".to_string();
        x.group_order = 1;
        let mut y = ore("minecraft:gold_ore", 7);
        y.group = "g".to_string();
        y.group_order = 0;

        let entries = vec![x, y];
        let table = table_for(&entries);
        let normalized = normalize(entries, &table);

        assert_eq!(normalized.all_ores.len(), 1);
        assert_eq!(normalized.all_ores[0].state, state("minecraft:gold_ore"));
    }

    #[test]
    fn group_order_ties_keep_the_earlier_entry() {
        let mut first = ore("minecraft:iron_ore", 3);
        first.group = "g".to_string();
        let mut second = ore("minecraft:gold_ore", 7);
        second.group = "g".to_string();

        let entries = vec![first, second];
        let table = table_for(&entries);
        let normalized = normalize(entries, &table);

        assert_eq!(normalized.all_ores.len(), 1);
        assert_eq!(normalized.all_ores[0].state, state("minecraft:iron_ore"));
    }

    #[test]
    fn distinct_groups_do_not_interact() {
        let mut a = ore("minecraft:iron_ore", 3);
        a.group = "g1".to_string();
        let mut b = ore("minecraft:gold_ore", 7);
        b.group = "g2".to_string();
        let c = ore("minecraft:coal_ore", 1);

        let entries = vec![a, b, c];
        let table = table_for(&entries);
        let normalized = normalize(entries, &table);
        assert_eq!(normalized.all_ores.len(), 3);
    }

    #[test]
    fn result_is_weight_sorted_and_stable() {
        let entries = vec![
            ore("minecraft:coal_ore", 12),
            ore("minecraft:iron_ore", 2),
            ore("minecraft:gold_ore", 2),
        ];
        let table = table_for(&entries);
        let normalized = normalize(entries, &table);

        let names: Vec<String> = normalized
            .all_ores
            .iter()
            .map(|ore| ore.state.to_string())
            .collect();
        // Equal weights keep load order.
        assert_eq!(
            names,
            vec![
                "minecraft:iron_ore",
                "minecraft:gold_ore",
                "minecraft:coal_ore"
            ]
        );
    }
}
