//! Ore descriptor records.

use bedrock_ores_core::BlockStateRef;
use serde::Serialize;

/// One declarative ore entry: which block state the vein consists of, where
/// and how often it generates, and how it behaves under extraction.
///
/// The `state` reference is the entry's identity: a later configuration
/// layer that names the same state patches this record instead of adding a
/// second one. Field order here is the key order written to disk.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OreDescriptor {
    /// Disabled entries are dropped during normalisation. Authors use this
    /// in overlays to switch off built-in ores.
    pub enabled: bool,
    /// Block state this vein consists of.
    pub state: BlockStateRef,
    /// Dimension this entry targets: a dimension name (matched
    /// case-insensitively), `"*"` for any, or empty for any.
    pub dimension: String,
    /// Relative selection probability within its dimension.
    pub weight: u32,
    /// Minimum vein width, in blocks.
    pub width_min: i32,
    /// Maximum vein width, in blocks.
    pub width_max: i32,
    /// Minimum vein height, in blocks.
    pub height_min: i32,
    /// Maximum vein height, in blocks.
    pub height_max: i32,
    /// Minimum number of ore cells in a vein.
    pub count_min: i32,
    /// Maximum number of ore cells in a vein.
    pub count_max: i32,
    /// Minimum items yielded before the vein is exhausted.
    pub yield_min: i32,
    /// Maximum items yielded before the vein is exhausted.
    pub yield_max: i32,
    /// Group-collision key; within a non-empty group only the entry with
    /// the lowest `group_order` survives normalisation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group: String,
    /// Lower is stronger when resolving group collisions.
    pub group_order: i32,
    /// Multiplier on the per-block extraction interval.
    pub extraction_cooldown_scale: f32,
    /// Free-form comments; ignored by the engine, preserved on save.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comment: Vec<String>,
}

impl OreDescriptor {
    /// A descriptor for `state` with every other field at its default.
    pub fn new(state: BlockStateRef) -> Self {
        Self {
            enabled: true,
            state,
            dimension: "overworld".to_string(),
            weight: 1,
            width_min: 4,
            width_max: 6,
            height_min: 2,
            height_max: 4,
            count_min: 8,
            count_max: 12,
            yield_min: 2000,
            yield_max: 3000,
            group: String::new(),
            group_order: 0,
            extraction_cooldown_scale: 1.0,
            comment: Vec::new(),
        }
    }
}
