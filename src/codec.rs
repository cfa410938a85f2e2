//! Descriptor document codec.
//!
//! A document is a JSON sequence of partial descriptor objects. Decoding
//! runs in one of two modes: in fresh mode every entry becomes a new
//! descriptor with absent fields at their defaults; in reuse mode an entry
//! whose `state` matches an already-loaded descriptor patches that
//! descriptor in place, overlaying only the fields present in the document.
//! Patching is what lets a user overlay say "disable this one built-in ore"
//! without restating the rest of the entry.

use std::collections::HashMap;

use bedrock_ores_core::BlockStateRef;
use serde::Deserialize;

use crate::descriptor::OreDescriptor;

/// How the decoder treats entries matching already-loaded descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Every entry becomes a new descriptor.
    Fresh,
    /// Entries matching an existing descriptor by `state` patch it in place.
    Reuse,
}

/// One partial descriptor object as written in a document. Only `state` is
/// required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OreDocumentEntry {
    #[serde(default)]
    enabled: Option<bool>,
    state: BlockStateRef,
    #[serde(default)]
    dimension: Option<String>,
    #[serde(default)]
    weight: Option<u32>,
    #[serde(default)]
    width_min: Option<i32>,
    #[serde(default)]
    width_max: Option<i32>,
    #[serde(default)]
    height_min: Option<i32>,
    #[serde(default)]
    height_max: Option<i32>,
    #[serde(default)]
    count_min: Option<i32>,
    #[serde(default)]
    count_max: Option<i32>,
    #[serde(default)]
    yield_min: Option<i32>,
    #[serde(default)]
    yield_max: Option<i32>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    group_order: Option<i32>,
    #[serde(default)]
    extraction_cooldown_scale: Option<f32>,
    #[serde(default)]
    comment: Option<Vec<String>>,
}

impl OreDocumentEntry {
    /// Overlay the fields present in this entry onto `ore`.
    fn apply(&self, ore: &mut OreDescriptor) {
        if let Some(enabled) = self.enabled {
            ore.enabled = enabled;
        }
        if let Some(dimension) = &self.dimension {
            ore.dimension = dimension.clone();
        }
        if let Some(weight) = self.weight {
            ore.weight = weight;
        }
        if let Some(width_min) = self.width_min {
            ore.width_min = width_min;
        }
        if let Some(width_max) = self.width_max {
            ore.width_max = width_max;
        }
        if let Some(height_min) = self.height_min {
            ore.height_min = height_min;
        }
        if let Some(height_max) = self.height_max {
            ore.height_max = height_max;
        }
        if let Some(count_min) = self.count_min {
            ore.count_min = count_min;
        }
        if let Some(count_max) = self.count_max {
            ore.count_max = count_max;
        }
        if let Some(yield_min) = self.yield_min {
            ore.yield_min = yield_min;
        }
        if let Some(yield_max) = self.yield_max {
            ore.yield_max = yield_max;
        }
        if let Some(group) = &self.group {
            ore.group = group.clone();
        }
        if let Some(group_order) = self.group_order {
            ore.group_order = group_order;
        }
        if let Some(scale) = self.extraction_cooldown_scale {
            ore.extraction_cooldown_scale = scale;
        }
        if let Some(comment) = &self.comment {
            ore.comment = comment.clone();
        }
    }

    fn into_descriptor(self) -> OreDescriptor {
        let mut ore = OreDescriptor::new(self.state.clone());
        self.apply(&mut ore);
        ore
    }
}

/// Parse a document and fold its entries into `ores`.
///
/// In reuse mode, an entry whose state matches a descriptor already in
/// `ores` (as of the start of the document) patches that descriptor in
/// place; every other entry is appended in document order. Returns the
/// number of entries the document contained.
pub fn decode_into(
    json: &str,
    mode: DecodeMode,
    ores: &mut Vec<OreDescriptor>,
) -> Result<usize, serde_json::Error> {
    let entries: Vec<OreDocumentEntry> = serde_json::from_str(json)?;
    let count = entries.len();

    // Snapshot of identities before this document; entries appended by this
    // document do not patch each other.
    let existing: HashMap<BlockStateRef, usize> = match mode {
        DecodeMode::Reuse => ores
            .iter()
            .enumerate()
            .map(|(index, ore)| (ore.state.clone(), index))
            .collect(),
        DecodeMode::Fresh => HashMap::new(),
    };

    for entry in entries {
        match existing.get(&entry.state) {
            Some(&index) => entry.apply(&mut ores[index]),
            None => ores.push(entry.into_descriptor()),
        }
    }

    Ok(count)
}

/// Parse a document into a fresh descriptor list.
pub fn decode(json: &str) -> Result<Vec<OreDescriptor>, serde_json::Error> {
    let mut ores = Vec::new();
    decode_into(json, DecodeMode::Fresh, &mut ores)?;
    Ok(ores)
}

/// Serialise descriptors in the on-disk document form: pretty-printed,
/// entry order preserved, keys in declaration order.
pub fn encode(ores: &[OreDescriptor]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ores)
}
