//! Block-state references and resolution.
//!
//! Descriptor documents name block states symbolically (a block key plus an
//! optional property assignment). The host owns the actual block registry
//! and assigns a compact id to every concrete state; the engine only sees
//! that id through the [`BlockStateResolver`] seam.

use crate::ResourceKey;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Compact id the host assigns to each distinct block state.
pub type BlockStateId = u32;

/// The id reserved for air. References that fail to resolve behave as if
/// they named this state.
pub const AIR_STATE_ID: BlockStateId = 0;

/// A block state as written in descriptor documents: a block key plus an
/// optional property assignment.
///
/// Equality and hashing cover both fields; the `Display` form
/// (`ns:path[k=v,...]`) is what listings sort by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockStateRef {
    /// Block identifier, e.g. `minecraft:iron_ore`.
    pub name: ResourceKey,
    /// Property constraints; empty selects the block's default state.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl BlockStateRef {
    /// Reference the default state of `name`.
    pub fn new(name: ResourceKey) -> Self {
        Self {
            name,
            properties: BTreeMap::new(),
        }
    }

    /// Add a property constraint.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for BlockStateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.properties.is_empty() {
            write!(f, "[")?;
            for (i, (key, value)) in self.properties.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Host seam for turning document state references into concrete state ids.
pub trait BlockStateResolver {
    /// Resolve `state` to the host's compact state id.
    ///
    /// Returns `None` when the reference names an unknown block, an
    /// unregistered property combination, or air itself.
    fn resolve(&self, state: &BlockStateRef) -> Option<BlockStateId>;
}

/// In-memory block-state registry.
///
/// Hosts register every concrete state once at startup; the first variant
/// registered for a block key becomes that block's default state. Id 0 is
/// reserved for air.
pub struct BlockStateTable {
    states: Vec<BlockStateRef>,
    by_ref: HashMap<BlockStateRef, BlockStateId>,
    default_by_name: HashMap<ResourceKey, BlockStateId>,
}

impl BlockStateTable {
    /// Create a table containing only the reserved air state.
    pub fn new() -> Self {
        let air_key = ResourceKey::parse("minecraft:air").expect("air key is valid");
        let air = BlockStateRef::new(air_key);
        let mut by_ref = HashMap::new();
        by_ref.insert(air.clone(), AIR_STATE_ID);
        let mut default_by_name = HashMap::new();
        default_by_name.insert(air.name.clone(), AIR_STATE_ID);
        Self {
            states: vec![air],
            by_ref,
            default_by_name,
        }
    }

    /// Register a concrete state and return its id. Registering the same
    /// reference twice returns the existing id.
    pub fn register(&mut self, state: BlockStateRef) -> BlockStateId {
        if let Some(&id) = self.by_ref.get(&state) {
            return id;
        }
        let id = self.states.len() as BlockStateId;
        self.by_ref.insert(state.clone(), id);
        self.default_by_name.entry(state.name.clone()).or_insert(id);
        self.states.push(state);
        id
    }

    /// The reference a state id was registered under.
    pub fn state(&self, id: BlockStateId) -> Option<&BlockStateRef> {
        self.states.get(id as usize)
    }

    /// Number of registered states, including air.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether only the air state is registered.
    pub fn is_empty(&self) -> bool {
        self.states.len() <= 1
    }
}

impl Default for BlockStateTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStateResolver for BlockStateTable {
    fn resolve(&self, state: &BlockStateRef) -> Option<BlockStateId> {
        let id = if state.properties.is_empty() {
            *self.default_by_name.get(&state.name)?
        } else {
            *self.by_ref.get(state)?
        };
        if id == AIR_STATE_ID {
            return None;
        }
        Some(id)
    }
}
