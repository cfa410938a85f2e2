#![warn(missing_docs)]
//! Ore configuration and weighted selection for bedrock ore veins.
//!
//! The engine ingests layered JSON descriptor documents (built-in listings
//! first, then user overlays), merges later layers onto earlier ones by
//! block-state identity, normalises the result (drops disabled,
//! unresolvable, zero-weight, and group-losing entries), and indexes the
//! survivors per dimension with precomputed weight sums. Afterwards it
//! answers, for a dimension and a random draw in `[0, 1)`, which ore type a
//! new vein should be, and how fast an extractor runs on a given state.
//!
//! ```no_run
//! use bedrock_ores::{load, BlockStateTable, DimensionId};
//! use std::path::Path;
//!
//! let blocks = BlockStateTable::new(); // the host's real block registry
//! let registry = load(Path::new("config"), &blocks)?;
//! if let Some(ore) = registry.get_ore(DimensionId::Overworld, 0.37) {
//!     println!("picked {}", ore.state);
//! }
//! # Ok::<(), bedrock_ores::OreConfigError>(())
//! ```

mod alphanum;
mod builtin;
mod codec;
mod descriptor;
mod loader;
mod normalize;
mod registry;

pub use codec::{decode, decode_into, encode, DecodeMode};
pub use descriptor::OreDescriptor;
pub use loader::{OreConfigError, MOD_ID};
pub use registry::{global, install, load, OreRegistry};

// Host vocabulary, re-exported for convenience.
pub use bedrock_ores_core::{
    BlockStateId, BlockStateRef, BlockStateResolver, BlockStateTable, DimensionId, ResourceKey,
};
