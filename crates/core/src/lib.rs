#![warn(missing_docs)]
//! Host-side vocabulary shared with the ore configuration engine: resource
//! keys, dimension identifiers, and block-state resolution.

mod block;
mod dimension;
mod resource;

pub use block::{
    BlockStateId, BlockStateRef, BlockStateResolver, BlockStateTable, AIR_STATE_ID,
};
pub use dimension::DimensionId;
pub use resource::{ResourceKey, ResourceKeyError, DEFAULT_NAMESPACE};
