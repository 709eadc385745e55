//! The sparse block store and its instance-buffer boundary.
//!
//! [`BlockMap`] maps grid cells to slots in dense per-shape
//! [`InstanceBuffer`]s, keeping the buffers swap-compacted so the
//! renderer can draw each shape's instances as one contiguous batch.

pub mod block_map;
pub mod instances;

pub use block_map::{Block, BlockMap};
pub use instances::{BlockInstance, BlockInstances, InstanceBuffer};
