use std::collections::HashMap;

use glam::Vec3;
use orthovox_core::{block_coord, BlockCoord, DesignId, OrientationId, Shape};

use crate::instances::{BlockInstances, InstanceBuffer};

/// A stored block as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub shape: Shape,
    pub rotation: OrientationId,
    pub design: DesignId,
}

/// Where a coordinate's payload lives: which shape's buffer, which slot.
#[derive(Debug, Clone, Copy)]
struct SlotRef {
    shape: Shape,
    slot: u32,
}

/// Sparse block store: a coordinate-to-slot map over one dense,
/// swap-compacted instance buffer per shape.
///
/// The map owns the coordinate bookkeeping; the buffers own the
/// per-slot payload, and the store never reaches past the
/// [`InstanceBuffer`] accessors. Positions are keyed by
/// [`block_coord`] truncation, with at most one entry per cell.
///
/// Single-writer: all mutation happens from the frame loop, so every
/// operation runs to completion with no interleaving.
pub struct BlockMap<B = BlockInstances> {
    blocks: HashMap<BlockCoord, SlotRef>,
    buffers: [B; Shape::COUNT],
}

impl<B: InstanceBuffer + Default> Default for BlockMap<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: InstanceBuffer + Default> BlockMap<B> {
    pub fn new() -> Self {
        Self {
            blocks: HashMap::new(),
            buffers: std::array::from_fn(|_| B::default()),
        }
    }
}

impl<B: InstanceBuffer> BlockMap<B> {
    /// Place a block, replacing any existing block in the same cell.
    /// The new payload is appended to the end of `shape`'s buffer.
    pub fn set(&mut self, position: Vec3, shape: Shape, rotation: OrientationId, design: DesignId) {
        // Removing first keeps the one-entry-per-cell invariant and
        // compacts the old slot before the new one is appended.
        let _ = self.remove(position);

        let buffer = &mut self.buffers[shape as usize];
        let slot = buffer.len();
        buffer.set_position_at(slot, position);
        buffer.set_rotation_at(slot, rotation);
        buffer.set_design_at(slot, design);
        buffer.set_len(slot + 1);

        self.blocks.insert(block_coord(position), SlotRef { shape, slot });
    }

    /// The block in `position`'s cell, if any.
    pub fn get(&self, position: Vec3) -> Option<Block> {
        let entry = self.blocks.get(&block_coord(position))?;
        let buffer = &self.buffers[entry.shape as usize];
        Some(Block {
            shape: entry.shape,
            rotation: buffer.rotation_at(entry.slot),
            design: buffer.design_at(entry.slot),
        })
    }

    /// Remove and return the block in `position`'s cell. No-op on an
    /// empty cell.
    ///
    /// Compaction moves the buffer's last slot into the freed slot,
    /// so whichever cell owned that last slot must have its slot
    /// index repatched. The relocated payload's own position field
    /// identifies that cell; it is read back only after
    /// [`InstanceBuffer::swap_remove`] has fully completed (payload
    /// copy, then length decrement), so the read is never stale.
    pub fn remove(&mut self, position: Vec3) -> Option<Block> {
        let key = block_coord(position);
        let entry = self.blocks.remove(&key)?;
        let buffer = &mut self.buffers[entry.shape as usize];
        let removed = Block {
            shape: entry.shape,
            rotation: buffer.rotation_at(entry.slot),
            design: buffer.design_at(entry.slot),
        };

        if buffer.swap_remove(entry.slot) {
            let moved_key = block_coord(buffer.position_at(entry.slot));
            match self.blocks.get_mut(&moved_key) {
                Some(moved) => moved.slot = entry.slot,
                None => {
                    // Bookkeeping diverged from the buffer; every
                    // later edit would corrupt the dense array.
                    debug_assert!(false, "relocated slot at {moved_key} has no map entry");
                    log::warn!("block map diverged from instance buffer at {moved_key}");
                }
            }
        }

        Some(removed)
    }

    /// Drop every block. O(shape count), not O(block count).
    pub fn clear(&mut self) {
        for buffer in &mut self.buffers {
            buffer.set_len(0);
        }
        self.blocks.clear();
        log::debug!("block map cleared");
    }

    /// Number of live blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Instance count for one shape — the renderer's draw count.
    pub fn shape_len(&self, shape: Shape) -> u32 {
        self.buffers[shape as usize].len()
    }

    /// The instance buffer backing one shape.
    pub fn buffer(&self, shape: Shape) -> &B {
        &self.buffers[shape as usize]
    }

    /// Iterate live blocks in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockCoord, Block)> + '_ {
        self.blocks.iter().map(|(&coord, entry)| {
            let buffer = &self.buffers[entry.shape as usize];
            let block = Block {
                shape: entry.shape,
                rotation: buffer.rotation_at(entry.slot),
                design: buffer.design_at(entry.slot),
            };
            (coord, block)
        })
    }
}
