use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use orthovox_core::{DesignId, OrientationId};

/// Per-slot payload boundary between the store and the rendering
/// layer. One buffer exists per shape; the buffer knows nothing about
/// the coordinate-to-slot mapping.
///
/// `len` is the logical slot count the renderer draws. Writing to a
/// slot at or beyond the current allocation grows backing storage
/// transparently (amortized O(1)).
pub trait InstanceBuffer {
    /// Current logical slot count.
    fn len(&self) -> u32;
    /// Set the logical slot count. Used by append, compaction, and
    /// clear; never touches the payload itself.
    fn set_len(&mut self, len: u32);

    /// World-space position payload. Stored per slot so compaction
    /// can identify which block a relocated payload belongs to.
    fn position_at(&self, slot: u32) -> Vec3;
    fn set_position_at(&mut self, slot: u32, position: Vec3);

    fn rotation_at(&self, slot: u32) -> OrientationId;
    fn set_rotation_at(&mut self, slot: u32, rotation: OrientationId);

    fn design_at(&self, slot: u32) -> DesignId;
    fn set_design_at(&mut self, slot: u32, design: DesignId);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swap-compaction: overwrite `slot` with the last slot's payload
    /// and shrink the logical length by one. Returns true when a
    /// relocation happened (`slot` was not the last slot), in which
    /// case the former last payload now lives at `slot`.
    ///
    /// The payload copy completes before the length decrement, so the
    /// caller may read the relocated slot immediately afterwards.
    fn swap_remove(&mut self, slot: u32) -> bool {
        debug_assert!(slot < self.len(), "swap_remove of slot {slot} past len {}", self.len());
        let last = self.len() - 1;
        let relocated = slot != last;
        if relocated {
            self.set_position_at(slot, self.position_at(last));
            self.set_rotation_at(slot, self.rotation_at(last));
            self.set_design_at(slot, self.design_at(last));
        }
        self.set_len(last);
        relocated
    }
}

/// One slot's payload, packed for direct GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BlockInstance {
    pub position: [f32; 3],
    pub rotation: u32,
    pub design: u32,
}

/// Vec-backed [`InstanceBuffer`]. Logical length is tracked apart
/// from the allocation, so compaction and clear never shrink
/// capacity and freed slots are reused without reallocating.
#[derive(Debug, Default)]
pub struct BlockInstances {
    instances: Vec<BlockInstance>,
    len: u32,
}

impl BlockInstances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            instances: Vec::with_capacity(capacity as usize),
            len: 0,
        }
    }

    /// Byte view over the live slots, for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances[..self.len as usize])
    }

    fn slot_mut(&mut self, slot: u32) -> &mut BlockInstance {
        let index = slot as usize;
        if index >= self.instances.len() {
            self.instances.resize(index + 1, BlockInstance::zeroed());
        }
        &mut self.instances[index]
    }
}

impl InstanceBuffer for BlockInstances {
    fn len(&self) -> u32 {
        self.len
    }

    fn set_len(&mut self, len: u32) {
        debug_assert!(
            len as usize <= self.instances.len(),
            "len {len} past allocation {}",
            self.instances.len()
        );
        self.len = len;
    }

    fn position_at(&self, slot: u32) -> Vec3 {
        Vec3::from(self.instances[slot as usize].position)
    }

    fn set_position_at(&mut self, slot: u32, position: Vec3) {
        self.slot_mut(slot).position = position.to_array();
    }

    fn rotation_at(&self, slot: u32) -> OrientationId {
        OrientationId(self.instances[slot as usize].rotation as u8)
    }

    fn set_rotation_at(&mut self, slot: u32, rotation: OrientationId) {
        self.slot_mut(slot).rotation = u32::from(rotation.0);
    }

    fn design_at(&self, slot: u32) -> DesignId {
        DesignId(self.instances[slot as usize].design as u16)
    }

    fn set_design_at(&mut self, slot: u32, design: DesignId) {
        self.slot_mut(slot).design = u32::from(design.0);
    }
}
