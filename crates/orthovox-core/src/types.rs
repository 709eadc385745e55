use glam::{IVec3, Vec3};

/// Grid coordinate of a block cell.
pub type BlockCoord = IVec3;

/// Texture/animation recipe selector for a block. Meaning owned by
/// the rendering layer; opaque here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DesignId(pub u16);

/// Truncate a world-space position toward zero onto the block grid.
///
/// Truncation (not floor): -0.5 and 0.5 both land in cell 0. Pure and
/// injective over the integer range the grid uses, so it doubles as
/// the store's key function.
pub fn block_coord(position: Vec3) -> BlockCoord {
    position.as_ivec3()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_positions_are_exact() {
        assert_eq!(block_coord(Vec3::new(3.0, -7.0, 120.0)), IVec3::new(3, -7, 120));
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(block_coord(Vec3::new(1.9, 2.3, 0.0)), IVec3::new(1, 2, 0));
        assert_eq!(block_coord(Vec3::new(-1.9, -0.5, 0.5)), IVec3::new(-1, 0, 0));
    }
}
