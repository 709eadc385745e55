//! Pure value types for the block editor: axis directions, the
//! 24-element cube rotation group, the shape catalog, and grid
//! coordinates. Everything here is immutable after construction and
//! safe to share across the frame loop.

pub mod direction;
pub mod orientation;
pub mod shape;
pub mod types;

pub use direction::{Direction, ALL_DIRECTIONS, HORIZONTAL_DIRECTIONS, VERTICAL_DIRECTIONS};
pub use orientation::{OrientationId, OrientationSet, ORIENTATION_COUNT};
pub use shape::{ParseShapeError, Shape, ALL_SHAPES};
pub use types::{block_coord, BlockCoord, DesignId};
