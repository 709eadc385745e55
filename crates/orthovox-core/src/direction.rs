use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// One of the 6 axis-aligned unit directions.
///
/// Discriminants are stable: opposite directions sit 3 apart, so
/// `(i + 3) % 6` negates a direction index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Direction {
    Forward = 0,
    Right = 1,
    Up = 2,
    Backward = 3,
    Left = 4,
    Down = 5,
}

/// All 6 directions in discriminant order.
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::Forward,
    Direction::Right,
    Direction::Up,
    Direction::Backward,
    Direction::Left,
    Direction::Down,
];

/// The 4 yaw directions, for snapping when only heading matters
/// (e.g. a camera forward vector projected onto the ground plane).
pub const HORIZONTAL_DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Backward,
    Direction::Left,
    Direction::Forward,
];

/// The 2 pitch directions.
pub const VERTICAL_DIRECTIONS: [Direction; 2] = [Direction::Up, Direction::Down];

impl Direction {
    /// Integer unit offset. Y-up convention: Forward = (0, 0, 1).
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::Forward => IVec3::new(0, 0, 1),
            Direction::Right => IVec3::new(1, 0, 0),
            Direction::Up => IVec3::new(0, 1, 0),
            Direction::Backward => IVec3::new(0, 0, -1),
            Direction::Left => IVec3::new(-1, 0, 0),
            Direction::Down => IVec3::new(0, -1, 0),
        }
    }

    /// Unit vector in float form.
    pub fn vector(self) -> Vec3 {
        self.offset().as_vec3()
    }

    /// The negated direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
        }
    }

    /// The candidate with the greatest dot product against `v`, or
    /// `None` when no candidate's dot product exceeds `threshold`.
    /// Ties break to the earlier candidate.
    pub fn from_vector(candidates: &[Direction], v: Vec3, threshold: f32) -> Option<Direction> {
        let mut best = None;
        let mut best_dot = threshold;
        for &candidate in candidates {
            let dot = candidate.vector().dot(v);
            if dot > best_dot {
                best_dot = dot;
                best = Some(candidate);
            }
        }
        best
    }

    /// Snap an arbitrary vector to the nearest of all 6 directions.
    pub fn nearest(v: Vec3) -> Option<Direction> {
        Self::from_vector(&ALL_DIRECTIONS, v, f32::NEG_INFINITY)
    }

    /// Snap to the nearest yaw direction, ignoring Up and Down.
    pub fn nearest_horizontal(v: Vec3) -> Option<Direction> {
        Self::from_vector(&HORIZONTAL_DIRECTIONS, v, f32::NEG_INFINITY)
    }
}
