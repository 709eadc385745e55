use glam::{Mat3, Quat};
use std::f32::consts::FRAC_PI_2;

use crate::direction::{Direction, ALL_DIRECTIONS};

/// Number of proper rotations of the cube.
pub const ORIENTATION_COUNT: usize = 24;

/// Index of one of the 24 cube orientations, 0..24.
///
/// All per-element data lives in [`OrientationSet`]; ids compare by
/// value, so two ids are the same orientation iff they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrientationId(pub u8);

/// Two unit quaternions represent the same rotation when their dot
/// product magnitude is 1 (sign flip covers the antipode); 0.99
/// leaves room for float error. The closest distinct cube
/// orientations sit at |dot| = cos(45 deg) ~= 0.707.
const MATCH_TOLERANCE: f32 = 0.99;

/// Perpendicularity tolerance when pairing up/forward directions.
const PERP_TOLERANCE: f32 = 0.1;

/// The 24 proper rotations of a cube and their quarter-turn algebra.
///
/// Built once at startup; after construction every operation is an
/// integer table lookup, and the set is immutable and freely
/// shareable. Pass a reference to whoever needs rotation math.
pub struct OrientationSet {
    quats: [Quat; ORIENTATION_COUNT],
    matrices: [Mat3; ORIENTATION_COUNT],
    ups: [Direction; ORIENTATION_COUNT],
    /// `turns[axis][element]`: element after one +90 degree turn about axis.
    turns: [[OrientationId; ORIENTATION_COUNT]; 6],
    /// First element (in index order) whose up is the given direction.
    canonical: [OrientationId; 6],
    identity: OrientationId,
}

impl Default for OrientationSet {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationSet {
    /// Enumerate the 24 orientations and derive the quarter-turn
    /// table. Infallible: every quarter turn of a cube orientation is
    /// again a cube orientation, and the tolerant quaternion matching
    /// only runs here, never at query time.
    pub fn new() -> Self {
        let mut quats = [Quat::IDENTITY; ORIENTATION_COUNT];
        let mut matrices = [Mat3::IDENTITY; ORIENTATION_COUNT];
        let mut ups = [Direction::Up; ORIENTATION_COUNT];
        let mut count = 0;

        // Ordered (up, forward) pairs of perpendicular directions:
        // 6 ups x 4 forwards each. Enumeration order fixes the
        // element indices.
        for up in ALL_DIRECTIONS {
            for forward in ALL_DIRECTIONS {
                if up.vector().dot(forward.vector()).abs() > PERP_TOLERANCE {
                    continue;
                }
                let left = up.vector().cross(forward.vector());
                let matrix = Mat3::from_cols(left, up.vector(), forward.vector());
                quats[count] = Quat::from_mat3(&matrix).normalize();
                matrices[count] = matrix;
                ups[count] = up;
                count += 1;
            }
        }
        debug_assert_eq!(count, ORIENTATION_COUNT);

        let match_quat = |q: Quat| -> OrientationId {
            let index = quats
                .iter()
                .position(|candidate| candidate.dot(q).abs() >= MATCH_TOLERANCE)
                .expect("a quarter turn of a cube orientation must be a cube orientation");
            OrientationId(index as u8)
        };

        let mut turns = [[OrientationId(0); ORIENTATION_COUNT]; 6];
        for axis in ALL_DIRECTIONS {
            let turn = Quat::from_axis_angle(axis.vector(), FRAC_PI_2);
            for (element, &quat) in quats.iter().enumerate() {
                turns[axis as usize][element] = match_quat((turn * quat).normalize());
            }
        }

        let mut canonical = [OrientationId(0); 6];
        for direction in ALL_DIRECTIONS {
            let first = ups
                .iter()
                .position(|&up| up == direction)
                .expect("every direction is the up of some orientation");
            canonical[direction as usize] = OrientationId(first as u8);
        }

        let identity = match_quat(Quat::IDENTITY);

        Self {
            quats,
            matrices,
            ups,
            turns,
            canonical,
            identity,
        }
    }

    /// The orientation whose basis is the canonical world axes.
    pub fn identity(&self) -> OrientationId {
        self.identity
    }

    /// Apply `steps` quarter turns about `axis`.
    ///
    /// A group action: 0 steps is the identity, 4 steps returns to the
    /// start, and step counts add modulo 4. Negative counts turn the
    /// other way (-1 about an axis equals +1 about its opposite,
    /// which is the same as +3 about the axis itself).
    pub fn rotated(&self, orientation: OrientationId, axis: Direction, steps: i32) -> OrientationId {
        let steps = steps.rem_euclid(4);
        let mut current = orientation;
        for _ in 0..steps {
            current = self.turns[axis as usize][current.0 as usize];
        }
        current
    }

    /// The direction this orientation's local up points to.
    pub fn up_of(&self, orientation: OrientationId) -> Direction {
        self.ups[orientation.0 as usize]
    }

    /// The canonical orientation whose up is `direction`.
    ///
    /// Inverse of [`up_of`](Self::up_of) onto the canonical elements:
    /// `up_of(from_up(d)) == d` for every direction.
    pub fn from_up(&self, direction: Direction) -> OrientationId {
        self.canonical[direction as usize]
    }

    /// The 3x3 rotation this orientation represents. Geometry payload
    /// for mapping local mesh data into world space; opaque to the
    /// rotation algebra itself.
    pub fn matrix(&self, orientation: OrientationId) -> Mat3 {
        self.matrices[orientation.0 as usize]
    }

    /// Quaternion form of [`matrix`](Self::matrix).
    pub fn quat(&self, orientation: OrientationId) -> Quat {
        self.quats[orientation.0 as usize]
    }

    /// All 24 orientation ids in index order.
    pub fn ids(&self) -> impl Iterator<Item = OrientationId> {
        (0..ORIENTATION_COUNT).map(|index| OrientationId(index as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_element_count() {
        let set = OrientationSet::new();
        assert_eq!(set.ids().count(), 24);
    }

    #[test]
    fn test_elements_are_distinct() {
        let set = OrientationSet::new();
        for a in set.ids() {
            for b in set.ids() {
                if a != b {
                    let dot = set.quat(a).dot(set.quat(b)).abs();
                    assert!(dot < MATCH_TOLERANCE, "{a:?} and {b:?} coincide (|dot| = {dot})");
                }
            }
        }
    }

    #[test]
    fn test_elements_are_proper_rotations() {
        let set = OrientationSet::new();
        for id in set.ids() {
            let det = set.matrix(id).determinant();
            assert!((det - 1.0).abs() < 1e-5, "{id:?} has determinant {det}");
        }
    }

    #[test]
    fn test_identity_basis() {
        let set = OrientationSet::new();
        let matrix = set.matrix(set.identity());
        assert!(matrix.abs_diff_eq(Mat3::IDENTITY, 1e-6));
        assert_eq!(set.up_of(set.identity()), Direction::Up);
    }

    #[test]
    fn test_zero_steps_is_identity_action() {
        let set = OrientationSet::new();
        for element in set.ids() {
            for axis in ALL_DIRECTIONS {
                assert_eq!(set.rotated(element, axis, 0), element);
            }
        }
    }

    #[test]
    fn test_four_steps_is_a_full_turn() {
        let set = OrientationSet::new();
        for element in set.ids() {
            for axis in ALL_DIRECTIONS {
                assert_eq!(set.rotated(element, axis, 4), element);
            }
        }
    }

    #[test]
    fn test_one_step_then_back() {
        let set = OrientationSet::new();
        for element in set.ids() {
            for axis in ALL_DIRECTIONS {
                let turned = set.rotated(element, axis, 1);
                assert_eq!(set.rotated(turned, axis, -1), element);
            }
        }
    }

    #[test]
    fn test_steps_add_modulo_four() {
        let set = OrientationSet::new();
        for element in set.ids() {
            for axis in ALL_DIRECTIONS {
                for m in -5..=5 {
                    for n in -5..=5 {
                        let split = set.rotated(set.rotated(element, axis, m), axis, n);
                        let joined = set.rotated(element, axis, m + n);
                        assert_eq!(split, joined, "element {element:?} axis {axis:?} m={m} n={n}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_closure_over_all_turns() {
        let set = OrientationSet::new();
        for element in set.ids() {
            for axis in ALL_DIRECTIONS {
                for steps in 0..4 {
                    let result = set.rotated(element, axis, steps);
                    assert!((result.0 as usize) < ORIENTATION_COUNT);
                }
            }
        }
    }

    #[test]
    fn test_turn_about_up_axis_preserves_up() {
        let set = OrientationSet::new();
        for element in set.ids() {
            let axis = set.up_of(element);
            let turned = set.rotated(element, axis, 1);
            assert_eq!(set.up_of(turned), set.up_of(element));
        }
    }

    #[test]
    fn test_up_lookup_consistency() {
        let set = OrientationSet::new();
        for direction in ALL_DIRECTIONS {
            assert_eq!(set.up_of(set.from_up(direction)), direction);
        }
    }

    #[test]
    fn test_up_matches_rotated_y_axis() {
        let set = OrientationSet::new();
        for id in set.ids() {
            let world_up = set.quat(id) * Vec3::Y;
            assert_eq!(Direction::nearest(world_up), Some(set.up_of(id)));
        }
    }

    #[test]
    fn test_yaw_cycle_returns_to_identity() {
        let set = OrientationSet::new();
        let mut element = set.identity();
        for _ in 0..4 {
            element = set.rotated(element, Direction::Up, 1);
        }
        assert_eq!(element, set.identity());
    }

    #[test]
    fn test_up_turn_equals_reverse_down_turn() {
        let set = OrientationSet::new();
        let about_up = set.rotated(set.identity(), Direction::Up, 1);
        let about_down = set.rotated(set.identity(), Direction::Down, -1);
        assert_eq!(about_up, about_down);
        assert_ne!(about_up, set.identity());
    }
}
