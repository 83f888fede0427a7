//! Compass directions and their unit steps.

use crate::position::Position;

/// One of the four compass directions on a grid whose rows grow southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// The four pairs of orthogonally adjacent directions, one per corner of a cell.
///
/// Each pair `(d1, d2)` names the two side neighbours `pos + d1` and
/// `pos + d2` and the diagonal neighbour `pos + d1 + d2`.
pub const CORNERS: [(Direction, Direction); 4] = [
    (Direction::North, Direction::West),
    (Direction::West, Direction::South),
    (Direction::South, Direction::East),
    (Direction::East, Direction::North),
];

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The unit step for this direction as a `(row, col)` delta.
    pub const fn delta(self) -> Position {
        match self {
            Direction::North => Position::new(-1, 0),
            Direction::East => Position::new(0, 1),
            Direction::South => Position::new(1, 0),
            Direction::West => Position::new(0, -1),
        }
    }

    pub const fn clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub const fn counter_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_four_times_is_identity() {
        for d in Direction::ALL {
            assert_eq!(d.clockwise().clockwise().clockwise().clockwise(), d);
        }
    }

    #[test]
    fn test_counter_clockwise_inverts_clockwise() {
        for d in Direction::ALL {
            assert_eq!(d.clockwise().counter_clockwise(), d);
            assert_eq!(d.counter_clockwise().clockwise(), d);
        }
    }

    #[test]
    fn test_opposite_is_involution_without_fixed_point() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite(), d.clockwise().clockwise());
        }
    }

    #[test]
    fn test_deltas_are_unit_and_cancel_with_opposite() {
        for d in Direction::ALL {
            let delta = d.delta();
            assert_eq!(delta.row.abs() + delta.col.abs(), 1);
            assert_eq!(delta + d.opposite().delta(), Position::ZERO);
        }
    }

    #[test]
    fn test_corner_pairs_are_orthogonal() {
        for (d1, d2) in CORNERS {
            assert_eq!(d1.delta().dot(d2.delta()), 0);
            assert_eq!(d1.counter_clockwise(), d2);
        }
    }
}
