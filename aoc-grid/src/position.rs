//! Integer 2-D positions and the arithmetic defined on them.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

use crate::direction::Direction;

/// A `(row, col)` pair of integers.
///
/// Positions double as 2-D vectors: the difference of two positions is the
/// step between them, and adding a step to a position moves it. Coordinates
/// are signed so that out-of-bounds neighbours of edge cells can be
/// represented and rejected by [`Grid::contains`](crate::Grid::contains).
///
/// # Example
///
/// ```
/// use aoc_grid::Position;
///
/// let a = Position::new(1, 2);
/// let b = Position::new(4, 6);
/// assert_eq!(b - a, Position::new(3, 4));
/// assert_eq!(2 * a, a * 2);
/// assert_eq!(a.dot(b), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    /// The origin, `(0, 0)`.
    pub const ZERO: Position = Position { row: 0, col: 0 };

    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Builds a position from unsigned indices, as produced by enumerating rows and cells.
    pub fn from_indices(row: usize, col: usize) -> Self {
        Self {
            row: row as i64,
            col: col as i64,
        }
    }

    /// Returns `(row, col)` as indices, or `None` if either coordinate is negative.
    pub fn to_indices(self) -> Option<(usize, usize)> {
        Some((usize::try_from(self.row).ok()?, usize::try_from(self.col).ok()?))
    }

    /// Componentwise multiplication by a scalar.
    pub const fn scale(self, factor: i64) -> Self {
        Self::new(self.row * factor, self.col * factor)
    }

    /// Dot product: `row * other.row + col * other.col`.
    pub const fn dot(self, other: Position) -> i64 {
        self.row * other.row + self.col * other.col
    }

    /// One unit step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self + direction.delta()
    }

    /// Wraps the position onto a `rows` x `cols` torus.
    ///
    /// Unlike `%`, which truncates toward zero, the result is always in
    /// `0..rows` and `0..cols`.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub const fn wrap(self, rows: i64, cols: i64) -> Self {
        Self::new(self.row.rem_euclid(rows), self.col.rem_euclid(cols))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i64, i64)> for Position {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, rhs: Direction) -> Position {
        self + rhs.delta()
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        *self = *self + rhs;
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, rhs: Position) {
        *self = *self - rhs;
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        Position::new(-self.row, -self.col)
    }
}

impl Mul<i64> for Position {
    type Output = Position;

    fn mul(self, rhs: i64) -> Position {
        self.scale(rhs)
    }
}

impl Mul<Position> for i64 {
    type Output = Position;

    fn mul(self, rhs: Position) -> Position {
        rhs.scale(self)
    }
}

// Truncating, like the primitive operators. Use `wrap` for toroidal coordinates.
impl Rem<i64> for Position {
    type Output = Position;

    fn rem(self, rhs: i64) -> Position {
        Position::new(self.row % rhs, self.col % rhs)
    }
}

impl Div<i64> for Position {
    type Output = Position;

    fn div(self, rhs: i64) -> Position {
        Position::new(self.row / rhs, self.col / rhs)
    }
}
