//! The grid container and its bounds-tolerant lookups.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use crate::direction::Direction;
use crate::error::GridError;
use crate::position::Position;

/// A finite 2-D grid stored as rows of cells.
///
/// Rows may have different lengths (a "ragged" grid). Lookups are
/// ragged-aware: a position is inside the grid only if its column is valid
/// for that particular row. Operations that need a rectangular grid check the
/// shape with [`Grid::dimensions`] and report [`GridError::Ragged`].
///
/// # Example
///
/// ```
/// use aoc_grid::{Grid, Position};
///
/// let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['c']]);
/// assert_eq!(grid.get(Position::new(0, 1)), Some(&'b'));
/// assert_eq!(grid.get(Position::new(1, 1)), None);
/// assert_eq!(grid.get(Position::new(-1, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Total number of cells, summed over rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Returns `(rows, cols)` if every row has the same length.
    ///
    /// An empty grid is `(0, 0)`. The first row defines the expected width.
    pub fn dimensions(&self) -> Result<(usize, usize), GridError> {
        let Some(first) = self.rows.first() else {
            return Ok((0, 0));
        };
        let expected = first.len();
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, cells)) => Err(GridError::Ragged {
                row,
                expected,
                found: cells.len(),
            }),
            None => Ok((self.rows.len(), expected)),
        }
    }

    /// True iff the row index is valid and the column is valid for that row.
    pub fn contains(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// The cell at `pos`, or `None` if it lies outside the grid.
    pub fn get(&self, pos: Position) -> Option<&T> {
        let (row, col) = pos.to_indices()?;
        self.rows.get(row)?.get(col)
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        let (row, col) = pos.to_indices()?;
        self.rows.get_mut(row)?.get_mut(col)
    }

    /// Up to four in-bounds positions one unit step away from `pos`.
    pub fn neighbour_positions(&self, pos: Position) -> HashSet<Position> {
        self.neighbours(pos).collect()
    }

    /// Values at the in-bounds neighbours of `pos`; equal values collapse.
    ///
    /// Use [`Grid::neighbour_positions`] with [`Grid::get`] when every
    /// neighbour's value matters.
    pub fn neighbour_values(&self, pos: Position) -> HashSet<&T>
    where
        T: Eq + Hash,
    {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(pos + d))
            .collect()
    }

    /// Iterator form of [`Grid::neighbour_positions`], in `Direction::ALL` order.
    pub fn neighbours(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |d| pos + d)
            .filter(|p| self.contains(*p))
    }

    /// Every position in the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            (0..cells.len()).map(move |col| Position::from_indices(row, col))
        })
    }

    /// Every `(position, cell)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Position::from_indices(row, col), cell))
        })
    }

    /// The first position, in row-major order, holding `value`.
    pub fn find(&self, value: &T) -> Option<Position>
    where
        T: PartialEq,
    {
        self.iter().find(|(_, cell)| *cell == value).map(|(pos, _)| pos)
    }

    /// Every position holding a cell that satisfies `predicate`.
    pub fn find_all<F>(&self, mut predicate: F) -> Vec<Position>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|(_, cell)| predicate(cell))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// A grid of the same shape with `f` applied to every cell.
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid::from_rows(
            self.rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
        )
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid. Use [`Grid::get`] for a checked lookup.
    fn index(&self, pos: Position) -> &T {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!("position {pos} is outside the grid"),
        }
    }
}

impl<T> From<Vec<Vec<T>>> for Grid<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T> FromIterator<Vec<T>> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
