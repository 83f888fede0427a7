//! Reoriented copies of a grid and directional reads for word searches.
//!
//! Every function here is pure: the input grid is borrowed and a new grid (or
//! list of lines) is returned. Functions that need columns to line up check
//! that the grid is rectangular and return [`GridError::Ragged`] otherwise.
//! An empty grid always produces an empty result.

use crate::error::GridError;
use crate::grid::Grid;

/// Rows become columns.
///
/// A grid of rows with no cells has no columns, so it transposes to the
/// empty grid; the round trip only holds for grids with at least one column.
pub fn transpose<T: Clone>(grid: &Grid<T>) -> Result<Grid<T>, GridError> {
    let (rows, cols) = grid.dimensions()?;
    Ok((0..cols)
        .map(|col| (0..rows).map(|row| grid.rows()[row][col].clone()).collect())
        .collect())
}

/// Mirror left-to-right: each row's cells in reverse order.
pub fn reflect_horizontal<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    grid.rows()
        .iter()
        .map(|row| row.iter().rev().cloned().collect())
        .collect()
}

/// Mirror top-to-bottom: the rows in reverse order.
pub fn reflect_vertical<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    grid.rows().iter().rev().cloned().collect()
}

pub fn rotate_clockwise<T: Clone>(grid: &Grid<T>) -> Result<Grid<T>, GridError> {
    transpose(grid).map(|t| reflect_horizontal(&t))
}

pub fn rotate_counter_clockwise<T: Clone>(grid: &Grid<T>) -> Result<Grid<T>, GridError> {
    transpose(grid).map(|t| reflect_vertical(&t))
}

/// The eight directions a grid can be read in.
///
/// Each line returned by [`rays`] starts at the cell a reader facing this
/// direction would read first, so substring matches on the lines are matches
/// in that direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ray {
    East,
    West,
    South,
    North,
    SouthEast,
    SouthWest,
    NorthEast,
    NorthWest,
}

impl Ray {
    pub const ALL: [Ray; 8] = [
        Ray::East,
        Ray::West,
        Ray::South,
        Ray::North,
        Ray::SouthEast,
        Ray::SouthWest,
        Ray::NorthEast,
        Ray::NorthWest,
    ];

    pub fn read<T: Clone>(self, grid: &Grid<T>) -> Result<Vec<Vec<T>>, GridError> {
        rays(grid, self)
    }
}

/// All lines of `grid` read in direction `ray`.
///
/// East and West accept ragged grids; the other directions need a
/// rectangular one.
///
/// # Example
///
/// ```
/// use aoc_grid::{rays, Grid, Ray};
///
/// let grid: Grid<char> = vec![vec!['A', 'B'], vec!['C', 'D']].into();
/// assert_eq!(rays(&grid, Ray::South).unwrap(), vec![vec!['A', 'C'], vec!['B', 'D']]);
/// assert_eq!(rays(&grid, Ray::SouthEast).unwrap()[0], vec!['A', 'D']);
/// ```
pub fn rays<T: Clone>(grid: &Grid<T>, ray: Ray) -> Result<Vec<Vec<T>>, GridError> {
    let lines = match ray {
        Ray::East => grid.rows().to_vec(),
        Ray::West => reflect_horizontal(grid).into_rows(),
        Ray::South => transpose(grid)?.into_rows(),
        Ray::North => reversed(transpose(grid)?.into_rows()),
        Ray::SouthEast => south_east_diagonals(grid)?,
        Ray::SouthWest => south_east_diagonals(&reflect_horizontal(grid))?,
        Ray::NorthWest => reversed(south_east_diagonals(grid)?),
        Ray::NorthEast => reversed(south_east_diagonals(&reflect_horizontal(grid))?),
    };
    Ok(lines)
}

fn reversed<T>(lines: Vec<Vec<T>>) -> Vec<Vec<T>> {
    lines
        .into_iter()
        .map(|mut line| {
            line.reverse();
            line
        })
        .collect()
}

/// Diagonals running top-left to bottom-right.
///
/// Seeds are every cell of the first column top to bottom, then every cell
/// of the first row after the corner, left to right.
fn south_east_diagonals<T: Clone>(grid: &Grid<T>) -> Result<Vec<Vec<T>>, GridError> {
    let (rows, cols) = grid.dimensions()?;
    if rows == 0 || cols == 0 {
        return Ok(Vec::new());
    }
    let seeds = (0..rows).map(|row| (row, 0)).chain((1..cols).map(|col| (0, col)));
    Ok(seeds
        .map(|(row, col)| {
            (0..(rows - row).min(cols - col))
                .map(|k| grid.rows()[row + k][col + k].clone())
                .collect()
        })
        .collect())
}
