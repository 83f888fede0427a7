//! Advent of Code 2024: the grid puzzles

pub mod day_4;
pub mod day_6;
pub mod day_8;
pub mod day_10;
pub mod day_12;
pub mod day_14;

use aoc_grid::GridError;
use aoc_solver::ParseError;

pub(crate) fn invalid_grid(error: GridError) -> ParseError {
    ParseError::InvalidFormat(error.to_string())
}
