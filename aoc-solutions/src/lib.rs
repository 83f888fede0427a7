//! Advent of Code 2024 grid puzzle solutions
//!
//! Each solution implements the `aoc-solver` traits on top of the grid
//! toolkit in `aoc-grid`. Shared helpers live in [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
