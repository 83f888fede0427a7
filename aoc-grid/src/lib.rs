//! Grid geometry toolkit for Advent of Code puzzles
//!
//! Puzzle inputs are very often a rectangle of characters. This library
//! provides the pieces those puzzles keep reaching for:
//!
//! - [`Position`] and [`Direction`]: integer 2-D vectors and compass steps
//! - [`Grid`]: a (possibly ragged) grid with bounds-tolerant lookups and
//!   4-connected neighbours
//! - [`GridParser`]: configurable parsing of puzzle text into a grid
//! - transformations: [`transpose`], reflections, rotations and the eight
//!   directional [`rays`] used for word searches
//! - [`extract_blocks`]: every fixed-size window of a grid
//! - [`find_regions`]: flood-fill region analysis with area, perimeter and
//!   side counts
//!
//! # Quick Example
//!
//! ```
//! use aoc_grid::{find_regions, parse_char_grid, Direction, Position};
//!
//! let grid = parse_char_grid("AAB\nABB");
//!
//! let start = Position::new(0, 0);
//! assert_eq!(grid.get(start + Direction::East), Some(&'A'));
//! assert_eq!(grid.get(start + Direction::North), None);
//!
//! let regions = find_regions(&grid);
//! assert_eq!(regions.len(), 2);
//! assert_eq!(regions[0].area, 3);
//! assert_eq!(regions[0].edges, 6);
//! ```
//!
//! # Errors
//!
//! Lookups never fail: out-of-bounds positions simply yield `None`.
//! Operations that need aligned columns (transpose, rotations, vertical and
//! diagonal rays, block extraction) return [`GridError::Ragged`] for ragged
//! input. Empty grids are valid everywhere and give empty results.

mod blocks;
mod direction;
mod error;
mod grid;
mod parse;
mod position;
mod region;
mod transform;

// Re-export public API
pub use blocks::extract_blocks;
pub use direction::{CORNERS, Direction};
pub use error::GridError;
pub use grid::Grid;
pub use parse::{CellSplit, GridParser, parse_char_grid, parse_grid};
pub use position::Position;
pub use region::{Region, RegionMap, find_regions, map_regions};
pub use transform::{
    Ray, rays, reflect_horizontal, reflect_vertical, rotate_clockwise,
    rotate_counter_clockwise, transpose,
};
