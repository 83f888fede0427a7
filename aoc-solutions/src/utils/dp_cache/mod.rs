//! Dynamic Programming Cache with Lazy Evaluation
//!
//! This module provides a memoization cache for dynamic programming problems where values
//! depend on other values in a directed acyclic graph (DAG). Grid puzzles are the typical
//! use: the value at a position depends on the values at some of its neighbours.
//!
//! # Backend Types
//!
//! - [`HashMapBackend`]: Supports arbitrary hashable index types
//! - [`GridBackend`]: Dense storage shaped like a [`Grid`](aoc_grid::Grid), indexed by
//!   [`Position`](aoc_grid::Position)
//!
//! # Warning: Cycle Behavior
//!
//! **This cache does NOT support cycle detection.** If the dependency graph contains
//! cycles the recursion never terminates. **Users MUST ensure that dependencies form a DAG.**
//!
//! # Example: Trait-based API with Builder (recommended)
//!
//! ```rust
//! use aoc_grid::{parse_char_grid, Direction, Grid, Position};
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, GridBackend};
//!
//! /// Number of ways to reach the bottom row moving only south or east over '.' cells.
//! struct Descents<'a>(&'a Grid<char>);
//!
//! impl DpProblem<Position, u64> for Descents<'_> {
//!     fn deps(&self, pos: &Position) -> Vec<Position> {
//!         [Direction::South, Direction::East]
//!             .into_iter()
//!             .map(|d| *pos + d)
//!             .filter(|next| self.0.get(*next) == Some(&'.'))
//!             .collect()
//!     }
//!     fn compute(&self, pos: &Position, deps: Vec<u64>) -> u64 {
//!         if pos.row as usize + 1 == self.0.row_count() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let grid = parse_char_grid("...\n.#.\n...");
//! let cache = DpCache::builder()
//!     .backend(GridBackend::for_grid(&grid))
//!     .problem(Descents(&grid))
//!     .build();
//! assert_eq!(cache.get(&Position::new(0, 0)), Some(2));
//! ```
//!
//! # Example: Closure-based API with ClosureProblem
//!
//! For quick prototyping, you can use `ClosureProblem` instead of defining a struct:
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
//!
//! let fib = ClosureProblem::new(
//!     |n: &u64| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
//!     |n: &u64, deps: Vec<u64>| if *n <= 1 { *n } else { deps[0] + deps[1] },
//! );
//!
//! let cache = DpCache::builder()
//!     .backend(HashMapBackend::new())
//!     .problem(fib)
//!     .build();
//!
//! assert_eq!(cache.get(&10), Some(55));
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, GridBackend, HashMapBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use problem::{ClosureProblem, DpProblem};
