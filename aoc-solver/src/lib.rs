//! Advent of Code Solver Traits
//!
//! The small set of traits every puzzle solution in this workspace
//! implements. Parsing is separated from solving, and the parsed data is
//! shared (mutably) between the parts so that work done for part 1 can be
//! reused by part 2.
//!
//! # Overview
//!
//! - [`AocParser`]: turns the raw input into `SharedData`
//! - [`PartSolver<N>`]: solves part `N` from the shared data
//! - [`Solver`]: dispatches a runtime part number to the part solvers
//! - [`SolverExt`]: range-checked dispatch and solving every part at once
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver, SolverExt};
//!
//! struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .split_whitespace()
//!             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().map(|n| n * n).sum::<i64>().to_string())
//!     }
//! }
//!
//! impl Solver for Sums {
//!     const PARTS: u8 = 2;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(shared),
//!             2 => <Self as PartSolver<2>>::solve(shared),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! assert_eq!(Sums::solve_all("1 2 3").unwrap(), vec!["6", "14"]);
//! ```

mod error;
mod solver;

// Re-export public API
pub use error::{ParseError, SolveError};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};
