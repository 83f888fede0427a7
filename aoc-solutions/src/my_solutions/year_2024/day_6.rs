//! Day 6: Guard Gallivant

use std::collections::HashSet;

use aoc_grid::{Direction, Grid, GridParser, Position};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};
use rayon::prelude::*;
use tracing::debug;

use super::invalid_grid;

pub struct Day6;

#[derive(Debug)]
pub struct SharedData {
    walls: Grid<bool>,
    start: Position,
    visited: Option<HashSet<Position>>,
}

/// How a patrol ended.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Patrol {
    Exited(HashSet<Position>),
    Looped,
}

impl AocParser for Day6 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = GridParser::new()
            .rectangular(true)
            .parse_chars(input)
            .map_err(invalid_grid)?;
        let start = map
            .find(&'^')
            .ok_or_else(|| ParseError::MissingData("no guard '^' on the map".into()))?;

        Ok(SharedData {
            walls: map.map(|&cell| cell == '#'),
            start,
            visited: None,
        })
    }
}

impl PartSolver<1> for Day6 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited_cells(shared)?.len().to_string())
    }
}

impl PartSolver<2> for Day6 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared.start;
        let candidates: Vec<Position> = visited_cells(shared)?
            .iter()
            .copied()
            .filter(|&pos| pos != start)
            .collect();

        let loops = candidates
            .par_iter()
            .filter(|&&obstacle| patrol(&shared.walls, start, Some(obstacle)) == Patrol::Looped)
            .count();

        debug!(candidates = candidates.len(), loops, "obstacle search finished");
        Ok(loops.to_string())
    }
}

impl Solver for Day6 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn visited_cells(shared: &mut SharedData) -> Result<&HashSet<Position>, SolveError> {
    if shared.visited.is_none() {
        match patrol(&shared.walls, shared.start, None) {
            Patrol::Exited(visited) => shared.visited = Some(visited),
            Patrol::Looped => {
                return Err(SolveError::failed("the guard never leaves the map"));
            }
        }
    }
    shared
        .visited
        .as_ref()
        .ok_or_else(|| SolveError::failed("patrol was not recorded"))
}

/// Walks the guard north from `start`, turning clockwise in front of walls.
///
/// The guard loops once it is back on a cell facing a direction it has
/// already faced there.
fn patrol(walls: &Grid<bool>, start: Position, obstacle: Option<Position>) -> Patrol {
    let mut pos = start;
    let mut facing = Direction::North;
    let mut seen = HashSet::from([(pos, facing)]);

    loop {
        let ahead = pos + facing;
        let blocked = match walls.get(ahead) {
            None => break,
            Some(&wall) => wall || obstacle == Some(ahead),
        };

        if blocked {
            facing = facing.clockwise();
        } else {
            pos = ahead;
        }

        if !seen.insert((pos, facing)) {
            return Patrol::Looped;
        }
    }

    Patrol::Exited(seen.into_iter().map(|(pos, _)| pos).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

    #[test]
    fn test_example() {
        assert_eq!(Day6::solve_all(EXAMPLE).unwrap(), vec!["41", "6"]);
    }

    #[test]
    fn test_known_loop_obstacle() {
        let shared = Day6::parse(EXAMPLE).unwrap();
        assert_eq!(
            patrol(&shared.walls, shared.start, Some(Position::new(6, 3))),
            Patrol::Looped
        );
    }

    #[test]
    fn test_guard_walking_straight_out() {
        let mut shared = Day6::parse("...\n.^.\n...").unwrap();
        assert_eq!(<Day6 as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
        assert_eq!(<Day6 as PartSolver<2>>::solve(&mut shared).unwrap(), "0");
    }

    #[test]
    fn test_boxed_in_guard_fails() {
        let mut shared = Day6::parse(".#.\n#^#\n.#.").unwrap();
        assert!(matches!(
            <Day6 as PartSolver<1>>::solve(&mut shared),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_missing_guard() {
        assert!(matches!(Day6::parse("...\n..."), Err(ParseError::MissingData(_))));
    }
}
