//! Day 10: Hoof It

use std::collections::HashSet;

use aoc_grid::{Grid, GridParser, Position};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

use super::invalid_grid;
use crate::utils::dp_cache::{DpCache, DpProblem, GridBackend, HashMapBackend};

const PEAK: u8 = 9;

pub struct Day10;

/// Heights per cell; `.` marks impassable ground.
pub type TopoMap = Grid<Option<u8>>;

impl AocParser for Day10 {
    type SharedData<'a> = TopoMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        GridParser::new()
            .rectangular(true)
            .parse_with(input, |cell| match cell {
                "." => Ok(None),
                digit => digit
                    .parse::<u8>()
                    .map(Some)
                    .map_err(|e| format!("expected a height: {e}")),
            })
            .map_err(invalid_grid)
    }
}

/// Sum of trailhead scores: distinct peaks reachable from each trailhead.
impl PartSolver<1> for Day10 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let peaks: DpCache<Position, HashSet<Position>, _, _> = DpCache::builder()
            .backend(HashMapBackend::new())
            .problem(HikingMap(shared))
            .build();

        let mut total = 0;
        for trailhead in trailheads(shared) {
            total += peaks
                .get(&trailhead)
                .ok_or_else(|| SolveError::failed(format!("no score for {trailhead}")))?
                .len();
        }
        Ok(total.to_string())
    }
}

/// Sum of trailhead ratings: distinct hiking trails from each trailhead.
impl PartSolver<2> for Day10 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ratings: DpCache<Position, u64, _, _> = DpCache::builder()
            .backend(GridBackend::for_grid(shared))
            .problem(HikingMap(shared))
            .build();

        let mut total = 0;
        for trailhead in trailheads(shared) {
            total += ratings
                .get(&trailhead)
                .ok_or_else(|| SolveError::failed(format!("no rating for {trailhead}")))?;
        }
        Ok(total.to_string())
    }
}

impl Solver for Day10 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn trailheads(map: &TopoMap) -> Vec<Position> {
    map.find_all(|height| *height == Some(0))
}

/// Trails climb exactly one unit per orthogonal step.
struct HikingMap<'a>(&'a TopoMap);

impl HikingMap<'_> {
    fn height(&self, pos: Position) -> Option<u8> {
        self.0.get(pos).copied().flatten()
    }

    fn uphill(&self, pos: Position) -> Vec<Position> {
        let Some(height) = self.height(pos) else {
            return Vec::new();
        };
        self.0
            .neighbours(pos)
            .filter(|&next| self.height(next) == Some(height + 1))
            .collect()
    }
}

impl DpProblem<Position, u64> for HikingMap<'_> {
    fn deps(&self, pos: &Position) -> Vec<Position> {
        self.uphill(*pos)
    }

    fn compute(&self, pos: &Position, deps: Vec<u64>) -> u64 {
        if self.height(*pos) == Some(PEAK) {
            1
        } else {
            deps.iter().sum()
        }
    }
}

impl DpProblem<Position, HashSet<Position>> for HikingMap<'_> {
    fn deps(&self, pos: &Position) -> Vec<Position> {
        self.uphill(*pos)
    }

    fn compute(&self, pos: &Position, deps: Vec<HashSet<Position>>) -> HashSet<Position> {
        if self.height(*pos) == Some(PEAK) {
            HashSet::from([*pos])
        } else {
            deps.into_iter().flatten().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";

    #[test]
    fn test_example() {
        assert_eq!(Day10::solve_all(EXAMPLE).unwrap(), vec!["36", "81"]);
    }

    #[test]
    fn test_single_trail() {
        let input = "\
0123
1234
8765
9876";
        assert_eq!(Day10::solve_all(input).unwrap(), vec!["1", "16"]);
    }

    #[test]
    fn test_impassable_cells() {
        let input = "\
...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9";
        assert_eq!(Day10::solve_all(input).unwrap(), vec!["2", "2"]);
    }

    #[test]
    fn test_rating_with_many_branches() {
        let input = "\
.....0.
..4321.
..5..2.
..6543.
..7..4.
..8765.
..9....";
        let mut map = Day10::parse(input).unwrap();
        assert_eq!(<Day10 as PartSolver<2>>::solve(&mut map).unwrap(), "3");
    }

    #[test]
    fn test_bad_height() {
        assert!(matches!(
            Day10::parse("01\n2x"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
