//! Day 12: Garden Groups

use aoc_grid::{Grid, Region, find_regions, parse_char_grid};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

pub struct Day12;

#[derive(Debug)]
pub struct SharedData {
    garden: Grid<char>,
    regions: Option<Vec<Region<char>>>,
}

impl AocParser for Day12 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            garden: parse_char_grid(input),
            regions: None,
        })
    }
}

impl PartSolver<1> for Day12 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = regions(shared).iter().map(Region::fence_cost).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Day12 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = regions(shared).iter().map(Region::bulk_cost).sum();
        Ok(total.to_string())
    }
}

impl Solver for Day12 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn regions(shared: &mut SharedData) -> &[Region<char>] {
    shared
        .regions
        .get_or_insert_with(|| find_regions(&shared.garden))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";

    #[test]
    fn test_example() {
        assert_eq!(Day12::solve_all(EXAMPLE).unwrap(), vec!["1930", "1206"]);
    }

    #[test]
    fn test_small_gardens() {
        assert_eq!(
            Day12::solve_all("AAAA\nBBCD\nBBCC\nEEEC").unwrap(),
            vec!["140", "80"]
        );
        assert_eq!(
            Day12::solve_all("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO").unwrap(),
            vec!["772", "436"]
        );
    }

    #[test]
    fn test_sides_with_inner_holes() {
        let input = "\
AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA";
        let mut shared = Day12::parse(input).unwrap();
        assert_eq!(<Day12 as PartSolver<2>>::solve(&mut shared).unwrap(), "368");
    }

    #[test]
    fn test_regions_are_computed_once() {
        let mut shared = Day12::parse("AB\nBA").unwrap();
        assert!(shared.regions.is_none());
        <Day12 as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(shared.regions.as_ref().map(Vec::len), Some(4));
    }

    #[test]
    fn test_empty_garden_costs_nothing() {
        assert_eq!(Day12::solve_all("").unwrap(), vec!["0", "0"]);
        assert_eq!(Day12::solve_all("\n\n").unwrap(), vec!["0", "0"]);
    }
}
