//! Day 8: Resonant Collinearity

use std::collections::{BTreeMap, HashSet};

use aoc_grid::{Grid, GridParser, Position};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

use super::invalid_grid;

pub struct Day8;

#[derive(Debug)]
pub struct SharedData {
    map: Grid<char>,
    antennas: BTreeMap<char, Vec<Position>>,
}

impl AocParser for Day8 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = GridParser::new()
            .rectangular(true)
            .parse_chars(input)
            .map_err(invalid_grid)?;

        let mut antennas: BTreeMap<char, Vec<Position>> = BTreeMap::new();
        for (pos, &frequency) in map.iter() {
            if frequency.is_ascii_alphanumeric() {
                antennas.entry(frequency).or_default().push(pos);
            }
        }

        Ok(SharedData { map, antennas })
    }
}

impl PartSolver<1> for Day8 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let antinodes = antinodes(shared, |map, a, b| {
            let delta = a - b;
            [a + delta, b - delta]
                .into_iter()
                .filter(|pos| map.contains(*pos))
                .collect()
        });
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Day8 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let antinodes = antinodes(shared, |map, a, b| {
            let mut line = in_bounds_ray(map, a, a - b);
            line.extend(in_bounds_ray(map, b, b - a));
            line
        });
        Ok(antinodes.len().to_string())
    }
}

impl Solver for Day8 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Applies `resonate` to every unordered pair of same-frequency antennas.
fn antinodes<F>(shared: &SharedData, resonate: F) -> HashSet<Position>
where
    F: Fn(&Grid<char>, Position, Position) -> Vec<Position>,
{
    let mut antinodes = HashSet::new();
    for positions in shared.antennas.values() {
        for (i, &a) in positions.iter().enumerate() {
            for &b in &positions[i + 1..] {
                antinodes.extend(resonate(&shared.map, a, b));
            }
        }
    }
    antinodes
}

/// `start`, `start + step`, `start + 2 * step`, ... while on the map.
fn in_bounds_ray(map: &Grid<char>, start: Position, step: Position) -> Vec<Position> {
    std::iter::successors(Some(start), |&pos| Some(pos + step))
        .take_while(|&pos| map.contains(pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";

    #[test]
    fn test_example() {
        assert_eq!(Day8::solve_all(EXAMPLE).unwrap(), vec!["14", "34"]);
    }

    #[test]
    fn test_frequencies_are_grouped() {
        let shared = Day8::parse(EXAMPLE).unwrap();
        assert_eq!(shared.antennas.len(), 2);
        assert_eq!(shared.antennas[&'0'].len(), 4);
        assert_eq!(shared.antennas[&'A'].len(), 3);
    }

    #[test]
    fn test_t_frequency_harmonics() {
        let input = "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........";
        let mut shared = Day8::parse(input).unwrap();
        assert_eq!(<Day8 as PartSolver<2>>::solve(&mut shared).unwrap(), "9");
    }

    #[test]
    fn test_in_bounds_ray_stops_at_edge() {
        let map = aoc_grid::parse_char_grid("....\n....");
        assert_eq!(
            in_bounds_ray(&map, Position::new(0, 0), Position::new(1, 2)),
            vec![Position::new(0, 0), Position::new(1, 2)]
        );
    }
}
