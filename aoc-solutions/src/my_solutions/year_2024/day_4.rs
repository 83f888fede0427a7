//! Day 4: Ceres Search

use aoc_grid::{Grid, GridParser, Position, Ray, extract_blocks};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

use super::invalid_grid;

const XMAS: [char; 4] = ['X', 'M', 'A', 'S'];

pub struct Day4;

impl AocParser for Day4 {
    type SharedData<'a> = Grid<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        GridParser::new()
            .rectangular(true)
            .parse_chars(input)
            .map_err(invalid_grid)
    }
}

/// `XMAS` in any of the eight directions, overlaps allowed.
impl PartSolver<1> for Day4 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for ray in Ray::ALL {
            total += ray
                .read(shared)
                .map_err(SolveError::failed)?
                .iter()
                .map(|line| count_occurrences(line, &XMAS))
                .sum::<usize>();
        }
        Ok(total.to_string())
    }
}

/// Two `MAS` words crossing on their `A`.
impl PartSolver<2> for Day4 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = extract_blocks(shared, 3, 3)
            .map_err(SolveError::failed)?
            .iter()
            .filter(|block| is_cross_mas(block))
            .count();
        Ok(count.to_string())
    }
}

impl Solver for Day4 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn count_occurrences<T: PartialEq>(line: &[T], word: &[T]) -> usize {
    line.windows(word.len()).filter(|window| *window == word).count()
}

fn is_cross_mas(block: &Grid<char>) -> bool {
    let at = |row, col| block.get(Position::new(row, col)).copied();
    let mas = |a: Option<char>, b: Option<char>| {
        matches!((a, b), (Some('M'), Some('S')) | (Some('S'), Some('M')))
    };
    at(1, 1) == Some('A') && mas(at(0, 0), at(2, 2)) && mas(at(0, 2), at(2, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

    #[test]
    fn test_example() {
        assert_eq!(Day4::solve_all(EXAMPLE).unwrap(), vec!["18", "9"]);
    }

    #[test]
    fn test_count_occurrences_allows_overlap() {
        let line: Vec<char> = "XMASAMXMAS".chars().collect();
        assert_eq!(count_occurrences(&line, &XMAS), 2);
        let palindrome: Vec<char> = "ABABA".chars().collect();
        assert_eq!(count_occurrences(&palindrome, &['A', 'B', 'A']), 2);
    }

    #[test]
    fn test_cross_mas_orientations() {
        for block in ["M.S\n.A.\nM.S", "S.S\n.A.\nM.M", "M.M\n.A.\nS.S", "S.M\n.A.\nS.M"] {
            assert!(is_cross_mas(&aoc_grid::parse_char_grid(block)), "{block}");
        }
        assert!(!is_cross_mas(&aoc_grid::parse_char_grid("M.M\n.A.\nM.M")));
        assert!(!is_cross_mas(&aoc_grid::parse_char_grid("M.S\n.A.\nS.M")));
    }

    #[test]
    fn test_ragged_input_is_rejected() {
        assert!(matches!(
            Day4::parse("XMAS\nXM"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
