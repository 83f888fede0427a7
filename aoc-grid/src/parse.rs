//! Text to grid parsing.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::GridError;
use crate::grid::Grid;

/// How a line of input is split into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellSplit {
    /// Every character is a cell.
    #[default]
    Chars,
    /// Cells are separated by runs of whitespace.
    Whitespace,
}

/// Configurable parser from puzzle text to a [`Grid`].
///
/// The defaults suit most puzzle inputs: one character per cell, lines
/// trimmed, blank lines skipped, ragged rows allowed.
///
/// # Example
///
/// ```
/// use aoc_grid::{CellSplit, GridParser, Position};
///
/// let grid = GridParser::new()
///     .cells(CellSplit::Whitespace)
///     .rectangular(true)
///     .parse::<u32>("1 2 3\n4 5 6\n")
///     .unwrap();
/// assert_eq!(grid.get(Position::new(1, 2)), Some(&6));
/// ```
#[derive(Debug, Clone)]
pub struct GridParser {
    split: CellSplit,
    trim: bool,
    skip_blank_lines: bool,
    rectangular: bool,
}

impl Default for GridParser {
    fn default() -> Self {
        Self {
            split: CellSplit::Chars,
            trim: true,
            skip_blank_lines: true,
            rectangular: false,
        }
    }
}

impl GridParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(mut self, split: CellSplit) -> Self {
        self.split = split;
        self
    }

    /// Strip leading and trailing whitespace from each line before splitting.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Reject inputs whose rows differ in length.
    pub fn rectangular(mut self, rectangular: bool) -> Self {
        self.rectangular = rectangular;
        self
    }

    pub fn parse_chars(&self, input: &str) -> Result<Grid<char>, GridError> {
        self.finish(self.char_rows(input))
    }

    pub fn parse<T>(&self, input: &str) -> Result<Grid<T>, GridError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.parse_with(input, str::parse::<T>)
    }

    /// Parses every cell token with `convert`, reporting the first failure.
    pub fn parse_with<T, E, F>(&self, input: &str, mut convert: F) -> Result<Grid<T>, GridError>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        let grid = self
            .lines(input)
            .enumerate()
            .map(|(row, line)| {
                self.tokens(line)
                    .enumerate()
                    .map(|(col, token)| {
                        convert(token).map_err(|e| GridError::InvalidCell {
                            row,
                            col,
                            token: token.to_string(),
                            reason: e.to_string(),
                        })
                    })
                    .collect::<Result<Vec<T>, GridError>>()
            })
            .collect::<Result<Grid<T>, GridError>>()?;
        self.finish(grid)
    }

    fn char_rows(&self, input: &str) -> Grid<char> {
        self.lines(input).map(|line| line.chars().collect()).collect()
    }

    fn lines<'a>(&'a self, input: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let (trim, skip_blank) = (self.trim, self.skip_blank_lines);
        input
            .lines()
            .map(move |line| if trim { line.trim() } else { line })
            .filter(move |line| !(skip_blank && line.trim().is_empty()))
    }

    fn tokens<'a>(&self, line: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self.split {
            CellSplit::Chars => Box::new(
                line.char_indices()
                    .map(move |(idx, c)| &line[idx..idx + c.len_utf8()]),
            ),
            CellSplit::Whitespace => Box::new(line.split_whitespace()),
        }
    }

    fn finish<T>(&self, grid: Grid<T>) -> Result<Grid<T>, GridError> {
        if self.rectangular {
            grid.dimensions()?;
        }
        tracing::trace!(rows = grid.row_count(), "parsed grid");
        Ok(grid)
    }
}

/// Parses one character per cell with the default [`GridParser`] settings.
pub fn parse_char_grid(input: &str) -> Grid<char> {
    let grid = GridParser::default().char_rows(input);
    tracing::trace!(rows = grid.row_count(), "parsed char grid");
    grid
}

/// Parses whitespace-separated cells with [`FromStr`].
pub fn parse_grid<T>(input: &str) -> Result<Grid<T>, GridError>
where
    T: FromStr,
    T::Err: Display,
{
    GridParser::new().cells(CellSplit::Whitespace).parse(input)
}
