//! Sliding-window sub-grid extraction.

use crate::error::GridError;
use crate::grid::Grid;

/// Every `height` x `width` block of a rectangular grid.
///
/// Blocks are ordered by their top-left corner, top to bottom and then left
/// to right, so an `R` x `C` grid yields `(R - height + 1) * (C - width + 1)`
/// of them. Each block is an owned copy. A window larger than the grid, or
/// with a zero side, yields no blocks.
///
/// # Example
///
/// ```
/// use aoc_grid::{extract_blocks, parse_char_grid};
///
/// let grid = parse_char_grid("abc\ndef");
/// let blocks = extract_blocks(&grid, 2, 2).unwrap();
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1].to_string(), "bc\nef");
/// ```
pub fn extract_blocks<T: Clone>(
    grid: &Grid<T>,
    height: usize,
    width: usize,
) -> Result<Vec<Grid<T>>, GridError> {
    let (rows, cols) = grid.dimensions()?;
    if height == 0 || width == 0 || height > rows || width > cols {
        return Ok(Vec::new());
    }

    let mut blocks = Vec::with_capacity((rows - height + 1) * (cols - width + 1));
    for top in 0..=rows - height {
        for left in 0..=cols - width {
            blocks.push(
                grid.rows()[top..top + height]
                    .iter()
                    .map(|row| row[left..left + width].to_vec())
                    .collect(),
            );
        }
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_char_grid;

    #[test]
    fn test_block_order_is_row_major() {
        let grid = parse_char_grid("abc\ndef\nghi");
        let blocks: Vec<String> = extract_blocks(&grid, 2, 2)
            .unwrap()
            .iter()
            .map(|block| block.to_string())
            .collect();
        assert_eq!(blocks, ["ab\nde", "bc\nef", "de\ngh", "ef\nhi"]);
    }

    #[test]
    fn test_whole_grid_is_single_block() {
        let grid = parse_char_grid("ab\ncd");
        assert_eq!(extract_blocks(&grid, 2, 2).unwrap(), vec![grid.clone()]);
    }

    #[test]
    fn test_oversized_window_is_empty() {
        let grid = parse_char_grid("ab\ncd");
        assert!(extract_blocks(&grid, 3, 1).unwrap().is_empty());
        assert!(extract_blocks(&grid, 1, 3).unwrap().is_empty());
        assert!(extract_blocks(&grid, 0, 1).unwrap().is_empty());
    }

    #[test]
    fn test_blocks_are_independent_copies() {
        let mut grid = parse_char_grid("ab\ncd");
        let blocks = extract_blocks(&grid, 1, 1).unwrap();
        *grid.get_mut(crate::Position::new(0, 0)).unwrap() = 'z';
        assert_eq!(blocks[0].to_string(), "a");
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let grid = parse_char_grid("ab\nc");
        assert!(matches!(
            extract_blocks(&grid, 1, 1),
            Err(GridError::Ragged { row: 1, .. })
        ));
    }
}
