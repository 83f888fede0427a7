//! Property-based tests for grid transforms, neighbours and region analysis

use std::collections::HashSet;

use aoc_grid::{
    Grid, Position, extract_blocks, find_regions, map_regions, parse_char_grid, reflect_horizontal,
    reflect_vertical, rotate_clockwise, transpose,
};
use proptest::prelude::*;

/// Rectangular grids of small symbols, so that regions of various shapes appear.
fn rect_grid(max_side: usize, symbols: u8) -> impl Strategy<Value = Grid<u8>> {
    (1..=max_side, 1..=max_side).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0..symbols, cols), rows)
            .prop_map(Grid::from_rows)
    })
}

/// Grids whose rows may differ in length.
fn ragged_grid(max_side: usize, symbols: u8) -> impl Strategy<Value = Grid<u8>> {
    prop::collection::vec(prop::collection::vec(0..symbols, 0..=max_side), 0..=max_side)
        .prop_map(Grid::from_rows)
}

/// **Property 2: Transform round trips**
///
/// *For any* rectangular grid, reflections are involutions, four clockwise
/// rotations and two transposes are the identity.
mod property_transform_round_trips {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn reflections_are_involutions(grid in rect_grid(8, 5)) {
            prop_assert_eq!(reflect_horizontal(&reflect_horizontal(&grid)), grid.clone());
            prop_assert_eq!(reflect_vertical(&reflect_vertical(&grid)), grid);
        }

        #[test]
        fn four_rotations_are_identity(grid in rect_grid(8, 5)) {
            let mut rotated = grid.clone();
            for _ in 0..4 {
                rotated = rotate_clockwise(&rotated).unwrap();
            }
            prop_assert_eq!(rotated, grid);
        }

        #[test]
        fn transpose_twice_is_identity(grid in rect_grid(8, 5)) {
            let back = transpose(&transpose(&grid).unwrap()).unwrap();
            prop_assert_eq!(back, grid);
        }
    }
}

/// **Property 3: Neighbour symmetry**
///
/// *For any* grid and positions p, q: p is a neighbour of q iff q is a
/// neighbour of p.
mod property_neighbour_symmetry {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn adjacency_is_undirected(grid in ragged_grid(6, 3)) {
            let positions: Vec<Position> = grid.positions().collect();
            for &p in &positions {
                for q in grid.neighbour_positions(p) {
                    prop_assert!(grid.contains(q));
                    prop_assert!(grid.neighbour_positions(q).contains(&p));
                }
            }
        }
    }
}

/// **Property 4: Region partition**
///
/// *For any* grid, every cell belongs to exactly one region, region areas sum
/// to the cell count, and each region's cells all carry its symbol.
mod property_region_partition {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn regions_partition_all_cells(grid in ragged_grid(8, 3)) {
            let map = map_regions(&grid);
            let mut seen = HashSet::new();

            for (label, region) in map.regions().iter().enumerate() {
                let cells = map.cells(label);
                prop_assert_eq!(cells.len(), region.area);
                prop_assert_eq!(cells.first().copied(), Some(region.origin));
                for cell in cells {
                    prop_assert_eq!(grid.get(cell), Some(&region.symbol));
                    prop_assert!(seen.insert(cell), "cell {} in two regions", cell);
                }
            }

            prop_assert_eq!(seen.len(), grid.cell_count());
        }

        #[test]
        fn neighbours_share_label_iff_same_symbol(grid in rect_grid(8, 3)) {
            let map = map_regions(&grid);
            for p in grid.positions() {
                for q in grid.neighbour_positions(p) {
                    let same_symbol = grid.get(p) == grid.get(q);
                    prop_assert_eq!(map.label(p) == map.label(q), same_symbol);
                }
            }
        }

        #[test]
        fn edges_never_exceed_perimeter(grid in rect_grid(8, 3)) {
            for region in find_regions(&grid) {
                prop_assert!(region.edges >= 4);
                prop_assert!(region.edges <= region.perimeter);
                prop_assert_eq!(region.edges % 2, 0);
            }
        }
    }
}

/// **Property 5: Corner/edge identity**
///
/// *For any* R x C single-symbol grid there is one region with area R*C,
/// perimeter 2(R+C) and four sides.
mod property_rectangle_corners {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn single_symbol_rectangle(rows in 1usize..20, cols in 1usize..20) {
            let grid = Grid::from_rows(vec![vec!['#'; cols]; rows]);
            let regions = find_regions(&grid);

            prop_assert_eq!(regions.len(), 1);
            prop_assert_eq!(regions[0].area, rows * cols);
            prop_assert_eq!(regions[0].perimeter, 2 * (rows + cols));
            prop_assert_eq!(regions[0].edges, 4);
        }
    }
}

/// **Property 8: Block extraction boundary**
mod property_block_counts {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn block_count_matches_window_positions(
            grid in rect_grid(7, 4),
            height in 1usize..5,
            width in 1usize..5,
        ) {
            let (rows, cols) = grid.dimensions().unwrap();
            let blocks = extract_blocks(&grid, height, width).unwrap();

            if height > rows || width > cols {
                prop_assert!(blocks.is_empty());
            } else {
                prop_assert_eq!(blocks.len(), (rows - height + 1) * (cols - width + 1));
                for block in &blocks {
                    prop_assert_eq!(block.dimensions().unwrap(), (height, width));
                }
            }
        }

        #[test]
        fn full_window_is_whole_grid(grid in rect_grid(7, 4)) {
            let (rows, cols) = grid.dimensions().unwrap();
            prop_assert_eq!(extract_blocks(&grid, rows, cols).unwrap(), vec![grid.clone()]);
            prop_assert!(extract_blocks(&grid, rows + 1, cols).unwrap().is_empty());
            prop_assert!(extract_blocks(&grid, rows, cols + 1).unwrap().is_empty());
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    const GARDEN: &str = "\
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
    fn test_garden_costs() {
        let regions = find_regions(&parse_char_grid(GARDEN));
        assert_eq!(regions.len(), 11);
        assert_eq!(regions.iter().map(|r| r.fence_cost()).sum::<u64>(), 1930);
        assert_eq!(regions.iter().map(|r| r.bulk_cost()).sum::<u64>(), 1206);
    }

    #[test]
    fn test_small_example_costs() {
        let regions = find_regions(&parse_char_grid("AAAA\nBBCD\nBBCC\nEEEC"));
        assert_eq!(regions.len(), 5);
        assert_eq!(regions.iter().map(|r| r.fence_cost()).sum::<u64>(), 140);
        assert_eq!(regions.iter().map(|r| r.bulk_cost()).sum::<u64>(), 80);
    }
}
