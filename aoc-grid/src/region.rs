//! Connected-region analysis by flood fill.
//!
//! A region is a maximal set of cells holding the same symbol that are
//! connected through north/east/south/west steps. For every region the scan
//! records its area, its perimeter (unit boundary edges, the grid border
//! included) and its number of straight sides.
//!
//! Sides are counted through corners: walking any closed orthogonal outline,
//! there are exactly as many corners as sides. Each cell inspects its four
//! corners via [`CORNERS`] and counts one when
//!
//! - both side neighbours are outside the region (convex corner), or
//! - both side neighbours are inside the region but the diagonal one is not
//!   (concave corner).
//!
//! ```text
//!   convex        concave
//!   ? B           B A
//!   B A           A A
//! ```

use tracing::debug;

use crate::direction::{CORNERS, Direction};
use crate::grid::Grid;
use crate::position::Position;

/// One connected component of same-symbol cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<T> {
    /// The symbol shared by every cell of the region.
    pub symbol: T,
    /// The region's first cell in row-major order.
    pub origin: Position,
    /// Number of cells.
    pub area: usize,
    /// Number of unit edges between the region and anything else.
    pub perimeter: usize,
    /// Number of straight sides of the region's outline(s).
    pub edges: usize,
}

impl<T> Region<T> {
    /// `area * perimeter`.
    pub fn fence_cost(&self) -> u64 {
        self.area as u64 * self.perimeter as u64
    }

    /// `area * edges`.
    pub fn bulk_cost(&self) -> u64 {
        self.area as u64 * self.edges as u64
    }
}

/// The regions of a grid together with the region index of every cell.
#[derive(Debug, Clone)]
pub struct RegionMap<T> {
    regions: Vec<Region<T>>,
    labels: Grid<Option<usize>>,
}

impl<T> RegionMap<T> {
    pub fn regions(&self) -> &[Region<T>] {
        &self.regions
    }

    pub fn into_regions(self) -> Vec<Region<T>> {
        self.regions
    }

    /// Index into [`RegionMap::regions`] of the region covering `pos`.
    pub fn label(&self, pos: Position) -> Option<usize> {
        self.labels.get(pos).copied().flatten()
    }

    pub fn region_at(&self, pos: Position) -> Option<&Region<T>> {
        self.regions.get(self.label(pos)?)
    }

    /// Cells of region `label` in row-major order.
    pub fn cells(&self, label: usize) -> Vec<Position> {
        self.labels
            .iter()
            .filter(|(_, cell)| **cell == Some(label))
            .map(|(pos, _)| pos)
            .collect()
    }
}

/// Partitions `grid` into regions, in order of each region's first cell.
///
/// # Example
///
/// ```
/// use aoc_grid::{find_regions, parse_char_grid};
///
/// let grid = parse_char_grid("AAAA\nBBCD\nBBCC\nEEEC");
/// let regions = find_regions(&grid);
/// assert_eq!(regions.len(), 5);
/// assert_eq!(regions.iter().map(|r| r.fence_cost()).sum::<u64>(), 140);
/// assert_eq!(regions.iter().map(|r| r.bulk_cost()).sum::<u64>(), 80);
/// ```
pub fn find_regions<T: Clone + Eq>(grid: &Grid<T>) -> Vec<Region<T>> {
    map_regions(grid).into_regions()
}

/// Like [`find_regions`], also keeping the region label of every cell.
#[tracing::instrument(level = "debug", skip_all, fields(rows = grid.row_count()))]
pub fn map_regions<T: Clone + Eq>(grid: &Grid<T>) -> RegionMap<T> {
    let mut labels = grid.map(|_| None);
    let mut regions = Vec::new();

    for (start, symbol) in grid.iter() {
        if labels.get(start) == Some(&None) {
            let region = flood_fill(grid, start, symbol, regions.len(), &mut labels);
            regions.push(region);
        }
    }

    debug!(
        regions = regions.len(),
        area = regions.iter().map(|r| r.area).sum::<usize>(),
        "mapped regions"
    );
    RegionMap { regions, labels }
}

/// Iterative flood fill from `origin`, writing `label` into every reached cell.
fn flood_fill<T: Clone + Eq>(
    grid: &Grid<T>,
    origin: Position,
    symbol: &T,
    label: usize,
    labels: &mut Grid<Option<usize>>,
) -> Region<T> {
    let same = |pos: Position| grid.get(pos) == Some(symbol);

    let mut region = Region {
        symbol: symbol.clone(),
        origin,
        area: 0,
        perimeter: 0,
        edges: 0,
    };
    let mut stack = vec![origin];

    while let Some(pos) = stack.pop() {
        // Cells can be pushed more than once; only the first pop counts.
        let Some(slot) = labels.get_mut(pos) else {
            continue;
        };
        if slot.is_some() {
            continue;
        }
        *slot = Some(label);
        region.area += 1;

        region.perimeter += Direction::ALL
            .into_iter()
            .filter(|&d| !same(pos + d))
            .count();

        region.edges += CORNERS
            .into_iter()
            .filter(|&(d1, d2)| {
                let side1 = same(pos + d1);
                let side2 = same(pos + d2);
                let corner = same(pos + d1 + d2);
                (!side1 && !side2) || (side1 && side2 && !corner)
            })
            .count();

        stack.extend(
            grid.neighbours(pos)
                .filter(|&next| same(next) && labels.get(next) == Some(&None)),
        );
    }

    region
}
