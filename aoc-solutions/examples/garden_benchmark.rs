//! Benchmark for grid region analysis and the grid-shaped DP cache backend.
//!
//! Run with: cargo run --example garden_benchmark --release
//!
//! Two workloads over random gardens:
//! - Region analysis (fence and bulk cost), sequential vs. `par_iter`
//! - Minimum path sum from the top-left corner, `GridBackend` vs. `HashMapBackend`

use std::time::Instant;

use aoc_grid::{Grid, Position, find_regions};
use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, GridBackend, HashMapBackend};
use rayon::prelude::*;

const GARDEN_SIZE: usize = 140;
const NUM_GARDENS: usize = 40;
const PLANT_KINDS: u64 = 6;

/// Minimum path sum moving only south or east.
struct MinPathSum<'a>(&'a Grid<u32>);

impl DpProblem<Position, u32> for MinPathSum<'_> {
    fn deps(&self, pos: &Position) -> Vec<Position> {
        let mut deps = Vec::new();
        if pos.row > 0 {
            deps.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.col > 0 {
            deps.push(Position::new(pos.row, pos.col - 1));
        }
        deps
    }

    fn compute(&self, pos: &Position, deps: Vec<u32>) -> u32 {
        self.0[*pos] + deps.into_iter().min().unwrap_or(0)
    }
}

/// Linear congruential generator so every run sees the same gardens.
fn random_grid(seed: u64, size: usize, modulus: u64) -> Grid<u64> {
    let mut rng = seed;
    (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
                    (rng >> 33) % modulus
                })
                .collect()
        })
        .collect()
}

fn garden_costs(garden: &Grid<char>) -> (u64, u64) {
    find_regions(garden).iter().fold((0, 0), |(fence, bulk), region| {
        (fence + region.fence_cost(), bulk + region.bulk_cost())
    })
}

fn main() {
    println!("Garden Benchmark");
    println!("================\n");

    // Patches of four equal cells keep regions larger than single plants.
    let gardens: Vec<Grid<char>> = (0..NUM_GARDENS)
        .map(|i| {
            let plants = random_grid(42 + i as u64, GARDEN_SIZE / 2, PLANT_KINDS);
            Grid::from_rows(
                (0..GARDEN_SIZE)
                    .map(|row| {
                        (0..GARDEN_SIZE)
                            .map(|col| {
                                let plant = plants[Position::from_indices(row / 2, col / 2)];
                                char::from(b'A' + plant as u8)
                            })
                            .collect()
                    })
                    .collect(),
            )
        })
        .collect();

    println!("=== Region analysis ({GARDEN_SIZE}x{GARDEN_SIZE}, {NUM_GARDENS} gardens) ===");

    let start = Instant::now();
    let sequential: Vec<(u64, u64)> = gardens.iter().map(garden_costs).collect();
    println!("Sequential:                  {:?}", start.elapsed());

    let start = Instant::now();
    let parallel: Vec<(u64, u64)> = gardens.par_iter().map(garden_costs).collect();
    println!("par_iter:                    {:?}", start.elapsed());

    assert_eq!(sequential, parallel, "region analysis must not depend on scheduling");
    println!("First garden: fence {}, bulk {}", sequential[0].0, sequential[0].1);

    println!("\n=== Minimum path sum ({GARDEN_SIZE}x{GARDEN_SIZE}) ===");

    let weights: Vec<Grid<u32>> = (0..NUM_GARDENS)
        .map(|i| random_grid(7 + i as u64, GARDEN_SIZE, 100).map(|&w| w as u32))
        .collect();
    let target = Position::from_indices(GARDEN_SIZE - 1, GARDEN_SIZE - 1);

    let start = Instant::now();
    let dense: Vec<Option<u32>> = weights
        .iter()
        .map(|grid| {
            DpCache::builder()
                .backend(GridBackend::for_grid(grid))
                .problem(MinPathSum(grid))
                .build()
                .get(&target)
        })
        .collect();
    println!("GridBackend:                 {:?}", start.elapsed());

    let start = Instant::now();
    let sparse: Vec<Option<u32>> = weights
        .iter()
        .map(|grid| {
            DpCache::builder()
                .backend(HashMapBackend::new())
                .problem(MinPathSum(grid))
                .build()
                .get(&target)
        })
        .collect();
    println!("HashMapBackend:              {:?}", start.elapsed());

    assert_eq!(dense, sparse, "backends must agree");
    println!("First grid: minimum path sum {:?}", dense[0]);
}
