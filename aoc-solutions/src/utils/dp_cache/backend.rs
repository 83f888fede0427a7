//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

use aoc_grid::{Grid, Position};

/// A storage backend for the DP cache.
///
/// # Contract
///
/// - `get` returns `None` for indices that have not been computed yet
/// - `get_or_insert` computes the value only if the index is not cached
/// - Both return `None` for indices the backend cannot store
pub trait Backend<I, K> {
    /// Returns the cached value for `index`, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the cached value for `index`, computing and storing it first
    /// if needed.
    fn get_or_insert<F>(&mut self, index: I, compute: F) -> Option<&K>
    where
        F: FnOnce() -> K;
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Suitable for sparse indices or non-integer index types.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert<F>(&mut self, index: I, compute: F) -> Option<&K>
    where
        F: FnOnce() -> K,
    {
        Some(self.data.entry(index).or_insert_with(compute))
    }
}

/// A dense backend shaped like a grid, indexed by [`Position`].
///
/// Every cell of the source grid gets one slot; positions outside that shape
/// cannot be stored.
#[derive(Debug)]
pub struct GridBackend<K> {
    slots: Grid<Option<K>>,
}

impl<K> GridBackend<K> {
    /// Creates an empty backend with one slot per cell of `grid`.
    pub fn for_grid<T>(grid: &Grid<T>) -> Self {
        Self {
            slots: grid.map(|_| None),
        }
    }

    /// Creates an empty `rows` x `cols` backend.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            slots: (0..rows)
                .map(|_| (0..cols).map(|_| None).collect())
                .collect(),
        }
    }
}

impl<K> Backend<Position, K> for GridBackend<K> {
    fn get(&self, index: &Position) -> Option<&K> {
        self.slots.get(*index)?.as_ref()
    }

    fn get_or_insert<F>(&mut self, index: Position, compute: F) -> Option<&K>
    where
        F: FnOnce() -> K,
    {
        let slot = self.slots.get_mut(index)?;
        Some(slot.get_or_insert_with(compute))
    }
}
