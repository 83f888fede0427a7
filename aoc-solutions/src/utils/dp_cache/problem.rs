//! Trait-based DP problem definition.

use std::marker::PhantomData;

/// A dynamic programming problem over a DAG of indices.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
///
/// A single type may implement `DpProblem` for several value types, e.g. a
/// height map that can both count trails and collect reachable peaks.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
///
/// struct Fibonacci;
///
/// impl DpProblem<u64, u64> for Fibonacci {
///     fn deps(&self, n: &u64) -> Vec<u64> {
///         if *n <= 1 { vec![] }
///         else { vec![n - 1, n - 2] }
///     }
///
///     fn compute(&self, n: &u64, deps: Vec<u64>) -> u64 {
///         if *n <= 1 { *n }
///         else { deps[0] + deps[1] }
///     }
/// }
///
/// let cache = DpCache::builder()
///     .backend(HashMapBackend::new())
///     .problem(Fibonacci)
///     .build();
/// assert_eq!(cache.get(&10), Some(55));
/// ```
pub trait DpProblem<I, K> {
    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for the given index using resolved dependency values.
    ///
    /// The `deps` vector contains the computed values for each dependency
    /// returned by `deps()`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// Adapts a pair of closures to the [`DpProblem`] trait.
pub struct ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    dep_fn: D,
    compute_fn: C,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, D, C> ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    pub fn new(dep_fn: D, compute_fn: C) -> Self {
        Self {
            dep_fn,
            compute_fn,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, D, C> DpProblem<I, K> for ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.dep_fn)(index)
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> K {
        (self.compute_fn)(index, deps)
    }
}
