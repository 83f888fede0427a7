//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// `DpCache` provides memoization for recursive computations where values may depend
/// on other values. Dependencies are resolved automatically and each value is computed
/// exactly once.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// This cache does NOT detect cycles in the dependency graph. If cycles exist,
/// the recursion never terminates and overflows the stack.
/// **Users MUST ensure dependencies form a DAG.**
///
/// # Example
///
/// ```rust
/// use aoc_grid::{Grid, Position};
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, GridBackend};
///
/// /// Monotone lattice paths from the top-left corner.
/// struct LatticePaths;
///
/// impl DpProblem<Position, u64> for LatticePaths {
///     fn deps(&self, pos: &Position) -> Vec<Position> {
///         let mut deps = Vec::new();
///         if pos.row > 0 { deps.push(Position::new(pos.row - 1, pos.col)); }
///         if pos.col > 0 { deps.push(Position::new(pos.row, pos.col - 1)); }
///         deps
///     }
///     fn compute(&self, _pos: &Position, deps: Vec<u64>) -> u64 {
///         if deps.is_empty() { 1 } else { deps.iter().sum() }
///     }
/// }
///
/// let cache = DpCache::builder()
///     .backend(GridBackend::new(5, 5))
///     .problem(LatticePaths)
///     .build();
/// assert_eq!(cache.get(&Position::new(4, 4)), Some(70));
/// assert_eq!(cache.get(&Position::new(5, 0)), None);
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl DpCache<(), (), (), ()> {
    /// Starts building a cache; set a backend and a problem, then `build()`.
    pub fn builder() -> DpCacheBuilder<(), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for the given index, computing it if necessary.
    ///
    /// If the value is already cached, returns a clone of the cached value.
    /// Otherwise, resolves all dependencies recursively, computes the value,
    /// caches it, and returns a clone.
    ///
    /// Returns `None` if the backend cannot store `index` or any index it
    /// (transitively) depends on.
    pub fn get(&self, index: &I) -> Option<K> {
        // Fast path: check if already computed
        if let Some(value) = self.backend.borrow().get(index) {
            return Some(value.clone());
        }

        // Resolve dependencies recursively (no borrow held)
        let dep_values = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Option<Vec<K>>>()?;

        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))
            .cloned()
    }

    /// Consumes the cache, returning the backend with everything computed so far.
    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }
}

/// Builder for [`DpCache`], created by [`DpCache::builder`].
pub struct DpCacheBuilder<B, P> {
    backend: B,
    problem: P,
}

impl<B, P> DpCacheBuilder<B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
        }
    }

    pub fn build<I, K>(self) -> DpCache<I, K, B, P>
    where
        I: Clone,
        K: Clone,
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache::with_problem(self.backend, self.problem)
    }
}
