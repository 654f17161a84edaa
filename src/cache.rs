//! Memoized simulation results for seeded configurations.
//!
//! A seeded run is a pure function of `(num_simulations, sample_size, seed)`,
//! so its result can be reused when the playground redraws the same
//! configuration. Unseeded runs are never cached.
//!
//! Backed by `moka::sync::Cache`, bounded by entry count. Least useful
//! entries are evicted once the bound is reached.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::sync::Cache;
use tracing::trace;

use crate::error::SimulationError;
use crate::random;
use crate::simulation::{self, SimulationResult};

/// Default maximum number of cached results. A full-size result holds
/// 10 000 means plus the 1000-point curve, roughly 100 KiB.
pub const DEFAULT_MAX_ENTRIES: u64 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    num_simulations: usize,
    sample_size: usize,
    seed: u64,
}

/// Bounded map from configuration to a shared, immutable [`SimulationResult`].
pub struct SimulationCache {
    cache: Cache<CacheKey, Arc<SimulationResult>>,
    max_entries: u64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SimulationCache {
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Creates a cache holding at most `max_entries` results.
    pub fn with_max_entries(max_entries: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_entries).build();
        Self {
            cache,
            max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the result for this configuration, running it on a miss.
    ///
    /// With `seed == None` the simulation always runs from fresh entropy
    /// and nothing is stored.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use u_clt::cache::SimulationCache;
    ///
    /// let cache = SimulationCache::new();
    /// let a = cache.get_or_run(1000, 5, Some(42)).unwrap();
    /// let b = cache.get_or_run(1000, 5, Some(42)).unwrap();
    /// assert!(Arc::ptr_eq(&a, &b));
    /// ```
    pub fn get_or_run(
        &self,
        num_simulations: usize,
        sample_size: usize,
        seed: Option<u64>,
    ) -> Result<Arc<SimulationResult>, SimulationError> {
        let Some(seed) = seed else {
            let mut rng = random::create_entropy_rng();
            return simulation::run(num_simulations, sample_size, &mut rng).map(Arc::new);
        };

        let key = CacheKey {
            num_simulations,
            sample_size,
            seed,
        };
        if let Some(hit) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(num_simulations, sample_size, seed, "simulation cache hit");
            return Ok(hit);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!(num_simulations, sample_size, seed, "simulation cache miss");
        let mut rng = random::create_rng(seed);
        let result = Arc::new(simulation::run(num_simulations, sample_size, &mut rng)?);
        self.cache.insert(key, Arc::clone(&result));
        Ok(result)
    }

    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    /// Number of cached results, after pending evictions are applied.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for SimulationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_hit() {
        let cache = SimulationCache::new();
        let a = cache.get_or_run(200, 5, Some(1)).unwrap();
        let b = cache.get_or_run(200, 5, Some(1)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_equals_fresh_run() {
        let cache = SimulationCache::new();
        let cached = cache.get_or_run(300, 10, Some(5)).unwrap();
        let fresh = simulation::run(300, 10, &mut random::create_rng(5)).unwrap();
        assert_eq!(*cached, fresh);
    }

    #[test]
    fn test_distinct_keys() {
        let cache = SimulationCache::new();
        cache.get_or_run(200, 5, Some(1)).unwrap();
        cache.get_or_run(200, 10, Some(1)).unwrap();
        cache.get_or_run(300, 5, Some(1)).unwrap();
        cache.get_or_run(200, 5, Some(2)).unwrap();
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn test_bounded_by_max_entries() {
        let cache = SimulationCache::with_max_entries(8);
        for seed in 0..500 {
            cache.get_or_run(2, 1, Some(seed)).unwrap();
        }
        assert_eq!(cache.misses(), 500);
        assert!(cache.len() <= cache.max_entries(), "len {}", cache.len());
    }

    #[test]
    fn test_evicted_entry_recomputes_identically() {
        let cache = SimulationCache::with_max_entries(2);
        let first = cache.get_or_run(50, 5, Some(0)).unwrap();
        for seed in 1..100 {
            cache.get_or_run(50, 5, Some(seed)).unwrap();
        }
        let again = cache.get_or_run(50, 5, Some(0)).unwrap();
        assert_eq!(*first, *again);
    }

    #[test]
    fn test_unseeded_not_cached() {
        let cache = SimulationCache::new();
        let result = cache.get_or_run(100, 5, None).unwrap();
        assert_eq!(result.means().len(), 100);
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn test_errors_not_cached() {
        let cache = SimulationCache::new();
        assert!(cache.get_or_run(0, 5, Some(1)).is_err());
        assert!(cache.get_or_run(10, 0, None).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = SimulationCache::new();
        let before = cache.get_or_run(100, 5, Some(1)).unwrap();
        cache.clear();
        // Invalidated entries may linger in entry_count; the next lookup must miss.
        let after = cache.get_or_run(100, 5, Some(1)).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
        assert_eq!(cache.misses(), 2);
        assert_eq!(cache.hits(), 0);
    }
}
