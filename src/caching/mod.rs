//! # Caching Module
//!
//! This module provides a memoizing wrapper around a [`ParetoRanking`]. Sorting a
//! population into Pareto fronts costs `O(M N²)`, and an optimizer that runs
//! several multi-objective selections on the same generation would otherwise
//! repeat that work for identical fitness.
//!
//! The cache holds the fronts of the most recent fitness matrix only. Any change to
//! a fitness value, or to the shape of the matrix, is a miss and replaces the entry.
//!
//! ## Example
//!
//! ```rust
//! use genselect::caching::CachedRanking;
//! use genselect::pareto::{FastNonDominatedSort, FitnessMatrix, ParetoRanking};
//!
//! let ranking = CachedRanking::new(FastNonDominatedSort::default());
//! let fitness = FitnessMatrix::new(vec![vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap();
//!
//! let first = ranking.non_dominated_sorting(&fitness).unwrap();
//! let second = ranking.non_dominated_sorting(&fitness).unwrap();
//!
//! assert_eq!(first, second);
//! assert_eq!(ranking.misses(), 1);
//! assert_eq!(ranking.hits(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::pareto::{CrowdingDistance, FitnessMatrix, ParetoFronts, ParetoRanking};

type Fingerprint = (usize, Vec<u64>);

/// A wrapper around a ranking that caches the fronts of the last fitness matrix.
///
/// Clones share the cache and its counters. Crowding distances are not cached;
/// they are forwarded to the wrapped ranking.
#[derive(Debug, Clone)]
pub struct CachedRanking<R> {
    /// The wrapped ranking
    ranking: R,
    /// Fronts of the most recently sorted fitness matrix
    cache: Arc<Mutex<Option<(Fingerprint, ParetoFronts)>>>,
    hits: Arc<AtomicUsize>,
    misses: Arc<AtomicUsize>,
}

impl<R: ParetoRanking> CachedRanking<R> {
    /// Creates a new cached ranking wrapping the given ranking.
    pub fn new(ranking: R) -> Self {
        Self {
            ranking,
            cache: Arc::new(Mutex::new(None)),
            hits: Arc::new(AtomicUsize::new(0)),
            misses: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns a reference to the wrapped ranking.
    pub fn inner(&self) -> &R {
        &self.ranking
    }

    /// Number of sorts answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of sorts delegated to the wrapped ranking.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drops the cached fronts. The counters are kept.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    /// Returns `true` if fronts are currently cached.
    pub fn is_cached(&self) -> bool {
        self.lock().is_some()
    }

    // The entry is always replaced as a whole, so a poisoned lock still holds
    // consistent data.
    fn lock(&self) -> MutexGuard<'_, Option<(Fingerprint, ParetoFronts)>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: ParetoRanking> ParetoRanking for CachedRanking<R> {
    fn non_dominated_sorting(&self, fitness: &FitnessMatrix) -> Result<ParetoFronts> {
        let fingerprint = fitness.fingerprint();

        let mut cache = self.lock();
        if let Some((key, fronts)) = cache.as_ref() {
            if *key == fingerprint {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("pareto fronts served from cache");
                return Ok(fronts.clone());
            }
        }

        let fronts = self.ranking.non_dominated_sorting(fitness)?;
        self.misses.fetch_add(1, Ordering::Relaxed);
        *cache = Some((fingerprint, fronts.clone()));

        Ok(fronts)
    }

    fn crowding_distance(
        &self,
        front: &[usize],
        fitness: &FitnessMatrix,
    ) -> Result<CrowdingDistance> {
        self.ranking.crowding_distance(front, fitness)
    }
}
