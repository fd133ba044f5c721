// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The keyed span cache.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use super::CacheStats;
use crate::config::SpanCacheConfig;
use crate::coverage::CoverageSet;
use crate::span::TimeSpan;
use crate::spans;

/// Everything behind the lock: per-key coverage plus usage counters.
#[derive(Debug)]
struct StoreState<K> {
    entries: HashMap<K, CoverageSet>,
    stats: CacheStats,
}

impl<K> Default for StoreState<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }
}

/// Tracks, per series key, which time spans have already been fetched.
///
/// The intended loop: call [`missing_for`](SpanCache::missing_for) before
/// fetching, fetch each returned gap from the provider, and call
/// [`register`](SpanCache::register) for every sub-span that arrived
/// successfully. Failed fetches must not be registered; the cache only ever
/// records data that was actually retrieved.
///
/// A key that was never registered behaves exactly like a key with empty
/// coverage: `missing_for` returns the whole request and
/// [`covered`](SpanCache::covered) returns nothing. Querying is never an
/// error.
///
/// # Concurrency
///
/// All methods take `&self`; the state lives behind an internal mutex held
/// for the duration of each call, so every operation is atomic as seen by
/// other threads and unsynchronized mutation is impossible by construction.
/// UI-side queries and background fetch completions can share one
/// `SpanCache` freely.
///
/// # Examples
///
/// ```rust
/// use spancache::{SpanCache, TimeSpan};
///
/// let cache: SpanCache<&str> = SpanCache::new();
///
/// cache.register("proton_density", TimeSpan::new(0.0, 10.0)?);
/// cache.register("proton_density", TimeSpan::new(20.0, 30.0)?);
///
/// let gaps = cache.missing_for(&"proton_density", TimeSpan::new(5.0, 25.0)?);
/// assert_eq!(gaps, vec![TimeSpan::new(10.0, 20.0)?]);
/// # Ok::<(), spancache::SpanError>(())
/// ```
#[derive(Debug)]
pub struct SpanCache<K> {
    config: SpanCacheConfig,
    state: Mutex<StoreState<K>>,
}

impl<K> SpanCache<K>
where
    K: Eq + Hash + fmt::Debug,
{
    /// Create a cache with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SpanCacheConfig::default())
    }

    /// Create a cache with an explicit configuration.
    pub fn with_config(config: SpanCacheConfig) -> Self {
        Self {
            config,
            state: Mutex::new(StoreState::default()),
        }
    }

    /// The configuration this cache was built with.
    pub fn config(&self) -> &SpanCacheConfig {
        &self.config
    }

    fn locked(&self) -> MutexGuard<'_, StoreState<K>> {
        self.state.lock().unwrap()
    }

    /// Record that `span` was successfully fetched for `key`.
    ///
    /// Coverage for a fresh key is created lazily. The span is merged with
    /// everything it overlaps or touches, so repeated and out-of-order
    /// registrations converge to the same coverage.
    pub fn register(&self, key: K, span: TimeSpan) {
        let op = spans::register(span.start(), span.end());
        let _guard = op.enter();

        let threshold = self.config.fragmentation_warn_threshold;
        let mut state = self.locked();
        let StoreState { entries, stats } = &mut *state;
        stats.registrations += 1;

        match entries.get_mut(&key) {
            Some(coverage) => {
                let before = coverage.len();
                coverage.insert(span);
                let fragments = coverage.len();
                stats.merges += (before + 1 - fragments) as u64;
                debug!(key = ?key, span = %span, fragments, "merged fetched span into coverage");
                if fragments >= threshold {
                    warn!(
                        key = ?key,
                        fragments,
                        threshold,
                        "coverage is fragmented into many disjoint spans"
                    );
                }
            }
            None => {
                debug!(key = ?key, span = %span, "tracking first fetched span for key");
                let mut coverage = CoverageSet::new();
                coverage.insert(span);
                entries.insert(key, coverage);
            }
        }
    }

    /// The ordered sub-spans of `request` that still need fetching for
    /// `key`.
    ///
    /// An unknown key is an empty cache, not an error: the whole request
    /// comes back as one gap.
    pub fn missing_for(&self, key: &K, request: TimeSpan) -> Vec<TimeSpan> {
        let op = spans::missing_for(request.start(), request.end());
        let _guard = op.enter();

        let mut state = self.locked();
        let StoreState { entries, stats } = &mut *state;
        let gaps = match entries.get(key) {
            Some(coverage) => coverage.missing(request),
            None => vec![request],
        };
        if gaps.is_empty() {
            stats.hits += 1;
            debug!(key = ?key, request = %request, "request fully covered");
        } else {
            stats.misses += 1;
            debug!(
                key = ?key,
                request = %request,
                gaps = gaps.len(),
                "request has uncovered gaps"
            );
        }
        gaps
    }

    /// Whether `request` is already fully covered for `key`, without
    /// building the gap list.
    pub fn is_covered(&self, key: &K, request: TimeSpan) -> bool {
        let mut state = self.locked();
        let StoreState { entries, stats } = &mut *state;
        let covered = entries.get(key).is_some_and(|c| c.covers(request));
        if covered {
            stats.hits += 1;
        } else {
            stats.misses += 1;
        }
        covered
    }

    /// Snapshot of the spans currently covered for `key`, ascending by
    /// start. Empty for an unknown key.
    pub fn covered(&self, key: &K) -> Vec<TimeSpan> {
        self.locked()
            .entries
            .get(key)
            .map(|coverage| coverage.spans().to_vec())
            .unwrap_or_default()
    }

    /// Drop all cached knowledge for `key`, returning whether anything was
    /// tracked. Called when the owning data series is deleted.
    pub fn remove(&self, key: &K) -> bool {
        let removed = self.locked().entries.remove(key);
        if let Some(coverage) = &removed {
            debug!(key = ?key, spans = coverage.len(), "dropped coverage for key");
        }
        removed.is_some()
    }

    /// Drop every key. Usage counters are kept.
    pub fn clear(&self) {
        let mut state = self.locked();
        let dropped = state.entries.len();
        state.entries.clear();
        debug!(keys = dropped, "cleared all cached coverage");
    }

    /// Number of series keys currently tracked.
    pub fn len(&self) -> usize {
        self.locked().entries.len()
    }

    /// Whether no key is tracked.
    pub fn is_empty(&self) -> bool {
        self.locked().entries.is_empty()
    }

    /// Current usage counters plus point-in-time key and span counts.
    pub fn stats(&self) -> CacheStats {
        let state = self.locked();
        let mut stats = state.stats.clone();
        stats.keys = state.entries.len();
        stats.spans = state.entries.values().map(CoverageSet::len).sum();
        stats
    }
}

impl<K> Default for SpanCache<K>
where
    K: Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
