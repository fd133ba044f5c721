// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Keyed coverage cache consumed by the data-loading orchestrator.
//!
//! [`SpanCache`] maps an opaque series key to the
//! [`CoverageSet`](crate::CoverageSet) of time spans already fetched for that
//! series. The orchestrator asks it which parts of a display request still
//! need fetching, and reports each successful fetch back so the coverage
//! grows. [`CacheStats`] exposes hit/miss counters for diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

mod store;

pub use store::SpanCache;

/// Counters describing how the cache has been used.
///
/// Purely observational: reading or resetting stats never changes cache
/// behavior. `keys` and `spans` are point-in-time sizes; the rest are
/// monotonic counters since construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Requests that were already fully covered (no gaps returned)
    pub hits: u64,
    /// Requests with at least one uncovered gap
    pub misses: u64,
    /// Spans registered after successful fetches
    pub registrations: u64,
    /// Stored spans absorbed into neighbors by merging
    pub merges: u64,
    /// Number of series keys currently tracked
    pub keys: usize,
    /// Total disjoint spans stored across all keys
    pub spans: usize,
}

impl CacheStats {
    /// Fraction of coverage queries answered entirely from cache, as a
    /// percentage (0.0 to 100.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, registrations={}, merges={}, keys={}, spans={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.registrations,
            self.merges,
            self.keys,
            self.spans,
            self.hit_rate()
        )
    }
}
