// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for span cache diagnostics.
//!
//! The cache itself has no tunable behavior: merge and gap semantics are
//! fixed by contract. What is configurable is when it complains. Coverage
//! for a series is expected to stay in a handful of disjoint spans; when it
//! splinters past the configured threshold, the provider is being queried in
//! small slivers and the cache logs a warning.
//!
//! # Example
//!
//! ```rust
//! use spancache::{SpanCache, SpanCacheConfig};
//!
//! let config = SpanCacheConfig::default().with_fragmentation_warn_threshold(8);
//! let cache: SpanCache<u64> = SpanCache::with_config(config);
//! ```

/// Default for [`SpanCacheConfig::fragmentation_warn_threshold`].
///
/// Series are rarely fragmented into more than a few dozen disjoint fetched
/// spans; past this count something upstream is slicing requests oddly.
pub const DEFAULT_FRAGMENTATION_WARN_THRESHOLD: usize = 32;

/// Configuration for a [`SpanCache`](crate::SpanCache).
#[derive(Debug, Clone)]
pub struct SpanCacheConfig {
    /// Disjoint span count per key at which a fragmentation warning is
    /// logged after a registration.
    pub fragmentation_warn_threshold: usize,
}

impl Default for SpanCacheConfig {
    fn default() -> Self {
        Self {
            fragmentation_warn_threshold: DEFAULT_FRAGMENTATION_WARN_THRESHOLD,
        }
    }
}

impl SpanCacheConfig {
    /// Set the fragmentation warning threshold.
    ///
    /// ```rust
    /// use spancache::SpanCacheConfig;
    ///
    /// let config = SpanCacheConfig::default().with_fragmentation_warn_threshold(8);
    /// assert_eq!(config.fragmentation_warn_threshold, 8);
    /// ```
    pub fn with_fragmentation_warn_threshold(mut self, threshold: usize) -> Self {
        self.fragmentation_warn_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let config = SpanCacheConfig::default();
        assert_eq!(
            config.fragmentation_warn_threshold,
            DEFAULT_FRAGMENTATION_WARN_THRESHOLD
        );
    }

    #[test]
    fn test_with_threshold_overrides_default() {
        let config = SpanCacheConfig::default().with_fragmentation_warn_threshold(4);
        assert_eq!(config.fragmentation_warn_threshold, 4);
    }
}
