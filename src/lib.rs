// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Interval-coverage cache for incremental time-series retrieval.
//!
//! Visualization front ends fetch time-series data from remote, often slow,
//! providers. Re-fetching spans that already arrived is wasted latency, so
//! this crate tracks, per data series, which time intervals have been
//! retrieved and computes the minimal sub-intervals still needed to satisfy
//! a new display request.
//!
//! Two pieces cooperate:
//!
//! - [`CoverageSet`]: the ordered, merged time spans fetched for a single
//!   series, with insertion-with-merge and gap (complement) queries.
//! - [`SpanCache`]: maps an opaque series key to its coverage and is the
//!   surface the data-loading orchestrator talks to: report what was
//!   fetched, ask what is missing.
//!
//! Intervals are closed, and spans that merely touch at an endpoint are
//! merged, so coverage never fragments into pieces separated by zero-width
//! gaps.
//!
//! # Example
//!
//! ```rust
//! use spancache::{SpanCache, TimeSpan};
//!
//! let cache: SpanCache<u32> = SpanCache::new();
//! let series = 7;
//!
//! // Nothing cached yet: the whole request is missing.
//! let request = TimeSpan::new(0.0, 100.0)?;
//! assert_eq!(cache.missing_for(&series, request), vec![request]);
//!
//! // The orchestrator fetches each gap and registers what arrived.
//! cache.register(series, TimeSpan::new(0.0, 60.0)?);
//! cache.register(series, TimeSpan::new(60.0, 100.0)?);
//!
//! // Touching spans merged; the request is now fully covered.
//! assert!(cache.missing_for(&series, request).is_empty());
//! assert_eq!(cache.covered(&series), vec![request]);
//! # Ok::<(), spancache::SpanError>(())
//! ```

pub mod cache;
pub mod config;
pub mod errors;

mod coverage;
mod span;
pub(crate) mod spans;

pub use cache::{CacheStats, SpanCache};
pub use config::SpanCacheConfig;
pub use coverage::CoverageSet;
pub use errors::SpanError;
pub use span::TimeSpan;
