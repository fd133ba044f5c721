// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tracing span creation helpers for spancache operations.
//!
//! Telemetry stays orthogonal to the cache logic: instead of `#[instrument]`
//! attributes on the methods themselves, each instrumented operation has a
//! span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn register(&self, key: K, span: TimeSpan) {
//!     let op = spans::register(span.start(), span.end());
//!     let _guard = op.enter();
//!     // Cache logic here
//! }
//! ```

use tracing::Span;

/// Create span for registering a successfully fetched time span.
///
/// Parent: the orchestrator's fetch-completion span, if any.
#[inline]
pub(crate) fn register(start: f64, end: f64) -> Span {
    tracing::debug_span!("spancache.register", start = start, end = end)
}

/// Create span for computing the uncovered gaps of a display request.
///
/// Parent: the orchestrator's data-request span, if any.
#[inline]
pub(crate) fn missing_for(start: f64, end: f64) -> Span {
    tracing::debug_span!("spancache.missing_for", start = start, end = end)
}
