// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Interval coverage for a single data series: merge-on-insert and gap
//! queries.

use crate::span::TimeSpan;

/// The time spans already fetched for one data series.
///
/// Spans are kept ascending by start and pairwise disjoint with strict
/// separation: for consecutive spans `a, b`, `a.end() < b.start()`. Touching
/// spans are always merged on insert, so the stored sequence can never
/// fragment into pieces separated by zero-width gaps. The invariant holds
/// after every mutation and is what makes the gap query a single forward
/// scan.
///
/// # Examples
///
/// ```rust
/// use spancache::{CoverageSet, TimeSpan};
///
/// let mut coverage = CoverageSet::new();
/// coverage.insert(TimeSpan::new(0.0, 10.0)?);
/// coverage.insert(TimeSpan::new(20.0, 30.0)?);
///
/// let gaps = coverage.missing(TimeSpan::new(5.0, 25.0)?);
/// assert_eq!(gaps, vec![TimeSpan::new(10.0, 20.0)?]);
/// # Ok::<(), spancache::SpanError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageSet {
    spans: Vec<TimeSpan>,
}

impl CoverageSet {
    /// Create an empty coverage set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored spans, ascending by start.
    pub fn spans(&self) -> &[TimeSpan] {
        &self.spans
    }

    /// Number of disjoint stored spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether nothing has been fetched yet.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Add a fetched span, merging it with everything it overlaps or
    /// touches.
    ///
    /// After the call the covered union equals the previous union plus
    /// `span`. Inserting the same span twice is a no-op, and the final
    /// coverage does not depend on insertion order.
    pub fn insert(&mut self, span: TimeSpan) {
        let mut merged = span;
        let mut index = 0;
        while index < self.spans.len() {
            let current = self.spans[index];
            if merged.end() < current.start() {
                // Strictly before everything from here on.
                break;
            }
            if merged.start() > current.end() {
                index += 1;
                continue;
            }
            // Overlapping or touching: absorb the stored span and keep
            // scanning, since the widened span may reach the next one too.
            merged = merged.hull(current);
            self.spans.remove(index);
        }
        self.spans.insert(index, merged);
    }

    /// The ordered sub-spans of `request` not covered by any stored span.
    ///
    /// Returns `[request]` when nothing relevant is cached and an empty
    /// vector when `request` is fully covered. Zero-width gaps are never
    /// reported: a request that merely touches cached data at an endpoint
    /// still gets the full touched range back as missing.
    pub fn missing(&self, request: TimeSpan) -> Vec<TimeSpan> {
        let mut gaps = Vec::new();
        let mut frontier = request.start();

        for cached in &self.spans {
            if cached.end() <= frontier {
                // Entirely behind the frontier, nothing left to subtract.
                continue;
            }
            if cached.start() <= frontier {
                // Frontier sits inside cached data; skip forward to its end.
                frontier = cached.end();
                if frontier >= request.end() {
                    return gaps;
                }
                continue;
            }
            // The cached span starts beyond the frontier: the stretch up to
            // it (clamped to the request) is missing.
            let bound = cached.start().min(request.end());
            if frontier < bound {
                gaps.push(TimeSpan::from_ordered(frontier, bound));
            }
            if cached.start() >= request.end() {
                return gaps;
            }
            frontier = cached.end();
            if frontier >= request.end() {
                return gaps;
            }
        }

        if frontier < request.end() {
            gaps.push(TimeSpan::from_ordered(frontier, request.end()));
        }
        gaps
    }

    /// Whether `request` is fully covered, without building the gap list.
    ///
    /// Because stored spans are strictly separated, a request can only be
    /// covered by a single stored span.
    pub fn covers(&self, request: TimeSpan) -> bool {
        self.spans
            .iter()
            .find(|cached| cached.end() >= request.start())
            .is_some_and(|cached| cached.contains(request))
    }
}
