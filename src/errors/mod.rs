// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the spancache library.
//!
//! Validation happens once, at the boundary: a [`TimeSpan`](crate::TimeSpan)
//! is checked when it is constructed (or deserialized), and every other
//! operation in the crate accepts only already-valid spans and cannot fail.
//! A caller that holds a `TimeSpan` never sees an error from the cache.

/// Errors raised when constructing a [`TimeSpan`](crate::TimeSpan).
///
/// Both variants are caller bugs surfaced synchronously. An inverted span is
/// rejected rather than silently swapped, since swapping would mask the bug
/// at the call site that produced it.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SpanError {
    /// `start` was greater than `end`.
    #[error("inverted time span: start {start} is after end {end}")]
    Inverted {
        /// Requested start of the span, in seconds since the epoch
        start: f64,
        /// Requested end of the span, in seconds since the epoch
        end: f64,
    },

    /// A bound was NaN or infinite.
    ///
    /// The merge and gap algorithms rely on a total order over bounds, which
    /// NaN does not provide, so non-finite bounds are rejected up front.
    #[error("non-finite bound in time span [{start}, {end}]")]
    NonFinite {
        /// Requested start of the span
        start: f64,
        /// Requested end of the span
        end: f64,
    },
}

impl SpanError {
    /// Create an `Inverted` error for the given bounds.
    pub fn inverted(start: f64, end: f64) -> Self {
        SpanError::Inverted { start, end }
    }

    /// Create a `NonFinite` error for the given bounds.
    pub fn non_finite(start: f64, end: f64) -> Self {
        SpanError::NonFinite { start, end }
    }
}
