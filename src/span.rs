// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Closed time spans on a continuous time axis.

use std::fmt;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::errors::SpanError;

/// A closed interval `[start, end]` on the time axis, in seconds since the
/// Unix epoch.
///
/// A span is a plain value: two ordered, finite bounds and nothing else.
/// Both invariants (`start <= end`, finite bounds) are enforced by
/// [`TimeSpan::new`] and by deserialization, so any `TimeSpan` in circulation
/// is valid and the cache operations that consume spans never have to
/// re-validate or fail.
///
/// Bounds are compared with closed-interval semantics throughout: a span
/// ending exactly where another starts intersects it.
///
/// # Examples
///
/// ```rust
/// use spancache::TimeSpan;
///
/// let span = TimeSpan::new(10.0, 20.0)?;
/// assert_eq!(span.duration(), 10.0);
/// assert!(TimeSpan::new(20.0, 10.0).is_err());
/// # Ok::<(), spancache::SpanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpan", into = "RawSpan")]
pub struct TimeSpan {
    start: f64,
    end: f64,
}

/// Unvalidated wire shape for [`TimeSpan`].
///
/// Deserialization goes through `TryFrom<RawSpan>` so that serde input is
/// held to the same invariants as constructed values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawSpan {
    start: f64,
    end: f64,
}

impl TimeSpan {
    /// Create a span from ordered bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Inverted`] if `start > end` and
    /// [`SpanError::NonFinite`] if either bound is NaN or infinite. Inverted
    /// bounds are never swapped on the caller's behalf.
    pub fn new(start: f64, end: f64) -> Result<Self, SpanError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SpanError::non_finite(start, end));
        }
        if start > end {
            return Err(SpanError::inverted(start, end));
        }
        Ok(Self { start, end })
    }

    /// Construct from bounds already known to be ordered and finite.
    pub(crate) fn from_ordered(start: f64, end: f64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Start of the span, in seconds since the epoch.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End of the span, in seconds since the epoch.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length of the span in seconds. Zero for a degenerate point span.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `other` lies entirely within this span, boundaries included.
    pub fn contains(&self, other: TimeSpan) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Whether this span and `other` share at least one point.
    ///
    /// Touching at a single endpoint counts as intersection; this is the
    /// predicate that decides merging in a [`CoverageSet`](crate::CoverageSet).
    pub fn intersects(&self, other: TimeSpan) -> bool {
        self.end >= other.start && self.start <= other.end
    }

    /// Smallest span covering both this span and `other`.
    pub fn hull(&self, other: TimeSpan) -> TimeSpan {
        TimeSpan::from_ordered(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        format_bound(f, self.start)?;
        write!(f, ", ")?;
        format_bound(f, self.end)?;
        write!(f, "]")
    }
}

/// Render a bound as a UTC datetime when it fits the calendar, raw seconds
/// otherwise.
fn format_bound(f: &mut fmt::Formatter<'_>, seconds: f64) -> fmt::Result {
    // The as-cast saturates, and chrono rejects out-of-range millis.
    match DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64) {
        Some(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
        None => write!(f, "{seconds}s"),
    }
}

impl TryFrom<RawSpan> for TimeSpan {
    type Error = SpanError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        TimeSpan::new(raw.start, raw.end)
    }
}

impl From<TimeSpan> for RawSpan {
    fn from(span: TimeSpan) -> Self {
        RawSpan {
            start: span.start,
            end: span.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let err = TimeSpan::new(20.0, 10.0).unwrap_err();
        assert_eq!(err, SpanError::inverted(20.0, 10.0));
    }

    #[test]
    fn test_new_rejects_non_finite_bounds() {
        assert!(TimeSpan::new(f64::NAN, 10.0).is_err());
        assert!(TimeSpan::new(0.0, f64::INFINITY).is_err());
        assert!(TimeSpan::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_point_span_is_valid() {
        let span = TimeSpan::new(5.0, 5.0).unwrap();
        assert_eq!(span.duration(), 0.0);
    }

    #[test]
    fn test_contains_is_boundary_inclusive() {
        let outer = TimeSpan::new(0.0, 10.0).unwrap();
        let inner = TimeSpan::new(0.0, 10.0).unwrap();
        assert!(outer.contains(inner));
        assert!(outer.contains(TimeSpan::new(2.0, 8.0).unwrap()));
        assert!(!outer.contains(TimeSpan::new(2.0, 12.0).unwrap()));
    }

    #[test]
    fn test_intersects_counts_touching_endpoints() {
        let left = TimeSpan::new(0.0, 10.0).unwrap();
        let right = TimeSpan::new(10.0, 20.0).unwrap();
        let apart = TimeSpan::new(10.5, 20.0).unwrap();
        assert!(left.intersects(right));
        assert!(right.intersects(left));
        assert!(!left.intersects(apart));
    }

    #[test]
    fn test_hull_spans_both_inputs() {
        let a = TimeSpan::new(0.0, 4.0).unwrap();
        let b = TimeSpan::new(8.0, 12.0).unwrap();
        assert_eq!(a.hull(b), TimeSpan::new(0.0, 12.0).unwrap());
        assert_eq!(b.hull(a), TimeSpan::new(0.0, 12.0).unwrap());
    }

    #[test]
    fn test_display_formats_calendar_datetimes() {
        let span = TimeSpan::new(1_700_000_000.0, 1_700_000_060.5).unwrap();
        assert_eq!(
            span.to_string(),
            "[2023-11-14T22:13:20.000Z, 2023-11-14T22:14:20.500Z]"
        );
    }

    #[test]
    fn test_display_falls_back_to_raw_seconds() {
        let span = TimeSpan::new(0.0, 1e300).unwrap();
        assert_eq!(span.to_string(), "[1970-01-01T00:00:00.000Z, 1e300s]");
    }

    #[test]
    fn test_serde_round_trip() {
        let span = TimeSpan::new(10.0, 20.0).unwrap();
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"start":10.0,"end":20.0}"#);
        let back: TimeSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }

    #[test]
    fn test_serde_rejects_inverted_span() {
        let result = serde_json::from_str::<TimeSpan>(r#"{"start":20.0,"end":10.0}"#);
        assert!(result.is_err());
    }
}
