// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! RangeSet: sorted, disjoint closed-range set over `AxisRange<T>`.
//!
//! Invariants (always held):
//!    - ranges are sorted ascending by `lo()`
//!    - no two adjacent ranges are closer than the set's tolerance ε
//!    - semantics are closed `[lo, hi]`, all comparisons ε-aware
//!
//! Complexity:
//!    - from_ranges: `O(n log n)`
//!    - covers, contains_point: `O(log n)`
//!    - first_gap: `O(n)`

use sensor_cover_core::{AxisValue, range::AxisRange, tolerance::Tolerance};
use std::cmp::Ordering;

/// The minimal sorted sequence of pairwise-disjoint closed ranges whose
/// union equals the union of the construction inputs.
///
/// Inputs overlapping or touching within ε are fused into one segment, so
/// after construction a requirement is covered by the union iff it is
/// covered by a single segment. Duplicate and fully-contained inputs have
/// no effect on the result, and construction sorts a copy; the caller's
/// collection is never reordered.
///
/// # Examples
///
/// ```
/// use sensor_cover_core::range::AxisRange;
/// use sensor_cover_core::tolerance::Tolerance;
/// use sensor_cover_engine::rangeset::RangeSet;
///
/// let ranges = [
///     AxisRange::new(50.0, 100.0).unwrap(),
///     AxisRange::new(0.0, 50.0).unwrap(), // touching: fused with the above
///     AxisRange::new(200.0, 300.0).unwrap(),
/// ];
/// let set = RangeSet::from_ranges(&ranges, Tolerance::default());
/// assert_eq!(set.len(), 2);
/// assert!(set.covers(&AxisRange::new(0.0, 100.0).unwrap()));
/// assert!(!set.covers(&AxisRange::new(0.0, 250.0).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSet<T> {
    ranges: Vec<AxisRange<T>>,
    tolerance: Tolerance<T>,
}

impl<T: AxisValue> RangeSet<T> {
    /// Merges an arbitrary collection of closed ranges.
    ///
    /// Sorts a copy by `lo` ascending (ties by `hi` ascending, so the
    /// result is independent of input order), then coalesces left to
    /// right whenever `next.lo <= acc.hi + ε`.
    pub fn from_ranges(source: &[AxisRange<T>], tolerance: Tolerance<T>) -> Self {
        let mut sorted = source.to_vec();
        // validated ranges carry no NaN, so the comparison is total here
        sorted.sort_by(|a, b| {
            a.lo()
                .partial_cmp(&b.lo())
                .unwrap_or(Ordering::Equal)
                .then(a.hi().partial_cmp(&b.hi()).unwrap_or(Ordering::Equal))
        });

        let mut merged: Vec<AxisRange<T>> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match merged.last_mut() {
                Some(last) if tolerance.le(range.lo(), last.hi()) => {
                    if range.hi() > last.hi() {
                        *last = last.hull(&range);
                    }
                }
                _ => merged.push(range),
            }
        }

        let set = Self {
            ranges: merged,
            tolerance,
        };
        debug_assert!(set.invariants_hold());
        set
    }

    fn invariants_hold(&self) -> bool {
        self.ranges
            .windows(2)
            .all(|w| w[0].lo() <= w[1].lo() && self.tolerance.gt(w[1].lo(), w[0].hi()))
    }

    /// Returns the number of disjoint segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if the set contains no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the merged segments, sorted ascending by `lo`.
    #[inline]
    pub fn as_slice(&self) -> &[AxisRange<T>] {
        &self.ranges
    }

    /// Consumes the set and returns the merged segments.
    #[inline]
    pub fn into_ranges(self) -> Vec<AxisRange<T>> {
        self.ranges
    }

    /// Returns the ε this set was built with.
    #[inline]
    pub fn tolerance(&self) -> Tolerance<T> {
        self.tolerance
    }

    /// Index of the first segment whose `hi` is not ε-below `point`.
    ///
    /// Segments ending before that index cannot contain `point` or any
    /// coordinate at or beyond it.
    #[inline]
    fn find_first_ending_at_or_after(&self, point: T) -> usize {
        self.ranges
            .partition_point(|range| self.tolerance.lt(range.hi(), point))
    }

    /// Returns `true` if some segment contains `point` (closed, ε-aware).
    #[inline]
    pub fn contains_point(&self, point: T) -> bool {
        let candidate = self.find_first_ending_at_or_after(point);
        candidate < self.ranges.len() && self.tolerance.le(self.ranges[candidate].lo(), point)
    }

    /// Returns `true` if the union of segments fully contains `required`.
    ///
    /// Adjacent segments are more than ε apart, so a covered requirement
    /// lies inside exactly one segment; only the segment reaching past
    /// `required.lo` can be that one. An empty set covers nothing, a
    /// degenerate requirement included.
    #[inline]
    pub fn covers(&self, required: &AxisRange<T>) -> bool {
        let candidate = self.find_first_ending_at_or_after(required.lo());
        candidate < self.ranges.len()
            && self.ranges[candidate].contains_range(required, self.tolerance)
    }

    /// Returns the leftmost sub-range of `required` not covered by the
    /// set, or `None` when `required` is fully covered.
    ///
    /// A degenerate result marks a single uncovered coordinate. This is
    /// the diagnostic counterpart of [`covers`](Self::covers).
    pub fn first_gap(&self, required: &AxisRange<T>) -> Option<AxisRange<T>> {
        let mut cursor = required.lo();
        for range in &self.ranges {
            if self.tolerance.lt(range.hi(), cursor) {
                // entirely before the uncovered part
                continue;
            }
            if self.tolerance.gt(range.lo(), cursor) {
                let gap_hi = range.lo().min(required.hi());
                return Some(AxisRange::from_ordered(cursor, gap_hi.max(cursor)));
            }
            cursor = cursor.max(range.hi());
            if self.tolerance.ge(cursor, required.hi()) {
                return None;
            }
        }
        Some(AxisRange::from_ordered(cursor, required.hi().max(cursor)))
    }
}
