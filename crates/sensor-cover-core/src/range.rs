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

use crate::{AxisValue, tolerance::Tolerance};
use std::fmt::Display;

/// Error returned when a range is supplied with `lo > hi` beyond tolerance.
///
/// Carries the offending bounds and the ε they were validated against, so
/// callers can report exactly which input was malformed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidRangeError<T> {
    lo: T,
    hi: T,
    epsilon: T,
}

impl<T: AxisValue> InvalidRangeError<T> {
    #[inline]
    fn new(lo: T, hi: T, epsilon: T) -> Self {
        Self { lo, hi, epsilon }
    }

    #[inline]
    pub fn lo(&self) -> T {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> T {
        self.hi
    }

    #[inline]
    pub fn epsilon(&self) -> T {
        self.epsilon
    }
}

impl<T: AxisValue> Display for InvalidRangeError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "range bounds are reversed beyond tolerance: lo {} > hi {} (epsilon {})",
            self.lo, self.hi, self.epsilon
        )
    }
}

impl<T: AxisValue> std::error::Error for InvalidRangeError<T> {}

/// A closed interval `[lo, hi]` on one physical axis.
///
/// Both endpoints are inclusive: a point touching a boundary counts as
/// inside. Degenerate zero-width ranges are permitted and represent a
/// single coordinate. A range is immutable once constructed.
///
/// Construction validates the bounds: `lo > hi` beyond the comparison
/// tolerance is rejected with [`InvalidRangeError`] rather than silently
/// swapped (NaN bounds fail the same validation). Bounds reversed by no
/// more than ε are reordered, which is tolerance absorption, not repair.
///
/// # Examples
///
/// ```
/// use sensor_cover_core::range::AxisRange;
/// use sensor_cover_core::tolerance::Tolerance;
///
/// let tol = Tolerance::default();
/// let range = AxisRange::new(0.0, 50.0).unwrap();
/// assert!(range.contains(0.0, tol));  // boundaries are inclusive
/// assert!(range.contains(50.0, tol));
/// assert!(!range.contains(50.1, tol));
///
/// assert!(AxisRange::new(50.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange<T> {
    lo: T,
    hi: T,
}

impl<T: AxisValue> AxisRange<T> {
    /// Creates a closed range `[lo, hi]`, validated against the default ε.
    #[inline]
    pub fn new(lo: T, hi: T) -> Result<Self, InvalidRangeError<T>> {
        Self::with_tolerance(lo, hi, Tolerance::default())
    }

    /// Creates a closed range `[lo, hi]`, validated against the given ε.
    ///
    /// Fails when `lo > hi + ε`. The predicate is written so that NaN
    /// bounds, which satisfy no ordering comparison, are rejected too.
    #[inline]
    pub fn with_tolerance(
        lo: T,
        hi: T,
        tolerance: Tolerance<T>,
    ) -> Result<Self, InvalidRangeError<T>> {
        if !tolerance.le(lo, hi) {
            return Err(InvalidRangeError::new(lo, hi, tolerance.value()));
        }
        if lo > hi {
            // reversed within ε: reorder
            Ok(Self { lo: hi, hi: lo })
        } else {
            Ok(Self { lo, hi })
        }
    }

    /// Builds a range from bounds already known to be ordered.
    ///
    /// Intended for algorithm internals that derive bounds from existing,
    /// validated ranges.
    #[inline]
    pub fn from_ordered(lo: T, hi: T) -> Self {
        debug_assert!(lo <= hi, "from_ordered: bounds must be ordered");
        Self { lo, hi }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn lo(&self) -> T {
        self.lo
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn hi(&self) -> T {
        self.hi
    }

    /// Returns the width `hi - lo` (zero for a degenerate range).
    #[inline]
    pub fn width(&self) -> T {
        self.hi - self.lo
    }

    /// Returns `true` if the range is a single point up to ε.
    #[inline]
    pub fn is_degenerate(&self, tolerance: Tolerance<T>) -> bool {
        tolerance.eq(self.lo, self.hi)
    }

    /// Returns `true` if `x` lies inside the closed range, up to ε.
    #[inline]
    pub fn contains(&self, x: T, tolerance: Tolerance<T>) -> bool {
        tolerance.le(self.lo, x) && tolerance.le(x, self.hi)
    }

    /// Returns `true` if `other` lies entirely inside this range, up to ε.
    #[inline]
    pub fn contains_range(&self, other: &Self, tolerance: Tolerance<T>) -> bool {
        tolerance.le(self.lo, other.lo) && tolerance.ge(self.hi, other.hi)
    }

    /// Returns `true` if the two closed ranges share at least one point.
    ///
    /// Touching endpoints count as overlap (closed-interval semantics).
    #[inline]
    pub fn overlaps(&self, other: &Self, tolerance: Tolerance<T>) -> bool {
        tolerance.le(self.lo, other.hi) && tolerance.le(other.lo, self.hi)
    }

    /// Returns the intersection of two closed ranges, or `None` when they
    /// are separated by more than ε.
    ///
    /// Ranges touching within ε intersect in a degenerate range at the
    /// touching coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensor_cover_core::range::AxisRange;
    /// use sensor_cover_core::tolerance::Tolerance;
    ///
    /// let tol = Tolerance::default();
    /// let a = AxisRange::new(0.0, 50.0).unwrap();
    /// let b = AxisRange::new(30.0, 80.0).unwrap();
    /// let c = a.intersection(&b, tol).unwrap();
    /// assert_eq!((c.lo(), c.hi()), (30.0, 50.0));
    ///
    /// let far = AxisRange::new(60.0, 80.0).unwrap();
    /// assert!(a.intersection(&far, tol).is_none());
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Self, tolerance: Tolerance<T>) -> Option<Self> {
        if !self.overlaps(other, tolerance) {
            return None;
        }
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        if lo <= hi {
            Some(Self { lo, hi })
        } else {
            // touching within ε: collapse to the shared coordinate
            Some(Self { lo: hi, hi })
        }
    }

    /// Returns the smallest range containing both `self` and `other`.
    #[inline]
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }
}

impl<T: Display> Display for AxisRange<T> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
