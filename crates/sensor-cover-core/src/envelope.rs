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

use crate::{
    AxisValue,
    range::{AxisRange, InvalidRangeError},
    tolerance::Tolerance,
};
use std::fmt::Display;

/// An axis-aligned rectangle over two continuous physical axes.
///
/// The same type models both a hardware capability region (the envelope a
/// sensor can operate in) and the required operating envelope (what the
/// software specification demands); the role is determined by the call
/// site, not the type.
///
/// # Examples
///
/// ```
/// use sensor_cover_core::envelope::Envelope;
/// use sensor_cover_core::tolerance::Tolerance;
///
/// let envelope = Envelope::from_bounds((0.0, 50.0), (0.0, 100.0)).unwrap();
/// assert!(envelope.contains_point(25.0, 100.0, Tolerance::default()));
/// assert!(!envelope.contains_point(60.0, 50.0, Tolerance::default()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope<T> {
    axis_a: AxisRange<T>,
    axis_b: AxisRange<T>,
}

impl<T: AxisValue> Envelope<T> {
    /// Creates an envelope from two already-validated axis ranges.
    #[inline]
    pub fn new(axis_a: AxisRange<T>, axis_b: AxisRange<T>) -> Self {
        Self { axis_a, axis_b }
    }

    /// Creates an envelope from raw `(lo, hi)` bound pairs, validated
    /// against the default ε.
    #[inline]
    pub fn from_bounds(axis_a: (T, T), axis_b: (T, T)) -> Result<Self, InvalidRangeError<T>> {
        Self::from_bounds_with_tolerance(axis_a, axis_b, Tolerance::default())
    }

    /// Creates an envelope from raw `(lo, hi)` bound pairs, validated
    /// against the given ε.
    #[inline]
    pub fn from_bounds_with_tolerance(
        axis_a: (T, T),
        axis_b: (T, T),
        tolerance: Tolerance<T>,
    ) -> Result<Self, InvalidRangeError<T>> {
        Ok(Self {
            axis_a: AxisRange::with_tolerance(axis_a.0, axis_a.1, tolerance)?,
            axis_b: AxisRange::with_tolerance(axis_b.0, axis_b.1, tolerance)?,
        })
    }

    /// Returns the primary-axis range.
    #[inline]
    pub fn axis_a(&self) -> AxisRange<T> {
        self.axis_a
    }

    /// Returns the secondary-axis range.
    #[inline]
    pub fn axis_b(&self) -> AxisRange<T> {
        self.axis_b
    }

    /// Returns `true` if the point `(a, b)` lies inside the envelope.
    #[inline]
    pub fn contains_point(&self, a: T, b: T, tolerance: Tolerance<T>) -> bool {
        self.axis_a.contains(a, tolerance) && self.axis_b.contains(b, tolerance)
    }

    /// Returns `true` if the envelope is a single point up to ε on both axes.
    #[inline]
    pub fn is_degenerate(&self, tolerance: Tolerance<T>) -> bool {
        self.axis_a.is_degenerate(tolerance) && self.axis_b.is_degenerate(tolerance)
    }
}

impl<T: AxisValue> From<(AxisRange<T>, AxisRange<T>)> for Envelope<T> {
    #[inline]
    fn from((axis_a, axis_b): (AxisRange<T>, AxisRange<T>)) -> Self {
        Self::new(axis_a, axis_b)
    }
}

impl<T: Display> Display for Envelope<T> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Envelope({}, {})", self.axis_a, self.axis_b)
    }
}
