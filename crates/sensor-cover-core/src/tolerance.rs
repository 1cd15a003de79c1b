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

use crate::AxisValue;
use std::fmt::Display;

/// The floating comparison tolerance ε applied to every interval comparison.
///
/// Physical axis bounds come from measurements and arithmetic on them
/// accumulates round-off, so boundary comparisons are absorbed up to ε.
/// A single `Tolerance` value is threaded through all comparison sites;
/// no site derives its own threshold.
///
/// # Examples
///
/// ```
/// use sensor_cover_core::tolerance::Tolerance;
///
/// let tol: Tolerance<f64> = Tolerance::default();
/// assert!(tol.le(50.0, 50.0));
/// assert!(tol.le(50.0 + 1e-12, 50.0)); // within ε still counts as <=
/// assert!(!tol.le(50.1, 50.0));
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Tolerance<T>(T);

impl<T: AxisValue> Tolerance<T> {
    /// Creates a tolerance from a non-negative ε.
    ///
    /// # Panics
    ///
    /// Panics if `epsilon` is negative or NaN.
    #[inline]
    pub fn new(epsilon: T) -> Self {
        assert!(
            epsilon >= T::zero(),
            "tolerance must be a non-negative number"
        );
        Self(epsilon)
    }

    /// Returns the underlying ε.
    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    /// `a <= b` up to ε.
    #[inline]
    pub fn le(self, a: T, b: T) -> bool {
        a <= b + self.0
    }

    /// `a >= b` up to ε.
    #[inline]
    pub fn ge(self, a: T, b: T) -> bool {
        a + self.0 >= b
    }

    /// `a < b` by more than ε.
    #[inline]
    pub fn lt(self, a: T, b: T) -> bool {
        a < b - self.0
    }

    /// `a > b` by more than ε.
    #[inline]
    pub fn gt(self, a: T, b: T) -> bool {
        a > b + self.0
    }

    /// `a == b` up to ε.
    #[inline]
    pub fn eq(self, a: T, b: T) -> bool {
        (a - b).abs() <= self.0
    }
}

impl<T: AxisValue> Default for Tolerance<T> {
    /// The default ε of `1e-9`.
    #[inline]
    fn default() -> Self {
        Self(T::from_f64(1e-9).expect("default tolerance is representable in any float type"))
    }
}

impl<T: Display> Display for Tolerance<T> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tolerance({})", self.0)
    }
}
