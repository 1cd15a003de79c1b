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

//! # Sensor Coverage Core (`sensor-cover-core`)
//!
//! Foundational value types for deciding whether a set of hardware sensor
//! operating envelopes jointly covers a required operating envelope.
//!
//! An envelope is an axis-aligned rectangle over two continuous physical
//! axes (for cameras: subject distance and scene light level). This crate
//! models the building blocks:
//!
//! - [`tolerance::Tolerance`]: the single floating comparison tolerance ε
//!   used by every comparison in the workspace.
//! - [`range::AxisRange`]: a closed interval `[lo, hi]` on one axis, with
//!   fallible construction ([`range::InvalidRangeError`]).
//! - [`envelope::Envelope`]: a pair of axis ranges, used both for hardware
//!   capability regions and for the required envelope.
//!
//! All values are immutable once constructed; algorithms operating on them
//! never mutate their inputs.

use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

pub mod envelope;
pub mod range;
pub mod tolerance;

pub trait AxisValue: Float + FromPrimitive + Send + Sync + Debug + Display {}
impl<T> AxisValue for T where T: Float + FromPrimitive + Send + Sync + Debug + Display {}
