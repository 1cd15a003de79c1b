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

//! # Sensor Coverage Engine (`sensor-cover-engine`)
//!
//! Decides whether a set of hardware capability envelopes jointly covers a
//! required operating envelope.
//!
//! - [`rangeset::RangeSet`]: merges arbitrary closed ranges on one axis
//!   into the minimal sorted set of disjoint covering segments.
//! - [`checker::CoverageChecker`]: the slab-sweep decision procedure over
//!   two axes, with a serial and a rayon-parallel entry point.
//! - [`generator`]: seeded random instance generation for tests, benches
//!   and the demo binary.
//!
//! The engine is a pure computation: no I/O, no shared mutable state, and
//! input collections are never mutated.

pub mod checker;
pub mod generator;
pub mod rangeset;
