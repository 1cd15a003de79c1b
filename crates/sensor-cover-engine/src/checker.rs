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

//! Slab-sweep coverage verification.
//!
//! Coverage of the secondary axis may require the union of several
//! capability regions whose primary-axis extents differ, so regions cannot
//! be judged independently. The primary axis is first partitioned at every
//! critical coordinate into elementary slabs; within one slab the set of
//! regions spanning it is constant, and coverage reduces to a 1D
//! range-union question answered by [`RangeSet`].

use crate::rangeset::RangeSet;
use rayon::prelude::*;
use sensor_cover_core::{
    AxisValue,
    envelope::Envelope,
    range::{AxisRange, InvalidRangeError},
    tolerance::Tolerance,
};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Raw `((a_lo, a_hi), (b_lo, b_hi))` envelope bounds, as supplied by
/// callers that have not constructed typed values yet.
pub type EnvelopeBounds<T> = ((T, T), (T, T));

/// Decides whether capability envelopes jointly cover a required envelope.
///
/// The checker is a pure value: it holds only the comparison tolerance ε
/// and may be shared freely across threads. Every comparison made during a
/// sweep uses this one ε.
///
/// # Examples
///
/// ```
/// use sensor_cover_core::envelope::Envelope;
/// use sensor_cover_engine::checker::CoverageChecker;
///
/// let required = Envelope::from_bounds((0.0, 100.0), (0.0, 100.0)).unwrap();
/// let capabilities = [
///     Envelope::from_bounds((0.0, 50.0), (0.0, 100.0)).unwrap(),
///     Envelope::from_bounds((50.0, 100.0), (0.0, 100.0)).unwrap(),
/// ];
///
/// let checker = CoverageChecker::new();
/// assert!(checker.covers(&required, &capabilities));
/// assert!(!checker.covers(&required, &capabilities[..1]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageChecker<T> {
    tolerance: Tolerance<T>,
}

impl<T: AxisValue> CoverageChecker<T> {
    /// Creates a checker with the default ε.
    #[inline]
    pub fn new() -> Self {
        Self {
            tolerance: Tolerance::default(),
        }
    }

    /// Creates a checker with the given ε.
    #[inline]
    pub fn with_tolerance(tolerance: Tolerance<T>) -> Self {
        Self { tolerance }
    }

    /// Returns the ε applied to all comparisons.
    #[inline]
    pub fn tolerance(&self) -> Tolerance<T> {
        self.tolerance
    }

    /// Returns `true` iff every point of `required` lies inside at least
    /// one capability envelope (closed-interval semantics, ε-aware).
    ///
    /// An empty capability set covers nothing, a fully degenerate
    /// requirement included. The input slice is never mutated or
    /// reordered; repeated calls with permuted or duplicated capabilities
    /// return the same result.
    pub fn covers(&self, required: &Envelope<T>, capabilities: &[Envelope<T>]) -> bool {
        let clipped = self.clip(required, capabilities);
        if clipped.is_empty() {
            trace!("no capability region overlaps the required primary-axis range");
            return false;
        }
        let cuts = self.slab_cuts(required.axis_a(), &clipped);
        trace!(
            regions = capabilities.len(),
            clipped = clipped.len(),
            cuts = cuts.len(),
            "slab sweep"
        );
        if cuts.len() == 1 {
            // degenerate primary-axis requirement: a single zero-width slab
            return self.slab_covered(required, &clipped, cuts[0], cuts[0]);
        }
        cuts.windows(2)
            .all(|slab| self.slab_covered(required, &clipped, slab[0], slab[1]))
    }

    /// [`covers`](Self::covers) with the per-slab checks fanned out on the
    /// rayon thread pool.
    ///
    /// Slab verdicts are combined with a logical AND, which is independent
    /// of evaluation order; the result is identical to the serial path.
    pub fn covers_parallel(&self, required: &Envelope<T>, capabilities: &[Envelope<T>]) -> bool {
        let clipped = self.clip(required, capabilities);
        if clipped.is_empty() {
            trace!("no capability region overlaps the required primary-axis range");
            return false;
        }
        let cuts = self.slab_cuts(required.axis_a(), &clipped);
        if cuts.len() == 1 {
            return self.slab_covered(required, &clipped, cuts[0], cuts[0]);
        }
        cuts.par_windows(2)
            .all(|slab| self.slab_covered(required, &clipped, slab[0], slab[1]))
    }

    /// Validates raw bounds, then decides coverage.
    ///
    /// Every supplied `(lo, hi)` pair — the requirement's and every
    /// capability's, on both axes — is validated against the checker's ε
    /// before any computation. A single malformed range fails the whole
    /// call with [`InvalidRangeError`]; no partial result is produced.
    pub fn covers_bounds(
        &self,
        required: EnvelopeBounds<T>,
        capabilities: &[EnvelopeBounds<T>],
    ) -> Result<bool, InvalidRangeError<T>> {
        let required = self.envelope_from_bounds(required)?;
        let capabilities = capabilities
            .iter()
            .map(|&bounds| self.envelope_from_bounds(bounds))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.covers(&required, &capabilities))
    }

    #[inline]
    fn envelope_from_bounds(
        &self,
        (axis_a, axis_b): EnvelopeBounds<T>,
    ) -> Result<Envelope<T>, InvalidRangeError<T>> {
        Ok(Envelope::new(
            AxisRange::with_tolerance(axis_a.0, axis_a.1, self.tolerance)?,
            AxisRange::with_tolerance(axis_b.0, axis_b.1, self.tolerance)?,
        ))
    }

    /// Discards capabilities not overlapping the required primary-axis
    /// range and intersects the rest with it. Secondary-axis ranges are
    /// untouched.
    fn clip(&self, required: &Envelope<T>, capabilities: &[Envelope<T>]) -> Vec<Envelope<T>> {
        let required_a = required.axis_a();
        capabilities
            .iter()
            .filter_map(|cap| {
                cap.axis_a()
                    .intersection(&required_a, self.tolerance)
                    .map(|axis_a| Envelope::new(axis_a, cap.axis_b()))
            })
            .collect()
    }

    /// The sorted, ε-deduplicated primary-axis coordinates at which the
    /// set of spanning capabilities can change: every clipped bound plus
    /// the requirement's own bounds.
    fn slab_cuts(&self, required_a: AxisRange<T>, clipped: &[Envelope<T>]) -> Vec<T> {
        let mut cuts = Vec::with_capacity(2 * clipped.len() + 2);
        cuts.push(required_a.lo());
        cuts.push(required_a.hi());
        for cap in clipped {
            // clipped bounds already lie within the required range
            cuts.push(cap.axis_a().lo());
            cuts.push(cap.axis_a().hi());
        }
        cuts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        cuts.dedup_by(|next, kept| self.tolerance.eq(*next, *kept));
        cuts
    }

    /// Verifies one elementary slab `[slab_lo, slab_hi]`.
    ///
    /// Only regions spanning the whole slab participate: a region covering
    /// part of a slab leaves some primary-axis coordinate uncovered by it,
    /// so it cannot certify the slab.
    fn slab_covered(
        &self,
        required: &Envelope<T>,
        clipped: &[Envelope<T>],
        slab_lo: T,
        slab_hi: T,
    ) -> bool {
        let active: Vec<AxisRange<T>> = clipped
            .iter()
            .filter(|cap| {
                self.tolerance.le(cap.axis_a().lo(), slab_lo)
                    && self.tolerance.ge(cap.axis_a().hi(), slab_hi)
            })
            .map(|cap| cap.axis_b())
            .collect();
        let merged = RangeSet::from_ranges(&active, self.tolerance);
        let covered = merged.covers(&required.axis_b());
        if !covered {
            debug!(
                slab_lo = %slab_lo,
                slab_hi = %slab_hi,
                active = active.len(),
                "secondary-axis coverage gap in slab"
            );
        }
        covered
    }
}

impl<T: AxisValue> Default for CoverageChecker<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GeneratorConfig, covering_tiling, tiling_with_gap};

    fn envelope(axis_a: (f64, f64), axis_b: (f64, f64)) -> Envelope<f64> {
        Envelope::from_bounds(axis_a, axis_b).unwrap()
    }

    fn checker() -> CoverageChecker<f64> {
        CoverageChecker::new()
    }

    #[test]
    fn test_two_half_tiles_cover() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 50.0), (0.0, 100.0)),
            envelope((50.0, 100.0), (0.0, 100.0)),
        ];
        assert!(checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_staggered_halves_leave_secondary_gaps() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 60.0), (0.0, 50.0)),
            envelope((60.0, 100.0), (50.0, 100.0)),
        ];
        assert!(!checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_degenerate_point_requirement_inside_one_region() {
        let required = envelope((10.0, 10.0), (5.0, 5.0));
        let capabilities = [envelope((0.0, 20.0), (0.0, 10.0))];
        assert!(checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_empty_capability_set_covers_nothing() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        assert!(!checker().covers(&required, &[]));
    }

    #[test]
    fn test_empty_capability_set_fails_even_degenerate_requirement() {
        let required = envelope((10.0, 10.0), (5.0, 5.0));
        assert!(!checker().covers(&required, &[]));
    }

    #[test]
    fn test_regions_touching_at_primary_boundary_cover() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 50.0), (0.0, 100.0)),
            envelope((50.0, 100.0), (0.0, 100.0)),
        ];
        // inclusive boundary: the shared coordinate 50 is covered by both
        assert!(checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_reflexivity() {
        for required in [
            envelope((0.0, 100.0), (0.0, 100.0)),
            envelope((-5.0, 5.0), (2.0, 2.0)),
            envelope((10.0, 10.0), (10.0, 10.0)),
        ] {
            assert!(checker().covers(&required, &[required]));
        }
    }

    #[test]
    fn test_primary_axis_gap_is_detected() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 40.0), (0.0, 100.0)),
            envelope((60.0, 100.0), (0.0, 100.0)),
        ];
        assert!(!checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_secondary_axis_gap_within_slab_is_detected() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 100.0), (0.0, 40.0)),
            envelope((0.0, 100.0), (60.0, 100.0)),
        ];
        assert!(!checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_secondary_union_across_regions_covers() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 100.0), (0.0, 55.0)),
            envelope((0.0, 100.0), (45.0, 100.0)),
        ];
        assert!(checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_staggered_interior_gap_is_detected() {
        // A single left-to-right scan that only tracks how far the primary
        // axis has been covered would accept this layout: the wide bottom
        // region reaches the right edge while the top coverage has a hole
        // over (50, 60).
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 100.0), (0.0, 40.0)),
            envelope((0.0, 50.0), (30.0, 100.0)),
            envelope((60.0, 100.0), (30.0, 100.0)),
        ];
        assert!(!checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_staggered_overlaps_cover() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 100.0), (0.0, 40.0)),
            envelope((0.0, 55.0), (30.0, 100.0)),
            envelope((45.0, 100.0), (30.0, 100.0)),
        ];
        assert!(checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_partially_overlapping_region_cannot_certify_a_slab() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        // the second region covers the upper band only from 50 onwards,
        // yet the first leaves the upper band open from 40 onwards
        let capabilities = [
            envelope((0.0, 100.0), (0.0, 50.0)),
            envelope((50.0, 100.0), (50.0, 100.0)),
            envelope((0.0, 40.0), (50.0, 100.0)),
        ];
        assert!(!checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_degenerate_primary_requirement_fused_from_touching_regions() {
        // both regions contain the primary coordinate 0; their secondary
        // ranges touch and fuse into [0, 100]
        let required = envelope((0.0, 0.0), (0.0, 100.0));
        let capabilities = [
            envelope((-5.0, 0.0), (0.0, 50.0)),
            envelope((0.0, 10.0), (50.0, 100.0)),
        ];
        assert!(checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_degenerate_secondary_requirement() {
        let required = envelope((0.0, 100.0), (50.0, 50.0));
        let covering = [
            envelope((0.0, 60.0), (0.0, 50.0)),
            envelope((60.0, 100.0), (50.0, 80.0)),
        ];
        assert!(checker().covers(&required, &covering));

        let missing = [
            envelope((0.0, 60.0), (0.0, 49.0)),
            envelope((60.0, 100.0), (50.0, 80.0)),
        ];
        assert!(!checker().covers(&required, &missing));
    }

    #[test]
    fn test_required_envelope_touching_neighbor_region() {
        // the requirement sits exactly on the boundary of its neighbor
        let required = envelope((50.0, 100.0), (0.0, 100.0));
        let capabilities = [envelope((0.0, 50.0), (0.0, 100.0))];
        assert!(!checker().covers(&required, &capabilities));
        // only the shared primary coordinate is a covered requirement
        let line = envelope((50.0, 50.0), (0.0, 100.0));
        assert!(checker().covers(&line, &capabilities));
    }

    #[test]
    fn test_monotonicity_adding_regions_never_breaks_coverage() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let mut capabilities = vec![
            envelope((0.0, 50.0), (0.0, 100.0)),
            envelope((50.0, 100.0), (0.0, 100.0)),
        ];
        assert!(checker().covers(&required, &capabilities));
        capabilities.push(envelope((20.0, 30.0), (40.0, 60.0)));
        capabilities.push(envelope((-50.0, 200.0), (-10.0, 5.0)));
        capabilities.push(envelope((99.0, 300.0), (0.0, 1.0)));
        assert!(checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_order_independence() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let mut capabilities = vec![
            envelope((0.0, 100.0), (0.0, 40.0)),
            envelope((0.0, 55.0), (30.0, 100.0)),
            envelope((45.0, 100.0), (30.0, 100.0)),
        ];
        let expected = checker().covers(&required, &capabilities);
        capabilities.reverse();
        assert_eq!(checker().covers(&required, &capabilities), expected);
        capabilities.swap(0, 1);
        assert_eq!(checker().covers(&required, &capabilities), expected);
    }

    #[test]
    fn test_duplicate_invariance() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 60.0), (0.0, 50.0)),
            envelope((60.0, 100.0), (50.0, 100.0)),
        ];
        let doubled: Vec<_> = capabilities
            .iter()
            .chain(capabilities.iter())
            .copied()
            .collect();
        assert_eq!(
            checker().covers(&required, &capabilities),
            checker().covers(&required, &doubled)
        );
    }

    #[test]
    fn test_tolerance_absorbs_hairline_primary_gap() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 50.0 - 1e-12), (0.0, 100.0)),
            envelope((50.0, 100.0), (0.0, 100.0)),
        ];
        assert!(checker().covers(&required, &capabilities));
    }

    #[test]
    fn test_wider_tolerance_widens_acceptance() {
        let required = envelope((0.0, 100.0), (0.0, 100.0));
        let capabilities = [
            envelope((0.0, 49.5), (0.0, 100.0)),
            envelope((50.0, 100.0), (0.0, 100.0)),
        ];
        assert!(!checker().covers(&required, &capabilities));
        let loose = CoverageChecker::with_tolerance(Tolerance::new(1.0));
        assert!(loose.covers(&required, &capabilities));
    }

    #[test]
    fn test_covers_bounds_validates_before_computing() {
        let c = checker();
        assert_eq!(
            c.covers_bounds(
                ((0.0, 100.0), (0.0, 100.0)),
                &[((0.0, 50.0), (0.0, 100.0)), ((50.0, 100.0), (0.0, 100.0))],
            ),
            Ok(true)
        );
        // malformed requirement
        assert!(
            c.covers_bounds(((100.0, 0.0), (0.0, 100.0)), &[((0.0, 50.0), (0.0, 100.0))])
                .is_err()
        );
        // one malformed capability poisons the whole call
        assert!(
            c.covers_bounds(
                ((0.0, 100.0), (0.0, 100.0)),
                &[((0.0, 50.0), (0.0, 100.0)), ((50.0, 100.0), (100.0, 0.0))],
            )
            .is_err()
        );
    }

    #[test]
    fn test_parallel_agrees_with_serial() {
        let required = envelope((0.0, 1000.0), (0.0, 1000.0));
        for seed in [1_u64, 7, 42] {
            let config = GeneratorConfig {
                columns: 24,
                rows: 8,
                seed,
                ..GeneratorConfig::default()
            };
            let covering = covering_tiling(&config, &required);
            let gapped = tiling_with_gap(&config, &required);
            let c = checker();
            assert_eq!(
                c.covers(&required, &covering),
                c.covers_parallel(&required, &covering)
            );
            assert_eq!(
                c.covers(&required, &gapped),
                c.covers_parallel(&required, &gapped)
            );
        }
    }

    #[test]
    fn test_generated_tilings_behave_as_built() {
        let required = envelope((0.0, 1000.0), (-50.0, 400.0));
        for seed in [3_u64, 11, 1234] {
            let config = GeneratorConfig {
                seed,
                ..GeneratorConfig::default()
            };
            assert!(checker().covers(&required, &covering_tiling(&config, &required)));
            assert!(!checker().covers(&required, &tiling_with_gap(&config, &required)));
        }
    }

    #[test]
    fn test_float32_axis_values() {
        let required: Envelope<f32> =
            Envelope::from_bounds((0.0_f32, 100.0_f32), (0.0_f32, 100.0_f32)).unwrap();
        let capabilities = [
            Envelope::from_bounds((0.0_f32, 50.0_f32), (0.0_f32, 100.0_f32)).unwrap(),
            Envelope::from_bounds((50.0_f32, 100.0_f32), (0.0_f32, 100.0_f32)).unwrap(),
        ];
        let c: CoverageChecker<f32> = CoverageChecker::new();
        assert!(c.covers(&required, &capabilities));
    }
}
