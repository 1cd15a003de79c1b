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

//! Seeded random capability-set generation.
//!
//! Produces reproducible instances for tests, benchmarks and the demo
//! binary: randomized tilings that provably cover a required envelope, and
//! the same tilings with a secondary-axis band carved out so that coverage
//! provably fails.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sensor_cover_core::{envelope::Envelope, range::AxisRange};
use std::cmp::Ordering;

/// Knobs for instance generation. Deterministic under a fixed `seed`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Primary-axis tile count.
    pub columns: usize,
    /// Secondary-axis tile count per column.
    pub rows: usize,
    /// Maximum outward jitter added to tile edges; must be non-negative.
    pub overhang: f64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 4,
            overhang: 0.5,
            seed: 0x5EED_C0DE,
        }
    }
}

/// Builds a randomized tiling of `required` that is guaranteed to cover it.
///
/// The required primary-axis range is cut into random columns, each column
/// into random secondary-axis tiles; tile edges are then jittered outward
/// only, which preserves the cover. The result is shuffled so callers
/// exercising order independence get a genuinely unordered set.
pub fn covering_tiling(config: &GeneratorConfig, required: &Envelope<f64>) -> Vec<Envelope<f64>> {
    assert!(config.overhang >= 0.0, "overhang must be non-negative");
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let column_cuts = axis_cuts(&mut rng, required.axis_a(), config.columns);
    let mut regions = Vec::with_capacity(config.columns.max(1) * config.rows.max(1));
    for column in column_cuts.windows(2) {
        let row_cuts = axis_cuts(&mut rng, required.axis_b(), config.rows);
        for row in row_cuts.windows(2) {
            let axis_a = jittered(&mut rng, column[0], column[1], config.overhang);
            let axis_b = jittered(&mut rng, row[0], row[1], config.overhang);
            regions.push(Envelope::new(axis_a, axis_b));
        }
    }
    regions.shuffle(&mut rng);
    regions
}

/// Builds the same kind of tiling as [`covering_tiling`], then carves a
/// secondary-axis band out of every region, leaving a hole strictly inside
/// `required` so that coverage provably fails.
///
/// # Panics
///
/// Panics if `required` is degenerate on the secondary axis; there is no
/// interior band to carve from a zero-width range.
pub fn tiling_with_gap(config: &GeneratorConfig, required: &Envelope<f64>) -> Vec<Envelope<f64>> {
    let axis_b = required.axis_b();
    assert!(
        axis_b.width() > 0.0,
        "secondary-axis range must have interior to carve a gap"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed ^ 0xBEEF);
    let width = axis_b.width();
    let center = axis_b.lo() + width * rng.random_range(0.25..=0.75);
    let half_band = width * 0.05;
    let band_lo = center - half_band;
    let band_hi = center + half_band;

    let mut carved = Vec::new();
    for region in covering_tiling(config, required) {
        let b = region.axis_b();
        if b.hi() <= band_lo || b.lo() >= band_hi {
            carved.push(region);
            continue;
        }
        if b.lo() < band_lo {
            let below = AxisRange::new(b.lo(), band_lo).expect("piece bounds are ordered");
            carved.push(Envelope::new(region.axis_a(), below));
        }
        if b.hi() > band_hi {
            let above = AxisRange::new(band_hi, b.hi()).expect("piece bounds are ordered");
            carved.push(Envelope::new(region.axis_a(), above));
        }
    }
    carved.shuffle(&mut rng);
    carved
}

/// Cuts `range` into `tiles` pieces at uniformly drawn interior points.
fn axis_cuts<R: Rng + ?Sized>(rng: &mut R, range: AxisRange<f64>, tiles: usize) -> Vec<f64> {
    let tiles = tiles.max(1);
    let mut cuts = Vec::with_capacity(tiles + 1);
    cuts.push(range.lo());
    for _ in 1..tiles {
        cuts.push(rng.random_range(range.lo()..=range.hi()));
    }
    cuts.push(range.hi());
    cuts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    cuts
}

/// One tile with outward-only edge jitter; outward jitter keeps a tiling
/// a cover of the original extent.
fn jittered<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64, overhang: f64) -> AxisRange<f64> {
    let lo = lo - rng.random_range(0.0..=overhang);
    let hi = hi + rng.random_range(0.0..=overhang);
    AxisRange::new(lo, hi).expect("outward jitter keeps bounds ordered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::CoverageChecker;

    fn required() -> Envelope<f64> {
        Envelope::from_bounds((0.0, 1000.0), (0.0, 500.0)).unwrap()
    }

    #[test]
    fn test_covering_tiling_region_count() {
        let config = GeneratorConfig::default();
        let regions = covering_tiling(&config, &required());
        assert_eq!(regions.len(), config.columns * config.rows);
    }

    #[test]
    fn test_covering_tiling_covers() {
        let checker = CoverageChecker::new();
        for seed in [0_u64, 5, 99, 2026] {
            let config = GeneratorConfig {
                seed,
                ..GeneratorConfig::default()
            };
            let regions = covering_tiling(&config, &required());
            assert!(checker.covers(&required(), &regions), "seed {seed}");
        }
    }

    #[test]
    fn test_tiling_with_gap_never_covers() {
        let checker = CoverageChecker::new();
        for seed in [0_u64, 5, 99, 2026] {
            let config = GeneratorConfig {
                seed,
                ..GeneratorConfig::default()
            };
            let regions = tiling_with_gap(&config, &required());
            assert!(!checker.covers(&required(), &regions), "seed {seed}");
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_instance() {
        let config = GeneratorConfig::default();
        assert_eq!(
            covering_tiling(&config, &required()),
            covering_tiling(&config, &required())
        );
        assert_eq!(
            tiling_with_gap(&config, &required()),
            tiling_with_gap(&config, &required())
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = GeneratorConfig {
            seed: 1,
            ..GeneratorConfig::default()
        };
        let b = GeneratorConfig {
            seed: 2,
            ..GeneratorConfig::default()
        };
        assert_ne!(
            covering_tiling(&a, &required()),
            covering_tiling(&b, &required())
        );
    }

    #[test]
    fn test_degenerate_primary_axis_tiling() {
        let point_line = Envelope::from_bounds((10.0, 10.0), (0.0, 100.0)).unwrap();
        let config = GeneratorConfig::default();
        let regions = covering_tiling(&config, &point_line);
        assert!(CoverageChecker::new().covers(&point_line, &regions));
    }

    #[test]
    #[should_panic(expected = "interior to carve")]
    fn test_tiling_with_gap_rejects_degenerate_secondary_axis() {
        let line = Envelope::from_bounds((0.0, 100.0), (5.0, 5.0)).unwrap();
        let _ = tiling_with_gap(&GeneratorConfig::default(), &line);
    }
}
