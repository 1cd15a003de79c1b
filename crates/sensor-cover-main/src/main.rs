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

use sensor_cover_core::envelope::Envelope;
use sensor_cover_engine::{
    checker::CoverageChecker,
    generator::{GeneratorConfig, covering_tiling, tiling_with_gap},
};
use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Instant};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    columns: usize,
    rows: usize,
    regions: usize,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    gap_injected: bool,
    covered: bool,
    serial_elapsed_us: u128,
    parallel_elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct CoverageReport {
    description: String,
    runs: Vec<RunResult>,
}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as isize - val0 as isize) * step as isize;
    (val0 as isize + num / (steps as isize - 1)).max(0) as usize
}

fn run_instance(
    checker: &CoverageChecker<f64>,
    required: &Envelope<f64>,
    regions: &[Envelope<f64>],
    instance: InstanceInfo,
    gap_injected: bool,
) -> RunResult {
    let serial_start = Instant::now();
    let covered = checker.covers(required, regions);
    let serial_elapsed_us = serial_start.elapsed().as_micros();

    let parallel_start = Instant::now();
    let covered_parallel = checker.covers_parallel(required, regions);
    let parallel_elapsed_us = parallel_start.elapsed().as_micros();

    assert_eq!(covered, covered_parallel, "serial/parallel sweep disagree");
    info!(
        idx = instance.idx,
        regions = instance.regions,
        gap_injected,
        covered,
        serial_elapsed_us,
        parallel_elapsed_us,
        "instance checked"
    );

    RunResult {
        instance,
        gap_injected,
        covered,
        serial_elapsed_us,
        parallel_elapsed_us,
    }
}

fn main() {
    enable_tracing();

    const BASE_SEED: u64 = 0x5EED_C0DE;

    let required = Envelope::from_bounds((0.0, 1_000.0), (0.0, 1_000.0))
        .expect("required envelope bounds are ordered");
    let checker = CoverageChecker::new();

    // Ramp from small to big across 10 instances
    let n_instances = 10usize;
    let min_columns = 4usize;
    let max_columns = 512usize;
    let min_rows = 2usize;
    let max_rows = 64usize;

    let mut runs = Vec::with_capacity(2 * n_instances);
    for idx in 0..n_instances {
        let columns = interpolate_u(min_columns, max_columns, idx, n_instances);
        let rows = interpolate_u(min_rows, max_rows, idx, n_instances);
        let config = GeneratorConfig {
            columns,
            rows,
            seed: BASE_SEED.wrapping_add(idx as u64),
            ..GeneratorConfig::default()
        };

        let covering = covering_tiling(&config, &required);
        runs.push(run_instance(
            &checker,
            &required,
            &covering,
            InstanceInfo {
                idx,
                seed: config.seed,
                columns,
                rows,
                regions: covering.len(),
            },
            false,
        ));

        let gapped = tiling_with_gap(&config, &required);
        runs.push(run_instance(
            &checker,
            &required,
            &gapped,
            InstanceInfo {
                idx,
                seed: config.seed,
                columns,
                rows,
                regions: gapped.len(),
            },
            true,
        ));
    }

    let report = CoverageReport {
        description: format!(
            "coverage sweep over {} generated instances ({}x{} up to {}x{} tiles), \
             covering and gap-injected variants",
            n_instances, min_columns, min_rows, max_columns, max_rows
        ),
        runs,
    };

    let path = "coverage_report.json";
    let file = File::create(path).expect("report file is writable");
    serde_json::to_writer_pretty(BufWriter::new(file), &report).expect("report serializes");
    info!(path, "report written");
}
