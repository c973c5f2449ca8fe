//! Golden file integration tests.
//!
//! Reads tests/testdata/classification_golden.json and checks single-line
//! classification as well as the aggregated report for the whole file.

use serde::Deserialize;

use ipclass_core::options::{AggregationStrategy, ExecutionMode, RunOptions};
use ipclass_core::report::Report;
use ipclass_core::validator::{classify, Classification};
use ipclass_orchestration::orchestrator::classify_lines;

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    lines: Vec<GoldenEntry>,
    report: Report,
}

#[derive(Deserialize)]
struct GoldenEntry {
    line: String,
    class: Classification,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/classification_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

#[test]
fn golden_single_line_classification() {
    let data = load_golden_data();
    for entry in &data.lines {
        assert_eq!(classify(&entry.line), entry.class, "line {:?}", entry.line);
    }
}

#[test]
fn golden_report_all_modes() {
    let data = load_golden_data();
    let lines: Vec<&str> = data.lines.iter().map(|e| e.line.as_str()).collect();

    let mut modes = vec![RunOptions {
        mode: ExecutionMode::Sequential,
        ..RunOptions::default()
    }];
    for strategy in [AggregationStrategy::Locked, AggregationStrategy::Channel] {
        for workers in [1, 3, 16] {
            modes.push(RunOptions {
                workers,
                strategy,
                mode: ExecutionMode::Parallel,
            });
        }
    }

    for opts in &modes {
        let run = classify_lines(&lines, opts).unwrap();
        assert_eq!(run.report, data.report, "{}", run.label());
    }
}

#[test]
fn golden_report_is_consistent() {
    let data = load_golden_data();
    assert_eq!(data.report.lines(), data.lines.len() as u64);
}
