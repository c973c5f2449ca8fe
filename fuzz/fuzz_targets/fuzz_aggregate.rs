#![no_main]

use libfuzzer_sys::fuzz_target;

use ipclass_core::options::{AggregationStrategy, ExecutionMode, RunOptions};
use ipclass_core::tally_report;
use ipclass_orchestration::orchestrator::classify_lines;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks workers and strategy, the rest is the input text
    let workers = usize::from(data[0] % 16) + 1;
    let strategy = if data[0] & 0x80 == 0 {
        AggregationStrategy::Locked
    } else {
        AggregationStrategy::Channel
    };
    let text = String::from_utf8_lossy(&data[1..]);
    let lines: Vec<&str> = text.split('\n').collect();

    let opts = RunOptions {
        workers,
        strategy,
        mode: ExecutionMode::Parallel,
    };
    let run = classify_lines(&lines, &opts).expect("classification should not fail");

    assert_eq!(run.report.lines(), lines.len() as u64);
    assert_eq!(run.report, tally_report(&lines));
});
