//! Core orchestration: partition, parallel dispatch, join, report.

use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use ipclass_core::aggregator::{self, GlobalResult, LockedAggregator, MergeSink};
use ipclass_core::error::ClassifyError;
use ipclass_core::options::{AggregationStrategy, ExecutionMode, RunOptions};
use ipclass_core::partition::chunks;
use ipclass_core::worker::process;

use crate::interfaces::ClassificationRun;

/// Classify `lines` according to `opts` and return the aggregated run.
///
/// In parallel mode the input is split into one chunk per worker, every chunk
/// is classified on a dedicated rayon pool, and each finished tally is merged
/// exactly once. The report is read only after the pool scope has joined.
pub fn classify_lines<S>(lines: &[S], opts: &RunOptions) -> Result<ClassificationRun, ClassifyError>
where
    S: AsRef<str> + Sync,
{
    let opts = opts.normalize();
    info!(
        lines = lines.len(),
        workers = opts.workers,
        strategy = %opts.strategy,
        mode = ?opts.mode,
        "starting classification"
    );

    let start = Instant::now();
    let global = match opts.mode {
        ExecutionMode::Sequential => run_sequential(lines),
        ExecutionMode::Parallel => run_parallel(lines, opts.workers, opts.strategy)?,
    };
    let elapsed = start.elapsed();

    debug_assert_eq!(global.total(), lines.len() as u64);
    let report = global.report();
    info!(
        total_ipv4 = report.total_ipv4,
        total_ipv6 = report.total_ipv6,
        invalid = report.invalid,
        merges = global.merges,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "classification complete"
    );

    Ok(ClassificationRun {
        report,
        workers: opts.workers,
        strategy: opts.strategy,
        mode: opts.mode,
        elapsed,
    })
}

fn run_sequential<S: AsRef<str>>(lines: &[S]) -> GlobalResult<'_> {
    let mut global = GlobalResult::default();
    global.absorb(process(lines));
    global
}

fn run_parallel<S>(
    lines: &[S],
    workers: usize,
    strategy: AggregationStrategy,
) -> Result<GlobalResult<'_>, ClassifyError>
where
    S: AsRef<str> + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("ipclass-worker-{i}"))
        .build()
        .map_err(|e| ClassifyError::ThreadPool(e.to_string()))?;
    let chunks = chunks(lines, workers);

    match strategy {
        AggregationStrategy::Locked => {
            let aggregator = LockedAggregator::new();
            dispatch(&pool, &chunks, &aggregator);
            Ok(aggregator.into_result())
        }
        AggregationStrategy::Channel => {
            let (sink, aggregator) = aggregator::channel();
            std::thread::scope(|s| {
                let handle = std::thread::Builder::new()
                    .name("ipclass-aggregator".to_string())
                    .spawn_scoped(s, move || aggregator.run())
                    .map_err(|e| ClassifyError::Aggregator(e.to_string()))?;
                dispatch(&pool, &chunks, &sink);
                // Closing the last sender lets the aggregator drain and return.
                drop(sink);
                handle
                    .join()
                    .map_err(|_| ClassifyError::Aggregator("aggregator thread panicked".into()))
            })
        }
    }
}

/// Run one worker per chunk and block until all of them have merged.
fn dispatch<'a, S, K>(pool: &ThreadPool, chunks: &[&'a [S]], sink: &K)
where
    S: AsRef<str> + Sync,
    K: MergeSink<'a>,
{
    pool.scope(|scope| {
        for (worker, &chunk) in chunks.iter().enumerate() {
            scope.spawn(move |_| {
                let tally = process(chunk);
                if tally.is_empty() {
                    debug!(worker, "empty chunk");
                } else {
                    debug!(
                        worker,
                        lines = chunk.len(),
                        ipv4 = tally.ipv4,
                        ipv6 = tally.ipv6,
                        invalid = tally.invalid,
                        "chunk classified"
                    );
                }
                sink.merge(tally);
            });
        }
    });
}

/// Check that every run produced the same report.
pub fn verify_runs(runs: &[ClassificationRun]) -> Result<(), ClassifyError> {
    let Some((first, rest)) = runs.split_first() else {
        return Ok(());
    };
    for run in rest {
        if run.report != first.report {
            return Err(ClassifyError::Mismatch(first.label(), run.label()));
        }
    }
    Ok(())
}
