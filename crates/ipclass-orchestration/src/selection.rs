//! Building run options from raw command-line values.

use ipclass_core::error::ClassifyError;
use ipclass_core::options::{AggregationStrategy, ExecutionMode, RunOptions};

/// Upper bound on explicitly requested workers.
pub const MAX_WORKERS: usize = 4096;

/// Build normalized [`RunOptions`] from a worker count (0 = auto), a strategy
/// name and the sequential flag.
pub fn build_run_options(
    workers: usize,
    strategy: &str,
    sequential: bool,
) -> Result<RunOptions, ClassifyError> {
    if workers > MAX_WORKERS {
        return Err(ClassifyError::Config(format!(
            "worker count {workers} exceeds maximum of {MAX_WORKERS}"
        )));
    }
    let strategy: AggregationStrategy = strategy.parse()?;
    let mode = if sequential {
        ExecutionMode::Sequential
    } else {
        ExecutionMode::Parallel
    };
    Ok(RunOptions {
        workers,
        strategy,
        mode,
    }
    .normalize())
}
