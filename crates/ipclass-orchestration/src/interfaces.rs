//! Orchestration interfaces.

use std::time::Duration;

use ipclass_core::options::{AggregationStrategy, ExecutionMode};
use ipclass_core::report::Report;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a finished run.
    fn present_run(&self, run: &ClassificationRun);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of one classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRun {
    /// The five counts.
    pub report: Report,
    /// Workers the input was split across (1 for sequential runs).
    pub workers: usize,
    /// Merge strategy used by parallel runs.
    pub strategy: AggregationStrategy,
    /// Parallel or sequential.
    pub mode: ExecutionMode,
    /// Wall-clock time spent partitioning, classifying and aggregating.
    pub elapsed: Duration,
}

impl ClassificationRun {
    /// Short label such as `parallel/lock` or `sequential`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.mode {
            ExecutionMode::Sequential => "sequential".to_string(),
            ExecutionMode::Parallel => format!("parallel/{}", self.strategy),
        }
    }
}
