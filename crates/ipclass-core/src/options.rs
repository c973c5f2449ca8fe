//! Run options: worker count, aggregation strategy, execution mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;
use crate::partition::default_workers;

/// How finished tallies reach the global result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationStrategy {
    /// One mutex around the whole merge.
    #[default]
    #[serde(rename = "lock")]
    Locked,
    /// A dedicated aggregator thread fed over a channel.
    Channel,
}

impl AggregationStrategy {
    /// Names accepted by [`FromStr`].
    pub const NAMES: [&'static str; 2] = ["lock", "channel"];

    /// Canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Locked => "lock",
            Self::Channel => "channel",
        }
    }
}

impl fmt::Display for AggregationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregationStrategy {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lock" | "locked" | "mutex" => Ok(Self::Locked),
            "channel" | "chan" => Ok(Self::Channel),
            other => Err(ClassifyError::Config(format!(
                "unknown aggregation strategy: {other} (expected one of: {})",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// Whether work is spread across a thread pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Partition across workers and aggregate.
    #[default]
    Parallel,
    /// One pass on the calling thread; no pool, lock or channel.
    Sequential,
}

/// Options for one classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Number of workers (0 = available parallelism).
    pub workers: usize,
    /// Merge strategy for parallel runs.
    pub strategy: AggregationStrategy,
    /// Parallel or sequential.
    pub mode: ExecutionMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            workers: 0,
            strategy: AggregationStrategy::default(),
            mode: ExecutionMode::default(),
        }
    }
}

impl RunOptions {
    /// Resolve defaults: a zero worker count becomes the available
    /// parallelism, and sequential mode always has exactly one worker.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.mode == ExecutionMode::Sequential {
            self.workers = 1;
        } else if self.workers == 0 {
            self.workers = default_workers();
        }
        self
    }
}
