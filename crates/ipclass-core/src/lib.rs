//! # ipclass-core
//!
//! Core library for classifying lines as IPv4, IPv6 or invalid and
//! aggregating per-worker tallies into one report.

pub mod aggregator;
pub mod constants;
pub mod error;
pub mod options;
pub mod partition;
pub mod report;
pub mod validator;
pub mod worker;

// Re-exports
pub use aggregator::{GlobalResult, LockedAggregator, MergeSink};
pub use constants::{exit_codes, DEFAULT_INPUT_PATH};
pub use error::ClassifyError;
pub use options::{AggregationStrategy, ExecutionMode, RunOptions};
pub use report::Report;
pub use validator::{classify, is_ipv4, is_ipv6, Classification};
pub use worker::{process, Tally};

/// Classify `lines` on the calling thread and return the report.
///
/// This is a convenience function for simple use cases. For parallel runs,
/// use the driver in `ipclass-orchestration`.
///
/// # Example
/// ```
/// let report = ipclass_core::tally_report(&["1.2.3.4", "1.2.3.4", "x"]);
/// assert_eq!(report.total_ipv4, 2);
/// assert_eq!(report.unique_ipv4, 1);
/// assert_eq!(report.invalid, 1);
/// ```
#[must_use]
pub fn tally_report<S: AsRef<str>>(lines: &[S]) -> Report {
    let mut global = GlobalResult::default();
    global.absorb(process(lines));
    global.report()
}
