//! Error type for classification runs.
//!
//! A line that fails both grammars is an outcome, not an error: it is tallied
//! as [`Classification::Invalid`](crate::validator::Classification::Invalid).
//! The variants here cover faults in setting up or joining a run.

/// Error type for classification runs.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The worker thread pool could not be built.
    #[error("failed to create thread pool: {0}")]
    ThreadPool(String),

    /// The dedicated aggregator thread did not finish cleanly.
    #[error("aggregator failed: {0}")]
    Aggregator(String),

    /// Reports from different execution modes don't match.
    #[error("report mismatch between {0} and {1}")]
    Mismatch(String, String),
}
