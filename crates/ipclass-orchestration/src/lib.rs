//! # ipclass-orchestration
//!
//! Partitioning, parallel dispatch, aggregation and run verification.

pub mod interfaces;
pub mod orchestrator;
pub mod selection;

pub use interfaces::{ClassificationRun, ResultPresenter};
pub use orchestrator::{classify_lines, verify_runs};
