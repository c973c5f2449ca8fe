//! CLI result presenter.

use std::fmt::Write as _;

use serde::Serialize;

use ipclass_core::options::{AggregationStrategy, ExecutionMode};
use ipclass_core::report::Report;
use ipclass_orchestration::interfaces::{ClassificationRun, ResultPresenter};

use crate::output::{format_duration, format_number, micros};

/// Rendering format for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Five labelled lines, preceded by the execution time.
    #[default]
    Text,
    /// One JSON object.
    Json,
}

/// JSON shape of a run.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    #[serde(flatten)]
    report: &'a Report,
    workers: usize,
    mode: ExecutionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    strategy: Option<AggregationStrategy>,
    elapsed_micros: u64,
}

/// CLI result presenter.
pub struct CliResultPresenter {
    format: OutputFormat,
    verbose: bool,
    quiet: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, verbose: bool, quiet: bool) -> Self {
        Self {
            format,
            verbose,
            quiet,
        }
    }

    /// Render `run` in the configured format, newline-terminated.
    #[must_use]
    pub fn render(&self, run: &ClassificationRun) -> String {
        match self.format {
            OutputFormat::Text => self.render_text(run),
            OutputFormat::Json => Self::render_json(run),
        }
    }

    fn render_text(&self, run: &ClassificationRun) -> String {
        let report = &run.report;
        let mut out = String::new();
        if !self.quiet {
            let _ = writeln!(out, "Execution time: {} microseconds", micros(run.elapsed));
        }
        if self.verbose {
            let _ = writeln!(
                out,
                "Workers: {} ({}), {} lines in {}",
                run.workers,
                run.label(),
                format_number(report.lines()),
                format_duration(run.elapsed)
            );
        }
        let _ = writeln!(out, "Total IPv4 address count: {}", report.total_ipv4);
        let _ = writeln!(out, "Total IPv6 address count: {}", report.total_ipv6);
        let _ = writeln!(out, "Unique IPv4 address count: {}", report.unique_ipv4);
        let _ = writeln!(out, "Unique IPv6 address count: {}", report.unique_ipv6);
        let _ = writeln!(out, "Invalid IP address count: {}", report.invalid);
        out
    }

    fn render_json(run: &ClassificationRun) -> String {
        let summary = RunSummary {
            report: &run.report,
            workers: run.workers,
            mode: run.mode,
            strategy: (run.mode == ExecutionMode::Parallel).then_some(run.strategy),
            elapsed_micros: micros(run.elapsed),
        };
        match serde_json::to_string(&summary) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(e) => {
                tracing::error!("failed to serialize report: {e}");
                String::new()
            }
        }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_run(&self, run: &ClassificationRun) {
        print!("{}", self.render(run));
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
