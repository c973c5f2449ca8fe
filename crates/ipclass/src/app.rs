//! Application entry point and dispatch.

use anyhow::{Context, Result};

use ipclass_cli::output::write_to_file;
use ipclass_cli::presenter::CliResultPresenter;
use ipclass_core::options::{AggregationStrategy, ExecutionMode, RunOptions};
use ipclass_orchestration::interfaces::{ClassificationRun, ResultPresenter};
use ipclass_orchestration::orchestrator::{classify_lines, verify_runs};
use ipclass_orchestration::selection::build_run_options;

use crate::config::AppConfig;
use crate::errors::exit_code_for;
use crate::input::read_lines;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        ipclass_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let opts = build_run_options(config.threads, &config.strategy, config.sequential)?;
    let lines = read_lines(&config.input)?;
    let run = classify_lines(&lines, &opts)?;

    if config.verify {
        verify(&lines, &run)?;
    }

    let presenter = CliResultPresenter::new(config.format, config.verbose, config.quiet);
    match &config.output {
        Some(path) => write_to_file(path, &presenter.render(&run))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => presenter.present_run(&run),
    }

    Ok(())
}

/// Present a failed run on stderr and return its exit code.
pub fn report_error(config: &AppConfig, err: &anyhow::Error) -> i32 {
    let presenter = CliResultPresenter::new(config.format, config.verbose, config.quiet);
    presenter.present_error(&format!("{err:#}"));
    exit_code_for(err)
}

/// Re-classify `lines` in every other mode and compare against `primary`.
fn verify(lines: &[String], primary: &ClassificationRun) -> Result<()> {
    let mut runs = vec![primary.clone()];
    let alternatives = [
        RunOptions {
            mode: ExecutionMode::Sequential,
            ..RunOptions::default()
        },
        RunOptions {
            workers: primary.workers,
            strategy: AggregationStrategy::Locked,
            mode: ExecutionMode::Parallel,
        },
        RunOptions {
            workers: primary.workers,
            strategy: AggregationStrategy::Channel,
            mode: ExecutionMode::Parallel,
        },
    ];
    for opts in &alternatives {
        runs.push(classify_lines(lines, opts)?);
    }
    verify_runs(&runs)?;
    tracing::info!(runs = runs.len(), "verification passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ipclass_core::constants::exit_codes;
    use ipclass_core::error::ClassifyError;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("ipclass").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn unknown_strategy_fails_before_reading_input() {
        let config = config(&["does-not-exist.txt", "--strategy", "spinlock"]);
        let err = run(&config).unwrap_err();
        assert_eq!(report_error(&config, &err), exit_codes::ERROR_CONFIG);
    }

    #[test]
    fn report_error_maps_exit_code() {
        let config = config(&[]);
        let err = anyhow::Error::new(ClassifyError::Mismatch("lock".into(), "channel".into()));
        assert_eq!(report_error(&config, &err), exit_codes::ERROR_MISMATCH);
    }
}
