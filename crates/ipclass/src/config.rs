//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use ipclass_cli::OutputFormat;
use ipclass_core::DEFAULT_INPUT_PATH;

/// ipclass — count IPv4, IPv6 and invalid lines, in parallel.
#[derive(Parser, Debug)]
#[command(name = "ipclass", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Line-delimited input file ("-" reads stdin).
    #[arg(default_value = DEFAULT_INPUT_PATH, env = "IPCLASS_INPUT")]
    pub input: PathBuf,

    /// Number of worker threads (0 = available parallelism).
    #[arg(short, long, default_value = "0", env = "IPCLASS_THREADS")]
    pub threads: usize,

    /// Aggregation strategy: lock or channel.
    #[arg(long, default_value = "lock", env = "IPCLASS_STRATEGY")]
    pub strategy: String,

    /// Classify on the calling thread without a worker pool (ignores --threads).
    #[arg(long)]
    pub sequential: bool,

    /// Re-run sequentially and with every strategy, and fail if the reports differ.
    #[arg(long)]
    pub verify: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (omit the execution time).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
