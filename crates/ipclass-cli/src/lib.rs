//! # ipclass-cli
//!
//! Report rendering (text and JSON), output files, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::{CliResultPresenter, OutputFormat};
