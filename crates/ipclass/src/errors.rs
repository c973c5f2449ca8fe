//! Error handling and exit codes.

use ipclass_core::constants::exit_codes;
use ipclass_core::error::ClassifyError;

use crate::input::InputError;

/// Map a classification error to its exit code.
pub fn handle_error(err: &ClassifyError) -> i32 {
    match err {
        ClassifyError::Config(_) => exit_codes::ERROR_CONFIG,
        ClassifyError::Mismatch(_, _) => exit_codes::ERROR_MISMATCH,
        ClassifyError::ThreadPool(_) | ClassifyError::Aggregator(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Map any application error to its exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<InputError>().is_some() {
        exit_codes::ERROR_INPUT
    } else if let Some(err) = err.downcast_ref::<ClassifyError>() {
        handle_error(err)
    } else {
        exit_codes::ERROR_GENERIC
    }
}
