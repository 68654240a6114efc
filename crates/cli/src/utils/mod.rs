//! Helpers shared by the subcommands

pub mod reporters;

pub use reporters::parse_reporter;

use tslint_runner_core::Error;

use crate::{EXIT_CODE_DECODE_ERROR, EXIT_CODE_FAILURE};

/// Process exit code for an error that aborted a subcommand
pub fn exit_code_for_error(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::ReportDecodeError(_)) => EXIT_CODE_DECODE_ERROR,
        _ => EXIT_CODE_FAILURE,
    }
}
