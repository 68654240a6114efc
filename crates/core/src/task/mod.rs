//! The lint task and its result

pub mod exit_code;
pub mod result;
pub mod run_task;

pub use exit_code::TaskExitCode;
pub use result::{REPORT_ASSET, TaskResult, prefix_asset_names};
pub use run_task::TsLintRunTask;
