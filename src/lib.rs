//! tslint-runner
//!
//! Run tslint from Rust: build the command line from typed options, decode
//! the JSON report, hand it to reporters and map the outcome onto a task
//! exit code.
//!
//! ```no_run
//! use tslint_runner::{FailOn, TsLintOptions, TsLintRunTask};
//!
//! let options = TsLintOptions::new()
//!     .with_format("json")
//!     .with_fail_on(FailOn::Warning)
//!     .with_paths(vec!["src/main.ts"]);
//! let result = TsLintRunTask::new(options).run()?;
//! std::process::exit(result.exit_code());
//! # Ok::<(), tslint_runner::Error>(())
//! ```
pub use tslint_runner_core::*;
