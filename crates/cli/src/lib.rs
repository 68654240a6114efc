pub mod cli;
pub mod commands;
pub mod utils;

// Re-export commonly used items
pub use cli::{Commands, LintArgs, Runner};

/// Exit code used when the linter output could not be decoded as a report
pub const EXIT_CODE_DECODE_ERROR: i32 = 5;

/// Exit code for every other failure of the tool itself
pub const EXIT_CODE_FAILURE: i32 = 6;
