//! Configuration management for tslint-runner

mod inclusion;
mod options;
mod settings;

// Re-export main types
pub use inclusion::InclusionList;
pub use options::{DEFAULT_TSLINT_EXECUTABLE, FailOn, TsLintOptions};
pub use settings::CONFIG_FILE_NAMES;
