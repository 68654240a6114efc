//! Linter command generation

pub mod builder;
pub mod escape;
pub mod tslint_command;

// Re-export commonly used types
pub use builder::CommandBuilder;
pub use escape::{escape_shell_arg, escape_shell_cmd};
pub use tslint_command::{CommandArg, PipeStage, TsLintCommand};
