//! Process execution and output plumbing

pub mod output;
pub mod shell_runner;
pub mod traits;

// Re-export main types
pub use output::{BufferedOutput, StdoutStream};
pub use shell_runner::ShellProcessRunner;
pub use traits::{OutputStream, ProcessOutput, ProcessRunner};
