//! Built-in reporters

mod checkstyle;
mod summary;
mod verbose;

pub use checkstyle::CheckstyleReporter;
pub use summary::SummaryReporter;
pub use verbose::VerboseReporter;
