use anyhow::{Result, bail};
use std::path::PathBuf;
use tslint_runner_core::Reporter;
use tslint_runner_core::report::{
    CheckstyleReporter, Destination, SummaryReporter, VerboseReporter,
};

/// Reporter ids accepted by `--reporter`
pub const REPORTER_IDS: [&str; 3] = ["verbose", "summary", "checkstyle"];

/// Parse `ID` or `ID=FILE` into a registered reporter id and its reporter.
///
/// Without a file the task decides the destination (the output stream); a
/// relative file is resolved by the task against the working directory, like `--out`.
pub fn parse_reporter(spec: &str) -> Result<(String, Box<dyn Reporter>)> {
    let (id, file) = match spec.split_once('=') {
        Some((id, file)) => (id.trim(), Some(file.trim())),
        None => (spec.trim(), None),
    };

    let mut reporter: Box<dyn Reporter> = match id {
        "verbose" => Box::new(VerboseReporter::new()),
        "summary" => Box::new(SummaryReporter::new()),
        "checkstyle" => Box::new(CheckstyleReporter::new()),
        _ => bail!(
            "Unknown reporter '{}', expected one of: {}",
            id,
            REPORTER_IDS.join(", ")
        ),
    };

    if let Some(file) = file {
        if file.is_empty() {
            bail!("Missing file name for reporter '{}'", id);
        }
        reporter.set_destination(Destination::File(PathBuf::from(file)));
    }

    Ok((id.to_string(), reporter))
}
