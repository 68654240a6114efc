use clap::Parser;
use tslint_runner_cli::Runner;
use tslint_runner_cli::utils::exit_code_for_error;

fn main() {
    // Logs go to stderr so stdout stays free for the linter output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::parse();
    match runner.command.execute() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for_error(&e));
        }
    }
}
