mod cli;
mod error;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use merge_sort::{is_sorted_non_decreasing, merge_sort_with, tie_break_name};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Args;
use error::CliError;

const EXIT_FAILURE: u8 = 1;

/// Color codes only make sense when a terminal renders them.
fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi_enabled(&io::stderr()))
        .with_target(false)
        .init();
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let input = args.input()?;
    let tie_break = args.tie_break();
    debug!(len = input.len(), tie_break = tie_break_name(tie_break), "sorting");

    let sorted = merge_sort_with(&input, tie_break);
    debug!(sorted = is_sorted_non_decreasing(&sorted), "done");

    writeln!(out, "{sorted:?}")?;
    Ok(())
}

/// Maps the outcome of [`run`] to an exit status. Errors always reach `err`,
/// whatever the log filter says.
fn exit_status(result: Result<(), CliError>, err: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            debug!(error = ?e, "run failed");
            let _ = writeln!(err, "error: {e}");
            EXIT_FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = run(&args, &mut io::stdout().lock());
    ExitCode::from(exit_status(result, &mut io::stderr().lock()))
}
