use routemap_core::logging;
use std::process::ExitCode;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match CliCommand::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("routemap error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
