use rparams_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // File logging if possible, stderr otherwise.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("rparams error: {:#}", err);
        std::process::exit(1);
    }
}
