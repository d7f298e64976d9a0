use std::process::ExitCode;

use human_panic::setup_panic;
use log::error;

use path_slicer::cli::get_options;
use path_slicer::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    let options = get_options();
    if let Err(e) = init_logger(options.verbosity()) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    // An aborted run is only reported in the log, the exit status stays 0
    if let Err(e) = process_files(&options.processing_options()) {
        error!("{}", describe_chain(&e));
    }

    ExitCode::SUCCESS
}
