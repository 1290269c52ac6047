use std::process::ExitCode;

use cryptoglot::cli::parse_cli_args;
use cryptoglot::cli_pretty_printing::{input_is_empty, print_records, program_failed};
use cryptoglot::config::set_global_config;
use cryptoglot::perform_analysis;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    // Turn CLI arguments into a library object
    let (text, config) = match parse_cli_args() {
        Ok(parsed) => parsed,
        Err(e) => {
            program_failed(&e);
            return ExitCode::FAILURE;
        }
    };

    // installed now so the empty input message already honours api mode
    set_global_config(config.clone());
    if text.trim().is_empty() {
        input_is_empty();
        return ExitCode::SUCCESS;
    }

    let records = perform_analysis(&text, config);
    match print_records(&records) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            program_failed(&e);
            ExitCode::FAILURE
        }
    }
}
