use mod_storage::error::StorageError;
use mod_storage::{cli, config::Config, setup_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    if let Err(err) = setup_logging(args.debug) {
        eprintln!("Error: {err:#}");
        return ExitCode::from(2);
    }

    // Initialize configuration
    let config = Config::from_args(&args);

    // Execute the appropriate command; the error kind decides the exit status
    match cli::execute_command(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ StorageError::Syntax { .. }) => {
            eprintln!("{err}");
            cli::print_usage();
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            let code = err.exit_code();
            eprintln!("Error: {:#}", anyhow::Error::new(err));
            ExitCode::from(code)
        }
    }
}
