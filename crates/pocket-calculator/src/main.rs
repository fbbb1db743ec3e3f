//! Pocket calculator binary

use std::process::ExitCode;

use clap::Parser;
use pocket_calculator::cli::{init_tracing, run, Cli, CliResult};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.config().verbosity)?;
    run(&cli)
}
