//! Binary entrypoint for the caniuse summary tool.
use std::process::ExitCode;

use caniuse_cli::{exit_code, logging::setup_logging, run, Cli};
use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "caniuse failed");
            eprintln!("caniuse: {}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}
