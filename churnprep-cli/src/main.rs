// ============================================================================
// churnprep-cli/src/main.rs
// ============================================================================
//
// Entry point for the churnprep binary.
//
// Parses arguments, initializes logging, dispatches to the selected command
// and is the single place where errors are reported. Any failure prints one
// red line to stdout and exits with status 1.

use churnprep_cli::error::describe;
use churnprep_cli::output::paint;
use churnprep_cli::{Cli, Commands, logging, run_inspect, run_preprocess};
use clap::Parser;
use log::debug;
use owo_colors::Style;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => run_preprocess(args).map(|_| ()),
        Commands::Inspect(args) => run_inspect(args),
    };

    if let Err(e) = result {
        debug!("Command failed: {:?}", e);
        println!("{}", paint(describe(&e), Style::new().red().bold()));
        process::exit(1);
    }
}
