// ============================================================================
// churnprep-cli/src/commands/inspect.rs
// ============================================================================
//
// INSPECT COMMAND: Profile a Raw Dataset
//
// Loads the dataset with the same NA handling the pipeline uses and prints one
// line per column. Nothing is written to disk.

use churnprep_core::{inspect_table, load_csv};
use log::warn;

use super::load_config;
use crate::cli::InspectArgs;
use crate::error::CliResult;
use crate::output::{print_heading, print_info, print_profiles, print_warning};

/// Entry point for `churnprep inspect`.
pub fn run_inspect(args: InspectArgs) -> CliResult<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(input) = args.input {
        config.input = input;
    }

    let df = load_csv(&config.input, &config.load_options())?;
    let profiles = inspect_table(&df)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    print_heading("churnprep inspect");
    print_info("Input", config.input.display());
    print_info("Rows", df.height());
    print_info("Columns", df.width());
    println!();
    print_profiles(&profiles);

    let missing: Vec<&str> = config
        .columns
        .iter()
        .map(String::as_str)
        .filter(|c| !profiles.iter().any(|p| p.name == *c))
        .collect();
    if !missing.is_empty() {
        warn!("Dataset lacks {} selected column(s)", missing.len());
        print_warning(&format!(
            "Selected column(s) missing from the dataset: {}",
            missing.join(", ")
        ));
    }

    Ok(())
}
