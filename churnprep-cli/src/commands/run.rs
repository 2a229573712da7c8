// ============================================================================
// churnprep-cli/src/commands/run.rs
// ============================================================================
//
// RUN COMMAND: Execute the Preprocessing Pipeline
//
// Resolves the pipeline configuration (defaults < config file < environment
// < flags), runs the core pipeline and reports what it did. The optional JSON
// reports are written only after the CSV has been saved.

use churnprep_core::{PipelineConfig, RunSummary, run_pipeline, write_json};
use log::info;

use super::load_config;
use crate::cli::RunArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::logging::get_timestamp;
use crate::output::{print_heading, print_info, print_run_summary, print_success};

/// Applies command line flags on top of a resolved configuration.
pub fn apply_args(config: &mut PipelineConfig, args: &RunArgs) {
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(encoding) = args.encoding {
        config.encoding = encoding.into();
    }
}

/// Entry point for `churnprep run`.
pub fn run_preprocess(args: RunArgs) -> CliResult<RunSummary> {
    let mut config = load_config(args.config.as_deref())?;
    apply_args(&mut config, &args);
    config.validate()?;

    print_heading("churnprep run");
    print_info("Started", get_timestamp());
    print_info("Input", config.input.display());
    print_info("Output", config.output.display());
    print_info("Encoding", config.encoding);

    let summary = run_pipeline(&config)?;

    if let Some(path) = &args.encodings_out {
        write_json(&summary.encodings, path)
            .cli_with_context(|| format!("Failed to write encodings to '{}'", path.display()))?;
        info!("Encoding tables written to: {}", path.display());
    }
    if let Some(path) = &args.summary_json {
        write_json(&summary, path)
            .cli_with_context(|| format!("Failed to write summary to '{}'", path.display()))?;
        info!("Run summary written to: {}", path.display());
    }

    print_run_summary(&summary);
    print_success(&format!(
        "Preprocessed data saved to {}",
        summary.output.display()
    ));
    print_info("Finished", get_timestamp());

    Ok(summary)
}
