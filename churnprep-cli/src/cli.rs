// churnprep-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use churnprep_core::EncodingMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "churnprep: Customer churn dataset preprocessing",
    long_about = "Cleans, bins and encodes a customer-churn CSV into a model-ready CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the preprocessing pipeline and writes the encoded CSV
    Run(RunArgs),

    /// Profiles the columns of a raw dataset without modifying anything
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Raw dataset (defaults to Telco-Customer-Churn.csv)
    #[arg(short = 'i', long = "input", value_name = "INPUT_CSV")]
    pub input: Option<PathBuf>,

    /// Destination CSV (parent directory is created if missing)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_CSV")]
    pub output: Option<PathBuf>,

    /// How categorical columns are turned into integers
    #[arg(long, value_enum, value_name = "MODE")]
    pub encoding: Option<EncodingArg>,

    /// TOML config file layered over the built-in defaults
    #[arg(short, long, value_name = "CONFIG_TOML", env = "CHURNPREP_CONFIG")]
    pub config: Option<PathBuf>,

    // --- Reports ---
    /// Optional: write the value-to-code tables that were applied as JSON
    #[arg(long, value_name = "JSON_FILE")]
    pub encodings_out: Option<PathBuf>,

    /// Optional: write the run summary as JSON
    #[arg(long, value_name = "JSON_FILE")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct InspectArgs {
    /// Raw dataset (defaults to Telco-Customer-Churn.csv)
    #[arg(short = 'i', long = "input", value_name = "INPUT_CSV")]
    pub input: Option<PathBuf>,

    /// TOML config file layered over the built-in defaults
    #[arg(short, long, value_name = "CONFIG_TOML", env = "CHURNPREP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the column profiles as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Encoding choices accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingArg {
    /// Codes follow the sorted order of the observed values
    Label,
    /// Codes come from the fixed mapping table
    Mapping,
}

impl From<EncodingArg> for EncodingMode {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Label => EncodingMode::Label,
            EncodingArg::Mapping => EncodingMode::Mapping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_without_arguments() {
        let cli = Cli::parse_from(["churnprep", "run"]);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Run(args) => {
                assert!(args.input.is_none());
                assert!(args.output.is_none());
                assert!(args.encoding.is_none());
                assert!(args.config.is_none());
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_with_all_arguments() {
        let cli = Cli::parse_from([
            "churnprep",
            "run",
            "-i",
            "raw.csv",
            "--output",
            "out/clean.csv",
            "--encoding",
            "mapping",
            "--config",
            "churnprep.toml",
            "--encodings-out",
            "codes.json",
            "--summary-json",
            "summary.json",
            "-v",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.input, Some(PathBuf::from("raw.csv")));
                assert_eq!(args.output, Some(PathBuf::from("out/clean.csv")));
                assert_eq!(args.encoding.map(EncodingMode::from), Some(EncodingMode::Mapping));
                assert_eq!(args.config, Some(PathBuf::from("churnprep.toml")));
                assert_eq!(args.encodings_out, Some(PathBuf::from("codes.json")));
                assert_eq!(args.summary_json, Some(PathBuf::from("summary.json")));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_encoding() {
        let result = Cli::try_parse_from(["churnprep", "run", "--encoding", "onehot"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::parse_from(["churnprep", "inspect", "--input", "raw.csv", "--json"]);
        match cli.command {
            Commands::Inspect(args) => {
                assert_eq!(args.input, Some(PathBuf::from("raw.csv")));
                assert!(args.json);
            }
            _ => panic!("Expected Inspect command"),
        }
    }
}
