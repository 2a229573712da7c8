// ============================================================================
// churnprep-cli/src/lib.rs
// ============================================================================
//
// Library portion of the churnprep CLI application.
// Contains argument definitions, command logic and terminal output helpers.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, EncodingArg, InspectArgs, RunArgs};
pub use commands::{run_inspect, run_preprocess};
pub use error::{CliErrorContext, CliResult};
