// ============================================================================
// churnprep-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialization for the churnprep binary
//
// The core library only emits records through the `log` facade; this module
// installs env_logger as the backend with a colored, timestamped format
// (plain when NO_COLOR is set).
//
// USAGE:
// - RUST_LOG=info (default): one line per pipeline step
// - RUST_LOG=debug or --verbose: edges, column selections, coercion counts
// - RUST_LOG=trace: everything

use log::{LevelFilter, debug};
use owo_colors::Style;
use std::io::Write;

use crate::output::paint;

/// Initializes env_logger. `verbose` raises the default level to debug;
/// an explicit RUST_LOG still wins.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .format(|buf, record| {
            let (level_str, style) = match record.level() {
                log::Level::Error => ("ERROR", Style::new().bright_red()),
                log::Level::Warn => ("WARN ", Style::new().yellow()),
                log::Level::Info => ("INFO ", Style::new().green()),
                log::Level::Debug => ("DEBUG", Style::new().blue()),
                log::Level::Trace => ("TRACE", Style::new().magenta()),
            };

            writeln!(
                buf,
                "{} {} {}",
                paint(get_timestamp(), Style::new().white()),
                paint(level_str, style),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .init();

    debug!("Logger initialized with level: {}", level);
}

/// Returns the current local time formatted as "YYYY-MM-DD HH:MM:SS".
///
/// Used for log lines and the start/finish lines of a run.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
